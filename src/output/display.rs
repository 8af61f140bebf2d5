//! Line-mode presentation
//!
//! The play loop talks to a [`Presenter`]; [`ColoredPresenter`] is the
//! terminal implementation.

use super::formatters::MessageKind;
use crate::catalog::BuildReport;
use crate::core::ProgressView;
use colored::Colorize;
use std::io::{self, Write};
use std::path::Path;

/// Display collaborator of the play loop
pub trait Presenter {
    /// Show an input prompt (no trailing newline)
    ///
    /// # Errors
    /// Returns an error if the output cannot be written.
    fn prompt(&mut self, text: &str) -> io::Result<()>;

    /// Show the masked word
    ///
    /// # Errors
    /// Returns an error if the output cannot be written.
    fn progress(&mut self, view: &ProgressView) -> io::Result<()>;

    /// Show a status message
    ///
    /// # Errors
    /// Returns an error if the output cannot be written.
    fn message(&mut self, kind: MessageKind, text: &str) -> io::Result<()>;
}

/// Presenter writing ANSI-colored text to any writer
pub struct ColoredPresenter<W: Write> {
    out: W,
}

impl ColoredPresenter<io::Stdout> {
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ColoredPresenter<W> {
    #[must_use]
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[must_use]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Presenter for ColoredPresenter<W> {
    fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.out, "{text}")?;
        self.out.flush()
    }

    fn progress(&mut self, view: &ProgressView) -> io::Result<()> {
        for cell in &view.cells {
            if cell.revealed {
                write!(self.out, "{}", format!(" {} ", cell.letter).green().reversed())?;
            } else {
                write!(self.out, "{}", " _ ".yellow().reversed())?;
            }
        }
        writeln!(self.out)
    }

    fn message(&mut self, kind: MessageKind, text: &str) -> io::Result<()> {
        let styled = match kind {
            MessageKind::Info => text.white().reversed(),
            MessageKind::Win => text.green().reversed().blink(),
            MessageKind::Lose => text.red().reversed().blink(),
        };
        writeln!(self.out, "{styled}")
    }
}

/// Print the summary of a catalog build
pub fn print_build_report(report: &BuildReport, output: &Path) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(" {} ", "CATALOG BUILT".bright_cyan().bold());
    println!("{}", "─".repeat(60).cyan());
    println!("   Lines parsed:     {}", report.parsed);
    println!("   Eligible words:   {}", report.eligible);
    println!(
        "   Catalog size:     {}",
        report.kept.to_string().bright_yellow().bold()
    );
    println!("   Written to:       {}", output.display().to_string().green());
}
