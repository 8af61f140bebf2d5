//! Hangman - CLI
//!
//! Terminal hangman with a line mode, a full-screen TUI mode and an offline
//! catalog builder.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use hangman::{
    catalog::{BuildConfig, CandidateWordList, load_from_file},
    commands::{run_build, run_play},
    core::{GameSession, Status},
    logging::{LogConfig, init_logging},
    output::{ColoredPresenter, print_build_report},
};
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Guess the hidden word one letter at a time",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Catalog file (JSON array of words); defaults to the bundled list
    #[arg(short, long, global = true)]
    catalog: Option<PathBuf>,

    /// Seed for the word draw, for reproducible rounds
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play in the terminal, one line per guess (default)
    Play,

    /// Play in a full-screen interface
    Tui,

    /// Build a catalog from a `word,frequency` corpus
    Build {
        /// Corpus file with one `word,frequency` pair per line
        corpus: PathBuf,

        /// Where to write the catalog JSON
        #[arg(short, long)]
        output: PathBuf,

        /// Shortest word to keep
        #[arg(long, default_value = "5")]
        min_len: usize,

        /// Number of most frequent words to keep
        #[arg(short = 'n', long, default_value = "2000")]
        count: usize,
    },
}

/// Load the catalog from the -c flag, or fall back to the embedded list
fn load_catalog(path: Option<&Path>) -> Result<CandidateWordList> {
    match path {
        Some(path) => load_from_file(path)
            .with_context(|| format!("could not load catalog {}", path.display())),
        None => {
            debug!("using embedded catalog");
            Ok(CandidateWordList::embedded())
        }
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let log_config = LogConfig::from_verbosity(cli.verbose).with_log_file(cli.log_file.clone());
    init_logging(&log_config).context("could not open log file")?;

    // Default to line mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(cli.catalog.as_deref(), cli.seed),
        Commands::Tui => run_tui_command(cli.catalog.as_deref(), cli.seed),
        Commands::Build {
            corpus,
            output,
            min_len,
            count,
        } => {
            let config = BuildConfig {
                min_word_len: min_len,
                total_words: count,
            };
            let report = run_build(&corpus, &output, config)?;
            print_build_report(&report, &output);
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn run_play_command(catalog: Option<&Path>, seed: Option<u64>) -> Result<ExitCode> {
    let catalog = load_catalog(catalog)?;
    let mut session = GameSession::start(&catalog, seed)?;

    let mut presenter = ColoredPresenter::stdout();
    let status = run_play(&mut session, io::stdin().lock(), &mut presenter)?;

    // Lost is distinguishable for scripts; quitting is a normal exit
    Ok(match status {
        Status::Lost => ExitCode::FAILURE,
        Status::Won | Status::Quit | Status::InProgress => ExitCode::SUCCESS,
    })
}

fn run_tui_command(catalog: Option<&Path>, seed: Option<u64>) -> Result<ExitCode> {
    use hangman::interactive::{App, run_tui};

    let catalog = load_catalog(catalog)?;
    let app = App::new(&catalog, seed)?;
    run_tui(app)?;
    Ok(ExitCode::SUCCESS)
}
