//! TUI application state and logic

use crate::catalog::CandidateWordList;
use crate::core::{EvalOutcome, GameSession, SessionError};
use crate::output::{MessageKind, outcome_messages};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::debug;

/// Longest input accepted into the buffer
const MAX_INPUT_LEN: usize = 8;

/// Application state
pub struct App<'a> {
    pub catalog: &'a CandidateWordList,
    pub session: GameSession,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
    rng: StdRng,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    RoundOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl From<MessageKind> for MessageStyle {
    fn from(kind: MessageKind) -> Self {
        match kind {
            MessageKind::Info => Self::Info,
            MessageKind::Win => Self::Success,
            MessageKind::Lose => Self::Error,
        }
    }
}

/// Tally of finished rounds in this process
#[derive(Debug, Default, Clone, Copy)]
pub struct Statistics {
    pub rounds: usize,
    pub wins: usize,
}

impl<'a> App<'a> {
    /// Create the app and start the first round
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::EmptyCatalog`] if the catalog has no words.
    pub fn new(catalog: &'a CandidateWordList, seed: Option<u64>) -> Result<Self, SessionError> {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let session = GameSession::start_with_rng(catalog, &mut rng)?;

        let mut app = Self {
            catalog,
            session,
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Guessing,
            rng,
        };
        app.add_message(
            "Guess the hidden word one letter at a time.",
            MessageStyle::Info,
        );
        Ok(app)
    }

    /// Submit the input buffer as a guess
    pub fn submit(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);
        let outcome = match self.session.submit_guess(&input) {
            Ok(outcome) => outcome,
            Err(e) => {
                debug!(error = %e, "guess ignored");
                self.add_message(&e.to_string(), MessageStyle::Error);
                return;
            }
        };

        for (kind, text) in outcome_messages(&outcome, self.session.target().text()) {
            self.add_message(&text, kind.into());
        }

        match outcome {
            EvalOutcome::Quit => self.should_quit = true,
            EvalOutcome::Won => {
                self.stats.rounds += 1;
                self.stats.wins += 1;
                self.end_round();
            }
            EvalOutcome::Lost => {
                self.stats.rounds += 1;
                self.end_round();
            }
            EvalOutcome::CorrectLetter { letter, unmatched } => {
                self.add_message(
                    &format!("'{letter}' is in the word, {unmatched} letters to go"),
                    MessageStyle::Success,
                );
            }
            EvalOutcome::Invalid(_) | EvalOutcome::Repeated(_) | EvalOutcome::WrongLetter { .. } => {}
        }
    }

    fn end_round(&mut self) {
        self.input_mode = InputMode::RoundOver;
        self.add_message("Press 'n' for a new word or 'q' to quit.", MessageStyle::Info);
    }

    /// Draw a new word and reset the round
    pub fn new_game(&mut self) {
        match GameSession::start_with_rng(self.catalog, &mut self.rng) {
            Ok(session) => {
                self.session = session;
                self.input_buffer.clear();
                self.messages.clear();
                self.input_mode = InputMode::Guessing;
                self.add_message("New word drawn. Good luck!", MessageStyle::Info);
                debug!(rounds = self.stats.rounds, "started new round");
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn push_char(&mut self, c: char) {
        if self.input_buffer.chars().count() < MAX_INPUT_LEN {
            self.input_buffer.push(c);
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 8 messages
        if self.messages.len() > 8 {
            self.messages.remove(0);
        }
    }

    /// Win rate over finished rounds, in percent
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.stats.rounds == 0 {
            0.0
        } else {
            self.stats.wins as f64 / self.stats.rounds as f64 * 100.0
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                app.should_quit = true;
            } else {
                match app.input_mode {
                    InputMode::RoundOver => match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
                        KeyCode::Char('n') => app.new_game(),
                        _ => {}
                    },
                    InputMode::Guessing => match key.code {
                        KeyCode::Esc => app.should_quit = true,
                        KeyCode::Char(c) => app.push_char(c),
                        KeyCode::Backspace => {
                            app.input_buffer.pop();
                        }
                        KeyCode::Enter => app.submit(),
                        _ => {}
                    },
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
