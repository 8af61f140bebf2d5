//! Line-mode game loop
//!
//! Reads one guess per line, evaluates it and renders the result until the
//! round ends.

use crate::core::{EvalOutcome, GameSession, QUIT_KEYWORD, Status};
use crate::output::{Presenter, outcome_messages};
use std::borrow::Cow;
use std::io::{self, BufRead};
use tracing::{debug, info, warn};

/// Prompt shown before every guess
pub const PROMPT: &str = "Enter a letter (type 'quit' to exit): ";

/// Play a session to completion
///
/// End of input counts as quitting.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_play<R: BufRead, P: Presenter>(
    session: &mut GameSession,
    mut input: R,
    presenter: &mut P,
) -> io::Result<Status> {
    presenter.progress(&session.progress_view())?;

    let mut buf = Vec::new();
    while !session.is_finished() {
        presenter.prompt(PROMPT)?;

        buf.clear();
        // Undecodable bytes become U+FFFD and are rejected as not alphabetic
        let line = if input.read_until(b'\n', &mut buf)? == 0 {
            debug!("input closed");
            Cow::Borrowed(QUIT_KEYWORD)
        } else {
            String::from_utf8_lossy(&buf)
        };
        let raw = line.trim_end_matches(['\n', '\r']);

        let outcome = match session.submit_guess(raw) {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!(error = %e, "guess after round ended");
                break;
            }
        };
        render_outcome(session, &outcome, presenter)?;
    }

    info!(
        status = ?session.status(),
        guesses = session.guess_count(),
        "round finished"
    );
    Ok(session.status())
}

fn render_outcome<P: Presenter>(
    session: &GameSession,
    outcome: &EvalOutcome,
    presenter: &mut P,
) -> io::Result<()> {
    let show_messages = |presenter: &mut P| -> io::Result<()> {
        for (kind, text) in outcome_messages(outcome, session.target().text()) {
            presenter.message(kind, &text)?;
        }
        Ok(())
    };

    match outcome {
        EvalOutcome::Quit => Ok(()),
        EvalOutcome::Lost => show_messages(presenter),
        EvalOutcome::Won => {
            presenter.progress(&session.progress_view())?;
            show_messages(presenter)
        }
        EvalOutcome::CorrectLetter { .. } => presenter.progress(&session.progress_view()),
        EvalOutcome::Invalid(_) | EvalOutcome::Repeated(_) | EvalOutcome::WrongLetter { .. } => {
            show_messages(presenter)?;
            presenter.progress(&session.progress_view())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ProgressView, TargetWord};
    use crate::output::{MessageKind, masked_word};

    #[derive(Default)]
    struct Recorder {
        prompts: usize,
        events: Vec<String>,
    }

    impl Presenter for Recorder {
        fn prompt(&mut self, _text: &str) -> io::Result<()> {
            self.prompts += 1;
            Ok(())
        }

        fn progress(&mut self, view: &ProgressView) -> io::Result<()> {
            self.events.push(format!("progress {}", masked_word(view)));
            Ok(())
        }

        fn message(&mut self, kind: MessageKind, text: &str) -> io::Result<()> {
            self.events.push(format!("{kind:?} {text}"));
            Ok(())
        }
    }

    fn play(word: &str, input: &str) -> (Status, Recorder) {
        let mut session = GameSession::with_target(TargetWord::new(word).unwrap());
        let mut recorder = Recorder::default();
        let status = run_play(&mut session, input.as_bytes(), &mut recorder).unwrap();
        (status, recorder)
    }

    #[test]
    fn winning_round() {
        let (status, rec) = play("hello", "z\nl\ne\n");
        assert_eq!(status, Status::Won);
        assert_eq!(rec.prompts, 3);
        assert_eq!(
            rec.events,
            vec![
                "progress h _ _ _ o",
                "Info Wrong letter",
                "Info You have 6 more guesses.",
                "progress h _ _ _ o",
                "progress h _ l l o",
                "progress h e l l o",
                "Win Congratulations! You Win",
            ]
        );
    }

    #[test]
    fn losing_round_reveals_word() {
        let (status, rec) = play("abc", "x\ny\nz\nw\nv\n");
        assert_eq!(status, Status::Lost);
        assert_eq!(
            rec.events.last().map(String::as_str),
            Some("Info The word was: abc")
        );
        assert!(rec.events.contains(&"Lose You lose".to_string()));
    }

    #[test]
    fn quit_stops_immediately() {
        let (status, rec) = play("hello", "Quit\nl\n");
        assert_eq!(status, Status::Quit);
        assert_eq!(rec.prompts, 1);
        assert_eq!(rec.events, vec!["progress h _ _ _ o"]);
    }

    #[test]
    fn end_of_input_quits() {
        let (status, _) = play("hello", "l\n");
        assert_eq!(status, Status::Quit);
    }

    #[test]
    fn invalid_and_repeated_reprompt() {
        let (status, rec) = play("hello", "ab\n1\nl\nl\nquit\n");
        assert_eq!(status, Status::Quit);
        assert_eq!(rec.prompts, 5);
        assert!(rec.events.contains(
            &"Info You should only enter ONE character from the alphabet.".to_string()
        ));
        assert!(rec.events.contains(&"Info Invalid input.".to_string()));
        assert!(
            rec.events
                .contains(&"Info You already entered this letter.".to_string())
        );
    }

    #[test]
    fn invalid_utf8_line_is_rejected_and_play_continues() {
        let mut session = GameSession::with_target(TargetWord::new("hello").unwrap());
        let mut recorder = Recorder::default();
        let status = run_play(&mut session, &b"\xff\nl\ne\n"[..], &mut recorder).unwrap();

        assert_eq!(status, Status::Won);
        assert_eq!(recorder.prompts, 3);
        assert_eq!(recorder.events[1], "Info Invalid input.");
        assert_eq!(session.remaining_turns(), 7);
    }

    #[test]
    fn finished_session_is_not_played_again() {
        let mut session = GameSession::with_target(TargetWord::new("hello").unwrap());
        session.submit_guess("quit").unwrap();

        let mut recorder = Recorder::default();
        let status = run_play(&mut session, "l\ne\n".as_bytes(), &mut recorder).unwrap();
        assert_eq!(status, Status::Quit);
        assert_eq!(recorder.prompts, 0);
        assert_eq!(session.guess_count(), 0);
    }

    #[test]
    fn crlf_line_endings_are_stripped() {
        let (status, _) = play("hello", "l\r\ne\r\n");
        assert_eq!(status, Status::Won);
    }
}
