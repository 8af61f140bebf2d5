//! Formatting utilities for terminal output

use crate::core::{EvalOutcome, InvalidReason, ProgressView};

/// Category of a status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Win,
    Lose,
}

/// Render progress as plain text, masked letters shown as `_`
///
/// # Examples
/// ```
/// use hangman::core::{GameSession, TargetWord};
/// use hangman::output::formatters::masked_word;
///
/// let session = GameSession::with_target(TargetWord::new("hello").unwrap());
/// assert_eq!(masked_word(&session.progress_view()), "h _ _ _ o");
/// ```
#[must_use]
pub fn masked_word(view: &ProgressView) -> String {
    view.cells
        .iter()
        .map(|cell| if cell.revealed { cell.letter } else { '_' })
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Messages to show the player after an outcome
///
/// `target` is needed to reveal the word on a loss.
#[must_use]
pub fn outcome_messages(outcome: &EvalOutcome, target: &str) -> Vec<(MessageKind, String)> {
    match outcome {
        EvalOutcome::Quit | EvalOutcome::CorrectLetter { .. } => Vec::new(),
        EvalOutcome::Invalid(InvalidReason::NotAlphabetic) => {
            vec![(MessageKind::Info, "Invalid input.".to_string())]
        }
        EvalOutcome::Invalid(InvalidReason::NotSingleCharacter) => vec![(
            MessageKind::Info,
            "You should only enter ONE character from the alphabet.".to_string(),
        )],
        EvalOutcome::Repeated(_) => vec![
            (
                MessageKind::Info,
                "You already entered this letter.".to_string(),
            ),
            (MessageKind::Info, "Try another one!".to_string()),
        ],
        EvalOutcome::WrongLetter {
            remaining_turns, ..
        } => vec![
            (MessageKind::Info, "Wrong letter".to_string()),
            (
                MessageKind::Info,
                format!(
                    "You have {remaining_turns} more {}.",
                    if *remaining_turns == 1 { "guess" } else { "guesses" }
                ),
            ),
        ],
        EvalOutcome::Lost => vec![
            (MessageKind::Lose, "You lose".to_string()),
            (MessageKind::Info, format!("The word was: {target}")),
        ],
        EvalOutcome::Won => vec![(MessageKind::Win, "Congratulations! You Win".to_string())],
    }
}
