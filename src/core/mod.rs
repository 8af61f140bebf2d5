//! Core domain types for hangman
//!
//! The round state machine and the types it is built from. Nothing here
//! touches the terminal; rendering lives in [`crate::output`].

mod guess;
mod session;
mod word;

pub use guess::{Guess, InvalidReason, QUIT_KEYWORD};
pub use session::{
    Cell, EXTRA_TURNS, EvalOutcome, GameSession, ProgressView, SessionError, Status,
};
pub use word::{MIN_WORD_LEN, TargetWord, WordError};
