//! Terminal output formatting
//!
//! Presentation of game progress and status messages. The core never depends
//! on this module.

pub mod display;
pub mod formatters;

pub use display::{ColoredPresenter, Presenter, print_build_report};
pub use formatters::{MessageKind, masked_word, outcome_messages};
