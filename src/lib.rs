//! Hangman
//!
//! A terminal word-guessing game over a frequency-ranked word catalog.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::{EvalOutcome, GameSession, TargetWord};
//!
//! let mut session = GameSession::with_target(TargetWord::new("hello").unwrap());
//! assert_eq!(session.remaining_turns(), 7);
//!
//! session.submit_guess("l").unwrap();
//! assert_eq!(session.submit_guess("e").unwrap(), EvalOutcome::Won);
//! ```

// Core domain types
pub mod core;

// Word catalogs
pub mod catalog;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Tracing setup
pub mod logging;
