//! Command implementations

pub mod build;
pub mod play;

pub use build::run_build;
pub use play::{PROMPT, run_play};
