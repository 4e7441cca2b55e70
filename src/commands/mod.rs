//! Command implementations

pub mod evaluate;
pub mod play;

pub use evaluate::{EvaluateError, EvaluationResult, evaluate_guess};
pub use play::{PlayCommand, PlayConfig, WordListMode, enter_guess, run_play};
