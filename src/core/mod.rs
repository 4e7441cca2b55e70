//! Core domain types for the puzzle
//!
//! Words, per-letter feedback and the guess evaluator. Everything here is pure:
//! no state, no randomness, no I/O.

mod evaluate;
mod status;
mod word;

pub use evaluate::{evaluate, target_coverage};
pub use status::{LetterGuess, LetterStatus, TargetLetterStatus};
pub use word::{Word, WordError};
