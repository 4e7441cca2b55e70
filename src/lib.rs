//! Wordle Session
//!
//! A word-guessing puzzle evaluator: scores guesses against a hidden target,
//! handling repeated letters, and runs the game session with optional hard mode.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_session::core::{LetterStatus, Word, evaluate};
//!
//! let target = Word::new("aloof").unwrap();
//! let guess = Word::new("boost").unwrap();
//!
//! let statuses = evaluate(&guess, &target);
//! assert_eq!(statuses[1], LetterStatus::InWord);
//! assert_eq!(statuses[2], LetterStatus::InPosition);
//! ```

// Core domain types and the guess evaluator
pub mod core;

// Game session state machine and hard mode
pub mod session;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Tracing setup
pub mod logging;
