//! Terminal output formatting
//!
//! Display utilities for the board, the keyboard and command results.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_evaluation_result, print_game_over, print_keyboard};
