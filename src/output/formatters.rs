//! Formatting utilities for terminal output

use crate::core::{LetterGuess, LetterStatus};
use colored::{ColoredString, Colorize};

/// Keyboard rows, top to bottom
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Format scored letters as an emoji string
#[must_use]
pub fn statuses_to_emoji(statuses: &[LetterStatus]) -> String {
    statuses.iter().map(|status| status.emoji()).collect()
}

/// Render one board tile
#[must_use]
pub fn tile(guess: LetterGuess) -> ColoredString {
    match guess {
        LetterGuess::Empty => " · ".bright_black(),
        LetterGuess::Pending(letter) => format!(" {letter} ").bold(),
        LetterGuess::Submitted(letter, status) => status_colored(format!(" {letter} "), status),
    }
}

/// Render one keyboard key, colored by the best status seen so far
#[must_use]
pub fn key(letter: char, status: Option<LetterStatus>) -> ColoredString {
    let text = letter.to_string();
    match status {
        None => text.normal(),
        Some(status) => status_colored(text, status),
    }
}

fn status_colored(text: String, status: LetterStatus) -> ColoredString {
    match status {
        LetterStatus::InPosition => text.black().on_green().bold(),
        LetterStatus::InWord => text.black().on_yellow().bold(),
        LetterStatus::NotInWord => text.white().on_bright_black(),
    }
}
