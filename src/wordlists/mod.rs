//! Word lists for the puzzle
//!
//! `WordList` is the in-memory dictionary a session plays against; the embedded
//! lists are compiled into the binary so the CLI needs no data files.

mod embedded;
mod word_list;

pub use embedded::{GUESSES, GUESSES_COUNT, TARGETS, TARGETS_COUNT};
pub use word_list::WordList;
