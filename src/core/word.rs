//! Puzzle word representation
//!
//! A Word is an ordered run of uppercase ASCII letters. Every comparison in the
//! crate happens on the normalized letters, so "crane" and "CRANE" are the same word.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// An uppercase word of any positive length
///
/// Ordering is lexicographic on the letters, which keeps word lists sorted
/// and target draws reproducible under a seeded random source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    letters: Vec<char>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must contain at least one letter")]
    Empty,
    #[error("word contains `{0}`, which is not an ASCII letter")]
    InvalidCharacter(char),
}

impl Word {
    /// Create a new Word from a string, uppercasing it
    ///
    /// # Errors
    /// Returns `WordError` if the text is empty or contains anything other
    /// than ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use wordle_session::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.to_string(), "CRANE");
    /// assert_eq!(word.len(), 5);
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, WordError> {
        Self::from_letters(text.chars())
    }

    /// Create a Word from individual letters, uppercasing each one
    ///
    /// # Errors
    /// Same rules as [`Word::new`].
    pub fn from_letters(letters: impl IntoIterator<Item = char>) -> Result<Self, WordError> {
        let letters = letters
            .into_iter()
            .map(|letter| {
                if letter.is_ascii_alphabetic() {
                    Ok(letter.to_ascii_uppercase())
                } else {
                    Err(WordError::InvalidCharacter(letter))
                }
            })
            .collect::<Result<Vec<char>, _>>()?;

        if letters.is_empty() {
            return Err(WordError::Empty);
        }

        Ok(Self { letters })
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false: a Word holds at least one letter
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// The letters of the word, uppercased
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Letter at `position`, or `None` past the end
    #[inline]
    #[must_use]
    pub fn letter_at(&self, position: usize) -> Option<char> {
        self.letters.get(position).copied()
    }

    /// Check if the word contains a letter, ignoring case
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.letters.contains(&letter.to_ascii_uppercase())
    }

    /// First position where `letter` appears, ignoring case
    #[inline]
    #[must_use]
    pub fn position_of(&self, letter: char) -> Option<usize> {
        let letter = letter.to_ascii_uppercase();
        self.letters.iter().position(|&ch| ch == letter)
    }
}

impl FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.letters.iter().try_for_each(|letter| write!(f, "{letter}"))
    }
}
