//! The dictionary a session plays against
//!
//! Built once from raw `(word, is_target)` pairs: every entry is uppercased,
//! invalid entries are skipped and duplicates collapse. Immutable afterwards.

use super::{GUESSES, TARGETS};
use crate::core::Word;
use rustc_hash::FxHashSet;
use std::collections::BTreeSet;
use tracing::debug;

/// Accepted guesses plus the subset that may be drawn as a target
///
/// Every target is also an accepted guess.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: FxHashSet<Word>,
    targets: Vec<Word>,
}

impl WordList {
    /// Build a word list from `(word, is_target)` pairs
    ///
    /// Entries that are not valid words are skipped.
    ///
    /// # Examples
    /// ```
    /// use wordle_session::core::Word;
    /// use wordle_session::wordlists::WordList;
    ///
    /// let list = WordList::new([("power", true), ("POWER", true), ("abled", false)]);
    ///
    /// assert_eq!(list.len(), 2);
    /// assert_eq!(list.targets(), [Word::new("power").unwrap()]);
    /// assert!(list.contains(&Word::new("Abled").unwrap()));
    /// ```
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, bool)>,
        S: AsRef<str>,
    {
        let mut skipped = 0usize;
        let entries: BTreeSet<(Word, bool)> = entries
            .into_iter()
            .filter_map(|(text, is_target)| match Word::new(text.as_ref().trim()) {
                Ok(word) => Some((word, is_target)),
                Err(_) => {
                    skipped += 1;
                    None
                }
            })
            .collect();

        let targets: Vec<Word> = entries
            .iter()
            .filter(|(_, is_target)| *is_target)
            .map(|(word, _)| word.clone())
            .collect();
        let words: FxHashSet<Word> = entries.into_iter().map(|(word, _)| word).collect();

        debug!(
            words = words.len(),
            targets = targets.len(),
            skipped,
            "built word list"
        );

        Self { words, targets }
    }

    /// Build a word list where every word may be the target
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(words.into_iter().map(|word| (word, true)))
    }

    /// Build a word list from separate guess-only and target lists
    #[must_use]
    pub fn from_lists(guesses: &[&str], targets: &[&str]) -> Self {
        Self::new(
            guesses
                .iter()
                .map(|&word| (word, false))
                .chain(targets.iter().map(|&word| (word, true))),
        )
    }

    /// The lists compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_lists(GUESSES, TARGETS)
    }

    /// The embedded targets only, each one both guessable and drawable
    #[must_use]
    pub fn embedded_targets() -> Self {
        Self::from_words(TARGETS)
    }

    /// Check whether a word is an accepted guess
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    /// All accepted guesses
    #[inline]
    #[must_use]
    pub fn words(&self) -> &FxHashSet<Word> {
        &self.words
    }

    /// Words that may be drawn as the target, sorted
    #[inline]
    #[must_use]
    pub fn targets(&self) -> &[Word] {
        &self.targets
    }

    /// Number of accepted guesses
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
