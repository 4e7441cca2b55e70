//! Guess evaluation against the target
//!
//! Scores every letter of a guess, handling repeated letters by letting each
//! target position claim at most one guess letter. Target positions are
//! visited left to right, and each one finishes claiming before the next:
//! 1. The guess letter at the same index, if equal and unclaimed, becomes
//!    `InPosition`
//! 2. Otherwise the earliest unclaimed equal guess letter becomes `InWord`
//! 3. Guess letters never claimed are `NotInWord`
//!
//! An earlier target position can therefore take a guess letter that a later
//! position would have matched exactly (target `MUMMY`, guess `TUMMY`).
//!
//! A letter appearing k times in the target and m times in the guess is
//! therefore scored in-word or in-position exactly `min(k, m)` times.

use super::{LetterStatus, TargetLetterStatus, Word};

/// Score `guess` against `target`, one status per guess position
///
/// Both words must have the same length; the session never evaluates an
/// incomplete guess.
///
/// # Examples
/// ```
/// use wordle_session::core::{LetterStatus::*, Word, evaluate};
///
/// let target = Word::new("abled").unwrap();
/// let guess = Word::new("alloy").unwrap();
///
/// // Only one L is scored: the target has a single L
/// assert_eq!(
///     evaluate(&guess, &target),
///     [InPosition, NotInWord, InPosition, NotInWord, NotInWord]
/// );
/// ```
#[must_use]
pub fn evaluate(guess: &Word, target: &Word) -> Vec<LetterStatus> {
    debug_assert_eq!(
        guess.len(),
        target.len(),
        "guess and target must have the same length"
    );

    let guess_letters = guess.letters();
    let mut statuses = vec![LetterStatus::NotInWord; guess_letters.len()];
    let mut unclaimed: Vec<usize> = (0..guess_letters.len()).collect();

    for (position, &letter) in target.letters().iter().enumerate() {
        let exact = unclaimed
            .iter()
            .position(|&index| index == position && guess_letters[index] == letter);
        let claim = exact.map(|slot| (slot, LetterStatus::InPosition)).or_else(|| {
            unclaimed
                .iter()
                .position(|&index| guess_letters[index] == letter)
                .map(|slot| (slot, LetterStatus::InWord))
        });

        if let Some((slot, status)) = claim {
            statuses[unclaimed.remove(slot)] = status;
        }
    }

    statuses
}

/// What the guess history reveals about each target position
///
/// `KnownPosition` if any guess had the target letter at that index, else
/// `UnknownPosition` if any guess contained the letter anywhere, else
/// `NotGuessed`.
///
/// Repeated target letters are not disambiguated here: one guessed `E` marks
/// every `E` of the target as at least `UnknownPosition`.
#[must_use]
pub fn target_coverage(guesses: &[Word], target: &Word) -> Vec<TargetLetterStatus> {
    target
        .letters()
        .iter()
        .enumerate()
        .map(|(position, &letter)| {
            if guesses
                .iter()
                .any(|guess| guess.letter_at(position) == Some(letter))
            {
                TargetLetterStatus::KnownPosition
            } else if guesses.iter().any(|guess| guess.contains(letter)) {
                TargetLetterStatus::UnknownPosition
            } else {
                TargetLetterStatus::NotGuessed
            }
        })
        .collect()
}
