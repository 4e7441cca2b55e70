//! Hard-mode rule engine
//!
//! In hard mode every guess must reuse what earlier guesses revealed: letters
//! known to be in the target must appear, and letters known at a position must
//! stay there. When several rules are broken only one is reported:
//! - a missing letter beats a misplaced one
//! - within a kind, the letter appearing earliest in the most recent guess wins,
//!   so the message never hints at the target's letter order

use super::SubmitResult;
use crate::core::{TargetLetterStatus, Word, target_coverage};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Kind {
    MissingLetter,
    MisplacedLetter,
}

#[derive(Debug, Clone, Copy)]
struct Violation {
    kind: Kind,
    /// Index of the letter in the most recent guess
    recency: usize,
    /// Target position, only used to make the order total
    position: usize,
    letter: char,
}

impl Violation {
    const fn priority(&self) -> (Kind, usize, usize) {
        (self.kind, self.recency, self.position)
    }

    const fn into_result(self) -> SubmitResult {
        match self.kind {
            Kind::MissingLetter => SubmitResult::NotUsingKnownLetter(self.letter),
            Kind::MisplacedLetter => SubmitResult::NotUsingKnownLetterAtLocation {
                letter: self.letter,
                position: self.position,
            },
        }
    }
}

/// Find the hard-mode rule `guess` breaks, given the guesses submitted before it
///
/// Returns `None` when the guess is allowed.
pub(crate) fn find_violation(
    guess: &Word,
    previous: &[Word],
    target: &Word,
) -> Option<SubmitResult> {
    let last_guess = previous.last()?;
    let coverage = target_coverage(previous, target);

    target
        .letters()
        .iter()
        .zip(coverage)
        .enumerate()
        .filter_map(|(position, (&letter, status))| match status {
            TargetLetterStatus::UnknownPosition if !guess.contains(letter) => Some(Violation {
                kind: Kind::MissingLetter,
                recency: last_guess.position_of(letter).unwrap_or(usize::MAX),
                position,
                letter,
            }),
            TargetLetterStatus::KnownPosition if guess.letter_at(position) != Some(letter) => {
                let recency = if last_guess.letter_at(position) == Some(letter) {
                    position
                } else {
                    last_guess.position_of(letter).unwrap_or(usize::MAX)
                };
                Some(Violation {
                    kind: Kind::MisplacedLetter,
                    recency,
                    position,
                    letter,
                })
            }
            _ => None,
        })
        .min_by_key(Violation::priority)
        .map(Violation::into_result)
}
