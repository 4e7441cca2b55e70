//! Single guess evaluation command
//!
//! Scores one guess against a chosen target, outside of any session.

use crate::core::{LetterGuess, LetterStatus, Word, WordError, evaluate};
use thiserror::Error;

/// Result of scoring a guess
pub struct EvaluationResult {
    pub target: Word,
    pub guess: Word,
    pub statuses: Vec<LetterStatus>,
}

impl EvaluationResult {
    /// The guess as a row of submitted tiles
    #[must_use]
    pub fn tiles(&self) -> Vec<LetterGuess> {
        self.guess
            .letters()
            .iter()
            .zip(&self.statuses)
            .map(|(&letter, &status)| LetterGuess::Submitted(letter, status))
            .collect()
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.statuses
            .iter()
            .all(|&status| status == LetterStatus::InPosition)
    }
}

/// Error scoring a guess from the command line
#[derive(Debug, Error)]
pub enum EvaluateError {
    #[error("invalid target")]
    InvalidTarget(#[source] WordError),
    #[error("invalid guess")]
    InvalidGuess(#[source] WordError),
    #[error("guess has {guess} letters but the target has {target}")]
    LengthMismatch { guess: usize, target: usize },
}

/// Score `guess` against `target`
///
/// # Errors
///
/// Returns an error if either word is invalid or their lengths differ.
pub fn evaluate_guess(target: &str, guess: &str) -> Result<EvaluationResult, EvaluateError> {
    let target = Word::new(target).map_err(EvaluateError::InvalidTarget)?;
    let guess = Word::new(guess).map_err(EvaluateError::InvalidGuess)?;

    if guess.len() != target.len() {
        return Err(EvaluateError::LengthMismatch {
            guess: guess.len(),
            target: target.len(),
        });
    }

    let statuses = evaluate(&guess, &target);
    Ok(EvaluationResult {
        target,
        guess,
        statuses,
    })
}
