//! Outcome of submitting the active row

use std::fmt;

/// Result of [`GameSession::submit`](super::GameSession::submit)
///
/// Every variant except `Success` is a rejection that leaves the session
/// untouched. Rejections are ordinary values shown to the player, not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubmitResult {
    /// The guess was recorded
    Success,
    /// The active row is not full
    NotEnoughLetters,
    /// The active row is not an accepted guess
    NotInWordList,
    /// Hard mode: a letter known to be in the target was left out
    NotUsingKnownLetter(char),
    /// Hard mode: a letter known to sit at `position` (0-based) was moved
    NotUsingKnownLetterAtLocation { letter: char, position: usize },
    /// The game is already won or lost
    GameOver,
}

impl SubmitResult {
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }
}

impl fmt::Display for SubmitResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "Guess accepted"),
            Self::NotEnoughLetters => write!(f, "Not enough letters"),
            Self::NotInWordList => write!(f, "Not in word list"),
            Self::NotUsingKnownLetter(letter) => write!(f, "Must use letter {letter}"),
            Self::NotUsingKnownLetterAtLocation { letter, position } => {
                write!(f, "{} letter should be {letter}", ordinal(position + 1))
            }
            Self::GameOver => write!(f, "The game is over"),
        }
    }
}

/// 1 -> "1st", 2 -> "2nd", 11 -> "11th", 23 -> "23rd"
fn ordinal(n: usize) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_success_is_success() {
        assert!(SubmitResult::Success.is_success());
        assert!(!SubmitResult::NotEnoughLetters.is_success());
        assert!(!SubmitResult::GameOver.is_success());
    }

    #[test]
    fn rejection_messages() {
        assert_eq!(
            SubmitResult::NotEnoughLetters.to_string(),
            "Not enough letters"
        );
        assert_eq!(SubmitResult::NotInWordList.to_string(), "Not in word list");
        assert_eq!(
            SubmitResult::NotUsingKnownLetter('E').to_string(),
            "Must use letter E"
        );
        assert_eq!(
            SubmitResult::NotUsingKnownLetterAtLocation {
                letter: 'R',
                position: 4
            }
            .to_string(),
            "5th letter should be R"
        );
    }

    #[test]
    fn ordinals() {
        let text: Vec<String> = [1, 2, 3, 4, 11, 12, 13, 21, 22, 23]
            .into_iter()
            .map(ordinal)
            .collect();
        assert_eq!(
            text,
            ["1st", "2nd", "3rd", "4th", "11th", "12th", "13th", "21st", "22nd", "23rd"]
        );
    }
}
