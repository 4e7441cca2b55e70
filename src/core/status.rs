//! Per-letter feedback types
//!
//! `LetterStatus` is the score of one guessed letter, `LetterGuess` is one tile
//! of the board and `TargetLetterStatus` records what past guesses revealed about
//! one position of the target.

/// Score of one guessed letter against the target
///
/// Ordered `NotInWord < InWord < InPosition`, so the best status a letter has
/// ever reached is simply the `max` over its statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LetterStatus {
    /// Gray: no unclaimed occurrence of the letter in the target
    NotInWord,
    /// Yellow: in the target, but elsewhere
    InWord,
    /// Green: same letter at the same index
    InPosition,
}

impl LetterStatus {
    /// Emoji square used when sharing results
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::NotInWord => '⬜',
            Self::InWord => '🟨',
            Self::InPosition => '🟩',
        }
    }
}

/// One tile of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterGuess {
    /// Nothing typed here yet
    Empty,
    /// Typed into the active row but not yet submitted
    Pending(char),
    /// Part of a submitted guess, scored against the target
    Submitted(char, LetterStatus),
}

impl LetterGuess {
    /// Letter shown on the tile, if any
    #[must_use]
    pub const fn letter(self) -> Option<char> {
        match self {
            Self::Empty => None,
            Self::Pending(letter) | Self::Submitted(letter, _) => Some(letter),
        }
    }

    /// Score of the tile, only present once submitted
    #[must_use]
    pub const fn status(self) -> Option<LetterStatus> {
        match self {
            Self::Submitted(_, status) => Some(status),
            Self::Empty | Self::Pending(_) => None,
        }
    }
}

/// How well past guesses have covered one target position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetLetterStatus {
    NotGuessed,
    /// The letter was guessed somewhere, never at this index
    UnknownPosition,
    /// Some past guess had this exact letter at this index
    KnownPosition,
}
