//! Game session: puzzle state, the submission pipeline and hard mode
//!
//! A [`GameSession`] moves from `Playing` to `Won` or `Lost` and never back;
//! [`GameSession::reset`] starts a new one.

mod game;
mod hard_mode;
mod submit;

pub use game::{GameSession, GameState, MAX_GUESSES, SessionError};
pub use submit::SubmitResult;
