//! Game session state machine
//!
//! A session owns the target, the guess history and the row being typed.
//! Typing and submitting are the only mutations; hard mode and the target are
//! fixed for the life of a session, so changing either builds a new session.

use super::SubmitResult;
use super::hard_mode::find_violation;
use crate::core::{
    LetterGuess, LetterStatus, TargetLetterStatus, Word, evaluate, target_coverage,
};
use crate::wordlists::WordList;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rustc_hash::FxHashMap;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, trace};

/// Number of guesses allowed per game
pub const MAX_GUESSES: usize = 6;

/// Error building a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("word list has no words eligible as the target")]
    EmptyWordList,
}

/// Overall progress of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    Playing,
    /// The target has been submitted
    Won,
    /// All guesses used without finding the target
    Lost,
}

impl GameState {
    /// Won and lost sessions accept no more input
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

/// One puzzle: a hidden target, the guesses so far and the active row
///
/// The session owns its random source so that [`reset`](Self::reset) and
/// [`toggle_hard_mode`](Self::toggle_hard_mode) can draw a fresh target.
/// Seed it with [`with_rng`](Self::with_rng) for reproducible games.
///
/// A session has a single owner. To share it between threads, put it behind
/// one lock covering all mutators.
///
/// # Examples
/// ```
/// use rand::{SeedableRng, rngs::StdRng};
/// use wordle_session::session::{GameSession, GameState, SubmitResult};
/// use wordle_session::wordlists::WordList;
///
/// let words = WordList::from_words(["power"]);
/// let mut session = GameSession::with_rng(words, false, StdRng::seed_from_u64(1)).unwrap();
///
/// for letter in "power".chars() {
///     session.add_letter(letter);
/// }
/// assert_eq!(session.submit(), SubmitResult::Success);
/// assert_eq!(session.state(), GameState::Won);
/// ```
#[derive(Debug, Clone)]
pub struct GameSession<R = StdRng> {
    word_list: Arc<WordList>,
    rng: R,
    target: Word,
    is_hard_mode: bool,
    max_guesses: usize,
    submitted_guesses: Vec<Word>,
    current_input: Vec<char>,
}

impl GameSession<StdRng> {
    /// Start a session with a target drawn from OS entropy
    ///
    /// # Errors
    /// Returns `SessionError::EmptyWordList` if the list has no targets.
    pub fn new(
        word_list: impl Into<Arc<WordList>>,
        is_hard_mode: bool,
    ) -> Result<Self, SessionError> {
        Self::with_rng(word_list, is_hard_mode, StdRng::from_os_rng())
    }
}

impl<R: Rng> GameSession<R> {
    /// Start a session drawing the target from `rng`
    ///
    /// # Errors
    /// Returns `SessionError::EmptyWordList` if the list has no targets.
    pub fn with_rng(
        word_list: impl Into<Arc<WordList>>,
        is_hard_mode: bool,
        mut rng: R,
    ) -> Result<Self, SessionError> {
        let word_list = word_list.into();
        let target = word_list
            .targets()
            .choose(&mut rng)
            .cloned()
            .ok_or(SessionError::EmptyWordList)?;

        debug!(
            targets = word_list.targets().len(),
            hard_mode = is_hard_mode,
            length = target.len(),
            "started session"
        );
        trace!(%target, "drew target");

        Ok(Self {
            word_list,
            rng,
            target,
            is_hard_mode,
            max_guesses: MAX_GUESSES,
            submitted_guesses: Vec::new(),
            current_input: Vec::new(),
        })
    }

    /// Start over with a fresh target, keeping the word list and hard mode
    ///
    /// # Panics
    /// Will not panic: the target pool was checked when this session was built
    /// and the word list is immutable.
    #[must_use]
    pub fn reset(self) -> Self {
        let is_hard_mode = self.is_hard_mode;
        self.rebuild(is_hard_mode)
    }

    /// Flip hard mode, which is only allowed before the first guess
    ///
    /// Starts a new session with the flipped flag. Once a guess has been
    /// submitted this returns the session unchanged.
    #[must_use]
    pub fn toggle_hard_mode(self) -> Self {
        if !self.is_game_start() {
            debug!("ignored hard mode toggle after the first guess");
            return self;
        }

        let is_hard_mode = !self.is_hard_mode;
        self.rebuild(is_hard_mode)
    }

    fn rebuild(self, is_hard_mode: bool) -> Self {
        Self::with_rng(self.word_list, is_hard_mode, self.rng)
            .expect("target pool was non-empty when the session was built")
    }
}

impl<R> GameSession<R> {
    /// Type a letter into the active row
    ///
    /// Ignored once the row is full or the game is over.
    pub fn add_letter(&mut self, letter: char) {
        if self.state().is_terminal() || self.current_input.len() >= self.target.len() {
            return;
        }
        self.current_input.push(letter.to_ascii_uppercase());
    }

    /// Delete the last letter of the active row, if any
    ///
    /// Ignored once the game is over.
    pub fn remove_letter(&mut self) {
        if self.state().is_terminal() {
            return;
        }
        self.current_input.pop();
    }

    /// Submit the active row as a guess
    ///
    /// Checks run in a fixed order and the first failure is returned:
    /// 1. Game already over: `GameOver`
    /// 2. Row not full: `NotEnoughLetters`
    /// 3. Not an accepted guess: `NotInWordList`
    /// 4. Hard mode rule broken: the highest-priority violation
    ///
    /// Only `Success` changes the session: the guess is recorded and the row
    /// cleared.
    pub fn submit(&mut self) -> SubmitResult {
        let result = match self.validate_submission() {
            Ok(guess) => {
                self.submitted_guesses.push(guess);
                self.current_input.clear();
                SubmitResult::Success
            }
            Err(rejection) => rejection,
        };

        debug!(
            ?result,
            guesses = self.submitted_guesses.len(),
            state = ?self.state(),
            "submitted guess"
        );
        result
    }

    fn validate_submission(&self) -> Result<Word, SubmitResult> {
        if self.state().is_terminal() {
            return Err(SubmitResult::GameOver);
        }

        if self.current_input.len() != self.target.len() {
            return Err(SubmitResult::NotEnoughLetters);
        }

        let guess = Word::from_letters(self.current_input.iter().copied())
            .map_err(|_| SubmitResult::NotInWordList)?;
        if !self.word_list.contains(&guess) {
            return Err(SubmitResult::NotInWordList);
        }

        if self.is_hard_mode
            && let Some(violation) = find_violation(&guess, &self.submitted_guesses, &self.target)
        {
            return Err(violation);
        }

        Ok(guess)
    }

    /// Current game state, derived from the guess history
    #[must_use]
    pub fn state(&self) -> GameState {
        if self.submitted_guesses.contains(&self.target) {
            GameState::Won
        } else if self.submitted_guesses.len() >= self.max_guesses {
            GameState::Lost
        } else {
            GameState::Playing
        }
    }

    /// The secret word
    ///
    /// Meant for the end-of-game reveal; do not show it while playing.
    #[inline]
    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[inline]
    #[must_use]
    pub const fn is_hard_mode(&self) -> bool {
        self.is_hard_mode
    }

    /// True until the first guess is submitted
    #[inline]
    #[must_use]
    pub fn is_game_start(&self) -> bool {
        self.submitted_guesses.is_empty()
    }

    #[inline]
    #[must_use]
    pub const fn max_guesses(&self) -> usize {
        self.max_guesses
    }

    /// Number of letters in every guess
    #[inline]
    #[must_use]
    pub fn target_length(&self) -> usize {
        self.target.len()
    }

    #[inline]
    #[must_use]
    pub fn submitted_guesses(&self) -> &[Word] {
        &self.submitted_guesses
    }

    /// Letters typed into the active row, uppercased
    #[inline]
    #[must_use]
    pub fn current_input(&self) -> &[char] {
        &self.current_input
    }

    #[inline]
    #[must_use]
    pub fn word_list(&self) -> &WordList {
        &self.word_list
    }

    /// What the guess history reveals about each target position
    #[must_use]
    pub fn target_coverage(&self) -> Vec<TargetLetterStatus> {
        target_coverage(&self.submitted_guesses, &self.target)
    }

    /// Best status each guessed letter has reached, for coloring a keyboard
    #[must_use]
    pub fn guessed_letters(&self) -> FxHashMap<char, LetterStatus> {
        let mut best: FxHashMap<char, LetterStatus> = FxHashMap::default();

        for guess in &self.submitted_guesses {
            for (&letter, status) in guess.letters().iter().zip(evaluate(guess, &self.target)) {
                best.entry(letter)
                    .and_modify(|seen| *seen = (*seen).max(status))
                    .or_insert(status);
            }
        }

        best
    }

    /// The board: `max_guesses` rows of `target_length` tiles
    ///
    /// Submitted rows come first, then the active row (pending letters padded
    /// with empty tiles) while a guess remains, then empty rows.
    #[must_use]
    pub fn rendered_guesses(&self) -> Vec<Vec<LetterGuess>> {
        let length = self.target.len();

        let mut rows: Vec<Vec<LetterGuess>> = self
            .submitted_guesses
            .iter()
            .map(|guess| {
                guess
                    .letters()
                    .iter()
                    .zip(evaluate(guess, &self.target))
                    .map(|(&letter, status)| LetterGuess::Submitted(letter, status))
                    .collect()
            })
            .collect();

        if rows.len() < self.max_guesses {
            let mut active: Vec<LetterGuess> = self
                .current_input
                .iter()
                .map(|&letter| LetterGuess::Pending(letter))
                .collect();
            active.resize(length, LetterGuess::Empty);
            rows.push(active);
        }

        rows.resize(self.max_guesses, vec![LetterGuess::Empty; length]);
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::LetterStatus::{InPosition, InWord, NotInWord};

    const GUESSES: &[&str] = &[
        "crane", "sloth", "lower", "boxes", "rowdy", "topaz", "bower", "mowed",
    ];

    fn session(hard_mode: bool) -> GameSession {
        let words = WordList::from_lists(GUESSES, &["power"]);
        GameSession::with_rng(words, hard_mode, StdRng::seed_from_u64(7)).unwrap()
    }

    fn type_word<R>(session: &mut GameSession<R>, word: &str) {
        for letter in word.chars() {
            session.add_letter(letter);
        }
    }

    fn play<R>(session: &mut GameSession<R>, word: &str) -> SubmitResult {
        type_word(session, word);
        session.submit()
    }

    static_assertions::assert_impl_all!(GameSession: Send, Sync);

    #[test]
    fn empty_word_list_is_rejected() {
        let result = GameSession::new(WordList::from_words(Vec::<String>::new()), false);
        assert_eq!(result.unwrap_err(), SessionError::EmptyWordList);
    }

    #[test]
    fn guesses_without_targets_are_rejected() {
        let words = WordList::from_lists(&["crane"], &[]);
        assert!(matches!(
            GameSession::new(words, true),
            Err(SessionError::EmptyWordList)
        ));
    }

    #[test]
    fn seeded_sessions_draw_the_same_target() {
        let words = Arc::new(WordList::embedded());
        let first = GameSession::with_rng(Arc::clone(&words), false, StdRng::seed_from_u64(42))
            .unwrap();
        let second =
            GameSession::with_rng(words, false, StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(first.target(), second.target());
    }

    #[test]
    fn target_comes_from_targets() {
        let words = WordList::embedded();
        let session = GameSession::new(words, false).unwrap();
        assert!(session.word_list().targets().contains(session.target()));
    }

    #[test]
    fn new_session_is_playing() {
        let session = session(false);
        assert_eq!(session.state(), GameState::Playing);
        assert_eq!(session.max_guesses(), MAX_GUESSES);
        assert_eq!(session.target_length(), 5);
        assert!(session.is_game_start());
        assert!(session.current_input().is_empty());
    }

    #[test]
    fn add_letter_stops_at_target_length() {
        let mut session = session(false);
        type_word(&mut session, "powers");
        assert_eq!(session.current_input(), &['P', 'O', 'W', 'E', 'R']);
    }

    #[test]
    fn remove_letter_on_empty_input_is_noop() {
        let mut session = session(false);
        session.remove_letter();
        assert!(session.current_input().is_empty());

        type_word(&mut session, "po");
        session.remove_letter();
        assert_eq!(session.current_input(), &['P']);
    }

    #[test]
    fn submit_empty_input_is_not_enough_letters() {
        let mut session = session(false);
        assert_eq!(session.submit(), SubmitResult::NotEnoughLetters);
        assert!(session.is_game_start());
    }

    #[test]
    fn submit_partial_input_keeps_input() {
        let mut session = session(false);
        assert_eq!(play(&mut session, "pow"), SubmitResult::NotEnoughLetters);
        assert_eq!(session.current_input(), &['P', 'O', 'W']);
        assert!(session.submitted_guesses().is_empty());
    }

    #[test]
    fn unknown_word_is_rejected() {
        let mut session = session(false);
        assert_eq!(play(&mut session, "zzzzz"), SubmitResult::NotInWordList);
        assert_eq!(session.current_input().len(), 5);
        assert!(session.submitted_guesses().is_empty());
    }

    #[test]
    fn non_letters_are_not_in_word_list() {
        let mut session = session(false);
        assert_eq!(play(&mut session, "c4ane"), SubmitResult::NotInWordList);
    }

    #[test]
    fn winning_guess() {
        let mut session = session(false);
        assert_eq!(play(&mut session, "crane"), SubmitResult::Success);
        assert_eq!(session.state(), GameState::Playing);
        assert!(session.current_input().is_empty());

        assert_eq!(play(&mut session, "POWER"), SubmitResult::Success);
        assert_eq!(session.state(), GameState::Won);
    }

    #[test]
    fn six_misses_lose() {
        let mut session = session(false);
        for guess in ["crane", "sloth", "lower", "boxes", "rowdy"] {
            assert_eq!(play(&mut session, guess), SubmitResult::Success);
            assert_eq!(session.state(), GameState::Playing);
        }
        assert_eq!(play(&mut session, "topaz"), SubmitResult::Success);
        assert_eq!(session.state(), GameState::Lost);
    }

    #[test]
    fn finished_game_ignores_input() {
        let mut session = session(false);
        play(&mut session, "power");

        type_word(&mut session, "crane");
        assert!(session.current_input().is_empty());
        session.remove_letter();
        assert_eq!(session.submit(), SubmitResult::GameOver);
        assert_eq!(session.submitted_guesses().len(), 1);
        assert_eq!(session.state(), GameState::Won);
    }

    #[test]
    fn toggle_hard_mode_before_first_guess() {
        let mut session = session(false);
        type_word(&mut session, "cr");
        let session = session.toggle_hard_mode();
        assert!(session.is_hard_mode());
        assert!(session.current_input().is_empty());

        let session = session.toggle_hard_mode();
        assert!(!session.is_hard_mode());
    }

    #[test]
    fn toggle_hard_mode_after_first_guess_is_noop() {
        let mut session = session(false);
        play(&mut session, "crane");

        let session = session.toggle_hard_mode();
        assert!(!session.is_hard_mode());
        assert_eq!(session.submitted_guesses().len(), 1);
    }

    #[test]
    fn reset_starts_a_fresh_game() {
        let mut session = session(true);
        play(&mut session, "crane");
        type_word(&mut session, "bo");

        let session = session.reset();
        assert!(session.is_hard_mode());
        assert!(session.is_game_start());
        assert!(session.current_input().is_empty());
        assert_eq!(session.state(), GameState::Playing);
        assert_eq!(session.target(), &Word::new("power").unwrap());
    }

    #[test]
    fn reset_after_loss_allows_play_again() {
        let mut session = session(false);
        for guess in ["crane", "sloth", "lower", "boxes", "rowdy", "topaz"] {
            play(&mut session, guess);
        }
        assert_eq!(session.state(), GameState::Lost);

        let mut session = session.reset();
        assert_eq!(play(&mut session, "power"), SubmitResult::Success);
        assert_eq!(session.state(), GameState::Won);
    }

    #[test]
    fn hard_mode_rejects_dropped_letter() {
        let mut session = session(true);
        assert_eq!(play(&mut session, "crane"), SubmitResult::Success);
        assert_eq!(
            play(&mut session, "sloth"),
            SubmitResult::NotUsingKnownLetter('R')
        );
        assert_eq!(session.submitted_guesses().len(), 1);
        assert_eq!(session.current_input().len(), 5);
    }

    #[test]
    fn hard_mode_prefers_missing_over_misplaced() {
        let mut session = session(true);
        play(&mut session, "rowdy");
        assert_eq!(
            play(&mut session, "topaz"),
            SubmitResult::NotUsingKnownLetter('R')
        );
    }

    #[test]
    fn hard_mode_rejects_moved_letter() {
        let mut session = session(true);
        play(&mut session, "lower");
        assert_eq!(
            play(&mut session, "mowed"),
            SubmitResult::NotUsingKnownLetterAtLocation {
                letter: 'R',
                position: 4
            }
        );
    }

    #[test]
    fn hard_mode_accepts_compliant_guess() {
        let mut session = session(true);
        play(&mut session, "rowdy");
        assert_eq!(play(&mut session, "bower"), SubmitResult::Success);
        assert_eq!(play(&mut session, "power"), SubmitResult::Success);
        assert_eq!(session.state(), GameState::Won);
    }

    #[test]
    fn normal_mode_ignores_hard_mode_rules() {
        let mut session = session(false);
        play(&mut session, "crane");
        assert_eq!(play(&mut session, "sloth"), SubmitResult::Success);
    }

    #[test]
    fn guessed_letters_keep_best_status() {
        let mut session = session(false);
        play(&mut session, "rowdy");
        play(&mut session, "lower");

        let letters = session.guessed_letters();
        assert_eq!(letters.len(), 7);
        assert_eq!(letters[&'R'], InPosition);
        assert_eq!(letters[&'O'], InPosition);
        assert_eq!(letters[&'E'], InPosition);
        assert_eq!(letters[&'D'], NotInWord);
        assert_eq!(letters[&'L'], NotInWord);
        assert!(!letters.contains_key(&'P'));
    }

    #[test]
    fn guessed_letters_in_word() {
        let mut session = session(false);
        play(&mut session, "crane");

        let letters = session.guessed_letters();
        assert_eq!(letters[&'R'], InWord);
        assert_eq!(letters[&'E'], InWord);
        assert_eq!(letters[&'C'], NotInWord);
    }

    #[test]
    fn rendered_guesses_layout() {
        let mut session = session(false);
        play(&mut session, "crane");
        type_word(&mut session, "lo");

        let rows = session.rendered_guesses();
        assert_eq!(rows.len(), MAX_GUESSES);
        assert!(rows.iter().all(|row| row.len() == 5));

        assert_eq!(
            rows[0],
            [
                LetterGuess::Submitted('C', NotInWord),
                LetterGuess::Submitted('R', InWord),
                LetterGuess::Submitted('A', NotInWord),
                LetterGuess::Submitted('N', NotInWord),
                LetterGuess::Submitted('E', InWord),
            ]
        );
        assert_eq!(
            rows[1],
            [
                LetterGuess::Pending('L'),
                LetterGuess::Pending('O'),
                LetterGuess::Empty,
                LetterGuess::Empty,
                LetterGuess::Empty,
            ]
        );
        assert!(rows[2..].iter().flatten().all(|&tile| tile == LetterGuess::Empty));
    }

    #[test]
    fn rendered_guesses_when_board_is_full() {
        let mut session = session(false);
        for guess in ["crane", "sloth", "lower", "boxes", "rowdy", "topaz"] {
            play(&mut session, guess);
        }

        let rows = session.rendered_guesses();
        assert_eq!(rows.len(), MAX_GUESSES);
        assert!(rows.iter().flatten().all(|tile| tile.status().is_some()));
    }

    #[test]
    fn session_target_coverage() {
        let mut session = session(false);
        play(&mut session, "lower");
        assert_eq!(
            session.target_coverage(),
            [
                TargetLetterStatus::NotGuessed,
                TargetLetterStatus::KnownPosition,
                TargetLetterStatus::KnownPosition,
                TargetLetterStatus::KnownPosition,
                TargetLetterStatus::KnownPosition,
            ]
        );
    }
}
