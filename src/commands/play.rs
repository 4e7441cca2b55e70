//! Interactive play mode
//!
//! Line-based game loop: each line is either a whole guess or a command.

use crate::output::{print_board, print_game_over, print_keyboard};
use crate::session::{GameSession, SubmitResult};
use crate::wordlists::WordList;
use anyhow::{Context, Result};
use colored::Colorize;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, Write};
use tracing::{debug, info};

/// Which embedded words are accepted as guesses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum WordListMode {
    /// Every embedded word, targets included
    #[default]
    All,
    /// Only words that can also be the target
    Targets,
}

impl WordListMode {
    #[must_use]
    pub fn word_list(self) -> WordList {
        match self {
            Self::All => WordList::embedded(),
            Self::Targets => WordList::embedded_targets(),
        }
    }
}

/// Configuration for a play session
#[derive(Debug, Clone, Default)]
pub struct PlayConfig {
    pub hard_mode: bool,
    /// Seed for the target draw; OS entropy when absent
    pub seed: Option<u64>,
    pub word_list: WordListMode,
}

impl PlayConfig {
    /// Build the first session for this configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the selected word list has no targets.
    pub fn start_session(&self) -> Result<GameSession> {
        let rng = self
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        let session = GameSession::with_rng(self.word_list.word_list(), self.hard_mode, rng)?;
        Ok(session)
    }
}

/// One line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayCommand {
    Quit,
    NewGame,
    ToggleHardMode,
    Help,
    Guess(String),
}

impl PlayCommand {
    /// Commands start with ':' so they never collide with a guess
    #[must_use]
    pub fn parse(input: &str) -> Self {
        match input.trim().to_lowercase().as_str() {
            ":q" | ":quit" | ":exit" => Self::Quit,
            ":n" | ":new" => Self::NewGame,
            ":h" | ":hard" => Self::ToggleHardMode,
            ":?" | ":help" => Self::Help,
            guess => Self::Guess(guess.to_string()),
        }
    }
}

/// Replace the active row with `text` and submit it
///
/// Extra letters past the target length are dropped by the session, so an
/// over-long guess is judged on its first letters.
pub fn enter_guess<R>(session: &mut GameSession<R>, text: &str) -> SubmitResult {
    while !session.current_input().is_empty() {
        session.remove_letter();
    }
    for letter in text.chars() {
        session.add_letter(letter);
    }
    session.submit()
}

/// Run the interactive play mode
///
/// # Errors
///
/// Returns an error if the session cannot be created or reading/writing the
/// terminal fails.
pub fn run_play(config: &PlayConfig) -> Result<()> {
    let mut session = config.start_session()?;
    info!(hard_mode = config.hard_mode, seed = ?config.seed, "starting play mode");

    println!("\n╔══════════════════════════════════════╗");
    println!("║              W O R D L E             ║");
    println!("╚══════════════════════════════════════╝");
    print_help(&session);

    loop {
        print_board(&session);

        if session.state().is_terminal() {
            print_game_over(&session);
            match get_user_input("Play again? (yes/no)")? {
                Some(answer) if matches!(answer.to_lowercase().as_str(), "yes" | "y") => {
                    session = session.reset();
                    println!("\n🔄 New game started!");
                    continue;
                }
                _ => break,
            }
        }

        print_keyboard(&session.guessed_letters());

        let Some(input) = get_user_input("Guess")? else {
            break;
        };

        match PlayCommand::parse(&input) {
            PlayCommand::Quit => break,
            PlayCommand::NewGame => {
                session = session.reset();
                println!("\n🔄 New game started!");
            }
            PlayCommand::ToggleHardMode => {
                if session.is_game_start() {
                    session = session.toggle_hard_mode();
                    println!("Hard mode {}", on_off(session.is_hard_mode()));
                } else {
                    println!(
                        "{}",
                        "Hard mode can only be changed before the first guess".yellow()
                    );
                }
            }
            PlayCommand::Help => print_help(&session),
            PlayCommand::Guess(text) => {
                let result = enter_guess(&mut session, &text);
                debug!(guess = %text, ?result, "player guess");
                if !result.is_success() {
                    println!("{}", format!("❌ {result}").red());
                }
            }
        }
    }

    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

fn print_help<R>(session: &GameSession<R>) {
    println!(
        "\nGuess the {}-letter word in {} tries. Hard mode: {}",
        session.target_length(),
        session.max_guesses(),
        on_off(session.is_hard_mode())
    );
    println!("  🟩 right letter, right spot   🟨 in the word   ⬜ not in the word");
    println!("Commands: ':hard' toggle hard mode, ':new' new game, ':quit' exit\n");
}

const fn on_off(enabled: bool) -> &'static str {
    if enabled { "on" } else { "off" }
}

/// Get user input with a prompt, `None` once stdin is closed
fn get_user_input(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .context("failed to read from stdin")?;

    Ok((read > 0).then(|| input.trim().to_string()))
}
