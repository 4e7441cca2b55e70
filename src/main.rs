//! Wordle Session - CLI
//!
//! Play the puzzle in the terminal, or score a single guess.

use anyhow::Result;
use clap::{Parser, Subcommand};
use wordle_session::{
    commands::{PlayConfig, WordListMode, evaluate_guess, run_play},
    logging::init_tracing,
    output::print_evaluation_result,
};

#[derive(Parser)]
#[command(
    name = "wordle_session",
    about = "Guess the hidden word in six tries, with an optional hard mode",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Start in hard mode: revealed hints must be used in later guesses
    #[arg(long, global = true)]
    hard: bool,

    /// Seed the target draw for a reproducible game
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Wordlist: 'all' (default) accepts every embedded word, 'targets' only possible targets
    #[arg(short = 'w', long, global = true, value_enum, default_value_t = WordListMode::All)]
    wordlist: WordListMode,

    /// Log session events to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively (default)
    Play,

    /// Score one guess against a chosen target
    Evaluate {
        /// The target word
        target: String,

        /// The guess to score
        guess: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let config = PlayConfig {
                hard_mode: cli.hard,
                seed: cli.seed,
                word_list: cli.wordlist,
            };
            run_play(&config)
        }
        Commands::Evaluate { target, guess } => run_evaluate_command(&target, &guess),
    }
}

fn run_evaluate_command(target: &str, guess: &str) -> Result<()> {
    let result = evaluate_guess(target, guess)?;
    print_evaluation_result(&result);
    Ok(())
}
