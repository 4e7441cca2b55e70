//! Display functions for the game and command results

use super::formatters::{KEYBOARD_ROWS, key, statuses_to_emoji, tile};
use crate::commands::EvaluationResult;
use crate::core::LetterStatus;
use crate::session::{GameSession, GameState};
use colored::Colorize;
use rustc_hash::FxHashMap;

/// Print the board: submitted rows, the active row and empty rows
pub fn print_board<R>(session: &GameSession<R>) {
    println!();
    for row in session.rendered_guesses() {
        let tiles: Vec<String> = row.into_iter().map(|guess| tile(guess).to_string()).collect();
        println!("  {}", tiles.join(" "));
    }
    println!();
}

/// Print the keyboard colored by the best status of each letter
pub fn print_keyboard(guessed: &FxHashMap<char, LetterStatus>) {
    for (indent, row) in KEYBOARD_ROWS.iter().enumerate() {
        let keys: Vec<String> = row
            .chars()
            .map(|letter| key(letter, guessed.get(&letter).copied()).to_string())
            .collect();
        println!("  {}{}", " ".repeat(indent), keys.join(" "));
    }
    println!();
}

/// Print the end-of-game banner, revealing the target
pub fn print_game_over<R>(session: &GameSession<R>) {
    println!("{}", "═".repeat(40).bright_cyan());
    match session.state() {
        GameState::Won => {
            let turns = session.submitted_guesses().len();
            println!(
                "  {} Solved in {} {}",
                "🎉 You won!".bright_green().bold(),
                turns.to_string().bright_cyan().bold(),
                if turns == 1 { "guess" } else { "guesses" }
            );
        }
        GameState::Lost => {
            println!("  {}", "😨 You lost!".bright_red().bold());
        }
        GameState::Playing => {}
    }
    println!(
        "  The word was {}",
        session.target().to_string().bright_yellow().bold()
    );

    println!("\n  Guess history:");
    for (i, guess) in session.submitted_guesses().iter().enumerate() {
        let statuses = crate::core::evaluate(guess, session.target());
        println!(
            "    {}. {} {}",
            (i + 1).to_string().bright_black(),
            guess.to_string().bright_white().bold(),
            statuses_to_emoji(&statuses)
        );
    }
    println!("{}", "═".repeat(40).bright_cyan());
}

/// Print the result of scoring one guess
pub fn print_evaluation_result(result: &EvaluationResult) {
    let tiles: Vec<String> = result
        .tiles()
        .into_iter()
        .map(|guess| tile(guess).to_string())
        .collect();

    println!("\n  {}", tiles.join(" "));
    println!("  {}", statuses_to_emoji(&result.statuses));
    if result.is_solved() {
        println!("\n  {}", "✅ Exact match".green().bold());
    }
}
