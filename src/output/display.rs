//! Text blocks shown by the sessions

use super::formatters::{create_progress_bar, gallows, spaced};
use crate::core::{Game, MAX_WRONG_GUESSES};
use crate::records::{ScoreLedger, Vocabulary};
use colored::Colorize;

/// Banner for the top-level menu
#[must_use]
pub fn welcome_banner() -> String {
    format!(
        "\n{}\n{}\n{}",
        "═".repeat(50).cyan(),
        "             Welcome to Vocahangman".bright_yellow().bold(),
        "═".repeat(50).cyan()
    )
}

/// Rules shown before each round
#[must_use]
pub fn rules_banner() -> String {
    format!(
        "\n{}\n\
         Rules:\n\
         1. You will be given a synonym and have to guess the vocabulary word.\n\
         2. Standard hangman rules apply: every wrong letter adds a body part.\n\
         3. You have only {MAX_WRONG_GUESSES} tries to guess the word.\n\
         4. Guessing vowels has no penalty.\n\
         5. While guessing, enter a single letter ONLY.\n\
         6. 100 points are awarded for each word guessed correctly.\n\
         7. Partial score is awarded for partially guessing the word.\n",
        "Welcome to Vocabulary with Hangman".bright_cyan().bold()
    )
}

/// Revealed pattern above the current drawing
#[must_use]
pub fn round_status(game: &Game) -> String {
    format!(
        "{}\n{}\n",
        spaced(&game.revealed()).bright_white().bold(),
        gallows(game.wrong_guesses())
    )
}

/// One line per past game, e.g. `Game 1: 33`
#[must_use]
pub fn score_history(scores: &[u32]) -> String {
    scores
        .iter()
        .enumerate()
        .map(|(i, score)| {
            format!(
                "Game {}: {score:>3} {}",
                i + 1,
                create_progress_bar(*score, 100, 20).green()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Every student's history, for the non-interactive listing
#[must_use]
pub fn ledger_table(ledger: &ScoreLedger) -> String {
    ledger
        .iter()
        .map(|(student, scores)| {
            let total: u32 = scores.iter().sum();
            let average = if scores.is_empty() {
                0
            } else {
                total / scores.len() as u32
            };
            format!(
                "{} games: {:>3}  average: {:>3}",
                format!("{student:<16}").bright_white().bold(),
                scores.len(),
                average
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// `WORD : SYNONYM` lines in alphabetical order
#[must_use]
pub fn vocabulary_listing(vocabulary: &Vocabulary) -> String {
    vocabulary
        .iter()
        .map(|(word, synonym)| format!("{word} : {synonym}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[must_use]
pub fn win_message(score: u32) -> String {
    format!(
        "{}\nFinal Score: {score}",
        "Congratulations on guessing the correct word!".green().bold()
    )
}

#[must_use]
pub fn loss_message(word: &str, score: u32) -> String {
    format!(
        "{}\nThe word is: {word}\nFinal Score: {score}",
        "You have not guessed the word correctly, better luck next time!"
            .red()
            .bold()
    )
}
