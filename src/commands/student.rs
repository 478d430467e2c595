//! Student session
//!
//! Identifies the student, offers their score history, and plays rounds
//! against random vocabulary entries until they stop. The updated history is
//! saved once, when the session ends.

use crate::core::{Game, Word, is_alphabetic};
use crate::interactive::TextIo;
use crate::output::{loss_message, round_status, rules_banner, score_history, win_message};
use crate::records::{ScoreLedger, Vocabulary};
use crate::store::{SCORES_STORE, Store, WORDS_STORE};
use anyhow::{Context, Result};
use rand::Rng;
use tracing::{debug, info};

/// Reserved answer that leaves the current prompt
pub const QUIT: &str = "QUIT";

const INVALID_INPUT: &str = "Invalid input !! Try Again !!";

/// How a round finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    Won(u32),
    Lost(u32),
    Quit,
}

impl RoundOutcome {
    /// Score recorded in the ledger; quitting scores 0
    #[must_use]
    pub const fn score(self) -> u32 {
        match self {
            Self::Won(score) | Self::Lost(score) => score,
            Self::Quit => 0,
        }
    }
}

/// Run the student session against `store`
///
/// # Errors
///
/// Returns an error if a store cannot be loaded or saved, if a stored word
/// is not a valid word, or if reading input fails.
pub fn run_student<S, T, R>(store: &mut S, io: &mut T, rng: &mut R) -> Result<()>
where
    S: Store,
    T: TextIo,
    R: Rng + ?Sized,
{
    let name = io.prompt("Enter username or enter 'quit' to exit: ")?;
    if name == QUIT {
        io.print("Quitting !!")?;
        return Ok(());
    }
    if name.is_empty() {
        io.print("Invalid Input !!")?;
        return Ok(());
    }
    io.print(&format!("Welcome {name}"))?;
    io.print("")?;

    let vocabulary: Vocabulary = store
        .load(WORDS_STORE)
        .context("failed to load the vocabulary")?;
    let mut ledger: ScoreLedger = store
        .load(SCORES_STORE)
        .context("failed to load the score ledger")?;

    let mut scores = match ledger.history(&name) {
        Some(history) => {
            io.print("Username entered exists !!")?;
            let answer = io.prompt(&format!(
                "Enter P if you are new to the game, or press any key to continue as {name}: "
            ))?;
            if answer == "P" {
                io.print("Returning to previous menu !!")?;
                return Ok(());
            }
            io.print("")?;
            history.to_vec()
        }
        None => Vec::new(),
    };
    info!(student = %name, games = scores.len(), "student session started");

    loop {
        let answer =
            io.prompt("Enter S to check scores for all games, press any key to continue: ")?;
        if answer == "S" {
            if scores.is_empty() {
                io.print("You have not played any games until now !!")?;
            } else {
                io.print(&score_history(&scores))?;
            }
            io.print("")?;
        }
        io.print("")?;

        let play = io.prompt("Do you wish to play Vocahangman (Y/N): ")?;
        match play.as_str() {
            "Y" => {
                let Some((word, synonym)) = vocabulary.choose(rng) else {
                    io.print("There aren't any words to guess. Get an Educator to add some!")?;
                    io.print("Exiting Program !!")?;
                    break;
                };
                let target = Word::new(word)
                    .with_context(|| format!("vocabulary contains an invalid word: {word:?}"))?;

                let outcome = play_round(io, target, synonym)?;
                info!(student = %name, word, ?outcome, "round finished");
                scores.push(outcome.score());
            }
            "N" => {
                io.print("Exiting Game !!")?;
                io.print("")?;
                break;
            }
            _ => {
                io.print("Enter a valid input !!")?;
                io.print("")?;
            }
        }
    }

    ledger.set_history(&name, scores);
    store
        .save(SCORES_STORE, &ledger)
        .context("failed to save the score ledger")?;
    Ok(())
}

/// Play one round for `target`, hinting with `synonym`
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn play_round<T: TextIo>(io: &mut T, target: Word, synonym: &str) -> Result<RoundOutcome> {
    io.pause();
    io.print(&rules_banner())?;
    io.pause();

    let mut game = Game::new(target);
    debug!(length = game.target().len(), "round started");
    io.print(&round_status(&game))?;

    loop {
        io.pause();
        io.print(&format!("Synonym: {synonym}"))?;
        io.print("Enter your guess to play or enter 'quit' to exit")?;
        let guess = io.prompt("Enter Letter: ")?;
        io.print("")?;

        if guess == QUIT {
            io.print("Quitting !!")?;
            io.print("")?;
            return Ok(RoundOutcome::Quit);
        }

        let mut letters = guess.chars();
        let (Some(letter), None) = (letters.next(), letters.next()) else {
            io.print(INVALID_INPUT)?;
            io.print("")?;
            continue;
        };
        if !is_alphabetic(&guess) {
            io.print(INVALID_INPUT)?;
            io.print("")?;
            continue;
        }

        if game.guess_letter(letter) {
            io.print("Your guess is in the word !!")?;
        } else {
            io.print(&format!("{letter} is not in the word!"))?;
            io.print("Try Again !!")?;
        }
        io.print("")?;

        io.pause();
        io.print(&round_status(&game))?;

        let score = game.score();
        if game.is_solved() {
            io.print(&win_message(score))?;
            io.print("Enter 'Y' to play again, Enter 'N' to quit !!")?;
            io.print("")?;
            return Ok(RoundOutcome::Won(score));
        }

        if game.has_ended() {
            io.print(&loss_message(game.target().text(), score))?;
            io.print("Enter 'Y' to play again, Enter 'N' to quit !!")?;
            io.print("")?;
            return Ok(RoundOutcome::Lost(score));
        }

        io.print(&format!("Current Score: {score}"))?;
        io.print("")?;
    }
}
