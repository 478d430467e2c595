//! Non-interactive listings of the stores

use crate::interactive::TextIo;
use crate::output::{ledger_table, score_history, vocabulary_listing};
use crate::records::{ScoreLedger, Vocabulary};
use crate::store::{SCORES_STORE, Store, WORDS_STORE};
use anyhow::{Context, Result};

/// Print every vocabulary entry
///
/// # Errors
///
/// Returns an error if the vocabulary cannot be loaded or printed.
pub fn list_words<S: Store, T: TextIo>(store: &mut S, io: &mut T) -> Result<()> {
    let vocabulary: Vocabulary = store
        .load(WORDS_STORE)
        .context("failed to load the vocabulary")?;

    if vocabulary.is_empty() {
        io.print("The vocabulary is empty.")?;
    } else {
        io.print(&vocabulary_listing(&vocabulary))?;
        io.print(&format!("{} words", vocabulary.len()))?;
    }
    Ok(())
}

/// Print one student's history, or a summary of every student
///
/// # Errors
///
/// Returns an error if the ledger cannot be loaded or printed.
pub fn list_scores<S: Store, T: TextIo>(
    store: &mut S,
    io: &mut T,
    student: Option<&str>,
) -> Result<()> {
    let ledger: ScoreLedger = store
        .load(SCORES_STORE)
        .context("failed to load the score ledger")?;

    match student.map(|name| name.trim().to_uppercase()) {
        Some(name) => match ledger.history(&name) {
            Some(scores) if !scores.is_empty() => io.print(&score_history(scores))?,
            Some(_) => io.print(&format!("{name} has not played any games yet."))?,
            None => io.print(&format!("No student named {name}."))?,
        },
        None if ledger.is_empty() => io.print("No scores recorded yet.")?,
        None => io.print(&ledger_table(&ledger))?,
    }
    Ok(())
}
