//! Educator session
//!
//! New entries are collected into a local staging vocabulary, merged into the
//! stored one in a single step, optionally edited, then saved.

use crate::core::Word;
use crate::interactive::TextIo;
use crate::output::vocabulary_listing;
use crate::records::Vocabulary;
use crate::store::{Store, WORDS_STORE};
use anyhow::{Context, Result};
use tracing::info;

const INVALID_INPUT: &str = "Enter a valid input !!";

/// Run the educator session against `store`
///
/// # Errors
///
/// Returns an error if the vocabulary cannot be loaded or saved, or if
/// reading input fails.
pub fn run_educator<S: Store, T: TextIo>(store: &mut S, io: &mut T) -> Result<()> {
    let mut vocabulary: Vocabulary = store
        .load(WORDS_STORE)
        .context("failed to load the vocabulary")?;

    let staged = collect_entries(io)?;
    let staged_count = staged.len();
    let changed = vocabulary.merge(staged);
    info!(staged = staged_count, changed, total = vocabulary.len(), "merged new words");

    edit_entries(io, &mut vocabulary)?;

    store
        .save(WORDS_STORE, &vocabulary)
        .context("failed to save the vocabulary")?;
    info!(total = vocabulary.len(), "vocabulary saved");
    Ok(())
}

/// Prompt for word/synonym pairs until the educator answers `N`
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn collect_entries<T: TextIo>(io: &mut T) -> Result<Vocabulary> {
    let mut staged = Vocabulary::new();

    loop {
        let answer = io.prompt("Do you wish to enter a word (Y/N): ")?;
        io.print("")?;
        match answer.as_str() {
            "Y" => {
                io.print("Enter a word and its synonym:")?;
                let word = io.prompt("Enter word: ")?;
                let synonym = io.prompt("Enter synonym: ")?;

                let (Ok(word), Ok(synonym)) = (Word::new(&word), Word::new(&synonym)) else {
                    io.print(INVALID_INPUT)?;
                    continue;
                };
                staged.insert(&word, &synonym);
            }
            "N" => {
                io.print("Finished entering words.")?;
                return Ok(staged);
            }
            _ => io.print(INVALID_INPUT)?,
        }
        io.print("")?;
    }
}

/// Offer to replace existing entries until the educator answers `N`
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn edit_entries<T: TextIo>(io: &mut T, vocabulary: &mut Vocabulary) -> Result<()> {
    loop {
        let answer = io.prompt("Do you wish to make changes to words entered (Y/N): ")?;
        match answer.as_str() {
            "Y" => {
                if vocabulary.is_empty() {
                    io.print("There are no words to change yet.")?;
                    io.print("")?;
                    continue;
                }

                io.print("Select the word you wish to make changes on:")?;
                io.print(&vocabulary_listing(vocabulary))?;

                let old = io.prompt("Enter the word you wish to change: ")?;
                if vocabulary.synonym_of(&old).is_none() {
                    io.print(&format!("{old} is not in the vocabulary !!"))?;
                    io.print("")?;
                    continue;
                }

                let word = io.prompt("Enter the new word: ")?;
                let synonym = io.prompt("Enter synonym for the word: ")?;
                let (Ok(word), Ok(synonym)) = (Word::new(&word), Word::new(&synonym)) else {
                    io.print(INVALID_INPUT)?;
                    io.print("")?;
                    continue;
                };

                match vocabulary.replace(&old, &word, &synonym) {
                    Ok(()) => info!(old = %old, new = %word, "entry replaced"),
                    Err(e) => io.print(&format!("{e} !!"))?,
                }
            }
            "N" => {
                io.print("Exiting Educator menu!!")?;
                return Ok(());
            }
            _ => io.print(INVALID_INPUT)?,
        }
        io.print("")?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interactive::Terminal;
    use crate::store::MemoryStore;
    use std::io::Cursor;

    fn run(store: &mut MemoryStore, input: &str) -> String {
        let mut io = Terminal::new(Cursor::new(input), Vec::new());
        run_educator(store, &mut io).unwrap();
        String::from_utf8(io.into_writer()).unwrap()
    }

    fn saved(store: &mut MemoryStore) -> Vocabulary {
        store.load(WORDS_STORE).unwrap()
    }

    #[test]
    fn adds_words_and_saves() {
        let mut store = MemoryStore::new();
        run(&mut store, "y\nhappy\njoyful\ny\nbig\nlarge\nn\nn\n");

        let vocabulary = saved(&mut store);
        assert_eq!(vocabulary.len(), 2);
        assert_eq!(vocabulary.synonym_of("HAPPY"), Some("JOYFUL"));
        assert_eq!(vocabulary.synonym_of("BIG"), Some("LARGE"));
    }

    #[test]
    fn rejects_non_alphabetic_pairs() {
        let mut store = MemoryStore::new();
        let output = run(
            &mut store,
            "y\nice cream\ndessert\ny\ncat\nf3line\ny\ndog\nhound\nn\nn\n",
        );

        assert_eq!(output.matches(INVALID_INPUT).count(), 2);
        let vocabulary = saved(&mut store);
        assert_eq!(vocabulary.len(), 1);
        assert_eq!(vocabulary.synonym_of("DOG"), Some("HOUND"));
    }

    #[test]
    fn unknown_menu_answer_reprompts() {
        let mut store = MemoryStore::new();
        let output = run(&mut store, "maybe\nn\nwhat\nn\n");
        assert_eq!(output.matches(INVALID_INPUT).count(), 2);
        assert!(saved(&mut store).is_empty());
    }

    #[test]
    fn staged_words_merge_into_existing_store() {
        let mut store = MemoryStore::new();
        run(&mut store, "y\nhappy\njoyful\nn\nn\n");
        run(&mut store, "y\nhappy\nglad\ny\nfast\nquick\nn\nn\n");

        let vocabulary = saved(&mut store);
        assert_eq!(vocabulary.len(), 2);
        assert_eq!(vocabulary.synonym_of("HAPPY"), Some("GLAD"));
        assert_eq!(vocabulary.synonym_of("FAST"), Some("QUICK"));
    }

    #[test]
    fn edit_replaces_entry_in_place() {
        let mut store = MemoryStore::new();
        run(&mut store, "y\nbig\nlarge\nn\nn\n");
        let output = run(&mut store, "n\ny\nbig\nhuge\nenormous\nn\n");

        assert!(output.contains("BIG : LARGE"));
        let vocabulary = saved(&mut store);
        assert_eq!(vocabulary.len(), 1);
        assert_eq!(vocabulary.synonym_of("HUGE"), Some("ENORMOUS"));
    }

    #[test]
    fn edit_unknown_word_is_reported() {
        let mut store = MemoryStore::new();
        run(&mut store, "y\nbig\nlarge\nn\nn\n");
        let output = run(&mut store, "n\ny\ntiny\nn\n");

        assert!(output.contains("TINY is not in the vocabulary"));
        assert_eq!(saved(&mut store).synonym_of("BIG"), Some("LARGE"));
    }

    #[test]
    fn edit_with_invalid_replacement_keeps_entry() {
        let mut store = MemoryStore::new();
        run(&mut store, "y\nbig\nlarge\nn\nn\n");
        let output = run(&mut store, "n\ny\nbig\nhu ge\nenormous\nn\n");

        assert!(output.contains(INVALID_INPUT));
        assert_eq!(saved(&mut store).synonym_of("BIG"), Some("LARGE"));
    }

    #[test]
    fn edit_on_empty_vocabulary() {
        let mut store = MemoryStore::new();
        let output = run(&mut store, "n\ny\nn\n");
        assert!(output.contains("There are no words to change yet."));
    }

    #[test]
    fn closed_input_is_an_error_and_nothing_is_saved() {
        let mut store = MemoryStore::new();
        store
            .save(WORDS_STORE, &Vocabulary::new())
            .unwrap();
        let mut io = Terminal::new(Cursor::new("y\nhappy\n"), Vec::new());
        assert!(run_educator(&mut store, &mut io).is_err());
        assert!(saved(&mut store).is_empty());
    }

    #[test]
    fn corrupt_store_aborts_before_prompting() {
        let mut store = MemoryStore::new();
        store.insert_raw(WORDS_STORE, "not json");
        let mut io = Terminal::new(Cursor::new("y\nhappy\njoyful\nn\nn\n"), Vec::new());

        let err = run_educator(&mut store, &mut io).unwrap_err();
        assert!(format!("{err:#}").contains("corrupt"));
        assert!(io.into_writer().is_empty());
    }
}
