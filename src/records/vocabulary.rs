//! Educator-maintained word → synonym mapping

use crate::core::{Word, WordError};
use rand::Rng;
use rand::prelude::IteratorRandom;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Word → synonym entries, keyed by the uppercase word
///
/// Stored as a plain JSON object. Every key and synonym goes through
/// [`Word::new`] on the way in, so a loaded vocabulary only holds playable
/// words.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<String, String>", into = "BTreeMap<String, String>")]
pub struct Vocabulary {
    entries: BTreeMap<String, String>,
}

/// A stored entry that is not a valid word/synonym pair
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("entry {word:?} : {synonym:?} is not a valid pair: {source}")]
pub struct InvalidEntry {
    pub word: String,
    pub synonym: String,
    #[source]
    pub source: WordError,
}

impl TryFrom<BTreeMap<String, String>> for Vocabulary {
    type Error = InvalidEntry;

    fn try_from(raw: BTreeMap<String, String>) -> Result<Self, Self::Error> {
        let mut vocabulary = Self::new();
        for (word, synonym) in raw {
            match (Word::new(&word), Word::new(&synonym)) {
                (Ok(w), Ok(s)) => {
                    vocabulary.insert(&w, &s);
                }
                (Err(source), _) | (_, Err(source)) => {
                    return Err(InvalidEntry {
                        word,
                        synonym,
                        source,
                    });
                }
            }
        }
        Ok(vocabulary)
    }
}

impl From<Vocabulary> for BTreeMap<String, String> {
    fn from(vocabulary: Vocabulary) -> Self {
        vocabulary.entries
    }
}

/// Why an entry could not be replaced
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReplaceError {
    #[error("{0} is not in the vocabulary")]
    UnknownWord(String),
}

impl Vocabulary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or overwrite an entry; the last write wins
    ///
    /// Returns the synonym previously stored for `word`, if any.
    pub fn insert(&mut self, word: &Word, synonym: &Word) -> Option<String> {
        self.entries
            .insert(word.text().to_string(), synonym.text().to_string())
    }

    /// Merge staged entries in; staged entries win on collision
    ///
    /// Returns how many entries were added or changed.
    pub fn merge(&mut self, staged: Vocabulary) -> usize {
        let mut changed = 0;
        for (word, synonym) in staged.entries {
            if self.entries.get(&word) != Some(&synonym) {
                changed += 1;
            }
            self.entries.insert(word, synonym);
        }
        changed
    }

    /// Replace `old` with a new word and synonym in one step
    ///
    /// # Errors
    /// Returns [`ReplaceError::UnknownWord`] if `old` is not in the vocabulary.
    pub fn replace(&mut self, old: &str, word: &Word, synonym: &Word) -> Result<(), ReplaceError> {
        let old = old.trim().to_ascii_uppercase();
        if self.entries.remove(&old).is_none() {
            return Err(ReplaceError::UnknownWord(old));
        }
        self.insert(word, synonym);
        Ok(())
    }

    #[must_use]
    pub fn synonym_of(&self, word: &str) -> Option<&str> {
        self.entries.get(word).map(String::as_str)
    }

    /// Entries in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(w, s)| (w.as_str(), s.as_str()))
    }

    /// Pick one entry uniformly at random
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<(&str, &str)> {
        self.iter().choose(rng)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
