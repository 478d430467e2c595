//! Named key-value persistence
//!
//! Sessions read each store once at the start and write it once at the end.
//! A missing store loads as an empty mapping and is created on the spot; a
//! store that exists but does not parse is reported as
//! [`StorageError::Corrupt`] and never overwritten.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Store holding the educator-maintained vocabulary
pub const WORDS_STORE: &str = "words";

/// Store holding every student's score history
pub const SCORES_STORE: &str = "scores";

/// Errors raised by a [`Store`]
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to {action} store '{name}' at {location}")]
    Io {
        action: &'static str,
        name: String,
        location: String,
        #[source]
        source: std::io::Error,
    },

    #[error("store '{name}' at {location} is corrupt; fix or remove it before playing")]
    Corrupt {
        name: String,
        location: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Load and save whole mappings by name
pub trait Store {
    /// Load the mapping stored under `name`
    ///
    /// A missing store yields `T::default()` and is created empty.
    ///
    /// # Errors
    /// Returns [`StorageError::Corrupt`] if the stored data does not parse,
    /// or [`StorageError::Io`] if it cannot be read or created.
    fn load<T>(&mut self, name: &str) -> Result<T, StorageError>
    where
        T: Serialize + DeserializeOwned + Default;

    /// Replace the mapping stored under `name`
    ///
    /// # Errors
    /// Returns [`StorageError::Io`] if the data cannot be written.
    fn save<T: Serialize>(&mut self, name: &str, value: &T) -> Result<(), StorageError>;
}
