//! In-process store, used for tests and dry runs

use super::{StorageError, Store};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;

/// Keeps each mapping as a JSON string in memory
///
/// Values go through the same encoding as [`super::FileStore`], so a value
/// that would not survive a file round trip will not survive this one either.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store with raw JSON, e.g. to simulate a corrupt file
    pub fn insert_raw(&mut self, name: &str, json: impl Into<String>) {
        self.entries.insert(name.to_string(), json.into());
    }

    /// Whether a store with this name has been created
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }
}

impl Store for MemoryStore {
    fn load<T>(&mut self, name: &str) -> Result<T, StorageError>
    where
        T: Serialize + DeserializeOwned + Default,
    {
        if !self.entries.contains_key(name) {
            let empty = T::default();
            self.save(name, &empty)?;
            return Ok(empty);
        }

        serde_json::from_str(&self.entries[name]).map_err(|source| StorageError::Corrupt {
            name: name.to_string(),
            location: "memory".to_string(),
            source,
        })
    }

    fn save<T: Serialize>(&mut self, name: &str, value: &T) -> Result<(), StorageError> {
        let json = serde_json::to_string(value).map_err(|e| StorageError::Io {
            action: "encode",
            name: name.to_string(),
            location: "memory".to_string(),
            source: std::io::Error::other(e),
        })?;
        self.entries.insert(name.to_string(), json);
        Ok(())
    }
}
