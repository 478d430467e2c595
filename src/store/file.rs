//! JSON files in a data directory, one file per store

use super::{StorageError, Store};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::io;
use std::path::PathBuf;
use tracing::{debug, error, info};

/// Stores each mapping as `<dir>/<name>.json`
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the file backing `name`
    #[must_use]
    pub fn path_of(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.json"))
    }

    fn io_error(&self, action: &'static str, name: &str, source: io::Error) -> StorageError {
        StorageError::Io {
            action,
            name: name.to_string(),
            location: self.path_of(name).display().to_string(),
            source,
        }
    }
}

impl Store for FileStore {
    fn load<T>(&mut self, name: &str) -> Result<T, StorageError>
    where
        T: Serialize + DeserializeOwned + Default,
    {
        let path = self.path_of(name);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!(store = name, path = %path.display(), "store doesn't exist, creating");
                let empty = T::default();
                self.save(name, &empty)?;
                return Ok(empty);
            }
            Err(e) => return Err(self.io_error("read", name, e)),
        };

        serde_json::from_str(&content).map_err(|source| {
            error!(store = name, path = %path.display(), %source, "store is corrupt");
            StorageError::Corrupt {
                name: name.to_string(),
                location: path.display().to_string(),
                source,
            }
        })
    }

    fn save<T: Serialize>(&mut self, name: &str, value: &T) -> Result<(), StorageError> {
        let path = self.path_of(name);
        let json = serde_json::to_string_pretty(value)
            .map_err(|e| self.io_error("encode", name, io::Error::other(e)))?;

        fs::create_dir_all(&self.dir).map_err(|e| self.io_error("create", name, e))?;
        fs::write(&path, json).map_err(|e| self.io_error("write", name, e))?;

        debug!(store = name, path = %path.display(), "store saved");
        Ok(())
    }
}
