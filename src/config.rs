//! Runtime settings resolved from the command line

use std::path::PathBuf;
use std::time::Duration;

/// Directory name under the platform data directory
pub const APP_DIR: &str = "vocahangman";

/// Default pause between game steps, in milliseconds
pub const DEFAULT_PACE_MS: u64 = 400;

/// Settings shared by every session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub data_dir: PathBuf,
    pub pace: Duration,
    pub seed: Option<u64>,
}

impl Settings {
    /// Resolve settings, falling back to [`default_data_dir`]
    #[must_use]
    pub fn new(data_dir: Option<PathBuf>, pace_ms: u64, seed: Option<u64>) -> Self {
        Self {
            data_dir: data_dir.unwrap_or_else(default_data_dir),
            pace: Duration::from_millis(pace_ms),
            seed,
        }
    }
}

/// `<platform data dir>/vocahangman`, or the current directory when the
/// platform has none
#[must_use]
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir().map_or_else(|| PathBuf::from("."), |dir| dir.join(APP_DIR))
}
