//! Store configuration
//!
//! Connection settings for the SQLite-backed store.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Path that opens a private in-memory database
pub const IN_MEMORY_PATH: &str = ":memory:";

/// SQLite journal mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JournalMode {
    /// Write-ahead log
    #[default]
    Wal,
    /// Rollback journal, deleted after each transaction
    Delete,
}

impl JournalMode {
    /// Returns the pragma value
    pub fn pragma_value(&self) -> &'static str {
        match self {
            JournalMode::Wal => "wal",
            JournalMode::Delete => "delete",
        }
    }
}

/// Contact store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Database file path, or `:memory:`
    pub path: PathBuf,

    /// Busy timeout in milliseconds (default: 5000)
    #[serde(default = "default_busy_timeout_ms")]
    pub busy_timeout_ms: u64,

    /// Journal mode (default: wal)
    #[serde(default)]
    pub journal_mode: JournalMode,
}

fn default_busy_timeout_ms() -> u64 {
    5000
}

impl StoreConfig {
    /// Config for a database file at `path` with default tuning
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            busy_timeout_ms: default_busy_timeout_ms(),
            journal_mode: JournalMode::default(),
        }
    }

    /// Config for a private in-memory database
    pub fn in_memory() -> Self {
        Self::with_path(IN_MEMORY_PATH)
    }

    /// Returns whether this config targets an in-memory database
    pub fn is_in_memory(&self) -> bool {
        self.path.as_os_str() == IN_MEMORY_PATH
    }

    /// Check the settings before any connection is attempted
    pub fn validate(&self) -> Result<(), String> {
        if self.path.as_os_str().is_empty() {
            return Err("database.path must not be empty".to_string());
        }
        if self.busy_timeout_ms == 0 {
            return Err("database.busy_timeout_ms must be > 0".to_string());
        }
        Ok(())
    }
}
