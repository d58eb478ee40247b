//! CLI-specific error types
//!
//! All CLI errors are fatal: they surface before the server accepts its
//! first request.

use std::io;

use thiserror::Error;

use crate::store::StoreError;

/// CLI error
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file missing, unreadable, or invalid
    #[error("config error: {0}")]
    Config(String),

    /// Store could not be opened or synchronized
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Server could not bind or stopped with an error
    #[error("boot failed: {0}")]
    Boot(String),

    /// Runtime or process-level I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl CliError {
    /// Config error
    pub fn config_error(msg: impl Into<String>) -> Self {
        CliError::Config(msg.into())
    }

    /// Boot failed
    pub fn boot_failed(msg: impl Into<String>) -> Self {
        CliError::Boot(msg.into())
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
