//! # Contact Store Errors

use thiserror::Error;

use crate::schema::ContactId;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Contact store errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No row matches the requested id
    #[error("no contact found with id '{0}'")]
    NotFound(ContactId),

    /// The store call itself failed (connectivity, constraint, row count)
    #[error("{0}")]
    Persistence(String),
}

impl StoreError {
    /// Build a persistence error with context prepended to the cause
    pub fn persistence(context: impl AsRef<str>, cause: impl std::fmt::Display) -> Self {
        StoreError::Persistence(format!("{}: {}", context.as_ref(), cause))
    }
}
