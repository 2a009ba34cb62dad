//! Shared error type for storage ports.

use thiserror::Error;

/// Failure surfaced by a storage adapter.
///
/// The core never retries; failures propagate to the caller synchronously.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("I/O failure: {0}")]
    Io(String),

    #[error("Serialization failure: {0}")]
    Serialization(String),
}

impl StoreError {
    /// Wraps an I/O error message.
    pub fn io(err: impl ToString) -> Self {
        StoreError::Io(err.to_string())
    }

    /// Wraps a serialization error message.
    pub fn serialization(err: impl ToString) -> Self {
        StoreError::Serialization(err.to_string())
    }
}
