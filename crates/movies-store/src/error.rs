//! Store error types for movies-store.
//!
//! [`StoreError`] covers the failure modes of the storage layer: a missing
//! record, and I/O or decoding failures while reading a seed file.

use thiserror::Error;

/// Errors produced by store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No movie with the given id exists.
    #[error("movie not found: {0}")]
    MovieNotFound(String),

    /// Reading a seed file failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization or deserialization failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
