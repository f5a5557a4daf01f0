//! Storage error types.

use thiserror::Error;

/// Errors from the persistence layer.
///
/// These never abort a shopping session: callers log and keep the
/// in-memory state authoritative, retrying persistence later.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to read a key from backing storage.
    #[error("Failed to read key '{key}': {source}")]
    Read {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a key to backing storage.
    #[error("Failed to write key '{key}': {source}")]
    Write {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// Serialization or deserialization failed.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
