//! Store error types.

use thiserror::Error;

/// Errors that can occur when using the snapshot store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to open the store root.
    #[error("Failed to open store: {0}")]
    Open(String),

    /// Failed to serialize or deserialize a value.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Failed to read or write an entry.
    #[error("Store operation failed: {0}")]
    Io(#[from] std::io::Error),
}
