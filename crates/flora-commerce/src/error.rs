//! Catalog error types.
//!
//! Cart mutations are deliberately total: unknown ids are ignored, quantities
//! clamp, nothing panics. Errors exist only where the outside world leaks in,
//! which for this crate means reading the catalog file.

use thiserror::Error;

/// Errors that can occur while loading the catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Catalog file could not be read.
    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog JSON was malformed.
    #[error("Malformed catalog: {0}")]
    Parse(#[from] serde_json::Error),
}
