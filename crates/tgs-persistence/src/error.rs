//! Storage error types.
//!
//! Storage failures are never fatal and never surfaced to the user; these
//! errors exist so the store can log precisely what went wrong before it
//! degrades.

use std::path::PathBuf;
use thiserror::Error;

/// Snapshot storage error.
#[derive(Debug, Error)]
pub enum StoreError {
    /// File I/O failure.
    #[error("failed to {operation} snapshot file: {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Snapshot could not be serialized.
    #[error("failed to serialize snapshot")]
    Serialize(#[source] serde_json::Error),

    /// No user config directory is available on this platform.
    #[error("no config directory available")]
    NoConfigDir,
}

/// Result type alias for storage operations.
pub type Result<T> = std::result::Result<T, StoreError>;
