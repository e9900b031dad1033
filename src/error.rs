//! Error types for boltview
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using ViewerError
pub type Result<T> = std::result::Result<T, ViewerError>;

/// Unified error type for boltview operations
#[derive(Debug, Error)]
pub enum ViewerError {
    // -------------------------------------------------------------------------
    // Open Errors
    // -------------------------------------------------------------------------
    #[error("no store file at {0:?}")]
    StoreMissing(String),

    #[error("failed to open store {path:?}: {source}")]
    Open {
        path: String,
        #[source]
        source: bbolt_rs::Error,
    },

    // -------------------------------------------------------------------------
    // Lookup Errors
    // -------------------------------------------------------------------------
    #[error("bucket {0:?} not found")]
    PartitionNotFound(String),

    // -------------------------------------------------------------------------
    // Engine Errors
    // -------------------------------------------------------------------------
    #[error("Storage engine error: {0}")]
    Engine(#[from] bbolt_rs::Error),

    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
