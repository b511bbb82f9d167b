//! Error types for the profiling crate.

use thiserror::Error;

/// Result type for report output.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while writing a memory report.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
