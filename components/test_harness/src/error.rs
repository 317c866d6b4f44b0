//! Error types for the harness
//!
//! Test failures are never errors: they are recorded in the report. These
//! variants cover the harness itself failing to emit that report.

use thiserror::Error;

/// Harness-level errors
#[derive(Debug, Error)]
pub enum HarnessError {
    /// Writing report output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Report could not be serialized or deserialized
    #[error("report serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for harness operations
pub type HarnessResult<T> = Result<T, HarnessError>;
