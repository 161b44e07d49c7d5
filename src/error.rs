//! Error types for the printer-harness.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for harness operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Git operation failed.
    #[error("git operation failed: {0}")]
    Git(String),

    /// Failed to launch an external program.
    #[error("failed to launch {program}: {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// IO error during harness operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A required path does not exist or is not usable.
    #[error("invalid path: {0}")]
    InvalidPath(PathBuf),

    /// Harness configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias for harness operations.
pub type Result<T> = std::result::Result<T, Error>;
