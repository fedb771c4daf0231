//! Error types for the sl-cli front-end.

use std::path::PathBuf;

/// CLI error type wrapping configuration, solver and output failures.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Failed to read config file: {path}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("Spring error: {0}")]
    Spring(#[from] sl_spring::SpringError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<sl_core::SlError> for CliError {
    fn from(err: sl_core::SlError) -> Self {
        CliError::InvalidInput(err.to_string())
    }
}

/// Result type for sl-cli operations.
pub type CliResult<T> = Result<T, CliError>;
