//! Error types for spring construction.

use thiserror::Error;

/// Result type for spring operations.
pub type SpringResult<T> = Result<T, SpringError>;

/// Errors raised while building spring parameters or solver options.
///
/// Solving itself never fails; these only cover validated construction paths.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SpringError {
    /// A physical parameter is outside its valid domain.
    #[error("Invalid spring parameter: {what}")]
    InvalidParam { what: &'static str },

    /// Solver options are inconsistent.
    #[error("Invalid solver option: {what}")]
    InvalidOption { what: &'static str },

    #[error(transparent)]
    Core(#[from] sl_core::SlError),
}
