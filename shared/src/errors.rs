//! Error types for the BMI service

use thiserror::Error;

/// Errors produced by the BMI service
///
/// The message is user-facing and is surfaced verbatim by callers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BmiError {
    #[error("{0}")]
    InvalidInput(String),
}

impl BmiError {
    /// Shorthand for building an `InvalidInput` error
    pub fn invalid(message: impl Into<String>) -> Self {
        BmiError::InvalidInput(message.into())
    }

    /// The user-facing message
    pub fn message(&self) -> &str {
        match self {
            BmiError::InvalidInput(msg) => msg,
        }
    }
}
