//! Error types for the core primitives.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors from date arithmetic and ceiling-chain configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Error in date calculations or invalid date.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// A ceiling extrapolation step could not be derived.
    #[error("Invalid ceiling step: {reason}")]
    CeilingStep {
        /// Description of why the step is invalid.
        reason: String,
    },
}

impl CoreError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates a ceiling step error.
    #[must_use]
    pub fn ceiling_step(reason: impl Into<String>) -> Self {
        Self::CeilingStep {
            reason: reason.into(),
        }
    }
}
