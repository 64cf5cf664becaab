//! Custom error types with exit codes

use thiserror::Error;

/// Main error type for confcheck operations
///
/// Findings inside a validation run are reported as data on the
/// [`ValidationResult`](crate::report::ValidationResult); this type
/// covers the hard failures around that run.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SuiteError {
    /// Validation Error - a result containing errors was escalated
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// Schema Error - schema file missing or not parseable
    #[error("Schema error: {message}")]
    Schema { message: String },
}

impl SuiteError {
    /// Get the appropriate exit code for this error type
    #[must_use]
    #[inline]
    pub const fn exit_code(&self) -> i32 {
        match *self {
            Self::Validation { .. } => 1,
            Self::Schema { .. } => 2,
        }
    }

    /// Create a validation error
    #[inline]
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a schema error
    #[inline]
    pub fn schema<S: Into<String>>(message: S) -> Self {
        Self::Schema {
            message: message.into(),
        }
    }
}
