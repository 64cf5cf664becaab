//! Validation outcome aggregation

use crate::error::SuiteError;
use serde::Serialize;

/// Outcome of one validation run.
///
/// `valid` tracks the error channel only: warnings are advisory and
/// never flip the verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    /// Overall verdict; always equals `errors.is_empty()`.
    pub valid: bool,
    /// Findings that fail the run, in discovery order.
    pub errors: Vec<String>,
    /// Advisory findings, in discovery order.
    pub warnings: Vec<String>,
}

impl ValidationResult {
    /// Build a result from accumulated findings, deriving the verdict.
    #[must_use]
    #[inline]
    pub fn from_parts(errors: Vec<String>, warnings: Vec<String>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
            warnings,
        }
    }

    /// Render a one-line human readable summary.
    #[must_use]
    pub fn summary(&self) -> String {
        let status = if self.valid { "PASS" } else { "FAIL" };
        let mut parts = vec![format!("Validation {status}")];
        if !self.errors.is_empty() {
            parts.push(format!("Errors: {}", self.errors.len()));
        }
        if !self.warnings.is_empty() {
            parts.push(format!("Warnings: {}", self.warnings.len()));
        }
        parts.join(" | ")
    }

    /// Escalate recorded errors into a hard failure.
    ///
    /// # Errors
    ///
    /// Returns [`SuiteError::Validation`] joining all recorded error
    /// messages when the result contains any error.
    #[inline]
    pub fn ensure_valid(&self) -> Result<(), SuiteError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(SuiteError::validation(self.errors.join("; ")))
        }
    }
}
