//! Orchestration facade
//!
//! Ties file existence checks, format dispatch, and the structural
//! validator together into a single entry point.

use crate::loader::{self, SUPPORTED_FORMATS};
use crate::report::ValidationResult;
use crate::schema::SchemaNode;
use crate::system::System;
use crate::validator;
use std::path::Path;
use tracing::debug;

/// Validates configuration files against lightweight schemas.
///
/// Holds only the read-only `strict` flag, so concurrent calls on
/// separate inputs need no synchronization.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigValidationSuite {
    strict: bool,
}

impl ConfigValidationSuite {
    /// Create a suite. Under `strict`, a missing config file is an
    /// error; otherwise it is only a warning.
    #[must_use]
    #[inline]
    pub const fn new(strict: bool) -> Self {
        Self { strict }
    }

    /// Validate the file at `config_path`, optionally against `schema`.
    ///
    /// Every failure mode is reported on the returned result; decode
    /// and I/O problems are normalized into error strings rather than
    /// propagated.
    #[must_use]
    pub fn validate(
        &self,
        system: &dyn System,
        config_path: &Path,
        schema: Option<&SchemaNode>,
    ) -> ValidationResult {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        if !system.exists(config_path) {
            let message = format!("Config file '{}' does not exist.", config_path.display());
            if self.strict {
                errors.push(message);
            } else {
                warnings.push(message);
            }
            return ValidationResult::from_parts(errors, warnings);
        }

        let extension = file_extension(config_path);
        let normalized = extension.to_lowercase();
        if !SUPPORTED_FORMATS.contains(&normalized.as_str()) {
            // Echo the suffix as written; only the comparison is folded.
            errors.push(format!(
                "Unsupported config format '{extension}'. Supported formats: {}.",
                SUPPORTED_FORMATS.join(", ")
            ));
            return ValidationResult::from_parts(errors, warnings);
        }

        let data = match system
            .read_to_string(config_path)
            .map_err(anyhow::Error::from)
            .and_then(|text| loader::decode(&normalized, &text))
        {
            Ok(data) => data,
            Err(err) => {
                errors.push(format!("Failed to load config: {err:#}"));
                return ValidationResult::from_parts(errors, warnings);
            }
        };

        if let Some(schema) = schema {
            debug!("running structural validation for {}", config_path.display());
            errors.extend(validator::validate(&data, schema, "$"));
        }

        ValidationResult::from_parts(errors, warnings)
    }
}

/// Extension as written, with leading dot; empty when the path has none.
fn file_extension(path: &Path) -> String {
    path.extension()
        .map(|extension| format!(".{}", extension.to_string_lossy()))
        .unwrap_or_default()
}
