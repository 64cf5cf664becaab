//! CLI command implementation

use crate::cli::Args;
use crate::error::SuiteError;
use crate::loader;
use crate::report::ValidationResult;
use crate::schema::SchemaNode;
use crate::suite::ConfigValidationSuite;
use crate::system::System;
use anyhow::{Context as _, Result};
use core::str::FromStr;
use std::path::Path;
use tracing::debug;

/// Output format for the validation report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum OutputFormat {
    /// Human readable summary plus prefixed finding lines
    Text,
    /// Serialized `ValidationResult`
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid format: {s}. Use 'text' or 'json'")),
        }
    }
}

/// Load a schema document (JSON) into a typed schema node.
///
/// # Errors
///
/// Returns [`SuiteError::Schema`] if:
/// - The schema file cannot be read
/// - The schema file is not well-formed JSON
pub fn load_schema(system: &dyn System, path: &Path) -> Result<SchemaNode, SuiteError> {
    let text = system.read_to_string(path).map_err(|err| {
        SuiteError::schema(format!(
            "cannot read schema file '{}': {err}",
            path.display()
        ))
    })?;
    let document = loader::decode_json(&text).map_err(|err| {
        SuiteError::schema(format!(
            "cannot parse schema file '{}': {err:#}",
            path.display()
        ))
    })?;
    Ok(SchemaNode::from_value(&document))
}

/// Run the validation described by the parsed arguments, print the
/// report, and return the process exit code.
///
/// # Errors
///
/// Returns an error if:
/// - The schema file cannot be loaded
/// - The report cannot be serialized in the requested format
pub fn execute_validate(system: &dyn System, args: &Args, format: OutputFormat) -> Result<i32> {
    let schema = match args.schema.as_deref() {
        Some(path) => {
            debug!("loading schema from {}", path.display());
            Some(load_schema(system, path)?)
        }
        None => None,
    };

    let suite = ConfigValidationSuite::new(args.strict);
    let result = suite.validate(system, &args.config, schema.as_ref());

    print_report(&result, format)?;
    Ok(i32::from(!result.valid))
}

fn print_report(result: &ValidationResult, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            println!("{}", result.summary());
            for error in &result.errors {
                println!("ERROR: {error}");
            }
            for warning in &result.warnings {
                println!("WARNING: {warning}");
            }
        }
        OutputFormat::Json => {
            let rendered = serde_json::to_string_pretty(result)
                .context("failed to serialize validation report")?;
            println!("{rendered}");
        }
    }
    Ok(())
}
