//! `confcheck` - A CLI tool for validating configuration files against
//! lightweight schemas
//!
//! This library decodes configuration files (JSON, TOML, INI) into a
//! generic value tree and checks the tree against a small, declarative
//! subset of JSON Schema (`type`, `required`, `properties`, `items`,
//! `enum`, `additionalProperties`), reporting findings on separate
//! error and warning channels.

pub mod cli;
pub mod error;
pub mod loader;
pub mod report;
pub mod schema;
pub mod suite;
pub mod system;
pub mod validator;
pub mod value;

use anyhow::Result;
use cli::{Args, OutputFormat};
use system::RealSystem;

/// Main entry point for the confcheck library
///
/// Runs a validation from parsed command-line arguments and returns the
/// process exit code (0 when valid, 1 otherwise).
///
/// # Errors
///
/// Returns an error if:
/// - The output format is not recognized
/// - The schema file cannot be loaded
pub fn run(args: &Args) -> Result<i32> {
    let format = args
        .output_format
        .parse::<OutputFormat>()
        .map_err(anyhow::Error::msg)?;

    let system = RealSystem::new();
    cli::execute_validate(&system, args, format)
}
