//! Command line entry point for confcheck
//!
//! Validates a configuration file, prints a summary followed by the
//! recorded findings, and exits 0 when the file is valid.
//!
//! **Basic example:**
//! ```sh
//! confcheck app.toml --schema schema.json --strict
//! ```

use anyhow::Result;
use clap::Parser as _;
use confcheck::cli::Args;
use confcheck::error::SuiteError;
use tracing::error;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> Result<()> {
    let args = Args::parse();

    // The report goes to stdout; keep logging quiet unless asked.
    let log_level = if args.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_target(false).with_env_filter(filter).init();

    match confcheck::run(&args) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            error!("{}", err);
            std::process::exit(
                err.downcast_ref::<SuiteError>()
                    .map_or(1, SuiteError::exit_code),
            );
        }
    }
}
