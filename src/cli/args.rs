use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for confcheck
#[derive(Parser, Debug, Clone)]
#[command(name = "confcheck")]
#[command(about = "Validate configuration files across JSON, TOML, and INI formats")]
#[command(long_about = None)]
#[command(version)]
pub struct Args {
    /// Path to the configuration file to validate
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Optional path to a JSON schema subset describing the expected structure
    #[arg(long, value_name = "PATH")]
    pub schema: Option<PathBuf>,

    /// Treat missing files as errors rather than warnings
    #[arg(long)]
    pub strict: bool,

    /// Output format for the validation report: text or json
    #[arg(long = "output-format", value_name = "FORMAT", default_value = "text")]
    pub output_format: String,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}
