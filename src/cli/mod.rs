//! Command-line interface module
//!
//! Handles argument parsing and report printing

pub mod args;
pub mod commands;

pub use args::*;
pub use commands::*;
