//! System abstraction for filesystem operations
//!
//! This module provides a trait for the filesystem interactions the
//! suite performs, allowing for easy testing with mock implementations.

use std::io;
use std::path::Path;

pub mod mock;
pub mod real;

pub use mock::MockSystem;
pub use real::RealSystem;

/// Filesystem access used by the suite
///
/// # Implementations
/// - `RealSystem`: Production implementation using `std::fs`
/// - `MockSystem`: Test implementation using in-memory storage
pub trait System: Send + Sync {
    /// Check if a path exists
    fn exists(&self, path: &Path) -> bool;

    /// Read entire file contents as a string
    fn read_to_string(&self, path: &Path) -> io::Result<String>;
}
