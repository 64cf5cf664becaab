//! Mock system implementation for testing

use super::System;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

/// In-memory implementation of System trait for testing
///
/// Serves file contents from a map so unit tests never touch the disk.
///
/// # Example
/// ```
/// use confcheck::system::{MockSystem, System};
/// use std::path::Path;
///
/// let system = MockSystem::new().with_file("/app/config.json", "{}");
/// assert!(system.exists(Path::new("/app/config.json")));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockSystem {
    files: HashMap<PathBuf, String>,
}

impl MockSystem {
    /// Create a new `MockSystem` with no files
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file with the given contents (builder pattern)
    #[must_use]
    pub fn with_file<P: Into<PathBuf>, C: Into<String>>(mut self, path: P, contents: C) -> Self {
        self.files.insert(path.into(), contents.into());
        self
    }
}

impl System for MockSystem {
    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.files.get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such file: {}", path.display()),
            )
        })
    }
}
