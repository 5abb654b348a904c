// crates/check_todos/src/config.rs

use std::path::PathBuf;

/// Runtime configuration for one scan, composed from the command line.
#[derive(Clone, Debug, Default)]
pub struct ScanConfig {
    /// Scan roots, walked in order. Empty means the current directory.
    pub roots: Vec<PathBuf>,
    /// Basenames of files or directories to leave out of the walk.
    pub exclusions: Vec<String>,
    /// Enable debug logging on stderr.
    pub verbose: bool,
}

impl ScanConfig {
    /// The roots to walk: the configured ones, or `.` when none were given.
    pub fn resolve_roots(&self) -> Vec<PathBuf> {
        if self.roots.is_empty() {
            vec![PathBuf::from(".")]
        } else {
            self.roots.clone()
        }
    }
}
