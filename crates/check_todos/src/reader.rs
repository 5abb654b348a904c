// crates/check_todos/src/reader.rs

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// What reading a candidate file produced.
#[derive(Debug, PartialEq, Eq)]
pub enum ReadOutcome {
    /// The file decoded as UTF-8 text.
    Text(String),
    /// The file is not text; it takes no part in the scan.
    Skip,
}

/// Reads `path` fully and decodes it as UTF-8.
///
/// Undecodable content is a [`ReadOutcome::Skip`], not an error. Failing to
/// open or read the file is an error.
pub fn read_candidate(path: &Path) -> Result<ReadOutcome> {
    let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    match String::from_utf8(bytes) {
        Ok(text) => Ok(ReadOutcome::Text(text)),
        Err(err) => {
            log::debug!(
                "Skipping {}: not valid UTF-8 ({})",
                path.display(),
                err.utf8_error()
            );
            Ok(ReadOutcome::Skip)
        }
    }
}
