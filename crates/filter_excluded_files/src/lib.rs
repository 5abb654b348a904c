// crates/filter_excluded_files/src/lib.rs

use std::path::Path;

/// Returns true if the basename of `path` exactly matches one of `exclusions`.
///
/// Matching is case sensitive and never partial: `target` excludes `./target`
/// but not `./targets`. Blank exclusion patterns are ignored, and a path
/// without a basename (such as `/` or `..`) is never excluded.
pub fn is_excluded(path: &Path, exclusions: &[String]) -> bool {
    let basename = match path.file_name() {
        Some(name) => name.to_string_lossy(),
        None => return false,
    };
    exclusions
        .iter()
        .map(|pattern| pattern.trim())
        .filter(|pattern| !pattern.is_empty())
        .any(|pattern| basename == pattern)
}
