// crates/find_candidate_files/src/lib.rs

use anyhow::{Context, Result};
use filter_excluded_files::is_excluded;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Recursively collects every regular file under each of `roots`.
///
/// Roots are walked in the order given; inside a root, entries are visited
/// sorted by file name so repeated runs list files identically. A root that
/// is itself a file yields just that file. Entries whose basename matches one
/// of `exclusions` are skipped, and excluded directories are not descended
/// into. The roots themselves are never excluded.
///
/// Any traversal error (missing root, permission denied, an entry vanishing
/// mid-walk) aborts the search and is returned to the caller.
pub fn find_candidate_files(roots: &[PathBuf], exclusions: &[String]) -> Result<Vec<PathBuf>> {
    let mut candidates = Vec::new();
    for root in roots {
        let before = candidates.len();
        collect_from_root(root, exclusions, &mut candidates)?;
        log::debug!(
            "{} candidate file(s) under {}",
            candidates.len() - before,
            root.display()
        );
    }
    Ok(candidates)
}

fn collect_from_root(root: &Path, exclusions: &[String], out: &mut Vec<PathBuf>) -> Result<()> {
    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            if entry.depth() > 0 && is_excluded(entry.path(), exclusions) {
                log::debug!("Excluding {}", entry.path().display());
                false
            } else {
                true
            }
        });

    for entry in walker {
        let entry = entry.with_context(|| format!("Failed to walk {}", root.display()))?;
        if resolves_to_file(&entry) {
            out.push(entry.into_path());
        }
    }
    Ok(())
}

fn resolves_to_file(entry: &DirEntry) -> bool {
    entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
}
