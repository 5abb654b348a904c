// crates/check_todos/src/lib.rs

//! Flags TODO comments and `todo!` tokens that do not reference an issue.

use anyhow::Result;
use find_candidate_files::find_candidate_files;

pub mod config;
pub mod finding;
pub mod reader;
pub mod report;

pub use config::ScanConfig;
pub use finding::{scan_text, Finding};
pub use reader::{read_candidate, ReadOutcome};
pub use report::{ScanReport, EXIT_CLEAN, EXIT_FINDINGS};

/// Walks every root in `config`, checks each text file line by line and
/// collects the offending lines.
///
/// Non-text files are counted and skipped. Any other I/O failure ends the
/// scan with an error rather than producing a partial report.
pub fn scan(config: &ScanConfig) -> Result<ScanReport> {
    let roots = config.resolve_roots();
    let candidates = find_candidate_files(&roots, &config.exclusions)?;

    let mut report = ScanReport::default();
    for path in candidates {
        match read_candidate(&path)? {
            ReadOutcome::Text(text) => {
                let findings = scan_text(&path, &text);
                if !findings.is_empty() {
                    log::debug!("{}: {} finding(s)", path.display(), findings.len());
                }
                report.files_scanned += 1;
                report.findings.extend(findings);
            }
            ReadOutcome::Skip => report.files_skipped += 1,
        }
    }

    log::info!(
        "Scanned {} file(s), skipped {} non-text file(s), {} finding(s)",
        report.files_scanned,
        report.files_skipped,
        report.findings.len()
    );
    Ok(report)
}
