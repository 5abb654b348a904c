// crates/check_todos/src/report.rs

use crate::finding::Finding;
use todo_marker::ISSUE_REFERENCE_HINT;

/// Exit status when no offending TODOs were found.
pub const EXIT_CLEAN: i32 = 0;
/// Exit status when at least one offending TODO was found.
pub const EXIT_FINDINGS: i32 = 1;

/// The outcome of a completed scan.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ScanReport {
    /// In walk order, then line order within each file.
    pub findings: Vec<Finding>,
    pub files_scanned: usize,
    /// Files that were not valid text.
    pub files_skipped: usize,
}

impl ScanReport {
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }

    pub fn exit_code(&self) -> i32 {
        if self.is_clean() {
            EXIT_CLEAN
        } else {
            EXIT_FINDINGS
        }
    }

    /// The exact text written to stdout: every finding, then a blank line
    /// and the hint. Empty when the scan is clean.
    pub fn render(&self) -> String {
        if self.is_clean() {
            return String::new();
        }
        let mut output: String = self.findings.iter().map(|f| f.to_string()).collect();
        output.push('\n');
        output.push_str(ISSUE_REFERENCE_HINT);
        output.push('\n');
        output
    }
}
