// crates/check_todos/src/finding.rs

use std::fmt;
use std::path::{Path, PathBuf};
use todo_marker::find_unreferenced_todo;

/// One line carrying a TODO without an issue reference.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Finding {
    pub path: PathBuf,
    /// Zero-based.
    pub line_index: usize,
    /// The line as read, including its terminator if it had one.
    pub line: String,
}

/// Renders as `[<path>:<line-index>] <line>`. No terminator is added.
impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}:{}] {}", self.path.display(), self.line_index, self.line)
    }
}

/// Checks every line of `text` and returns the offending ones in line order.
///
/// Lines are split after each `\n` only, so `\r\n` endings, a lone `\r`
/// and a missing final newline are all preserved verbatim in [`Finding::line`].
pub fn scan_text(path: &Path, text: &str) -> Vec<Finding> {
    text.split_inclusive('\n')
        .enumerate()
        .filter_map(|(line_index, line)| {
            let todo = find_unreferenced_todo(line)?;
            log::debug!(
                "{}:{}: {:?} marker at byte {}",
                path.display(),
                line_index,
                todo.kind,
                todo.offset
            );
            Some(Finding {
                path: path.to_path_buf(),
                line_index,
                line: line.to_string(),
            })
        })
        .collect()
}
