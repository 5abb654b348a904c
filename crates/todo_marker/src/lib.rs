// crates/todo_marker/src/lib.rs

//! Marker definitions and the line-level rule that decides whether a TODO
//! is missing its issue reference.

use once_cell::sync::Lazy;
use regex::Regex;

/// The follow-up marker looked for after a comment prefix.
pub const TODO_MARKER: &str = "TODO";

/// The bare macro token, flagged regardless of any comment prefix.
pub const TODO_MACRO: &str = "todo!";

/// Comment openers that make a later `TODO` count. `///` is listed for
/// completeness; `//` already covers it.
pub const COMMENT_PREFIXES: &[&str] = &["//", "/*", "///", "#"];

/// Printed once after the findings when at least one was reported.
pub const ISSUE_REFERENCE_HINT: &str = "Your code has TODOs that don't reference any issues! Create issues for your todos and reference them like this: `(#<issue number>)`. Example: // TODO: Foo (#123)";

// Leftmost prefix, greedy `.*`: the match ends after the *last* TODO that
// follows any comment prefix on the line.
static COMMENT_TODO_RE: Lazy<Regex> = Lazy::new(|| {
    let prefixes: Vec<String> = COMMENT_PREFIXES.iter().map(|p| regex::escape(p)).collect();
    Regex::new(&format!(
        "(?:{}).*{}",
        prefixes.join("|"),
        regex::escape(TODO_MARKER)
    ))
    .unwrap()
});

static ISSUE_REFERENCE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(#\d+\)").unwrap());

/// Which form of marker made a line offending.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TodoKind {
    /// `TODO` after one of [`COMMENT_PREFIXES`].
    Comment,
    /// The `todo!` token.
    Macro,
}

/// An offending marker inside a single line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TodoMatch {
    pub kind: TodoKind,
    /// Byte offset of the marker within the line.
    pub offset: usize,
}

/// Returns true if `text` contains a well-formed issue reference such as `(#123)`.
pub fn has_issue_reference(text: &str) -> bool {
    ISSUE_REFERENCE_RE.is_match(text)
}

/// Finds the marker that makes `line` offending, if any.
///
/// A line offends when some qualifying marker has no `(#<digits>)` anywhere
/// after it. Checking the last occurrence of each kind is enough: an issue
/// reference after the last one is also after every earlier one.
pub fn find_unreferenced_todo(line: &str) -> Option<TodoMatch> {
    if let Some(m) = COMMENT_TODO_RE.find(line) {
        if !has_issue_reference(&line[m.end()..]) {
            return Some(TodoMatch {
                kind: TodoKind::Comment,
                offset: m.end() - TODO_MARKER.len(),
            });
        }
    }

    if let Some(offset) = line.rfind(TODO_MACRO) {
        if !has_issue_reference(&line[offset + TODO_MACRO.len()..]) {
            return Some(TodoMatch {
                kind: TodoKind::Macro,
                offset,
            });
        }
    }

    None
}

/// Returns true if `line` carries a TODO that does not reference an issue.
pub fn is_unreferenced_todo(line: &str) -> bool {
    find_unreferenced_todo(line).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_comment_prefix_is_flagged() {
        for prefix in COMMENT_PREFIXES {
            let line = format!("{} TODO: fix this\n", prefix);
            assert!(is_unreferenced_todo(&line), "expected {:?} to be flagged", line);
        }
    }

    #[test]
    fn test_prefixes_are_matched_literally() {
        assert!(is_unreferenced_todo("x /* TODO"));
        // `*` is not a wildcard and a lone `/` is not a comment opener.
        assert!(!is_unreferenced_todo("x / TODO"));
        assert!(!is_unreferenced_todo("a/b/c TODO"));
    }

    #[test]
    fn test_block_comment_with_text_between() {
        assert!(is_unreferenced_todo("let x = 1; /* cleanup TODO later */"));
    }

    #[test]
    fn test_issue_reference_suppresses_comment_todo() {
        assert!(!is_unreferenced_todo("// TODO: fix this (#42)\n"));
        assert!(!is_unreferenced_todo("# TODO(#7): refactor"));
        assert!(!is_unreferenced_todo("// TODO: see (#1) and more text"));
    }

    #[test]
    fn test_reference_before_marker_does_not_count() {
        assert!(is_unreferenced_todo("// (#42) TODO: still untracked"));
        assert!(is_unreferenced_todo("todo!() // see (#3) then todo!"));
    }

    #[test]
    fn test_malformed_references_do_not_count() {
        assert!(is_unreferenced_todo("// TODO: fix (#)"));
        assert!(is_unreferenced_todo("// TODO: fix #42"));
        assert!(is_unreferenced_todo("// TODO: fix (42)"));
        assert!(is_unreferenced_todo("// TODO: fix (#abc)"));
        assert!(is_unreferenced_todo("// TODO: fix (# 42)"));
    }

    #[test]
    fn test_todo_without_comment_prefix_is_ignored() {
        assert!(!is_unreferenced_todo("let TODO = 3;"));
        assert!(!is_unreferenced_todo("TODO: write docs"));
    }

    #[test]
    fn test_marker_is_case_sensitive() {
        assert!(!is_unreferenced_todo("// todo: lowercase"));
        assert!(!is_unreferenced_todo("// Todo: mixed"));
    }

    #[test]
    fn test_macro_token() {
        assert!(is_unreferenced_todo("    todo!()\n"));
        assert!(is_unreferenced_todo("let v = todo!(\"later\");"));
        assert!(!is_unreferenced_todo("todo!(\"later\") (#7)"));
        assert!(!is_unreferenced_todo("todo()"));
    }

    #[test]
    fn test_any_unreferenced_marker_makes_the_line_offending() {
        // The comment TODO is covered, the earlier macro is too.
        assert!(!is_unreferenced_todo("todo!(); // TODO: wire up (#9)"));
        // The trailing comment TODO has nothing after it.
        assert!(is_unreferenced_todo("// TODO (#9) then another TODO"));
    }

    #[test]
    fn test_find_reports_kind_and_offset() {
        let line = "x = 1  # TODO: refactor";
        let m = find_unreferenced_todo(line).unwrap();
        assert_eq!(m.kind, TodoKind::Comment);
        assert_eq!(&line[m.offset..m.offset + TODO_MARKER.len()], TODO_MARKER);

        let line = "fn f() { todo!() }";
        let m = find_unreferenced_todo(line).unwrap();
        assert_eq!(m.kind, TodoKind::Macro);
        assert_eq!(m.offset, 9);
    }

    #[test]
    fn test_has_issue_reference() {
        assert!(has_issue_reference("(#123)"));
        assert!(has_issue_reference("see (#0) here"));
        assert!(!has_issue_reference("(#)"));
        assert!(!has_issue_reference("#123"));
    }
}
