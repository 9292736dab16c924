use memchr::memchr;

use crate::parser::Comment;

const INDENT: &str = "  ";

/// Text of `s` up to the first newline
pub fn first_line(s: &str) -> &str {
    match memchr(b'\n', s.as_bytes()) {
        Some(end) => &s[..end],
        None => s,
    }
}

/// Indent every line of `s` by two spaces
pub fn indent(s: &str) -> String {
    format!("{INDENT}{s}").replace('\n', &format!("\n{INDENT}"))
}

/// Byte length of the longest target, 0 when there are none
pub fn target_width(comments: &[Comment]) -> usize {
    comments
        .iter()
        .map(|c| c.target.len())
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod format_tests;
