//! Writers for already collected comments
//!
//! Each view is framed by a leading and a trailing blank line.

use std::io::Write;

use super::format::{first_line, indent, target_width};
use crate::error::HelpError;
use crate::parser::Comment;

/// Aligned table of targets and the first line of their comment
pub fn write_all_short(comments: &[Comment], w: &mut dyn Write) -> Result<(), HelpError> {
    let width = target_width(comments) + 2;

    writeln!(w)?;
    for c in comments.iter().filter(|c| !c.target.is_empty()) {
        writeln!(w, "  {:<width$} {}", c.target, first_line(&c.value))?;
    }
    writeln!(w)?;

    Ok(())
}

/// Every target followed by its full comment
pub fn write_all_long(comments: &[Comment], w: &mut dyn Write) -> Result<(), HelpError> {
    writeln!(w)?;
    for c in comments.iter().filter(|c| !c.target.is_empty()) {
        writeln!(w, "  {}:\n{}\n", c.target, indent(&indent(&c.value)))?;
    }
    writeln!(w)?;

    Ok(())
}

/// Full comment of the targets named exactly `target`
pub fn write_target_long(
    comments: &[Comment],
    w: &mut dyn Write,
    target: &str,
) -> Result<(), HelpError> {
    writeln!(w)?;
    for c in comments.iter().filter(|c| !c.target.is_empty() && c.target == target) {
        writeln!(w, "{}", indent(&c.value))?;
    }
    writeln!(w)?;

    Ok(())
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
