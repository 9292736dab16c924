use std::io::Read;
use std::path::Path;

use crate::error::HelpError;
use crate::parser::{Comment, Node, NodeParser};

/// Parse `r` and return its target comments sorted by target
///
/// The sort is stable, so comments sharing a target keep their input order.
pub fn get_comments<P: NodeParser + ?Sized>(
    parser: &P,
    r: &mut dyn Read,
    include_dir: &Path,
) -> Result<Vec<Comment>, HelpError> {
    let nodes = parser.parse_recursive(r, include_dir)?;

    let mut comments = filter_comments(nodes);
    comments.sort_by(|a, b| a.target.cmp(&b.target));

    log::debug!("Found {} target comments", comments.len());

    Ok(comments)
}

/// Comment nodes that document a target
pub fn filter_comments(nodes: impl IntoIterator<Item = Node>) -> Vec<Comment> {
    nodes
        .into_iter()
        .filter_map(Node::into_comment)
        .filter(|c| !c.target.is_empty())
        .collect()
}

#[cfg(test)]
#[path = "comments_tests.rs"]
mod comments_tests;
