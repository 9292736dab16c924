//! Node stream reader
//!
//! Reads nodes that an upstream build-file parser has already produced and
//! serialized as a JSON array. Include nodes are passed through untouched.

use std::io::Read;
use std::path::Path;

use super::{Node, NodeParser, ParseError};

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonNodeParser;

impl NodeParser for JsonNodeParser {
    fn parse_recursive(
        &self,
        source: &mut dyn Read,
        include_dir: &Path,
    ) -> Result<Vec<Node>, ParseError> {
        let mut contents = String::new();
        source.read_to_string(&mut contents)?;

        log::debug!(
            "Reading node stream ({} bytes, include dir {:?})",
            contents.len(),
            include_dir
        );

        // Blank input means an empty build file
        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }

        let nodes: Vec<Node> = serde_json::from_str(&contents)?;

        log::debug!("Parsed {} nodes", nodes.len());

        Ok(nodes)
    }
}

#[cfg(test)]
#[path = "json_parser_tests.rs"]
mod json_parser_tests;
