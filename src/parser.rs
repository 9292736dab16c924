//! Parser seam
//!
//! The renderer does not read build files itself. It asks a [`NodeParser`] for the
//! structural nodes of an input and works on those.

mod json_parser;
mod node;

pub use json_parser::JsonNodeParser;
pub use node::{Comment, Node};

use std::io::Read;
use std::path::Path;

use thiserror::Error;

/// Default directory searched for included files
pub const DEFAULT_INCLUDE_DIR: &str = "/usr/local/include";

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid node stream: {0}")]
    InvalidNodes(#[from] serde_json::Error),
}

/// Produces the node sequence of an input, following includes
pub trait NodeParser {
    /// Parse `source` and everything it includes, resolving includes against `include_dir`
    fn parse_recursive(
        &self,
        source: &mut dyn Read,
        include_dir: &Path,
    ) -> Result<Vec<Node>, ParseError>;
}
