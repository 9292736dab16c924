//! make-help library - Render help text for build targets
//!
//! Collects the doc comments attached to build targets and formats them as a
//! short summary table or as full descriptions.

pub mod config;
pub mod error;
pub mod help;
pub mod parser;

// Re-export commonly used types for convenience
pub use config::Config;
pub use error::HelpError;
pub use help::{HelpRenderer, HelpView, render_all_long, render_all_short, render_target_long};
pub use parser::{Comment, JsonNodeParser, Node, NodeParser, ParseError};
