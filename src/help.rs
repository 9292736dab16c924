//! Target help module
//!
//! Renders the doc comments of build targets as a short summary table or as
//! full descriptions.

mod comments;
mod format;
mod render;

pub use comments::{filter_comments, get_comments};
pub use format::{first_line, indent, target_width};
pub use render::{write_all_long, write_all_short, write_target_long};

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use crate::error::HelpError;
use crate::parser::{DEFAULT_INCLUDE_DIR, JsonNodeParser, NodeParser};

/// Which help representation to produce
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HelpView {
    /// One line per target
    AllShort,
    /// Full description of every target
    AllLong,
    /// Full description of a single target
    Target(String),
}

/// Renders help using a given parser and include directory
#[derive(Debug, Clone)]
pub struct HelpRenderer<P> {
    parser: P,
    include_dir: PathBuf,
}

impl Default for HelpRenderer<JsonNodeParser> {
    fn default() -> Self {
        HelpRenderer::new(JsonNodeParser)
    }
}

impl<P: NodeParser> HelpRenderer<P> {
    pub fn new(parser: P) -> Self {
        HelpRenderer {
            parser,
            include_dir: PathBuf::from(DEFAULT_INCLUDE_DIR),
        }
    }

    pub fn with_include_dir(mut self, include_dir: impl Into<PathBuf>) -> Self {
        self.include_dir = include_dir.into();
        self
    }

    pub fn include_dir(&self) -> &Path {
        &self.include_dir
    }

    pub fn render_all_short(&self, r: &mut dyn Read, w: &mut dyn Write) -> Result<(), HelpError> {
        let comments = get_comments(&self.parser, r, &self.include_dir)?;
        write_all_short(&comments, w)
    }

    pub fn render_all_long(&self, r: &mut dyn Read, w: &mut dyn Write) -> Result<(), HelpError> {
        let comments = get_comments(&self.parser, r, &self.include_dir)?;
        write_all_long(&comments, w)
    }

    pub fn render_target_long(
        &self,
        r: &mut dyn Read,
        w: &mut dyn Write,
        target: &str,
    ) -> Result<(), HelpError> {
        let comments = get_comments(&self.parser, r, &self.include_dir)?;
        write_target_long(&comments, w, target)
    }

    /// Dispatch to the operation matching `view`
    pub fn render(
        &self,
        view: &HelpView,
        r: &mut dyn Read,
        w: &mut dyn Write,
    ) -> Result<(), HelpError> {
        log::debug!("Rendering {:?}", view);
        match view {
            HelpView::AllShort => self.render_all_short(r, w),
            HelpView::AllLong => self.render_all_long(r, w),
            HelpView::Target(target) => self.render_target_long(r, w, target),
        }
    }
}

/// Write the short help of every target
pub fn render_all_short(r: &mut dyn Read, w: &mut dyn Write) -> Result<(), HelpError> {
    HelpRenderer::default().render_all_short(r, w)
}

/// Write the long help of every target
pub fn render_all_long(r: &mut dyn Read, w: &mut dyn Write) -> Result<(), HelpError> {
    HelpRenderer::default().render_all_long(r, w)
}

/// Write the long help of `target`
pub fn render_target_long(
    r: &mut dyn Read,
    w: &mut dyn Write,
    target: &str,
) -> Result<(), HelpError> {
    HelpRenderer::default().render_target_long(r, w, target)
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod help_tests;
