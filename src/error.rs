use thiserror::Error;

use crate::parser::ParseError;

#[derive(Debug, Error)]
pub enum HelpError {
    #[error("parsing: {0}")]
    Parsing(#[from] ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
