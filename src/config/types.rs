// Configuration type definitions

use std::path::PathBuf;

use serde::Deserialize;

use crate::parser::DEFAULT_INCLUDE_DIR;

/// Parser configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ParserConfig {
    #[serde(default = "default_include_dir")]
    pub include_dir: PathBuf,
}

fn default_include_dir() -> PathBuf {
    PathBuf::from(DEFAULT_INCLUDE_DIR)
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig {
            include_dir: default_include_dir(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub parser: ParserConfig,
}
