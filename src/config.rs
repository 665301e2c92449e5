//! Scanner policy configuration.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading a parse configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {source}")]
    ParseError {
        #[source]
        source: toml::de::Error,
    },
}

/// How the scanner treats problems and the `--` terminator.
///
/// This only shapes scanning; flag values always come from the argument list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ParseConfig {
    /// Abort on the first problem instead of collecting it into the report.
    pub strict: bool,
    /// Treat every token after a bare `--` as positional.
    pub stop_at_terminator: bool,
}

impl ParseConfig {
    /// Parse a configuration from TOML text. Missing keys take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError { source: e })
    }

    /// Load a configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml_str(&content)
    }
}
