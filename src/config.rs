//! Configuration loaded from `routefinder.toml`.
//!
//! Every field has a default, so a missing file is not an error.

use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::warn;

use crate::error::{Result, RouteError};
use crate::parser::{EdgeParser, DEFAULT_DELIMITER, DEFAULT_HEADER_PREFIX};

pub const DEFAULT_CONFIG_FILE: &str = "routefinder.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Default tracing filter when `RUST_LOG` is unset.
    pub log_level: String,
    pub format: FormatConfig,
}

/// Layout of the travel-time text files.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    pub delimiter: String,
    pub header_prefix: String,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            format: FormatConfig::default(),
        }
    }
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER.to_string(),
            header_prefix: DEFAULT_HEADER_PREFIX.to_string(),
        }
    }
}

impl RouterConfig {
    /// Load config, falling back to defaults when the file is missing or invalid.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::try_load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring config file");
                Self::default()
            }
        }
    }

    pub fn try_load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .map_err(|e| RouteError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_toml(&raw)
    }

    pub fn from_toml(raw: &str) -> Result<Self> {
        let config: Self = toml::from_str(raw).map_err(|e| RouteError::Config(e.to_string()))?;
        config.format.delimiter_char()?;
        Ok(config)
    }
}

impl FormatConfig {
    fn delimiter_char(&self) -> Result<char> {
        let mut chars = self.delimiter.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(RouteError::Config(format!(
                "delimiter must be a single character, got {:?}",
                self.delimiter
            ))),
        }
    }

    /// The parser for this format.
    pub fn parser(&self) -> Result<EdgeParser> {
        Ok(EdgeParser::new(
            self.delimiter_char()?,
            self.header_prefix.clone(),
        ))
    }
}
