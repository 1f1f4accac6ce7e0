//! Configuration for template formatting
//!
//! Settings can be built in code or loaded from a TOML file:
//!
//! ```toml
//! [format]
//! float_precision = 2
//! replace_mode = "positional"
//! ```

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::template::DEFAULT_FLOAT_PRECISION;

/// Errors that can occur when loading a configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// How located placeholders are rewritten
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplaceMode {
    /// Replace every copy of the i-th placeholder's text with the i-th argument,
    /// one argument at a time.
    ///
    /// A template with the same placeholder twice (`{1}-{1}`) gets the first
    /// matching argument in both places, and argument text containing a
    /// placeholder is rewritten by later arguments.
    #[default]
    All,
    /// Replace each placeholder occurrence with its own argument in a single pass
    Positional,
}

/// Configuration options for [`crate::Formatter`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatConfig {
    /// Fractional digits for float arguments
    pub float_precision: usize,

    /// Placeholder rewrite strategy
    pub replace_mode: ReplaceMode,
}

#[derive(Deserialize)]
struct TomlConfig {
    format: Option<TomlFormat>,
}

#[derive(Deserialize)]
struct TomlFormat {
    float_precision: Option<usize>,
    replace_mode: Option<ReplaceMode>,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            float_precision: DEFAULT_FLOAT_PRECISION,
            replace_mode: ReplaceMode::All,
        }
    }
}

impl FormatConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load configuration from a TOML string, using defaults for missing keys
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let parsed: TomlConfig = toml::from_str(content)?;
        let mut config = Self::default();

        if let Some(format) = parsed.format {
            if let Some(precision) = format.float_precision {
                config.float_precision = precision;
            }
            if let Some(mode) = format.replace_mode {
                config.replace_mode = mode;
            }
        }

        Ok(config)
    }

    /// Set the number of fractional digits for floats
    pub fn with_float_precision(mut self, precision: usize) -> Self {
        self.float_precision = precision;
        self
    }

    /// Set the placeholder rewrite strategy
    pub fn with_replace_mode(mut self, mode: ReplaceMode) -> Self {
        self.replace_mode = mode;
        self
    }
}
