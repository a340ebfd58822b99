//! TOML configuration.
//!
//! ```toml
//! # config.toml
//! resource_pattern = '^shortcodes\.(?P<lang>[\w\-]+)\.(?P<source>[\w\-]+)\.tsv$'
//! languages = ["en-gb", "en"]
//! databases = ["emojibase", "github"]
//! ```
//!
//! Every key is optional; missing keys take the [`Config::default`] values.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::resource::{DEFAULT_RESOURCE_PATTERN, ResourcePattern};

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a configuration file.
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse TOML content.
    #[error("Failed to parse TOML in '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Invalid configuration value.
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Result type for configuration operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Catalog and default selection settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Regex recovering `lang` and `source` from resource names.
    pub resource_pattern: String,

    /// Default language priority, highest first.
    pub languages: Vec<String>,

    /// Default database priority, highest first.
    pub databases: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            resource_pattern: DEFAULT_RESOURCE_PATTERN.to_string(),
            languages: vec!["en".to_string()],
            databases: vec![
                "emojibase".to_string(),
                "github".to_string(),
                "cldr".to_string(),
            ],
        }
    }
}

impl Config {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        Self::parse(content, Path::new("<inline>"))
    }

    /// Reads, parses and validates a TOML file.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        debug!(path = %path.display(), "Loading config");
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    fn parse(content: &str, path: &Path) -> ConfigResult<Self> {
        let config: Config = toml::from_str(content).map_err(|source| ConfigError::ParseError {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the pattern compiles with both groups and no name is blank.
    pub fn validate(&self) -> ConfigResult<()> {
        self.pattern()?;

        for (key, names) in [("languages", &self.languages), ("databases", &self.databases)] {
            if names.iter().any(|name| name.trim().is_empty()) {
                return Err(ConfigError::InvalidValue {
                    key: key.to_string(),
                    message: "names must not be blank".to_string(),
                });
            }
        }

        Ok(())
    }

    /// Compiles the resource name pattern.
    pub fn pattern(&self) -> ConfigResult<ResourcePattern> {
        ResourcePattern::new(&self.resource_pattern).map_err(|e| ConfigError::InvalidValue {
            key: "resource_pattern".to_string(),
            message: e.to_string(),
        })
    }

    /// Overrides the language list when `languages` is non-empty.
    pub fn with_languages(mut self, languages: Vec<String>) -> Self {
        if !languages.is_empty() {
            self.languages = languages;
        }
        self
    }

    /// Overrides the database list when `databases` is non-empty.
    pub fn with_databases(mut self, databases: Vec<String>) -> Self {
        if !databases.is_empty() {
            self.databases = databases;
        }
        self
    }
}
