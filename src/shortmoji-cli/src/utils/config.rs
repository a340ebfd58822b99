//! Config file discovery.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use shortmoji_core::Config;
use tracing::debug;

/// `<config dir>/shortmoji/config.toml`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("shortmoji").join("config.toml"))
}

/// Loads the explicit config when given, otherwise the default file if it
/// exists, otherwise built-in defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        return Config::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()));
    }

    match default_config_path() {
        Some(path) if path.is_file() => Config::load(&path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        _ => {
            debug!("No config file found, using defaults");
            Ok(Config::default())
        }
    }
}
