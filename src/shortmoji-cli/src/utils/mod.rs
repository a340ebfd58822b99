//! Shared utilities for all commands.
//!
//! - `config` - Config file discovery and loading
//! - `catalog` - Catalog setup and the per-invocation command context

pub mod catalog;
pub mod config;

pub use catalog::{CommandContext, open_catalog};
pub use config::{default_config_path, load_config};
