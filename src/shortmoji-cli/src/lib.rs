//! Shortmoji CLI library module.
//!
//! - `cli/` - CLI argument parsing and command dispatch
//! - `utils/` - Config resolution and catalog setup
//! - Command modules - `resolve`, `lookup` and `list` (`*_cmd.rs`)

pub mod cli;
pub mod list_cmd;
pub mod lookup_cmd;
pub mod resolve_cmd;
pub mod utils;
