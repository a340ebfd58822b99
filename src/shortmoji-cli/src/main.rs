//! Shortmoji CLI - Main entry point.
//!
//! # Architecture
//!
//! - `cli/` - Command-line argument parsing and dispatch
//! - `utils/` - Config resolution and catalog setup
//! - `*_cmd.rs` - Individual command implementations

use anyhow::Result;
use clap::Parser;

use shortmoji_cli::cli::{Cli, LogLevel, dispatch_command};

/// Environment variable overriding the default log level.
const LOG_LEVEL_ENV: &str = "SHORTMOJI_LOG_LEVEL";

fn init_logging(cli: &Cli) {
    let log_level = if cli.trace {
        LogLevel::Trace
    } else if cli.verbose {
        LogLevel::Debug
    } else if let Ok(env_level) = std::env::var(LOG_LEVEL_ENV) {
        LogLevel::from_str_loose(&env_level).unwrap_or(cli.log_level)
    } else {
        cli.log_level
    };

    // Keep other crates quiet unless RUST_LOG asks for more
    let filter_str = if std::env::var("RUST_LOG").is_ok() {
        format!(
            "error,shortmoji_cli={},shortmoji_core={}",
            log_level.as_filter_str(),
            log_level.as_filter_str()
        )
    } else {
        log_level.as_filter_str().to_string()
    };

    tracing_subscriber::fmt()
        .with_env_filter(&filter_str)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);
    dispatch_command(cli)
}
