//! Command-line argument structures.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::list_cmd::ListCommand;
use crate::lookup_cmd::LookupCommand;
use crate::resolve_cmd::ResolveCommand;

/// Log level for tracing output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogLevel {
    /// Only show errors
    Error,
    /// Show warnings and errors (default)
    #[default]
    Warn,
    /// Show informational messages, warnings, and errors
    Info,
    /// Show debug messages and above
    Debug,
    /// Show all messages including trace-level details
    Trace,
}

impl LogLevel {
    /// Convert to tracing filter string.
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }

    /// Parse from string (case-insensitive).
    pub fn from_str_loose(s: &str) -> Option<LogLevel> {
        match s.to_lowercase().as_str() {
            "error" => Some(LogLevel::Error),
            "warn" | "warning" => Some(LogLevel::Warn),
            "info" => Some(LogLevel::Info),
            "debug" => Some(LogLevel::Debug),
            "trace" => Some(LogLevel::Trace),
            _ => None,
        }
    }
}

/// Shortmoji - emoji shortcode resolver
///
/// Resolves shortcodes such as `smile` or `+1` to emojis under a chosen
/// priority of languages and shortcode databases.
#[derive(Debug, Parser)]
#[command(name = "shortmoji")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output (same as --log-level debug)
    #[arg(long = "verbose", short = 'v', global = true)]
    pub verbose: bool,

    /// Enable trace-level logging for debugging
    #[arg(long = "trace", global = true)]
    pub trace: bool,

    /// Log level for stderr output
    #[arg(
        long = "log-level",
        value_enum,
        default_value_t = LogLevel::Warn,
        global = true
    )]
    pub log_level: LogLevel,

    /// Path to a config.toml (default: <config dir>/shortmoji/config.toml)
    #[arg(long = "config", env = "SHORTMOJI_CONFIG", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Read shortcode tables from a directory instead of the built-in data
    #[arg(long = "data-dir", value_name = "DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Resolve shortcodes to emojis
    #[command(visible_alias = "r")]
    Resolve(ResolveCommand),

    /// Show every shortcode of an emoji
    Lookup(LookupCommand),

    /// List languages, databases, emojis or shortcodes
    #[command(visible_alias = "ls")]
    List(ListCommand),
}

/// Language/database selection shared by every subcommand.
#[derive(Debug, Clone, Default, Args)]
pub struct SelectionArgs {
    /// Language to use, highest priority first (repeatable)
    #[arg(short = 'l', long = "lang", value_name = "LANG")]
    pub languages: Vec<String>,

    /// Database to use, highest priority first (repeatable)
    #[arg(short = 'd', long = "db", value_name = "DB")]
    pub databases: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
