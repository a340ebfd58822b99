//! Command execution handlers.

use anyhow::Result;

use crate::cli::args::{Cli, Commands};
use crate::utils::{CommandContext, load_config, open_catalog};

/// Loads config and data, then runs the selected subcommand.
pub fn dispatch_command(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    let catalog = open_catalog(cli.data_dir.as_deref(), &config)?;
    let ctx = CommandContext::new(catalog, config);

    match cli.command {
        Commands::Resolve(cmd) => cmd.run(&ctx),
        Commands::Lookup(cmd) => cmd.run(&ctx),
        Commands::List(cmd) => cmd.run(&ctx),
    }
}
