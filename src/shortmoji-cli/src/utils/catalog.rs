//! Catalog setup and selection resolution.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use shortmoji_core::{
    Config, DirectoryResources, EmbeddedResources, EmojiCatalog, ShortcodeResolver,
};
use tracing::debug;

use crate::cli::SelectionArgs;

/// Opens a catalog over `data_dir`, or over the built-in tables.
pub fn open_catalog(data_dir: Option<&Path>, config: &Config) -> Result<EmojiCatalog> {
    let catalog = match data_dir {
        Some(dir) => {
            if !dir.is_dir() {
                bail!("Data directory not found: {}", dir.display());
            }
            let resources = DirectoryResources::new(dir);
            debug!(dir = %resources.root().display(), "Using directory resources");
            EmojiCatalog::from_config(resources, config)
        }
        None => EmojiCatalog::from_config(EmbeddedResources, config),
    };

    catalog.context("Invalid resource pattern")
}

/// Everything a subcommand needs: the catalog and the effective config.
#[derive(Debug)]
pub struct CommandContext {
    pub catalog: EmojiCatalog,
    pub config: Config,
}

impl CommandContext {
    pub fn new(catalog: EmojiCatalog, config: Config) -> Self {
        Self { catalog, config }
    }

    /// Config lists overridden by the `--lang`/`--db` flags.
    pub fn selection(&self, args: &SelectionArgs) -> (Vec<String>, Vec<String>) {
        let config = self
            .config
            .clone()
            .with_languages(args.languages.clone())
            .with_databases(args.databases.clone());
        (config.languages, config.databases)
    }

    /// Resolver for the effective selection.
    pub fn resolver(&self, args: &SelectionArgs) -> Result<Arc<ShortcodeResolver>> {
        let (languages, databases) = self.selection(args);
        let resolver = self
            .catalog
            .resolver(&languages, &databases)
            .context("Failed to load shortcode tables")?;

        if resolver.language_names().is_empty() || resolver.database_names().is_empty() {
            debug!(
                languages = ?languages,
                databases = ?databases,
                "Selection matches no known tables"
            );
        }

        Ok(resolver)
    }
}
