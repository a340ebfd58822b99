//! Lookup command for Shortmoji CLI.
//!
//! Shows an emoji's codepoints and every shortcode the loaded tables give it.

use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::Parser;
use serde::Serialize;
use shortmoji_core::{CodepointSequence, Emoji};

use crate::cli::SelectionArgs;
use crate::utils::CommandContext;

/// Lookup CLI command.
#[derive(Debug, Parser)]
pub struct LookupCommand {
    /// The emoji itself, or its hex codepoints (e.g. `1F44D-1F3FB`)
    #[arg(value_name = "EMOJI")]
    pub emoji: String,

    /// Restricts the listing when `--lang`/`--db` are given
    #[command(flatten)]
    pub selection: SelectionArgs,
}

#[derive(Debug, Serialize)]
struct LookupReport {
    emoji: String,
    hex: String,
    codepoints: Vec<u32>,
    entries: Vec<LookupEntry>,
}

#[derive(Debug, Serialize)]
struct LookupEntry {
    language: String,
    database: String,
    shortcodes: Vec<String>,
}

impl LookupCommand {
    /// Run the lookup command.
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let emoji = find_emoji(ctx, &self.emoji)?;
        let selection = &self.selection;

        let entries: Vec<LookupEntry> = ctx
            .catalog
            .shortcodes_of(&emoji)
            .context("Failed to load shortcode tables")?
            .into_iter()
            .filter(|entry| {
                selection.languages.is_empty()
                    || selection.languages.iter().any(|l| l == entry.language)
            })
            .filter(|entry| {
                selection.databases.is_empty()
                    || selection.databases.iter().any(|d| d == entry.database)
            })
            .map(|entry| LookupEntry {
                language: entry.language.to_string(),
                database: entry.database.to_string(),
                shortcodes: entry.shortcodes.to_vec(),
            })
            .collect();

        let report = LookupReport {
            emoji: emoji.as_str().to_string(),
            hex: emoji.hex(),
            codepoints: emoji.codepoints().to_vec(),
            entries,
        };

        if selection.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
            return Ok(());
        }

        println!("Emoji:      {}", report.emoji);
        println!("Codepoints: {}", report.hex);

        if report.entries.is_empty() {
            println!();
            println!("No shortcodes for the selected languages and databases.");
            return Ok(());
        }

        println!();
        println!("Shortcodes:");
        println!("{}", "-".repeat(40));
        for entry in &report.entries {
            let pair = format!("{}/{}", entry.language, entry.database);
            println!("  {:<24} {}", pair, entry.shortcodes.join(", "));
        }

        Ok(())
    }
}

/// Finds the catalog emoji for a rendered emoji or a hex sequence.
fn find_emoji(ctx: &CommandContext, input: &str) -> Result<Arc<Emoji>> {
    let emojis = ctx
        .catalog
        .emojis()
        .context("Failed to load shortcode tables")?;

    if let Some(emoji) = emojis.lookup(input.trim()) {
        return Ok(Arc::clone(emoji));
    }

    let by_hex = input
        .parse::<CodepointSequence>()
        .ok()
        .and_then(|sequence| emojis.get(&sequence).map(Arc::clone));

    match by_hex {
        Some(emoji) => Ok(emoji),
        None => bail!("Unknown emoji '{}'", input),
    }
}
