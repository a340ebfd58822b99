//! List command for Shortmoji CLI.
//!
//! Enumerates what the loaded tables contain:
//! - Languages and databases
//! - Every distinct emoji
//! - The merged shortcode table of a selection

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Serialize;

use crate::cli::SelectionArgs;
use crate::utils::CommandContext;

/// What to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListTarget {
    /// Known language names
    Languages,
    /// Known database names
    Databases,
    /// Every distinct emoji with its hex codepoints
    Emojis,
    /// The merged shortcode table for the selected languages and databases
    Shortcodes,
}

/// List CLI command.
#[derive(Debug, Parser)]
pub struct ListCommand {
    /// What to list
    #[arg(value_enum)]
    pub target: ListTarget,

    #[command(flatten)]
    pub selection: SelectionArgs,
}

#[derive(Debug, Serialize)]
struct EmojiRow {
    emoji: String,
    hex: String,
}

#[derive(Debug, Serialize)]
struct ShortcodeRow {
    shortcode: String,
    emoji: String,
    hex: String,
}

impl ListCommand {
    /// Run the list command.
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let json = self.selection.json;
        match self.target {
            ListTarget::Languages => {
                let names = ctx
                    .catalog
                    .language_names()
                    .context("Failed to load shortcode tables")?;
                print_names(names, json)
            }
            ListTarget::Databases => {
                let names = ctx
                    .catalog
                    .database_names()
                    .context("Failed to load shortcode tables")?;
                print_names(names, json)
            }
            ListTarget::Emojis => list_emojis(ctx, json),
            ListTarget::Shortcodes => list_shortcodes(ctx, &self.selection),
        }
    }
}

fn print_names(names: &[String], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(names)?);
    } else {
        for name in names {
            println!("{}", name);
        }
    }
    Ok(())
}

fn list_emojis(ctx: &CommandContext, json: bool) -> Result<()> {
    let rows: Vec<EmojiRow> = ctx
        .catalog
        .all_emojis()
        .context("Failed to load shortcode tables")?
        .iter()
        .map(|emoji| EmojiRow {
            emoji: emoji.as_str().to_string(),
            hex: emoji.hex(),
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        for row in &rows {
            println!("{}\t{}", row.emoji, row.hex);
        }
    }
    Ok(())
}

fn list_shortcodes(ctx: &CommandContext, selection: &SelectionArgs) -> Result<()> {
    let resolver = ctx.resolver(selection)?;

    let rows: Vec<ShortcodeRow> = resolver
        .shortcodes()
        .into_iter()
        .filter_map(|shortcode| {
            resolver.get(shortcode).map(|emoji| ShortcodeRow {
                shortcode: shortcode.to_string(),
                emoji: emoji.as_str().to_string(),
                hex: emoji.hex(),
            })
        })
        .collect();

    if selection.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        for row in &rows {
            println!("{}\t{}\t{}", row.shortcode, row.emoji, row.hex);
        }
    }
    Ok(())
}
