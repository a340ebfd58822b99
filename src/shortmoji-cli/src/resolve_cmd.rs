//! Resolve command for Shortmoji CLI.
//!
//! Looks up each shortcode in the merged table of the selected languages and
//! databases. Exits with an error when any shortcode is unknown.

use anyhow::{Result, bail};
use clap::Parser;
use serde::Serialize;

use crate::cli::SelectionArgs;
use crate::utils::CommandContext;

/// Resolve CLI command.
#[derive(Debug, Parser)]
pub struct ResolveCommand {
    /// Shortcodes to resolve; surrounding colons are ignored (`:smile:`)
    #[arg(required = true, value_name = "SHORTCODE", allow_negative_numbers = true)]
    pub shortcodes: Vec<String>,

    #[command(flatten)]
    pub selection: SelectionArgs,
}

/// One resolved (or unresolved) shortcode.
#[derive(Debug, Serialize)]
struct Resolution {
    shortcode: String,
    emoji: Option<String>,
    hex: Option<String>,
}

/// Removes one pair of surrounding colons, as in `:smile:`.
pub fn strip_colons(input: &str) -> &str {
    input
        .strip_prefix(':')
        .and_then(|rest| rest.strip_suffix(':'))
        .filter(|inner| !inner.is_empty())
        .unwrap_or(input)
}

impl ResolveCommand {
    /// Run the resolve command.
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let resolver = ctx.resolver(&self.selection)?;

        let resolutions: Vec<Resolution> = self
            .shortcodes
            .iter()
            .map(|input| {
                let shortcode = strip_colons(input);
                let emoji = resolver.get(shortcode);
                Resolution {
                    shortcode: shortcode.to_string(),
                    emoji: emoji.map(|e| e.as_str().to_string()),
                    hex: emoji.map(|e| e.hex()),
                }
            })
            .collect();

        if self.selection.json {
            println!("{}", serde_json::to_string_pretty(&resolutions)?);
        } else {
            for resolution in &resolutions {
                match (&resolution.emoji, &resolution.hex) {
                    (Some(emoji), Some(hex)) => {
                        println!("{}\t{}\t{}", resolution.shortcode, emoji, hex)
                    }
                    _ => eprintln!("{}: not found", resolution.shortcode),
                }
            }
        }

        let missing = resolutions.iter().filter(|r| r.emoji.is_none()).count();
        if missing > 0 {
            bail!(
                "{} of {} shortcode(s) not found",
                missing,
                resolutions.len()
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_colons() {
        assert_eq!(strip_colons(":smile:"), "smile");
        assert_eq!(strip_colons(":+1:"), "+1");
        assert_eq!(strip_colons("smile"), "smile");
    }

    #[test]
    fn test_strip_colons_needs_both_sides() {
        assert_eq!(strip_colons(":smile"), ":smile");
        assert_eq!(strip_colons("smile:"), "smile:");
        assert_eq!(strip_colons("::"), "::");
        assert_eq!(strip_colons(":"), ":");
    }

    #[test]
    fn test_strip_colons_only_one_pair() {
        assert_eq!(strip_colons("::smile::"), ":smile:");
    }
}
