//! Flat shortcode lookup for one language/database selection.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::catalog::EmojiSet;
use crate::emoji::Emoji;
use crate::index::ShortcodeIndex;

/// Resolves shortcodes to emojis for a fixed priority selection.
///
/// Built once from the index and never mutated, so it can be shared across
/// threads freely. Obtain one through [`crate::EmojiCatalog::resolver`],
/// which also caches it.
#[derive(Debug)]
pub struct ShortcodeResolver {
    languages: Vec<String>,
    databases: Vec<String>,
    entries: HashMap<String, Arc<Emoji>>,
}

impl ShortcodeResolver {
    /// Merges the selected tables into one `shortcode → emoji` map.
    ///
    /// Both lists are highest priority first. Tables are applied from the
    /// lowest priority pair to the highest so later writes win: a shortcode
    /// claimed by several tables resolves to the earliest-listed language,
    /// and within it the earliest-listed database. Shortcodes that only a
    /// lower-priority table defines are kept. Names missing from the index
    /// are skipped.
    pub fn build(
        languages: &[String],
        databases: &[String],
        index: &ShortcodeIndex,
        emojis: &EmojiSet,
    ) -> Self {
        let mut entries: HashMap<String, Arc<Emoji>> = HashMap::new();

        for language in languages.iter().rev() {
            let Some(tables) = index.language(language) else {
                continue;
            };

            for database in databases.iter().rev() {
                let Some(table) = tables.get(database) else {
                    continue;
                };

                for (sequence, shortcodes) in table {
                    let Some(emoji) = emojis.get(sequence) else {
                        warn!(
                            "Emoji {} from {}/{} missing from catalog",
                            sequence, language, database
                        );
                        continue;
                    };

                    for shortcode in shortcodes {
                        entries.insert(shortcode.clone(), Arc::clone(emoji));
                    }
                }
            }
        }

        debug!(
            languages = ?languages,
            databases = ?databases,
            shortcodes = entries.len(),
            "Built shortcode resolver"
        );

        Self {
            languages: languages.to_vec(),
            databases: databases.to_vec(),
            entries,
        }
    }

    /// Looks up a shortcode exactly as given (no colon stripping, no case
    /// folding).
    pub fn get(&self, shortcode: &str) -> Option<&Arc<Emoji>> {
        self.entries.get(shortcode)
    }

    pub fn contains(&self, shortcode: &str) -> bool {
        self.entries.contains_key(shortcode)
    }

    /// Languages this resolver was built from, highest priority first.
    pub fn language_names(&self) -> &[String] {
        &self.languages
    }

    /// Databases this resolver was built from, highest priority first.
    pub fn database_names(&self) -> &[String] {
        &self.databases
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(shortcode, emoji)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<Emoji>)> {
        self.entries
            .iter()
            .map(|(shortcode, emoji)| (shortcode.as_str(), emoji))
    }

    /// All shortcodes, sorted.
    pub fn shortcodes(&self) -> Vec<&str> {
        let mut shortcodes: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        shortcodes.sort_unstable();
        shortcodes
    }

    /// Shortcodes that resolve to `emoji` under this selection, sorted.
    pub fn shortcodes_for(&self, emoji: &Emoji) -> Vec<&str> {
        let mut shortcodes: Vec<&str> = self
            .entries
            .iter()
            .filter(|(_, candidate)| ***candidate == *emoji)
            .map(|(shortcode, _)| shortcode.as_str())
            .collect();
        shortcodes.sort_unstable();
        shortcodes
    }
}
