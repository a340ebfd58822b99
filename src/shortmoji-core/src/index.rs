//! Three-level shortcode index.
//!
//! `language → database → codepoint sequence → shortcodes`, parsed once from
//! a [`ResourceSource`] and read-only afterwards.

use std::collections::{BTreeMap, BTreeSet};

use indexmap::IndexMap;
use tracing::{debug, info, trace};

use crate::emoji::CodepointSequence;
use crate::error::{CatalogError, CatalogResult};
use crate::resource::{ResourcePattern, ResourceSource};

/// Shortcodes per codepoint sequence for one `(language, database)` pair, in
/// resource line order.
pub type DatabaseEntries = IndexMap<CodepointSequence, Vec<String>>;

/// Databases of one language, keyed by database name.
pub type LanguageEntries = BTreeMap<String, DatabaseEntries>;

/// One `(language, database)` pair that lists a given emoji.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShortcodeEntry<'a> {
    pub language: &'a str,
    pub database: &'a str,
    pub shortcodes: &'a [String],
}

/// The parsed shortcode tables of every known language and database.
#[derive(Debug, Default)]
pub struct ShortcodeIndex {
    languages: BTreeMap<String, LanguageEntries>,
    language_names: Vec<String>,
    database_names: Vec<String>,
    resource_count: usize,
}

impl ShortcodeIndex {
    /// Reads every resource whose name matches `pattern` and indexes it.
    ///
    /// Resources that do not match are skipped. If two resources map to the
    /// same `(language, database)` pair, the one enumerated last replaces the
    /// earlier one.
    ///
    /// # Errors
    ///
    /// Fails if the source cannot be listed, a resource cannot be opened or is
    /// not UTF-8, or a codepoint key does not parse.
    pub fn build(source: &dyn ResourceSource, pattern: &ResourcePattern) -> CatalogResult<Self> {
        let names = source
            .names()
            .map_err(|source| CatalogError::ResourceListing { source })?;

        let mut languages: BTreeMap<String, LanguageEntries> = BTreeMap::new();
        let mut resource_count = 0;

        for name in names {
            let Some((lang, database)) = pattern.classify(&name) else {
                debug!("Skipping resource '{}': name does not match pattern", name);
                continue;
            };

            let data = source
                .open(&name)
                .map_err(|e| CatalogError::ResourceUnavailable {
                    resource: name.clone(),
                    source: e,
                })?;
            let text = std::str::from_utf8(&data).map_err(|e| CatalogError::InvalidUtf8 {
                resource: name.clone(),
                source: e,
            })?;

            let table = parse_table(&name, text)?;
            debug!(
                resource = %name,
                language = %lang,
                database = %database,
                entries = table.len(),
                "Parsed shortcode resource"
            );

            let previous = languages.entry(lang).or_default().insert(database, table);
            if previous.is_some() {
                debug!("Resource '{}' replaces an earlier table for the same pair", name);
            }
            resource_count += 1;
        }

        let language_names: Vec<String> = languages.keys().cloned().collect();
        let database_names: Vec<String> = languages
            .values()
            .flat_map(|databases| databases.keys().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        info!(
            "Indexed {} shortcode resources ({} languages, {} databases)",
            resource_count,
            language_names.len(),
            database_names.len()
        );

        Ok(Self {
            languages,
            language_names,
            database_names,
            resource_count,
        })
    }

    /// Returns every database table of `language`.
    pub fn language(&self, language: &str) -> Option<&LanguageEntries> {
        self.languages.get(language)
    }

    /// Returns the table for one `(language, database)` pair.
    pub fn database(&self, language: &str, database: &str) -> Option<&DatabaseEntries> {
        self.languages.get(language)?.get(database)
    }

    /// Sorted language names.
    pub fn language_names(&self) -> &[String] {
        &self.language_names
    }

    /// Sorted, deduplicated database names across all languages.
    pub fn database_names(&self) -> &[String] {
        &self.database_names
    }

    pub fn has_language(&self, language: &str) -> bool {
        self.languages.contains_key(language)
    }

    pub fn has_database(&self, database: &str) -> bool {
        self.database_names
            .binary_search_by(|name| name.as_str().cmp(database))
            .is_ok()
    }

    /// Iterates every codepoint sequence of every table (with repeats).
    pub fn sequences(&self) -> impl Iterator<Item = &CodepointSequence> {
        self.languages
            .values()
            .flat_map(|databases| databases.values())
            .flat_map(|table| table.keys())
    }

    /// Lists every table mentioning `sequence`, ordered by language then
    /// database.
    pub fn shortcodes_for(&self, sequence: &CodepointSequence) -> Vec<ShortcodeEntry<'_>> {
        let mut entries = Vec::new();
        for (language, databases) in &self.languages {
            for (database, table) in databases {
                if let Some(shortcodes) = table.get(sequence) {
                    entries.push(ShortcodeEntry {
                        language,
                        database,
                        shortcodes,
                    });
                }
            }
        }
        entries
    }

    /// Number of resources that were indexed.
    pub fn resource_count(&self) -> usize {
        self.resource_count
    }

    /// Total number of `(sequence, shortcodes)` rows over all tables.
    pub fn entry_count(&self) -> usize {
        self.languages
            .values()
            .flat_map(|databases| databases.values())
            .map(|table| table.len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

/// Parses one flattened shortcode table.
///
/// Each line is `<hex>[-<hex>...]\t<shortcode>[\t<shortcode>...]`. Fields are
/// trimmed and empty fields dropped; lines left with fewer than two fields
/// are skipped. Lines end at `\n`, `\r\n` or a bare `\r`. A repeated
/// codepoint key replaces the earlier line.
pub fn parse_table(resource: &str, text: &str) -> CatalogResult<DatabaseEntries> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut table = DatabaseEntries::new();

    for (index, line) in split_lines(text).enumerate() {
        let mut fields = line
            .trim()
            .split('\t')
            .map(str::trim)
            .filter(|field| !field.is_empty());

        let (Some(key), Some(first)) = (fields.next(), fields.next()) else {
            if !line.trim().is_empty() {
                trace!("Skipping malformed line {} in '{}'", index + 1, resource);
            }
            continue;
        };

        let sequence: CodepointSequence =
            key.parse().map_err(|e| CatalogError::InvalidRecord {
                resource: resource.to_string(),
                line: index + 1,
                source: Box::new(e),
            })?;

        let shortcodes: Vec<String> = std::iter::once(first)
            .chain(fields)
            .map(str::to_string)
            .collect();
        table.insert(sequence, shortcodes);
    }

    Ok(table)
}

/// Splits on `\n`, `\r\n` and bare `\r`.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.find(['\r', '\n']) {
            Some(end) => {
                let line = &rest[..end];
                let width = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[end + width..];
                Some(line)
            }
            None => {
                let line = rest;
                rest = "";
                Some(line)
            }
        }
    })
}
