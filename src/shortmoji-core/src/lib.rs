//! Emoji shortcode index and resolver.
//!
//! This crate indexes emoji shortcodes (`smile`, `+1`, `flag_fr`, ...) across
//! several languages and several source databases, and resolves a shortcode
//! to an emoji under a caller-chosen priority of languages and databases.
//!
//! - [`Emoji`] / [`CodepointSequence`]: immutable values compared by codepoints
//! - [`ShortcodeIndex`]: `language → database → sequence → shortcodes`
//! - [`EmojiCatalog`]: lazy index, canonical emoji set, cached resolvers
//! - [`ShortcodeResolver`]: flat `shortcode → emoji` table for one selection
//!
//! # Resource Format
//!
//! Each table is a UTF-8 text resource named after its pair, by default
//! `shortcodes.<lang>.<database>.tsv`, holding tab-separated lines:
//!
//! ```text
//! 1F604	smile
//! 1F44D	+1	thumbsup
//! 1F468-200D-1F469-200D-1F467	family_mwg
//! ```
//!
//! # Priority
//!
//! When several selected tables define the same shortcode, the first listed
//! language wins, then the first listed database:
//!
//! ```rust
//! let catalog = shortmoji_core::global();
//!
//! let legacy_first = catalog.resolver(["en"], ["emojibase-legacy", "emojibase"])?;
//! assert_eq!(legacy_first.get("smile").unwrap().hex(), "1F603");
//!
//! let current_first = catalog.resolver(["en"], ["emojibase", "emojibase-legacy"])?;
//! assert_eq!(current_first.get("smile").unwrap().hex(), "1F604");
//! # Ok::<(), shortmoji_core::CatalogError>(())
//! ```

mod cache;
mod catalog;
mod config;
mod emoji;
mod error;
mod index;
mod resolver;
mod resource;

pub use cache::{ResolverCache, SelectionKey};
pub use catalog::{EmojiCatalog, EmojiSet, global};
pub use config::{Config, ConfigError, ConfigResult};
pub use emoji::{CodepointSequence, Emoji};
pub use error::{CatalogError, CatalogResult};
pub use index::{DatabaseEntries, LanguageEntries, ShortcodeEntry, ShortcodeIndex, parse_table};
pub use resolver::ShortcodeResolver;
pub use resource::{
    DEFAULT_RESOURCE_PATTERN, DirectoryResources, EmbeddedResources, MemoryResources,
    ResourcePattern, ResourceSource,
};

/// Re-export common types for convenience.
pub mod prelude {
    pub use crate::{
        CatalogError, CatalogResult, CodepointSequence, Emoji, EmojiCatalog, ShortcodeResolver,
    };
}

#[cfg(test)]
mod tests;
