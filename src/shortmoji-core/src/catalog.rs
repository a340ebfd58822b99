//! The emoji catalog: lazy index, canonical emoji set and resolver cache.

use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::sync::{Arc, LazyLock};

use once_cell::sync::OnceCell;
use tracing::debug;

use crate::cache::{ResolverCache, SelectionKey};
use crate::config::Config;
use crate::emoji::{CodepointSequence, Emoji};
use crate::error::CatalogResult;
use crate::index::{ShortcodeEntry, ShortcodeIndex};
use crate::resolver::ShortcodeResolver;
use crate::resource::{EmbeddedResources, ResourcePattern, ResourceSource};

/// Every distinct emoji of an index, one shared instance per sequence.
#[derive(Debug, Default)]
pub struct EmojiSet {
    all: Vec<Arc<Emoji>>,
    lookup: HashMap<String, Arc<Emoji>>,
}

impl EmojiSet {
    /// Collects the distinct sequences of `index` in emoji order.
    pub fn from_index(index: &ShortcodeIndex) -> Self {
        let distinct: BTreeSet<&CodepointSequence> = index.sequences().collect();
        let all: Vec<Arc<Emoji>> = distinct
            .into_iter()
            .map(|sequence| Arc::new(Emoji::new(sequence.clone())))
            .collect();
        let lookup = all
            .iter()
            .map(|emoji| (emoji.as_str().to_string(), Arc::clone(emoji)))
            .collect();

        Self { all, lookup }
    }

    /// All emojis, sorted and deduplicated.
    pub fn all(&self) -> &[Arc<Emoji>] {
        &self.all
    }

    /// Returns the canonical emoji for a rendered string.
    pub fn lookup(&self, rendered: &str) -> Option<&Arc<Emoji>> {
        self.lookup.get(rendered)
    }

    /// Returns the canonical emoji for a codepoint sequence.
    pub fn get(&self, sequence: &CodepointSequence) -> Option<&Arc<Emoji>> {
        self.lookup(&sequence.render())
    }

    pub fn len(&self) -> usize {
        self.all.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }
}

/// Entry point for emoji and shortcode queries.
///
/// The index and emoji set are built on first use and shared by every
/// caller afterwards; concurrent first calls block until a single build
/// finishes. Resolvers are cached per normalized selection for the lifetime
/// of the catalog.
///
/// # Example
///
/// ```rust
/// let catalog = shortmoji_core::EmojiCatalog::embedded();
/// let resolver = catalog.resolver(["en"], ["emojibase"])?;
/// assert_eq!(resolver.get("smile").map(|e| e.hex()).as_deref(), Some("1F604"));
/// # Ok::<(), shortmoji_core::CatalogError>(())
/// ```
pub struct EmojiCatalog {
    source: Box<dyn ResourceSource>,
    pattern: ResourcePattern,
    index: OnceCell<ShortcodeIndex>,
    emojis: OnceCell<EmojiSet>,
    resolvers: ResolverCache,
}

impl EmojiCatalog {
    /// Creates a catalog over `source` using the default name pattern.
    pub fn new(source: impl ResourceSource + 'static) -> Self {
        Self::with_pattern(source, ResourcePattern::default())
    }

    /// Creates a catalog over `source` with a custom name pattern.
    pub fn with_pattern(source: impl ResourceSource + 'static, pattern: ResourcePattern) -> Self {
        Self {
            source: Box::new(source),
            pattern,
            index: OnceCell::new(),
            emojis: OnceCell::new(),
            resolvers: ResolverCache::new(),
        }
    }

    /// Creates a catalog over the tables embedded at build time.
    pub fn embedded() -> Self {
        Self::new(EmbeddedResources)
    }

    /// Creates a catalog over `source` using the configured name pattern.
    pub fn from_config(
        source: impl ResourceSource + 'static,
        config: &Config,
    ) -> CatalogResult<Self> {
        let pattern = ResourcePattern::new(&config.resource_pattern)?;
        Ok(Self::with_pattern(source, pattern))
    }

    /// Returns the resource name pattern.
    pub fn pattern(&self) -> &ResourcePattern {
        &self.pattern
    }

    /// Returns the shortcode index, building it on first call.
    ///
    /// # Errors
    ///
    /// Any resource failure aborts the build; a later call retries it.
    pub fn index(&self) -> CatalogResult<&ShortcodeIndex> {
        self.index
            .get_or_try_init(|| ShortcodeIndex::build(&*self.source, &self.pattern))
    }

    /// Returns the canonical emoji set, building it on first call.
    pub fn emojis(&self) -> CatalogResult<&EmojiSet> {
        let index = self.index()?;
        Ok(self.emojis.get_or_init(|| {
            let emojis = EmojiSet::from_index(index);
            debug!("Collected {} distinct emojis", emojis.len());
            emojis
        }))
    }

    /// All emojis, sorted and deduplicated.
    pub fn all_emojis(&self) -> CatalogResult<&[Arc<Emoji>]> {
        Ok(self.emojis()?.all())
    }

    /// Returns the canonical emoji for a rendered string.
    pub fn lookup(&self, rendered: &str) -> CatalogResult<Option<&Arc<Emoji>>> {
        Ok(self.emojis()?.lookup(rendered))
    }

    /// Sorted language names.
    pub fn language_names(&self) -> CatalogResult<&[String]> {
        Ok(self.index()?.language_names())
    }

    /// Sorted database names.
    pub fn database_names(&self) -> CatalogResult<&[String]> {
        Ok(self.index()?.database_names())
    }

    /// Every `(language, database, shortcodes)` entry listing `emoji`.
    pub fn shortcodes_of(&self, emoji: &Emoji) -> CatalogResult<Vec<ShortcodeEntry<'_>>> {
        Ok(self.index()?.shortcodes_for(emoji.sequence()))
    }

    /// Returns a resolver for the given priority lists (highest first).
    ///
    /// Duplicates and unknown names are dropped before the cache lookup, so
    /// selections that normalize to the same lists share one resolver.
    pub fn resolver<L, D>(
        &self,
        languages: L,
        databases: D,
    ) -> CatalogResult<Arc<ShortcodeResolver>>
    where
        L: IntoIterator,
        L::Item: AsRef<str>,
        D: IntoIterator,
        D::Item: AsRef<str>,
    {
        let index = self.index()?;
        let emojis = self.emojis()?;
        let key = SelectionKey::normalize(languages, databases, index);

        Ok(self.resolvers.get_or_build(key, |key| {
            ShortcodeResolver::build(key.languages(), key.databases(), index, emojis)
        }))
    }

    /// Resolver for a single language and a single database.
    pub fn resolver_for(
        &self,
        language: &str,
        database: &str,
    ) -> CatalogResult<Arc<ShortcodeResolver>> {
        self.resolver([language], [database])
    }

    /// Resolver for a single language over several databases.
    pub fn resolver_for_language<D>(
        &self,
        language: &str,
        databases: D,
    ) -> CatalogResult<Arc<ShortcodeResolver>>
    where
        D: IntoIterator,
        D::Item: AsRef<str>,
    {
        self.resolver([language], databases)
    }

    /// Resolver for several languages over a single database.
    pub fn resolver_for_database<L>(
        &self,
        languages: L,
        database: &str,
    ) -> CatalogResult<Arc<ShortcodeResolver>>
    where
        L: IntoIterator,
        L::Item: AsRef<str>,
    {
        self.resolver(languages, [database])
    }

    /// Number of resolvers currently cached.
    pub fn cached_resolvers(&self) -> usize {
        self.resolvers.len()
    }
}

impl fmt::Debug for EmojiCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmojiCatalog")
            .field("pattern", &self.pattern.as_str())
            .field("indexed", &self.index.get().is_some())
            .field("cached_resolvers", &self.resolvers.len())
            .finish()
    }
}

static GLOBAL_CATALOG: LazyLock<EmojiCatalog> = LazyLock::new(EmojiCatalog::embedded);

/// The process-wide catalog over the embedded tables.
///
/// Lives for the rest of the process; its resolver cache is never cleared.
pub fn global() -> &'static EmojiCatalog {
    &GLOBAL_CATALOG
}
