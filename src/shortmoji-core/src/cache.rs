//! Resolver memoization keyed by normalized selection.

use std::sync::Arc;

use dashmap::DashMap;
use tracing::trace;

use crate::index::ShortcodeIndex;
use crate::resolver::ShortcodeResolver;

/// A normalized language/database selection.
///
/// Both lists keep first-occurrence order, drop duplicates and drop names the
/// index does not know. Order is significant: `["en", "fr"]` and
/// `["fr", "en"]` are different keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SelectionKey {
    languages: Vec<String>,
    databases: Vec<String>,
}

impl SelectionKey {
    /// Normalizes a requested selection against the names `index` knows.
    pub fn normalize<L, D>(languages: L, databases: D, index: &ShortcodeIndex) -> Self
    where
        L: IntoIterator,
        L::Item: AsRef<str>,
        D: IntoIterator,
        D::Item: AsRef<str>,
    {
        Self {
            languages: dedup_known(languages, |name| index.has_language(name)),
            databases: dedup_known(databases, |name| index.has_database(name)),
        }
    }

    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    pub fn databases(&self) -> &[String] {
        &self.databases
    }
}

fn dedup_known<I>(names: I, is_known: impl Fn(&str) -> bool) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut kept: Vec<String> = Vec::new();
    for name in names {
        let name = name.as_ref();
        if is_known(name) && !kept.iter().any(|k| k == name) {
            kept.push(name.to_string());
        }
    }
    kept
}

/// Concurrent cache of built resolvers.
///
/// Entries live as long as the cache and are never evicted.
#[derive(Debug, Default)]
pub struct ResolverCache {
    entries: DashMap<SelectionKey, Arc<ShortcodeResolver>>,
}

impl ResolverCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached resolver for `key`, if any.
    pub fn get(&self, key: &SelectionKey) -> Option<Arc<ShortcodeResolver>> {
        self.entries.get(key).map(|entry| Arc::clone(entry.value()))
    }

    /// Returns the cached resolver for `key`, building it on a miss.
    ///
    /// `build` runs without holding any lock, so two threads missing on the
    /// same key may both build. The first insert is kept and returned to
    /// both; the losing build is dropped.
    pub fn get_or_build<F>(&self, key: SelectionKey, build: F) -> Arc<ShortcodeResolver>
    where
        F: FnOnce(&SelectionKey) -> ShortcodeResolver,
    {
        if let Some(existing) = self.get(&key) {
            trace!(
                languages = ?key.languages,
                databases = ?key.databases,
                "Resolver cache hit"
            );
            return existing;
        }

        let built = Arc::new(build(&key));
        let stored = self.entries.entry(key).or_insert(built);
        Arc::clone(stored.value())
    }

    /// Number of cached resolvers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::EmojiSet;
    use crate::resource::{MemoryResources, ResourcePattern};
    use pretty_assertions::assert_eq;

    fn index() -> ShortcodeIndex {
        let resources = MemoryResources::new()
            .with("shortcodes.en.github.tsv", "1F604\tsmile\n")
            .with("shortcodes.fr.cldr.tsv", "1F604\tsourire\n");
        ShortcodeIndex::build(&resources, &ResourcePattern::default()).unwrap()
    }

    #[test]
    fn test_normalize_dedups_and_filters() {
        let index = index();
        let key = SelectionKey::normalize(
            ["fr", "xx", "en", "fr"],
            vec![
                "github".to_string(),
                "cldr".to_string(),
                "github".to_string(),
                "nope".to_string(),
            ],
            &index,
        );
        assert_eq!(key.languages(), &["fr", "en"]);
        assert_eq!(key.databases(), &["github", "cldr"]);
    }

    #[test]
    fn test_key_is_order_sensitive() {
        let index = index();
        let a = SelectionKey::normalize(["en", "fr"], ["github"], &index);
        let b = SelectionKey::normalize(["fr", "en"], ["github"], &index);
        let c = SelectionKey::normalize(["en", "en", "fr", "zz"], ["github"], &index);
        assert_ne!(a, b);
        assert_eq!(a, c);
    }

    #[test]
    fn test_get_or_build_memoizes() {
        let index = index();
        let emojis = EmojiSet::from_index(&index);
        let cache = ResolverCache::new();
        let key = SelectionKey::normalize(["en"], ["github"], &index);

        let mut builds = 0;
        let first = cache.get_or_build(key.clone(), |k| {
            builds += 1;
            ShortcodeResolver::build(k.languages(), k.databases(), &index, &emojis)
        });
        let second = cache.get_or_build(key.clone(), |k| {
            builds += 1;
            ShortcodeResolver::build(k.languages(), k.databases(), &index, &emojis)
        });

        assert_eq!(builds, 1);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
        assert!(cache.get(&key).is_some());
    }
}
