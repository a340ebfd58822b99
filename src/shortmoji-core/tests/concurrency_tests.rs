//! Concurrent first access to a shared catalog.

use std::sync::{Arc, Barrier};
use std::thread;

use shortmoji_core::{EmojiCatalog, MemoryResources, ShortcodeResolver};

const THREADS: usize = 8;

fn catalog() -> Arc<EmojiCatalog> {
    let resources = MemoryResources::new()
        .with("shortcodes.en.d1.tsv", "1F603\tsmile\n1F600\tgrinning\n")
        .with("shortcodes.en.d2.tsv", "1F604\tsmile\n1F601\tgrin\n")
        .with("shortcodes.fr.d1.tsv", "1F606\tsmile\n");
    Arc::new(EmojiCatalog::new(resources))
}

fn spawn_all<T, F>(catalog: &Arc<EmojiCatalog>, task: F) -> Vec<T>
where
    T: Send + 'static,
    F: Fn(&EmojiCatalog) -> T + Send + Sync + 'static,
{
    let barrier = Arc::new(Barrier::new(THREADS));
    let task = Arc::new(task);
    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let catalog = Arc::clone(catalog);
            let barrier = Arc::clone(&barrier);
            let task = Arc::clone(&task);
            thread::spawn(move || {
                barrier.wait();
                task(&catalog)
            })
        })
        .collect();

    handles
        .into_iter()
        .map(|handle| handle.join().expect("worker panicked"))
        .collect()
}

#[test]
fn test_concurrent_first_index_access() {
    let catalog = catalog();
    let counts = spawn_all(&catalog, |catalog| {
        catalog.all_emojis().unwrap().len()
    });
    assert!(counts.iter().all(|&count| count == 5));
}

#[test]
fn test_concurrent_lookups_share_instances() {
    let catalog = catalog();
    let found = spawn_all(&catalog, |catalog| {
        Arc::clone(catalog.lookup("\u{1F604}").unwrap().unwrap())
    });
    let canonical = catalog.lookup("\u{1F604}").unwrap().unwrap();
    assert!(found.iter().all(|emoji| Arc::ptr_eq(emoji, canonical)));
}

#[test]
fn test_concurrent_resolver_requests_share_one_resolver() {
    let catalog = catalog();
    let resolvers: Vec<Arc<ShortcodeResolver>> = spawn_all(&catalog, |catalog| {
        catalog.resolver(["en"], ["d2", "d1"]).unwrap()
    });

    let first = &resolvers[0];
    assert!(resolvers.iter().all(|resolver| Arc::ptr_eq(resolver, first)));
    assert_eq!(catalog.cached_resolvers(), 1);
    assert_eq!(
        first.get("smile").map(|emoji| emoji.hex()).as_deref(),
        Some("1F604")
    );
}

#[test]
fn test_concurrent_mixed_selections() {
    let catalog = catalog();
    spawn_all(&catalog, |catalog| {
        for databases in [["d1", "d2"], ["d2", "d1"]] {
            let resolver = catalog.resolver(["fr", "en"], databases).unwrap();
            assert_eq!(
                resolver.get("smile").map(|emoji| emoji.hex()).as_deref(),
                Some("1F606")
            );
        }
    });
    assert_eq!(catalog.cached_resolvers(), 2);
}
