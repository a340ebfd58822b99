//! Integration tests against the dataset embedded at build time.
//!
//! The snapshot values below track the tables under `data/`; update them
//! together with the data.

use std::sync::Arc;

use pretty_assertions::assert_eq;
use shortmoji_core::{EmbeddedResources, EmojiCatalog, ResourceSource, global};

fn hex_of(
    catalog: &EmojiCatalog,
    languages: &[&str],
    databases: &[&str],
    shortcode: &str,
) -> Option<String> {
    catalog
        .resolver(languages, databases)
        .expect("embedded dataset should index")
        .get(shortcode)
        .map(|emoji| emoji.hex())
}

// ============================================================================
// SNAPSHOT TESTS
// ============================================================================

mod snapshot {
    use super::*;
    #[allow(unused_imports)]
    use pretty_assertions::assert_eq;

    #[test]
    fn test_embedded_resource_names() {
        let names = EmbeddedResources.names().unwrap();
        assert_eq!(names.len(), 14);
        assert_eq!(EmbeddedResources.len(), 14);
        assert!(names.iter().all(|name| name.starts_with("shortcodes.")));
    }

    #[test]
    fn test_language_and_database_names() {
        let catalog = global();
        assert_eq!(
            catalog.language_names().unwrap(),
            &["de", "en", "en-gb", "fr", "ja"]
        );
        assert_eq!(
            catalog.database_names().unwrap(),
            &[
                "cldr",
                "emojibase",
                "emojibase-legacy",
                "github",
                "iamcal",
                "joypixels"
            ]
        );
    }

    #[test]
    fn test_index_counts() {
        let index = global().index().unwrap();
        assert_eq!(index.resource_count(), 14);
        assert_eq!(index.entry_count(), 212);
        assert!(index.database("en", "emojibase-legacy").is_some());
        assert!(index.database("fr", "github").is_none());
    }

    #[test]
    fn test_distinct_emojis() {
        let hexes: Vec<String> = global()
            .all_emojis()
            .unwrap()
            .iter()
            .map(|emoji| emoji.hex())
            .collect();
        assert_eq!(
            hexes,
            vec![
                "2615",
                "263A",
                "263A-FE0F",
                "26BD",
                "2764",
                "2764-FE0F",
                "1F1E9-1F1EA",
                "1F1EB-1F1F7",
                "1F1EC-1F1E7",
                "1F1EF-1F1F5",
                "1F308",
                "1F355",
                "1F363",
                "1F37A",
                "1F389",
                "1F3C8",
                "1F431",
                "1F436",
                "1F44D",
                "1F44D-1F3FB",
                "1F44E",
                "1F468-200D-1F469-200D-1F467",
                "1F469-200D-1F4BB",
                "1F4AF",
                "1F525",
                "1F600",
                "1F601",
                "1F602",
                "1F603",
                "1F604",
                "1F606",
                "1F609",
                "1F60D",
                "1F622",
                "1F680",
            ]
        );
    }

    #[test]
    fn test_every_emoji_round_trips() {
        let catalog = global();
        for emoji in catalog.all_emojis().unwrap() {
            let found = catalog
                .lookup(emoji.as_str())
                .unwrap()
                .unwrap_or_else(|| panic!("{} should be found", emoji.hex()));
            assert!(Arc::ptr_eq(found, emoji));
        }
    }
}

// ============================================================================
// PRIORITY TESTS
// ============================================================================

mod priority {
    use super::*;
    #[allow(unused_imports)]
    use pretty_assertions::assert_eq;

    #[test]
    fn test_smile_single_database() {
        let catalog = global();
        assert_eq!(
            hex_of(catalog, &["en"], &["emojibase-legacy"], "smile").as_deref(),
            Some("1F603")
        );
        assert_eq!(
            hex_of(catalog, &["en"], &["emojibase"], "smile").as_deref(),
            Some("1F604")
        );
    }

    #[test]
    fn test_smile_database_order() {
        let catalog = global();
        assert_eq!(
            hex_of(catalog, &["en"], &["emojibase-legacy", "emojibase"], "smile").as_deref(),
            Some("1F603")
        );
        assert_eq!(
            hex_of(catalog, &["en"], &["emojibase", "emojibase-legacy"], "smile").as_deref(),
            Some("1F604")
        );
    }

    #[test]
    fn test_football_language_order() {
        let catalog = global();
        assert_eq!(
            hex_of(catalog, &["en-gb", "en"], &["emojibase"], "football").as_deref(),
            Some("26BD")
        );
        assert_eq!(
            hex_of(catalog, &["en", "en-gb"], &["emojibase"], "football").as_deref(),
            Some("1F3C8")
        );
    }

    #[test]
    fn test_variation_selector_sequences_stay_distinct() {
        let catalog = global();
        assert_eq!(
            hex_of(catalog, &["en"], &["github", "emojibase"], "heart").as_deref(),
            Some("2764")
        );
        assert_eq!(
            hex_of(catalog, &["en"], &["emojibase", "github"], "heart").as_deref(),
            Some("2764-FE0F")
        );
    }

    #[test]
    fn test_lower_priority_shortcodes_are_kept() {
        let catalog = global();
        let resolver = catalog.resolver(["en-gb", "en"], ["emojibase"]).unwrap();
        let hot_beverage = catalog.lookup("\u{2615}").unwrap().unwrap();
        assert_eq!(resolver.shortcodes_for(hot_beverage), vec!["coffee", "tea"]);
    }

    #[test]
    fn test_other_languages() {
        let catalog = global();
        assert_eq!(
            hex_of(catalog, &["fr"], &["emojibase"], "sourire").as_deref(),
            Some("1F604")
        );
        assert_eq!(
            hex_of(catalog, &["ja"], &["emojibase"], "すし").as_deref(),
            Some("1F363")
        );
        assert_eq!(hex_of(catalog, &["fr"], &["emojibase"], "smile"), None);
    }

    #[test]
    fn test_shortcodes_are_not_normalized() {
        let catalog = global();
        assert_eq!(hex_of(catalog, &["en"], &["emojibase"], ":smile:"), None);
        assert_eq!(hex_of(catalog, &["en"], &["emojibase"], "SMILE"), None);
        assert_eq!(
            hex_of(catalog, &["en"], &["emojibase"], "+1_tone1").as_deref(),
            Some("1F44D-1F3FB")
        );
    }
}

// ============================================================================
// PER-EMOJI VIEW TESTS
// ============================================================================

mod per_emoji {
    use super::*;
    #[allow(unused_imports)]
    use pretty_assertions::assert_eq;

    #[test]
    fn test_shortcodes_of_single_language_emoji() {
        let catalog = global();
        let beer = catalog.lookup("\u{1F37A}").unwrap().unwrap();
        let entries = catalog.shortcodes_of(beer).unwrap();
        let flattened: Vec<(&str, &str, Vec<&str>)> = entries
            .iter()
            .map(|entry| {
                (
                    entry.language,
                    entry.database,
                    entry.shortcodes.iter().map(String::as_str).collect(),
                )
            })
            .collect();
        assert_eq!(
            flattened,
            vec![
                ("de", "cldr", vec!["bierkrug"]),
                ("de", "emojibase", vec!["bier"]),
            ]
        );
    }

    #[test]
    fn test_shortcodes_of_zwj_sequence() {
        let catalog = global();
        let family = catalog
            .lookup("\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}")
            .unwrap()
            .unwrap();
        let pairs: Vec<(&str, &str)> = catalog
            .shortcodes_of(family)
            .unwrap()
            .iter()
            .map(|entry| (entry.language, entry.database))
            .collect();
        assert_eq!(pairs, vec![("en", "cldr"), ("en", "emojibase")]);
    }
}

// ============================================================================
// CATALOG INSTANCE TESTS
// ============================================================================

mod instances {
    use super::*;
    #[allow(unused_imports)]
    use pretty_assertions::assert_eq;

    #[test]
    fn test_separate_catalogs_have_separate_caches() {
        let local = EmojiCatalog::embedded();
        let a = local.resolver(["en"], ["github"]).unwrap();
        let b = global().resolver(["en"], ["github"]).unwrap();
        assert!(!Arc::ptr_eq(&a, &b));
        assert_eq!(a.len(), b.len());
        assert_eq!(local.cached_resolvers(), 1);
    }

    #[test]
    fn test_unknown_selection_on_embedded_dataset() {
        let resolver = global()
            .resolver(["xx-unknown"], ["also-unknown"])
            .unwrap();
        assert!(resolver.is_empty());
    }
}
