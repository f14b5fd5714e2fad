// crates/formcheck-core/src/tests/catalog.rs
// ============================================================================
// Module: Catalog Parity Tests
// Description: Unit tests for catalog coverage, parity, and entry shapes.
// Purpose: Keep every locale table complete and shape-consistent with English.
// Dependencies: formcheck-core messages module
// ============================================================================

//! ## Overview
//! Verifies the message tables cover every key, hold no duplicates, and that
//! each locale uses the same entry shape as English for every key.

use std::collections::BTreeSet;

use crate::messages::CatalogEntry;
use crate::messages::Locale;
use crate::messages::MessageKey;
use crate::messages::MessageParams;
use crate::messages::SUPPORTED_LOCALES;
use crate::messages::catalog::catalog_entries_for;
use crate::messages::catalog_for;

/// Shape label used to compare entries across locales.
fn shape(entry: CatalogEntry) -> &'static str {
    match entry {
        CatalogEntry::Text(_) => "text",
        CatalogEntry::Count(_) => "count",
        CatalogEntry::List(_) => "list",
    }
}

/// Parameter that fits an entry's shape.
fn fitting_params(entry: CatalogEntry) -> MessageParams {
    match entry {
        CatalogEntry::Text(_) => MessageParams::None,
        CatalogEntry::Count(_) => MessageParams::Number(7),
        CatalogEntry::List(_) => MessageParams::list(&["image/png", "image/gif"]),
    }
}

#[test]
fn english_covers_every_key() {
    let catalog = catalog_for(Locale::En);
    for key in MessageKey::ALL {
        assert!(catalog.contains_key(key), "missing English entry for {key}");
    }
}

#[test]
fn catalogs_have_matching_keys() {
    let en_keys: BTreeSet<MessageKey> = catalog_for(Locale::En).keys().copied().collect();
    for locale in SUPPORTED_LOCALES {
        let keys: BTreeSet<MessageKey> = catalog_for(*locale).keys().copied().collect();
        assert_eq!(en_keys, keys, "locale catalogs must stay in parity ({locale})");
    }
}

#[test]
fn catalogs_have_unique_keys_per_locale() {
    for locale in SUPPORTED_LOCALES {
        let entries = catalog_entries_for(*locale);
        let unique: BTreeSet<MessageKey> = entries.iter().map(|(key, _)| *key).collect();
        assert_eq!(unique.len(), entries.len(), "duplicate keys in locale {locale}");
    }
}

#[test]
fn catalogs_share_entry_shapes_with_english() {
    let en = catalog_for(Locale::En);
    for locale in SUPPORTED_LOCALES {
        for (key, entry) in catalog_for(*locale) {
            let en_entry = en.get(key).copied().expect("en key exists");
            assert_eq!(shape(en_entry), shape(*entry), "shape mismatch for {key} in {locale}");
        }
    }
}

#[test]
fn every_entry_renders_non_empty_text() {
    for locale in SUPPORTED_LOCALES {
        for (key, entry) in catalog_for(*locale) {
            let rendered = entry.render(&fitting_params(*entry)).expect("params fit entry");
            assert!(!rendered.is_empty(), "empty message for {key} in {locale}");
            assert!(!rendered.contains('{'), "unexpanded placeholder for {key} in {locale}");
        }
    }
}

#[test]
fn non_english_locales_differ_for_text_entries() {
    let en = catalog_for(Locale::En);
    for locale in SUPPORTED_LOCALES {
        if *locale == Locale::En {
            continue;
        }
        for (key, entry) in catalog_for(*locale) {
            if let (CatalogEntry::Text(localized), Some(CatalogEntry::Text(english))) =
                (entry, en.get(key))
            {
                assert_ne!(localized, english, "untranslated text for {key} in {locale}");
            }
        }
    }
}

#[test]
fn message_keys_round_trip_through_strings() {
    for key in MessageKey::ALL {
        assert_eq!(MessageKey::parse(key.as_str()), Some(*key));
    }
}

#[test]
fn message_key_parse_is_exact() {
    assert_eq!(MessageKey::parse("Required"), None);
    assert_eq!(MessageKey::parse("password"), None);
    assert_eq!(MessageKey::parse("password."), None);
    assert_eq!(MessageKey::parse("file.tooLarge.extra"), None);
    assert_eq!(MessageKey::parse("other.required"), None);
}

#[test]
fn locale_parse_accepts_region_tags_and_case() {
    assert_eq!(Locale::parse("en"), Some(Locale::En));
    assert_eq!(Locale::parse("EN"), Some(Locale::En));
    assert_eq!(Locale::parse("en-US"), Some(Locale::En));
    assert_eq!(Locale::parse("fr"), Some(Locale::Fr));
    assert_eq!(Locale::parse("fr_CA"), Some(Locale::Fr));
    assert_eq!(Locale::parse(" FR "), Some(Locale::Fr));
    assert_eq!(Locale::parse(""), None);
    assert_eq!(Locale::parse("de"), None);
}
