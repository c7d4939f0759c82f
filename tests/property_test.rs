use proptest::prelude::*;
use propsync::catalog::{parse_keys, parse_translations, reconcile, TranslationMap};

fn key() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9_.]{0,12}"
}

fn value() -> impl Strategy<Value = String> {
    // Values survive the `key = value` form only once trimmed
    "[a-zA-Z0-9 =:,.!?]{0,20}".prop_map(|v| v.trim().to_string())
}

fn canonical_text(keys: &[String], comment_every: usize) -> String {
    let mut text = String::new();
    for (i, key) in keys.iter().enumerate() {
        if comment_every > 0 && i % comment_every == 0 {
            text.push_str(&format!("# section {}\n", i));
        }
        text.push_str(&format!("{} = base\n", key));
    }
    text
}

proptest! {
    #[test]
    fn reconcile_is_idempotent(
        keys in prop::collection::vec(key(), 0..20),
        values in prop::collection::vec(value(), 20),
        comment_every in 0usize..5,
    ) {
        let catalog = parse_keys(&canonical_text(&keys, comment_every));
        let translations: TranslationMap = keys
            .iter()
            .zip(&values)
            .step_by(2)
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        let first = reconcile(&catalog, &translations).render();
        let second = reconcile(&catalog, &parse_translations(&first)).render();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn every_key_is_translated_or_placeholder(
        keys in prop::collection::vec(key(), 0..20),
        values in prop::collection::vec(value(), 20),
    ) {
        let catalog = parse_keys(&canonical_text(&keys, 0));
        let translations: TranslationMap = keys
            .iter()
            .zip(&values)
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        let result = reconcile(&catalog, &translations);
        let reparsed = parse_translations(&result.render());

        for key in catalog.keys() {
            match translations.get(key).filter(|v| !v.is_empty()) {
                Some(v) => prop_assert_eq!(reparsed.get(key), Some(v)),
                None => {
                    prop_assert!(result.missing_keys.iter().any(|m| m == key));
                    prop_assert!(!reparsed.contains_key(key));
                }
            }
        }
    }

    #[test]
    fn comments_keep_relative_order(
        keys in prop::collection::vec(key(), 1..15),
        comment_every in 1usize..4,
    ) {
        let canonical = canonical_text(&keys, comment_every);
        let catalog = parse_keys(&canonical);
        let rendered = reconcile(&catalog, &TranslationMap::new()).render();

        let comments = |text: &str| -> Vec<String> {
            text.lines()
                .filter(|l| l.starts_with("# section"))
                .map(String::from)
                .collect()
        };
        prop_assert_eq!(comments(&canonical), comments(&rendered));
    }
}
