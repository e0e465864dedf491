//! First-occurrence-wins deduplication, keyed by a caller-supplied function.
//!
//! Every collection in a resolved metadata record (keywords, hreflang
//! alternates, additional meta tags, structured-data entries) is deduplicated
//! with this one helper; only the key function differs. Earlier entries come
//! from higher-priority layers, so keeping the first occurrence preserves
//! layer precedence while later layers can still append new entries.

use std::collections::HashSet;

/// Collapse `items` into a first-occurrence-wins sequence.
///
/// Relative order of surviving items is the order of their first appearance.
/// Idempotent: deduplicating an already-deduplicated sequence is a no-op.
pub fn dedupe_by<T, K, F>(items: Vec<T>, key_fn: F) -> Vec<T>
where
    K: std::hash::Hash + Eq,
    F: Fn(&T) -> K,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(key_fn(item)))
        .collect()
}

/// Case-insensitive keyword deduplication. First-seen casing survives.
pub fn dedupe_keywords(keywords: Vec<String>) -> Vec<String> {
    dedupe_by(keywords, |k| k.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_first_occurrence() {
        let out = dedupe_by(vec!["a", "b", "a", "c", "b"], |s| s.to_string());
        assert_eq!(out, vec!["a", "b", "c"]);
    }

    #[test]
    fn preserves_relative_order() {
        let out = dedupe_by(vec![3, 1, 3, 2, 1, 4], |n| *n);
        assert_eq!(out, vec![3, 1, 2, 4]);
    }

    #[test]
    fn idempotent() {
        let once = dedupe_by(vec!["x", "y", "x"], |s| s.to_string());
        let twice = dedupe_by(once.clone(), |s| s.to_string());
        assert_eq!(once, twice);
    }

    #[test]
    fn empty_input() {
        let out: Vec<u8> = dedupe_by(vec![], |n| *n);
        assert!(out.is_empty());
    }

    #[test]
    fn no_two_survivors_share_a_key() {
        let out = dedupe_by(vec!["Solar", "solar", "SOLAR", "Wind"], |s| {
            s.to_lowercase()
        });
        assert_eq!(out, vec!["Solar", "Wind"]);
    }

    #[test]
    fn keywords_keep_first_seen_casing() {
        let out = dedupe_keywords(vec![
            "Photovoltaik".into(),
            "photovoltaik".into(),
            "Speicher".into(),
        ]);
        assert_eq!(out, vec!["Photovoltaik", "Speicher"]);
    }
}
