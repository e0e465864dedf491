//! Canonical URL slug generation from free-form place names.
//!
//! Converts display names to the URL-safe identifiers used for location
//! routing and canonical URLs: `"Frankfurt am Main"` → `"frankfurt-am-main"`,
//! `"München"` → `"muenchen"`.
//!
//! ## German transliteration
//!
//! Generic diacritic stripping turns `ü` into `u`, but German convention
//! spells city slugs with digraphs (`muenchen`, not `munchen`). Umlauts and
//! `ß` are therefore mapped explicitly *before* the generic Unicode fold,
//! which handles everything else (`é` → `e`, `č` → `c`, ...).
//!
//! The function is total and idempotent: it never fails, empty input yields
//! an empty slug, and `slugify(slugify(x)) == slugify(x)` for all inputs.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Convert a free-form name into a canonical URL slug.
///
/// Steps: NFC-recompose, lowercase, German digraph mapping, NFD decompose and
/// strip combining marks, whitespace → hyphen, drop everything outside
/// `[a-z0-9-]`, collapse repeated hyphens, trim leading/trailing hyphens.
pub fn slugify(text: &str) -> String {
    // Recompose first so a decomposed "u + combining diaeresis" still hits
    // the explicit umlaut mapping below.
    let mut mapped = String::with_capacity(text.len());
    for c in text.nfc() {
        match c {
            'ä' | 'Ä' => mapped.push_str("ae"),
            'ö' | 'Ö' => mapped.push_str("oe"),
            'ü' | 'Ü' => mapped.push_str("ue"),
            'ß' | 'ẞ' => mapped.push_str("ss"),
            _ => mapped.extend(c.to_lowercase()),
        }
    }

    let mut slug = String::with_capacity(mapped.len());
    let mut prev_hyphen = true; // suppress leading hyphens
    for c in mapped.nfd().filter(|c| !is_combining_mark(*c)) {
        let c = if c.is_whitespace() { '-' } else { c };
        match c {
            'a'..='z' | '0'..='9' => {
                slug.push(c);
                prev_hyphen = false;
            }
            '-' => {
                if !prev_hyphen {
                    slug.push('-');
                }
                prev_hyphen = true;
            }
            _ => {}
        }
    }

    slug.trim_end_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_name_lowercased() {
        assert_eq!(slugify("Berlin"), "berlin");
    }

    #[test]
    fn spaces_become_single_hyphens() {
        assert_eq!(slugify("Frankfurt am Main"), "frankfurt-am-main");
        assert_eq!(slugify("Frankfurt  am   Main"), "frankfurt-am-main");
    }

    #[test]
    fn german_umlauts_use_digraphs() {
        assert_eq!(slugify("München"), "muenchen");
        assert_eq!(slugify("Köln"), "koeln");
        assert_eq!(slugify("Würzburg"), "wuerzburg");
        assert_eq!(slugify("Gießen"), "giessen");
    }

    #[test]
    fn uppercase_umlauts_too() {
        assert_eq!(slugify("ÖSTERREICH"), "oesterreich");
        assert_eq!(slugify("Übersee"), "uebersee");
    }

    #[test]
    fn decomposed_umlaut_matches_precomposed() {
        // "u" + U+0308 COMBINING DIAERESIS
        assert_eq!(slugify("Mu\u{308}nchen"), "muenchen");
    }

    #[test]
    fn generic_diacritics_stripped() {
        assert_eq!(slugify("Caféليلة"), "cafe");
        assert_eq!(slugify("Besançon"), "besancon");
    }

    #[test]
    fn symbols_dropped_not_hyphenated() {
        assert_eq!(slugify("St. Pölten"), "st-poelten");
        assert_eq!(slugify("Rothenburg o.d. Tauber"), "rothenburg-od-tauber");
    }

    #[test]
    fn hyphens_collapse_and_trim() {
        assert_eq!(slugify("--Bad -- Homburg--"), "bad-homburg");
        assert_eq!(slugify(" - "), "");
    }

    #[test]
    fn empty_input_yields_empty_slug() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn idempotent() {
        for s in ["München", "Frankfurt am Main", "St. Pölten", "--x--", ""] {
            let once = slugify(s);
            assert_eq!(slugify(&once), once);
        }
    }

    #[test]
    fn digits_preserved() {
        assert_eq!(slugify("Halle (Saale) 2"), "halle-saale-2");
    }
}
