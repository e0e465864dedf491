//! Shared types for the resolution pipeline.
//!
//! The central split is between [`SeoOverride`] and [`ResolvedSeo`]:
//!
//! - `SeoOverride` is one *layer* of metadata. Every field is optional (or an
//!   empty collection); "absent" means "this layer has no opinion". Layers are
//!   never handed to a renderer directly — they only exist to be merged.
//! - `ResolvedSeo` is the engine's output: fully populated, deduplicated,
//!   stable-ordered, with one absolute canonical URL. A renderer can emit it
//!   verbatim without further validation.
//!
//! Keeping the two as distinct structs (instead of one struct with optional
//! fields read two ways) makes the merge signature honest: it takes partial
//! layers, and the resolver alone produces the total record.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Closed set of page identities the engine resolves for.
///
/// Detail pages (`ArticleDetail`, ...) expect the matching content entity on
/// the input; `Standort` expects a location slug as the final path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
#[value(rename_all = "kebab-case")]
pub enum PageId {
    Home,
    Photovoltaik,
    Preise,
    Kontakt,
    UeberUns,
    Magazin,
    Ratgeber,
    Standort,
    ArticleDetail,
    GuideDetail,
    HerstellerDetail,
    AnwendungsfallDetail,
}

/// One hreflang alternate link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlternateHref {
    pub hreflang: String,
    pub href: String,
}

impl AlternateHref {
    pub fn new(hreflang: &str, href: &str) -> Self {
        Self {
            hreflang: hreflang.to_string(),
            href: href.to_string(),
        }
    }

    /// Dedup key: alternates are equal when language and target both match,
    /// language compared case-insensitively.
    pub fn key(&self) -> String {
        format!("{}|{}", self.hreflang.to_lowercase(), self.href)
    }
}

/// An extra `<meta>` tag carried as data. Exactly one of `name` / `property`
/// should be set; `property` is the Open-Graph-style attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaTag {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property: Option<String>,
    pub content: String,
}

impl MetaTag {
    pub fn named(name: &str, content: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            property: None,
            content: content.to_string(),
        }
    }

    pub fn with_property(property: &str, content: &str) -> Self {
        Self {
            name: None,
            property: Some(property.to_string()),
            content: content.to_string(),
        }
    }

    /// Dedup key: the tag's name-or-property, lowercased. Two tags addressing
    /// the same attribute collapse to the higher-priority one.
    pub fn key(&self) -> String {
        self.name
            .as_deref()
            .or(self.property.as_deref())
            .unwrap_or_default()
            .to_lowercase()
    }
}

/// Geographic metadata. Used both as an override fragment and in the resolved
/// record; the resolver guarantees `position` is set whenever both
/// coordinates are present, whichever layer supplied them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Geo {
    /// ISO 3166-2 code, e.g. `DE-BE`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placename: Option<String>,
    /// `"{latitude};{longitude}"`, the `geo.position` / ICBM wire format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

impl Geo {
    /// True when no field carries data — such a fragment merges as a no-op.
    pub fn is_empty(&self) -> bool {
        *self == Geo::default()
    }
}

/// Open Graph override fragment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OgOverride {
    pub title: Option<String>,
    pub description: Option<String>,
    /// `og:type`, e.g. `website` or `article`.
    pub og_type: Option<String>,
    pub url: Option<String>,
    pub image: Option<String>,
    pub image_width: Option<u32>,
    pub image_height: Option<u32>,
    pub image_type: Option<String>,
    pub site_name: Option<String>,
    pub locale: Option<String>,
    /// `article:published_time`, ISO-8601. Only meaningful for articles.
    pub published_time: Option<String>,
}

/// Twitter card override fragment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TwitterOverride {
    pub card: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub site: Option<String>,
}

/// One layer of metadata overrides.
///
/// Scalars and the nested `og`/`twitter`/`geo` fragments *replace* on merge
/// (later layer's defined keys win); the collection fields *union* across
/// layers and are deduplicated. See [`crate::merge::merge`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SeoOverride {
    pub title: Option<String>,
    pub description: Option<String>,
    pub keywords: Vec<String>,
    pub canonical: Option<String>,
    pub robots: Option<String>,
    pub og: Option<OgOverride>,
    pub twitter: Option<TwitterOverride>,
    pub geo: Option<Geo>,
    pub alternates: Vec<AlternateHref>,
    pub structured_data: Vec<Value>,
    pub additional_meta: Vec<MetaTag>,
}

/// Fully-resolved Open Graph block. Every field concrete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedOg {
    pub title: String,
    pub description: String,
    pub og_type: String,
    pub url: String,
    pub image: String,
    pub image_width: u32,
    pub image_height: u32,
    pub image_type: String,
    pub site_name: String,
    pub locale: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_time: Option<String>,
}

/// Fully-resolved Twitter card block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedTwitter {
    pub card: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub site: String,
}

/// The engine's output record, ready for verbatim head injection.
///
/// Invariants: `url == canonical`; `canonical` is absolute `https://`; every
/// collection is deduplicated and stable-ordered; `geo` is only present when
/// some layer supplied geographic data, and then `position` is set whenever
/// both coordinates are.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedSeo {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub canonical: String,
    /// Always identical to `canonical`; kept as its own field because
    /// renderers address the two independently (link tag vs. og:url source).
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub robots: Option<String>,
    pub og: ResolvedOg,
    pub twitter: ResolvedTwitter,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo: Option<Geo>,
    pub alternates: Vec<AlternateHref>,
    pub structured_data: Vec<Value>,
    pub additional_meta: Vec<MetaTag>,
}

/// A blog article, already looked up by the caller.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Article {
    pub title: String,
    pub excerpt: String,
    pub slug: String,
    pub image: Option<String>,
    /// German display date, e.g. `"15. März 2024"`. Parsed to ISO-8601 for
    /// `article:published_time`; unparseable dates are omitted, not defaulted.
    pub published: Option<String>,
    pub author: Option<String>,
    pub category: Option<String>,
}

/// A how-to / knowledge-base guide.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Guide {
    pub title: String,
    pub description: String,
    pub slug: String,
    pub image: Option<String>,
}

/// A hardware manufacturer profile page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Manufacturer {
    pub name: String,
    pub description: String,
    pub slug: String,
    pub image: Option<String>,
}

/// An application/use-case page (e.g. single-family home, agriculture).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UseCase {
    pub title: String,
    pub description: String,
    pub slug: String,
    pub image: Option<String>,
}

/// Input to one resolution call.
///
/// Content entities are optional and assumed already resolved by the caller;
/// the engine never performs lookups for them. A detail page without its
/// entity degrades to the static page config, it does not error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolveInput {
    pub page: PageId,
    pub pathname: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub article: Option<Article>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guide: Option<Guide>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<Manufacturer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_case: Option<UseCase>,
}

impl ResolveInput {
    /// A bare page/path input with no content entities.
    pub fn page(page: PageId, pathname: &str) -> Self {
        Self {
            page,
            pathname: pathname.to_string(),
            article: None,
            guide: None,
            manufacturer: None,
            use_case: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alternate_key_is_case_insensitive_on_language_only() {
        let a = AlternateHref::new("de-DE", "https://example.de/");
        let b = AlternateHref::new("de-de", "https://example.de/");
        assert_eq!(a.key(), b.key());

        let c = AlternateHref::new("de-DE", "https://example.de/other");
        assert_ne!(a.key(), c.key());
    }

    #[test]
    fn meta_tag_key_prefers_name_over_property() {
        let named = MetaTag::named("Geo.Region", "DE-BE");
        assert_eq!(named.key(), "geo.region");

        let prop = MetaTag::with_property("og:see_also", "x");
        assert_eq!(prop.key(), "og:see_also");
    }

    #[test]
    fn empty_geo_detected() {
        assert!(Geo::default().is_empty());
        let geo = Geo {
            latitude: Some(52.52),
            ..Geo::default()
        };
        assert!(!geo.is_empty());
    }

    #[test]
    fn page_id_serializes_kebab_case() {
        let json = serde_json::to_string(&PageId::ArticleDetail).unwrap();
        assert_eq!(json, "\"article-detail\"");
        let back: PageId = serde_json::from_str("\"hersteller-detail\"").unwrap();
        assert_eq!(back, PageId::HerstellerDetail);
    }

    #[test]
    fn override_default_is_fully_unset() {
        let layer = SeoOverride::default();
        assert!(layer.title.is_none());
        assert!(layer.keywords.is_empty());
        assert!(layer.structured_data.is_empty());
    }
}
