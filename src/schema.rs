//! Structured-data (JSON-LD) builders.
//!
//! Each builder is a pure function from `(site, region/content)` to an array of
//! schema.org objects. The failure policy is uniform: missing upstream
//! content yields an empty array, never an error, so a region with partial
//! data degrades to fewer schema entries instead of broken output.
//!
//! ## Units
//!
//! Service-area radii are stored in kilometers in [`ServiceRegion`] but
//! schema.org `GeoCircle.geoRadius` is meters. Every geo-circle emitted here
//! converts with [`radius_meters`]; no builder may leave kilometers in the
//! output.
//!
//! ## Deduplication
//!
//! Entries are deduplicated by their full JSON serialization. `serde_json`
//! maps are key-sorted by default, so two semantically-equal objects built in
//! different field orders still serialize identically — the serialization is
//! already canonical.

use crate::config::SiteConfig;
use crate::data::{ContentLink, FaqEntry, HowToStep, LocalContent};
use crate::regions::ServiceRegion;
use serde_json::{Value, json};

/// Dedup key for a structured-data entry: its canonical serialization.
pub fn schema_key(entry: &Value) -> String {
    entry.to_string()
}

/// Convert a service radius to the meters schema.org expects.
pub fn radius_meters(radius_km: f64) -> f64 {
    radius_km * 1000.0
}

/// Absolute URL for a path, for `@id` and `url` fields.
fn absolute(site: &SiteConfig, path: &str) -> String {
    format!("{}{}", site.base_url, path)
}

/// Site-wide Organization node. Referenced from per-branch LocalBusiness
/// entries via `parentOrganization`.
pub fn organization(site: &SiteConfig) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "Organization",
        "@id": absolute(site, "/#organization"),
        "name": site.site_name,
        "url": format!("{}/", site.base_url),
        "logo": absolute(site, "/images/logo.png"),
    })
}

/// Per-branch LocalBusiness node for a region's location page.
pub fn local_business(site: &SiteConfig, region: &ServiceRegion, slug: &str) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "LocalBusiness",
        "@id": absolute(site, &format!("/standort/{slug}#local-business")),
        "name": format!("{} {}", site.site_name, region.city),
        "url": absolute(site, &format!("/standort/{slug}")),
        "parentOrganization": { "@id": absolute(site, "/#organization") },
        "address": {
            "@type": "PostalAddress",
            "addressLocality": region.city,
            "addressRegion": region.state,
            "postalCode": region.postal_code,
            "addressCountry": region.country(),
        },
        "geo": {
            "@type": "GeoCoordinates",
            "latitude": region.latitude,
            "longitude": region.longitude,
        },
        "areaServed": {
            "@type": "GeoCircle",
            "geoMidpoint": {
                "@type": "GeoCoordinates",
                "latitude": region.latitude,
                "longitude": region.longitude,
            },
            "geoRadius": radius_meters(region.radius_km),
        },
    })
}

/// Region-scoped Service description, provider referenced by `@id`.
pub fn service(site: &SiteConfig, region: &ServiceRegion, slug: &str) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "Service",
        "serviceType": "Installation von Photovoltaikanlagen",
        "name": format!("Photovoltaik in {}", region.city),
        "provider": { "@id": absolute(site, &format!("/standort/{slug}#local-business")) },
        "areaServed": {
            "@type": "GeoCircle",
            "geoMidpoint": {
                "@type": "GeoCoordinates",
                "latitude": region.latitude,
                "longitude": region.longitude,
            },
            "geoRadius": radius_meters(region.radius_km),
        },
    })
}

/// FAQPage built from entries matching `category`, plus — when a region slug
/// is given — the entries tagged for that region.
///
/// Untagged entries of the category always qualify; tagged entries only
/// qualify for their own region. No matching entries yields no FAQPage.
pub fn faq_page(entries: &[FaqEntry], category: &str, region_slug: Option<&str>) -> Vec<Value> {
    let selected: Vec<&FaqEntry> = entries
        .iter()
        .filter(|e| e.category == category)
        .filter(|e| match (e.region_slug, region_slug) {
            (None, _) => true,
            (Some(tag), Some(slug)) => tag == slug,
            (Some(_), None) => false,
        })
        .collect();
    if selected.is_empty() {
        return vec![];
    }
    vec![json!({
        "@context": "https://schema.org",
        "@type": "FAQPage",
        "mainEntity": selected.iter().map(|e| json!({
            "@type": "Question",
            "name": e.question,
            "acceptedAnswer": {
                "@type": "Answer",
                "text": e.answer,
            },
        })).collect::<Vec<_>>(),
    })]
}

/// BreadcrumbList from a `(name, path)` trail. Empty trail → no entry.
pub fn breadcrumbs(site: &SiteConfig, trail: &[(&str, &str)]) -> Vec<Value> {
    if trail.is_empty() {
        return vec![];
    }
    vec![json!({
        "@context": "https://schema.org",
        "@type": "BreadcrumbList",
        "itemListElement": trail.iter().enumerate().map(|(i, (name, path))| json!({
            "@type": "ListItem",
            "position": i + 1,
            "name": name,
            "item": absolute(site, path),
        })).collect::<Vec<_>>(),
    })]
}

/// HowTo schema for the onboarding flow. Empty steps → no entry.
pub fn how_to(name: &str, steps: &[HowToStep]) -> Vec<Value> {
    if steps.is_empty() {
        return vec![];
    }
    vec![json!({
        "@context": "https://schema.org",
        "@type": "HowTo",
        "name": name,
        "step": steps.iter().enumerate().map(|(i, s)| json!({
            "@type": "HowToStep",
            "position": i + 1,
            "name": s.name,
            "text": s.text,
        })).collect::<Vec<_>>(),
    })]
}

/// WebPage node carrying a SpeakableSpecification for voice/AI surfaces.
pub fn speakable(site: &SiteConfig, path: &str, selectors: &[&str]) -> Vec<Value> {
    if selectors.is_empty() {
        return vec![];
    }
    vec![json!({
        "@context": "https://schema.org",
        "@type": "WebPage",
        "@id": absolute(site, path),
        "speakable": {
            "@type": "SpeakableSpecification",
            "cssSelector": selectors,
        },
    })]
}

fn item_list(site: &SiteConfig, name: String, links: &[ContentLink]) -> Option<Value> {
    if links.is_empty() {
        return None;
    }
    Some(json!({
        "@context": "https://schema.org",
        "@type": "ItemList",
        "name": name,
        "itemListElement": links.iter().enumerate().map(|(i, link)| json!({
            "@type": "ListItem",
            "position": i + 1,
            "name": link.title,
            "url": absolute(site, link.url),
        })).collect::<Vec<_>>(),
    }))
}

/// ItemList nodes from curated local content: one list per non-empty
/// collection (posts, case studies, service links).
pub fn content_item_lists(site: &SiteConfig, content: &LocalContent, city: &str) -> Vec<Value> {
    [
        item_list(site, format!("Ratgeber für {city}"), &content.posts),
        item_list(site, format!("Projekte in {city}"), &content.case_studies),
        item_list(site, format!("Leistungen in {city}"), &content.service_links),
    ]
    .into_iter()
    .flatten()
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data;

    fn site() -> SiteConfig {
        SiteConfig::default()
    }

    fn berlin() -> ServiceRegion {
        data::service_regions()
            .into_iter()
            .find(|r| r.city == "Berlin")
            .unwrap()
    }

    // =========================================================================
    // Geo circle unit contract
    // =========================================================================

    #[test]
    fn radius_is_converted_to_meters() {
        assert_eq!(radius_meters(60.0), 60_000.0);
        let business = local_business(&site(), &berlin(), "berlin");
        assert_eq!(
            business["areaServed"]["geoRadius"].as_f64().unwrap(),
            60_000.0
        );
        let svc = service(&site(), &berlin(), "berlin");
        assert_eq!(svc["areaServed"]["geoRadius"].as_f64().unwrap(), 60_000.0);
    }

    // =========================================================================
    // Node identity
    // =========================================================================

    #[test]
    fn local_business_id_ends_in_fragment() {
        let business = local_business(&site(), &berlin(), "berlin");
        assert!(
            business["@id"]
                .as_str()
                .unwrap()
                .ends_with("/standort/berlin#local-business")
        );
        assert_eq!(business["address"]["addressCountry"], "DE");
    }

    #[test]
    fn service_references_business_by_id() {
        let svc = service(&site(), &berlin(), "berlin");
        assert_eq!(svc["provider"]["@id"], local_business(&site(), &berlin(), "berlin")["@id"]);
        // Reference only — no embedded LocalBusiness type
        assert!(svc["provider"]["@type"].is_null());
    }

    // =========================================================================
    // FAQ selection
    // =========================================================================

    #[test]
    fn faq_includes_untagged_and_matching_region_entries() {
        let entries = data::faq_entries();
        let pages = faq_page(&entries, "standort", Some("berlin"));
        assert_eq!(pages.len(), 1);
        let questions = pages[0]["mainEntity"].as_array().unwrap();
        assert_eq!(questions.len(), 2);
    }

    #[test]
    fn faq_excludes_foreign_region_entries() {
        let entries = data::faq_entries();
        let pages = faq_page(&entries, "standort", Some("leipzig"));
        // All standort entries are region-tagged, none for Leipzig
        assert!(pages.is_empty());
    }

    #[test]
    fn faq_without_region_only_takes_untagged() {
        let entries = data::faq_entries();
        let pages = faq_page(&entries, "allgemein", None);
        assert_eq!(pages[0]["mainEntity"].as_array().unwrap().len(), 2);
        assert!(faq_page(&entries, "standort", None).is_empty());
    }

    #[test]
    fn empty_category_yields_no_page() {
        assert!(faq_page(&data::faq_entries(), "unbekannt", Some("berlin")).is_empty());
    }

    // =========================================================================
    // Graceful degradation on absent content
    // =========================================================================

    #[test]
    fn absent_content_yields_empty_arrays() {
        assert!(breadcrumbs(&site(), &[]).is_empty());
        assert!(how_to("x", &[]).is_empty());
        assert!(speakable(&site(), "/x", &[]).is_empty());
        assert!(content_item_lists(&site(), &LocalContent::default(), "Berlin").is_empty());
    }

    #[test]
    fn breadcrumb_positions_are_one_based() {
        let crumbs = breadcrumbs(&site(), &[("Start", "/"), ("Standorte", "/standort")]);
        let items = crumbs[0]["itemListElement"].as_array().unwrap();
        assert_eq!(items[0]["position"], 1);
        assert_eq!(items[1]["position"], 2);
        assert_eq!(
            items[1]["item"],
            "https://www.solarkraft-direkt.de/standort"
        );
    }

    #[test]
    fn item_lists_skip_empty_collections() {
        let content = data::local_content("muenchen").unwrap();
        // München has posts and service links but no case studies
        let lists = content_item_lists(&site(), &content, "München");
        assert_eq!(lists.len(), 2);
    }

    // =========================================================================
    // Canonical serialization
    // =========================================================================

    #[test]
    fn schema_key_is_order_insensitive_for_equal_objects() {
        // serde_json sorts map keys, so construction order cannot leak into
        // the dedup key.
        let a = json!({"b": 1, "a": 2});
        let b = json!({"a": 2, "b": 1});
        assert_eq!(schema_key(&a), schema_key(&b));
    }
}
