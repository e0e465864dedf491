//! Location page configuration: build and memoize per-region layers.
//!
//! Building a location layer touches every schema category (business,
//! service, FAQ, breadcrumbs, how-to, speakable, item lists), so the result
//! is memoized by slug. Regions are compile-time static, which makes the
//! cache trivially correct: entries are built lazily on first request and
//! never invalidated for the process lifetime.
//!
//! The cache is an explicit type owned by the engine — not hidden module
//! state — and the map is mutex-guarded so the engine stays `Send + Sync`
//! under a multi-threaded host. Holding the lock across the build serializes
//! first-population per slug.

use crate::config::SiteConfig;
use crate::data;
use crate::dedupe::{dedupe_by, dedupe_keywords};
use crate::regions::ServiceRegion;
use crate::schema;
use crate::types::{AlternateHref, Geo, MetaTag, SeoOverride};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Process-lifetime memoization of built location layers, keyed by slug.
#[derive(Default)]
pub struct LocationConfigCache {
    inner: Mutex<HashMap<String, Arc<SeoOverride>>>,
}

impl LocationConfigCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached layer for `slug`, building it on first request.
    /// All callers after the first receive the same `Arc`.
    pub fn get_or_build<F>(&self, slug: &str, build: F) -> Arc<SeoOverride>
    where
        F: FnOnce() -> SeoOverride,
    {
        let mut map = self.inner.lock().expect("location cache poisoned");
        map.entry(slug.to_string())
            .or_insert_with(|| Arc::new(build()))
            .clone()
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.inner.lock().unwrap().len()
    }
}

/// Build the full metadata layer for one region's location page.
///
/// Pure function of the region and the compiled-in dataset; memoization is
/// the caller's concern (see [`LocationConfigCache`]).
pub fn build_location_config(
    site: &SiteConfig,
    region: &ServiceRegion,
    slug: &str,
) -> SeoOverride {
    let canonical = format!("{}/standort/{}", site.base_url, slug);

    // City and state coincide for city-states (Berlin, Hamburg, Wien), so the
    // keyword list is deduplicated case-insensitively after templating.
    let keywords = dedupe_keywords(vec![
        format!("Photovoltaik {}", region.city),
        format!("Solaranlage {}", region.city),
        format!("Photovoltaik {}", region.state),
        format!("Solarfirma {}", region.city),
        format!("Stromspeicher {}", region.city),
    ]);

    let mut alternates = vec![
        AlternateHref::new("de", &canonical),
        AlternateHref::new("de-DE", &canonical),
        AlternateHref::new("x-default", &canonical),
    ];
    match region.country() {
        "AT" => alternates.push(AlternateHref::new("de-AT", &canonical)),
        "CH" => alternates.push(AlternateHref::new("de-CH", &canonical)),
        _ => {}
    }

    let faq = data::faq_entries();
    let mut structured_data = vec![
        schema::local_business(site, region, slug),
        schema::service(site, region, slug),
    ];
    structured_data.extend(schema::faq_page(&faq, "standort", Some(slug)));
    let location_path = format!("/standort/{slug}");
    structured_data.extend(schema::breadcrumbs(
        site,
        &[
            ("Start", "/"),
            ("Standorte", "/standort"),
            (region.city.as_str(), location_path.as_str()),
        ],
    ));
    structured_data.extend(schema::how_to(
        &format!("In {} zur eigenen Photovoltaikanlage", region.city),
        &data::onboarding_steps(),
    ));
    structured_data.extend(schema::speakable(
        site,
        &format!("/standort/{slug}"),
        &data::speakable_selectors(),
    ));
    if let Some(content) = data::local_content(slug) {
        structured_data.extend(schema::content_item_lists(site, &content, &region.city));
    }
    let structured_data = dedupe_by(structured_data, schema::schema_key);

    SeoOverride {
        title: Some(format!(
            "Photovoltaik {} – Solaranlage mit Speicher | {}",
            region.city, site.site_name
        )),
        description: Some(format!(
            "Photovoltaikanlagen in {city} und Umgebung: Beratung, Festpreisangebot und \
             Installation durch unser Montageteam in {state}. Jetzt kostenlose \
             Dachanalyse für {city} anfragen.",
            city = region.city,
            state = region.state,
        )),
        keywords,
        canonical: Some(canonical),
        geo: Some(Geo {
            region: Some(region.region_code.clone()),
            placename: Some(region.city.clone()),
            position: None,
            latitude: Some(region.latitude),
            longitude: Some(region.longitude),
        }),
        alternates,
        structured_data,
        additional_meta: vec![
            MetaTag::named("geo.placename", &region.city),
            MetaTag::named("geo.region", &region.region_code),
            MetaTag::named(
                "ICBM",
                &format!("{}, {}", region.latitude, region.longitude),
            ),
        ],
        ..SeoOverride::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::service_regions;

    fn site() -> SiteConfig {
        SiteConfig::default()
    }

    fn region_named(city: &str) -> ServiceRegion {
        service_regions().into_iter().find(|r| r.city == city).unwrap()
    }

    #[test]
    fn berlin_layer_has_location_schema() {
        let layer = build_location_config(&site(), &region_named("Berlin"), "berlin");
        let types: Vec<&str> = layer
            .structured_data
            .iter()
            .filter_map(|v| v["@type"].as_str())
            .collect();
        assert!(types.contains(&"LocalBusiness"));
        assert!(types.contains(&"Service"));
        assert!(types.contains(&"FAQPage"));
        assert!(types.contains(&"BreadcrumbList"));
        assert!(types.contains(&"HowTo"));
        assert!(types.contains(&"ItemList"));
    }

    #[test]
    fn region_without_curated_content_still_builds() {
        let layer = build_location_config(&site(), &region_named("Leipzig"), "leipzig");
        let types: Vec<&str> = layer
            .structured_data
            .iter()
            .filter_map(|v| v["@type"].as_str())
            .collect();
        // No FAQ tagged for Leipzig, no local content — but the core schema
        // is intact.
        assert!(types.contains(&"LocalBusiness"));
        assert!(!types.contains(&"FAQPage"));
        assert!(!types.contains(&"ItemList"));
    }

    #[test]
    fn city_state_keyword_overlap_deduped() {
        let layer = build_location_config(&site(), &region_named("Berlin"), "berlin");
        assert!(layer.keywords.contains(&"Photovoltaik Berlin".to_string()));
        let lowered: Vec<String> = layer.keywords.iter().map(|k| k.to_lowercase()).collect();
        let mut unique = lowered.clone();
        unique.dedup();
        assert_eq!(lowered.len(), unique.len());
        assert_eq!(layer.keywords.len(), 4);
    }

    #[test]
    fn german_regions_get_de_alternates_only() {
        let layer = build_location_config(&site(), &region_named("Berlin"), "berlin");
        let langs: Vec<&str> = layer.alternates.iter().map(|a| a.hreflang.as_str()).collect();
        assert_eq!(langs, vec!["de", "de-DE", "x-default"]);
    }

    #[test]
    fn austrian_region_adds_de_at() {
        let layer = build_location_config(&site(), &region_named("Wien"), "wien");
        assert!(layer.alternates.iter().any(|a| a.hreflang == "de-AT"));
        assert!(!layer.alternates.iter().any(|a| a.hreflang == "de-CH"));
    }

    #[test]
    fn swiss_region_adds_de_ch() {
        let layer = build_location_config(&site(), &region_named("Zürich"), "zuerich");
        assert!(layer.alternates.iter().any(|a| a.hreflang == "de-CH"));
    }

    #[test]
    fn geo_carries_coordinates_without_position() {
        let layer = build_location_config(&site(), &region_named("Berlin"), "berlin");
        let geo = layer.geo.unwrap();
        assert_eq!(geo.latitude, Some(52.520008));
        assert_eq!(geo.region.as_deref(), Some("DE-BE"));
        // Position completion is the resolver's job
        assert!(geo.position.is_none());
    }

    #[test]
    fn cache_builds_once_per_slug() {
        let cache = LocationConfigCache::new();
        let site = site();
        let region = region_named("Berlin");
        let mut builds = 0;
        for _ in 0..3 {
            let layer = cache.get_or_build("berlin", || {
                builds += 1;
                build_location_config(&site, &region, "berlin")
            });
            assert!(layer.title.as_deref().unwrap().contains("Berlin"));
        }
        assert_eq!(builds, 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn cached_reference_is_shared() {
        let cache = LocationConfigCache::new();
        let site = site();
        let region = region_named("Berlin");
        let a = cache.get_or_build("berlin", || build_location_config(&site, &region, "berlin"));
        let b = cache.get_or_build("berlin", || build_location_config(&site, &region, "berlin"));
        assert!(Arc::ptr_eq(&a, &b));
    }
}
