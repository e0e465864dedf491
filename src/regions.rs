//! Service region records and the slug-indexed registry.
//!
//! Regions are a fixed dataset loaded once at startup. The registry validates
//! the dataset eagerly (bad region codes are a data defect and must fail the
//! process, not a request) and builds one lookup map from normalized slug to
//! region. Both the explicit slug override and the slugified city name are
//! registered, so `/standort/frankfurt-am-main` resolves whether the dataset
//! spelled the slug out or not.
//!
//! [`RegionRegistry::canonical_slug`] is the single source of truth for URL
//! segments: canonical URLs are always built from it, never from the display
//! name, so the two can never diverge.

use crate::slug::slugify;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegionError {
    #[error("region {city:?} has region code {code:?} without a country separator")]
    MissingSeparator { city: String, code: String },
    #[error("regions {first:?} and {second:?} collide on slug {slug:?}")]
    DuplicateSlug {
        slug: String,
        first: String,
        second: String,
    },
}

/// One serviceable region. Identity is the city name; the slug is derived
/// from it unless `slug` overrides it explicitly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceRegion {
    pub city: String,
    pub state: String,
    /// ISO 3166-2 code, e.g. `DE-BE`. The part before `-` is the country.
    pub region_code: String,
    pub postal_code: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Service-area radius. Stored in kilometers; schema output always
    /// converts to meters.
    pub radius_km: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

impl ServiceRegion {
    /// The URL slug for this region: explicit override, else slugified city.
    pub fn canonical_slug(&self) -> String {
        match &self.slug {
            Some(s) => s.clone(),
            None => slugify(&self.city),
        }
    }

    /// Country prefix of the region code (`DE-BE` → `DE`).
    ///
    /// Registry construction guarantees the separator exists, so this never
    /// fires its fallback on registry-held regions.
    pub fn country(&self) -> &str {
        self.region_code
            .split_once('-')
            .map(|(c, _)| c)
            .unwrap_or(&self.region_code)
    }
}

/// Slug-indexed lookup over the fixed region list.
#[derive(Debug)]
pub struct RegionRegistry {
    regions: Vec<ServiceRegion>,
    index: HashMap<String, usize>,
}

impl RegionRegistry {
    /// Build the registry, validating the dataset.
    ///
    /// Fails on a region code without a country separator and on two regions
    /// whose slugs collide. A region's own explicit slug may shadow its
    /// derived city slug without error.
    pub fn new(regions: Vec<ServiceRegion>) -> Result<Self, RegionError> {
        let mut index: HashMap<String, usize> = HashMap::new();
        for (i, region) in regions.iter().enumerate() {
            if !region.region_code.contains('-') {
                return Err(RegionError::MissingSeparator {
                    city: region.city.clone(),
                    code: region.region_code.clone(),
                });
            }

            // Explicit slug wins; register it after the derived one so it
            // overwrites on intra-region collision.
            let derived = slugify(&region.city);
            let mut slugs = vec![derived];
            if let Some(explicit) = &region.slug {
                slugs.push(slugify(explicit));
            }
            for slug in slugs {
                if slug.is_empty() {
                    continue;
                }
                if let Some(&other) = index.get(&slug) {
                    if other != i {
                        return Err(RegionError::DuplicateSlug {
                            slug,
                            first: regions[other].city.clone(),
                            second: region.city.clone(),
                        });
                    }
                }
                index.insert(slug, i);
            }
        }
        Ok(Self { regions, index })
    }

    /// Resolve a free-form path segment to a region. Input is slugified
    /// before lookup, so `"München"`, `"muenchen"` and `"MUENCHEN"` all hit.
    pub fn by_slug(&self, input: &str) -> Option<&ServiceRegion> {
        let slug = slugify(input);
        self.index.get(&slug).map(|&i| &self.regions[i])
    }

    /// All regions, in dataset order.
    pub fn all(&self) -> &[ServiceRegion] {
        &self.regions
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region(city: &str, code: &str, slug: Option<&str>) -> ServiceRegion {
        ServiceRegion {
            city: city.to_string(),
            state: "Teststate".to_string(),
            region_code: code.to_string(),
            postal_code: "10000".to_string(),
            latitude: 50.0,
            longitude: 10.0,
            radius_km: 50.0,
            slug: slug.map(String::from),
        }
    }

    #[test]
    fn lookup_by_derived_city_slug() {
        let reg = RegionRegistry::new(vec![region("München", "DE-BY", None)]).unwrap();
        assert_eq!(reg.by_slug("muenchen").unwrap().city, "München");
    }

    #[test]
    fn lookup_normalizes_input() {
        let reg = RegionRegistry::new(vec![region("München", "DE-BY", None)]).unwrap();
        assert_eq!(reg.by_slug("München").unwrap().city, "München");
        assert_eq!(reg.by_slug("MUENCHEN").unwrap().city, "München");
    }

    #[test]
    fn explicit_slug_registers_alongside_derived() {
        let reg =
            RegionRegistry::new(vec![region("Frankfurt am Main", "DE-HE", Some("frankfurt"))])
                .unwrap();
        assert!(reg.by_slug("frankfurt").is_some());
        assert!(reg.by_slug("frankfurt-am-main").is_some());
    }

    #[test]
    fn unknown_slug_is_none() {
        let reg = RegionRegistry::new(vec![region("Berlin", "DE-BE", None)]).unwrap();
        assert!(reg.by_slug("atlantis").is_none());
    }

    #[test]
    fn round_trip_for_every_region() {
        let reg = RegionRegistry::new(vec![
            region("Berlin", "DE-BE", None),
            region("Frankfurt am Main", "DE-HE", Some("frankfurt")),
            region("Wien", "AT-9", None),
        ])
        .unwrap();
        for r in reg.all() {
            assert_eq!(reg.by_slug(&r.canonical_slug()), Some(r));
        }
    }

    #[test]
    fn missing_separator_fails_loudly() {
        let err = RegionRegistry::new(vec![region("Berlin", "DEBE", None)]).unwrap_err();
        assert!(matches!(err, RegionError::MissingSeparator { .. }));
    }

    #[test]
    fn colliding_slugs_rejected() {
        let err = RegionRegistry::new(vec![
            region("Berlin", "DE-BE", None),
            region("Spandau", "DE-BE", Some("berlin")),
        ])
        .unwrap_err();
        assert!(matches!(err, RegionError::DuplicateSlug { .. }));
    }

    #[test]
    fn country_prefix() {
        assert_eq!(region("Wien", "AT-9", None).country(), "AT");
        assert_eq!(region("Zürich", "CH-ZH", None).country(), "CH");
    }
}
