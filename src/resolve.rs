//! Top-level resolution: from input to one total [`ResolvedSeo`] record.
//!
//! [`SeoEngine`] owns the pieces every resolution needs — site config, region
//! registry, location cache — and runs the fixed sequence:
//!
//! 1. normalize the requested pathname
//! 2. build the dynamic layer
//! 3. merge global defaults → page config → dynamic layer
//! 4. compute the canonical URL, always absolute `https://`
//! 5. final defensive dedup of every collection
//! 6. complete Open Graph / Twitter from merged values, forcing
//!    `og:url = canonical`
//! 7. complete `geo.position` from coordinates
//!
//! Resolution never fails: missing entities and unknown slugs degrade to the
//! static layers, and every output field receives a concrete value, falling
//! back to the engine-wide constants in [`SiteConfig`].

use crate::config::SiteConfig;
use crate::data;
use crate::dedupe::{dedupe_by, dedupe_keywords};
use crate::dynamic::build_dynamic;
use crate::location::LocationConfigCache;
use crate::merge::merge;
use crate::regions::{RegionError, RegionRegistry, ServiceRegion};
use crate::schema;
use crate::types::{
    PageId, ResolveInput, ResolvedOg, ResolvedSeo, ResolvedTwitter,
};

/// Strip query/fragment and trailing slashes; empty becomes `/`.
pub fn normalize_pathname(pathname: &str) -> String {
    let path = pathname.split(['?', '#']).next().unwrap_or("");
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}

/// Rewrite any URL shape into an absolute `https://` URL against `base`.
///
/// Handles full URLs (http upgraded to https), protocol-relative URLs, and
/// bare paths.
pub fn absolute_url(base: &str, url: &str) -> String {
    if let Some(rest) = url.strip_prefix("http://") {
        format!("https://{rest}")
    } else if url.starts_with("https://") {
        url.to_string()
    } else if let Some(rest) = url.strip_prefix("//") {
        format!("https://{rest}")
    } else if url.starts_with('/') {
        format!("{base}{url}")
    } else {
        format!("{base}/{url}")
    }
}

/// The resolution engine. Construct once per process and share; resolution
/// is `&self` and the engine is `Send + Sync`.
pub struct SeoEngine {
    site: SiteConfig,
    registry: RegionRegistry,
    cache: LocationConfigCache,
}

impl SeoEngine {
    /// Engine over the compiled-in region dataset.
    pub fn new(site: SiteConfig) -> Result<Self, RegionError> {
        Self::with_regions(site, data::service_regions())
    }

    /// Engine over an explicit region dataset (validated eagerly).
    pub fn with_regions(
        site: SiteConfig,
        regions: Vec<ServiceRegion>,
    ) -> Result<Self, RegionError> {
        Ok(Self {
            site,
            registry: RegionRegistry::new(regions)?,
            cache: LocationConfigCache::new(),
        })
    }

    pub fn site(&self) -> &SiteConfig {
        &self.site
    }

    pub fn registry(&self) -> &RegionRegistry {
        &self.registry
    }

    /// Resolve one input into a total metadata record.
    pub fn resolve(&self, input: &ResolveInput) -> ResolvedSeo {
        let site = &self.site;
        let path = normalize_pathname(&input.pathname);

        let dynamic = build_dynamic(input, site, &self.registry, &self.cache);
        let merged = merge(
            data::global_defaults(site),
            [data::page_config(input.page, site), dynamic],
        );

        // Canonical precedence: dynamic > page-specific (both already folded
        // into `merged`) > path-derived fallback. Home falls back to the
        // site root rather than a path echo.
        let canonical_source = merged.canonical.unwrap_or_else(|| {
            if input.page == PageId::Home {
                format!("{}/", site.base_url)
            } else {
                path.clone()
            }
        });
        let canonical = absolute_url(&site.base_url, &canonical_source);

        // A dynamic layer that reused an already-merged collection verbatim
        // would otherwise double every entry.
        let keywords = dedupe_keywords(merged.keywords);
        let alternates = dedupe_by(merged.alternates, |a| a.key());
        let structured_data = dedupe_by(merged.structured_data, schema::schema_key);
        let additional_meta = dedupe_by(merged.additional_meta, |m| m.key());

        let title = merged.title.unwrap_or_else(|| site.site_name.clone());
        let description = merged.description.unwrap_or_default();

        let og_layer = merged.og.unwrap_or_default();
        let og_image = absolute_url(
            &site.base_url,
            og_layer.image.as_deref().unwrap_or(&site.share_image.url),
        );
        let og = ResolvedOg {
            title: og_layer.title.unwrap_or_else(|| title.clone()),
            description: og_layer.description.unwrap_or_else(|| description.clone()),
            og_type: og_layer.og_type.unwrap_or_else(|| "website".to_string()),
            // og:url always mirrors the canonical, whatever a layer said
            url: canonical.clone(),
            image: og_image.clone(),
            image_width: og_layer.image_width.unwrap_or(site.share_image.width),
            image_height: og_layer.image_height.unwrap_or(site.share_image.height),
            image_type: og_layer
                .image_type
                .unwrap_or_else(|| site.share_image.mime_type.clone()),
            site_name: og_layer.site_name.unwrap_or_else(|| site.site_name.clone()),
            locale: og_layer.locale.unwrap_or_else(|| site.default_locale.clone()),
            published_time: og_layer.published_time,
        };

        let tw_layer = merged.twitter.unwrap_or_default();
        let twitter = ResolvedTwitter {
            card: tw_layer.card.unwrap_or_else(|| "summary_large_image".to_string()),
            title: tw_layer.title.unwrap_or_else(|| og.title.clone()),
            description: tw_layer
                .description
                .unwrap_or_else(|| og.description.clone()),
            image: tw_layer
                .image
                .map(|img| absolute_url(&site.base_url, &img))
                .unwrap_or(og_image),
            site: tw_layer.site.unwrap_or_else(|| site.twitter_site.clone()),
        };

        let geo = merged.geo.filter(|g| !g.is_empty()).map(|mut g| {
            if g.position.is_none() {
                if let (Some(lat), Some(lon)) = (g.latitude, g.longitude) {
                    g.position = Some(format!("{lat};{lon}"));
                }
            }
            g
        });

        ResolvedSeo {
            title,
            description,
            keywords,
            url: canonical.clone(),
            canonical,
            robots: merged.robots,
            og,
            twitter,
            geo,
            alternates,
            structured_data,
            additional_meta,
        }
    }
}
