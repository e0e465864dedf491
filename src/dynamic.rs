//! Dynamic per-entity configuration layer.
//!
//! Dispatches exhaustively on [`PageId`]: detail pages derive a layer from
//! their content entity, `standort` resolves the path's final segment through
//! the region registry, and static pages contribute nothing. Absence is the
//! recoverable branch everywhere — a detail page without its entity or an
//! unknown location slug yields `None` ("no dynamic override"), never an
//! error; the caller falls through to the static layers.
//!
//! ## Date handling
//!
//! Articles carry German display dates (`"15. März 2024"`). These are parsed
//! to ISO-8601 for `article:published_time` via an explicit month table. An
//! unparseable date omits the field entirely — fabricating "now" would
//! publish wrong metadata, which is worse than none.

use crate::config::SiteConfig;
use crate::location::{LocationConfigCache, build_location_config};
use crate::regions::RegionRegistry;
use crate::types::{OgOverride, PageId, ResolveInput, SeoOverride};

/// German month names, position = month number - 1.
const GERMAN_MONTHS: [&str; 12] = [
    "Januar",
    "Februar",
    "März",
    "April",
    "Mai",
    "Juni",
    "Juli",
    "August",
    "September",
    "Oktober",
    "November",
    "Dezember",
];

/// Parse a German display date (`"15. März 2024"`) into ISO-8601
/// (`"2024-03-15"`). Returns `None` for anything that doesn't match.
pub fn parse_german_date(text: &str) -> Option<String> {
    let mut parts = text.split_whitespace();
    let day: u32 = parts.next()?.trim_end_matches('.').parse().ok()?;
    let month_name = parts.next()?;
    let year: i32 = parts.next()?.parse().ok()?;
    if parts.next().is_some() || !(1..=31).contains(&day) || !(1000..=9999).contains(&year) {
        return None;
    }
    // `eq_ignore_ascii_case` would miss "MÄRZ": 'Ä' is outside ASCII.
    let folded = month_name.to_lowercase();
    let month = GERMAN_MONTHS
        .iter()
        .position(|m| m.to_lowercase() == folded)?
        + 1;
    Some(format!("{year:04}-{month:02}-{day:02}"))
}

/// Final segment of a pathname, ignoring any query string, fragment, and
/// trailing slashes. Raw request paths like `/standort/berlin?utm_source=x`
/// must yield the same segment as the clean path.
fn last_segment(pathname: &str) -> Option<&str> {
    let path = pathname.split(['?', '#']).next().unwrap_or("");
    path.trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|s| !s.is_empty())
}

/// Build the dynamic layer for an input, or `None` when the input carries
/// nothing to derive one from.
pub fn build_dynamic(
    input: &ResolveInput,
    site: &SiteConfig,
    registry: &RegionRegistry,
    cache: &LocationConfigCache,
) -> Option<SeoOverride> {
    match input.page {
        PageId::ArticleDetail => {
            let article = input.article.as_ref()?;
            let canonical = format!("{}/magazin/{}", site.base_url, article.slug);
            let published = article.published.as_deref().and_then(parse_german_date);
            Some(SeoOverride {
                title: Some(format!("{} | {} Magazin", article.title, site.site_name)),
                description: Some(article.excerpt.clone()),
                keywords: article.category.iter().cloned().collect(),
                canonical: Some(canonical),
                og: Some(OgOverride {
                    og_type: Some("article".to_string()),
                    image: article.image.clone(),
                    published_time: published,
                    ..OgOverride::default()
                }),
                ..SeoOverride::default()
            })
        }
        PageId::GuideDetail => {
            let guide = input.guide.as_ref()?;
            Some(SeoOverride {
                title: Some(format!("{} – Ratgeber | {}", guide.title, site.site_name)),
                description: Some(guide.description.clone()),
                canonical: Some(format!("{}/ratgeber/{}", site.base_url, guide.slug)),
                og: Some(OgOverride {
                    og_type: Some("article".to_string()),
                    image: guide.image.clone(),
                    ..OgOverride::default()
                }),
                ..SeoOverride::default()
            })
        }
        PageId::HerstellerDetail => {
            let manufacturer = input.manufacturer.as_ref()?;
            Some(SeoOverride {
                title: Some(format!(
                    "{} – Hersteller im Überblick | {}",
                    manufacturer.name, site.site_name
                )),
                description: Some(manufacturer.description.clone()),
                keywords: vec![format!("{} Erfahrungen", manufacturer.name)],
                canonical: Some(format!(
                    "{}/hersteller/{}",
                    site.base_url, manufacturer.slug
                )),
                og: Some(OgOverride {
                    image: manufacturer.image.clone(),
                    ..OgOverride::default()
                }),
                ..SeoOverride::default()
            })
        }
        PageId::AnwendungsfallDetail => {
            let use_case = input.use_case.as_ref()?;
            Some(SeoOverride {
                title: Some(format!("{} | {}", use_case.title, site.site_name)),
                description: Some(use_case.description.clone()),
                canonical: Some(format!(
                    "{}/anwendungsfaelle/{}",
                    site.base_url, use_case.slug
                )),
                og: Some(OgOverride {
                    image: use_case.image.clone(),
                    ..OgOverride::default()
                }),
                ..SeoOverride::default()
            })
        }
        PageId::Standort => {
            let segment = last_segment(&input.pathname)?;
            let region = registry.by_slug(segment)?;
            // Canonical slug comes from the registry, not the request path,
            // so display name and URL can never diverge.
            let slug = region.canonical_slug();
            let layer = cache.get_or_build(&slug, || build_location_config(site, region, &slug));
            Some((*layer).clone())
        }
        PageId::Home
        | PageId::Photovoltaik
        | PageId::Preise
        | PageId::Kontakt
        | PageId::UeberUns
        | PageId::Magazin
        | PageId::Ratgeber => None,
    }
}
