//! CLI output formatting.
//!
//! Follows one convention throughout: each view has a pure `format_*`
//! function returning `Vec<String>` (testable, no I/O) and a `print_*`
//! wrapper that writes to stdout. Display is information-centric — the
//! resolved record is shown as what a crawler would see, grouped by concern,
//! not as a struct dump.

use crate::regions::RegionRegistry;
use crate::types::ResolvedSeo;

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max).collect();
        format!("{cut}...")
    }
}

/// Human-readable summary of a resolved record.
pub fn format_resolved(seo: &ResolvedSeo) -> Vec<String> {
    let mut lines = vec![
        format!("Title       {}", seo.title),
        format!("Description {}", truncate(&seo.description, 90)),
        format!("Canonical   {}", seo.canonical),
    ];
    if let Some(robots) = &seo.robots {
        lines.push(format!("Robots      {robots}"));
    }
    if !seo.keywords.is_empty() {
        lines.push(format!("Keywords    {}", seo.keywords.join(", ")));
    }

    if !seo.alternates.is_empty() {
        lines.push("Alternates".to_string());
        for alt in &seo.alternates {
            lines.push(format!("    {:<10} {}", alt.hreflang, alt.href));
        }
    }

    lines.push("Open Graph".to_string());
    lines.push(format!("    type      {}", seo.og.og_type));
    lines.push(format!("    image     {}", seo.og.image));
    lines.push(format!("    locale    {}", seo.og.locale));
    if let Some(published) = &seo.og.published_time {
        lines.push(format!("    published {published}"));
    }

    if let Some(geo) = &seo.geo {
        lines.push("Geo".to_string());
        if let Some(placename) = &geo.placename {
            lines.push(format!("    placename {placename}"));
        }
        if let Some(region) = &geo.region {
            lines.push(format!("    region    {region}"));
        }
        if let Some(position) = &geo.position {
            lines.push(format!("    position  {position}"));
        }
    }

    if !seo.structured_data.is_empty() {
        lines.push("Structured data".to_string());
        for entry in &seo.structured_data {
            let kind = entry["@type"].as_str().unwrap_or("?");
            match entry["@id"].as_str() {
                Some(id) => lines.push(format!("    {kind} ({id})")),
                None => lines.push(format!("    {kind}")),
            }
        }
    }

    if !seo.additional_meta.is_empty() {
        lines.push("Additional meta".to_string());
        for tag in &seo.additional_meta {
            lines.push(format!("    {:<14} {}", tag.key(), tag.content));
        }
    }

    lines
}

/// Region inventory: slug, city, code, and service radius per line.
pub fn format_regions(registry: &RegionRegistry) -> Vec<String> {
    let mut lines = vec![format!("{} service regions", registry.len())];
    for region in registry.all() {
        lines.push(format!(
            "    {:<20} {} ({}, {:.0} km radius)",
            region.canonical_slug(),
            region.city,
            region.region_code,
            region.radius_km,
        ));
    }
    lines
}

pub fn print_resolved(seo: &ResolvedSeo) {
    for line in format_resolved(seo) {
        println!("{line}");
    }
}

pub fn print_regions(registry: &RegionRegistry) {
    for line in format_regions(registry) {
        println!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::data::service_regions;
    use crate::resolve::SeoEngine;
    use crate::types::{PageId, ResolveInput};

    #[test]
    fn resolved_output_groups_concerns() {
        let engine = SeoEngine::new(SiteConfig::default()).unwrap();
        let seo = engine.resolve(&ResolveInput::page(PageId::Standort, "/standort/berlin"));
        let lines = format_resolved(&seo);
        let text = lines.join("\n");
        assert!(text.contains("Canonical   https://"));
        assert!(text.contains("Structured data"));
        assert!(text.contains("LocalBusiness"));
        assert!(text.contains("position  52.520008;13.404954"));
    }

    #[test]
    fn plain_page_omits_geo_section() {
        let engine = SeoEngine::new(SiteConfig::default()).unwrap();
        let seo = engine.resolve(&ResolveInput::page(PageId::Preise, "/preise"));
        let text = format_resolved(&seo).join("\n");
        assert!(!text.contains("Geo"));
    }

    #[test]
    fn region_listing_shows_every_region() {
        let registry = crate::regions::RegionRegistry::new(service_regions()).unwrap();
        let lines = format_regions(&registry);
        assert_eq!(lines.len(), 1 + registry.len());
        assert!(lines[0].starts_with("10 service regions"));
        assert!(lines.iter().any(|l| l.contains("frankfurt")));
    }

    #[test]
    fn truncate_is_char_safe() {
        assert_eq!(truncate("kurz", 10), "kurz");
        assert_eq!(truncate("Münchener Freiheit", 8), "Münchene...");
    }
}
