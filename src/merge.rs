//! Layer merging with replace/union asymmetry.
//!
//! Layers merge left to right with strict precedence: a later layer's
//! *defined* scalar fields win, and its `og`/`twitter`/`geo` fragments merge
//! key-by-key (defined keys replace, absent keys fall through). Collections
//! behave differently on purpose: `keywords`, `alternates`,
//! `additional_meta` and `structured_data` concatenate across layers and are
//! then deduplicated. Base entries come first and first occurrence wins, so
//! a later layer can append new entries but never displace existing ones.
//!
//! That asymmetry is the engine's central design decision: a page or dynamic
//! layer can add FAQ schema or extra keywords without repeating everything
//! the global defaults already declared.

use crate::dedupe::{dedupe_by, dedupe_keywords};
use crate::types::{Geo, OgOverride, SeoOverride, TwitterOverride};

fn merge_og(base: Option<OgOverride>, over: Option<OgOverride>) -> Option<OgOverride> {
    match (base, over) {
        (None, over) => over,
        (base, None) => base,
        (Some(b), Some(o)) => Some(OgOverride {
            title: o.title.or(b.title),
            description: o.description.or(b.description),
            og_type: o.og_type.or(b.og_type),
            url: o.url.or(b.url),
            image: o.image.or(b.image),
            image_width: o.image_width.or(b.image_width),
            image_height: o.image_height.or(b.image_height),
            image_type: o.image_type.or(b.image_type),
            site_name: o.site_name.or(b.site_name),
            locale: o.locale.or(b.locale),
            published_time: o.published_time.or(b.published_time),
        }),
    }
}

fn merge_twitter(
    base: Option<TwitterOverride>,
    over: Option<TwitterOverride>,
) -> Option<TwitterOverride> {
    match (base, over) {
        (None, over) => over,
        (base, None) => base,
        (Some(b), Some(o)) => Some(TwitterOverride {
            card: o.card.or(b.card),
            title: o.title.or(b.title),
            description: o.description.or(b.description),
            image: o.image.or(b.image),
            site: o.site.or(b.site),
        }),
    }
}

fn merge_geo(base: Option<Geo>, over: Option<Geo>) -> Option<Geo> {
    match (base, over) {
        (None, over) => over,
        (base, None) => base,
        (Some(b), Some(o)) => Some(Geo {
            region: o.region.or(b.region),
            placename: o.placename.or(b.placename),
            position: o.position.or(b.position),
            latitude: o.latitude.or(b.latitude),
            longitude: o.longitude.or(b.longitude),
        }),
    }
}

/// Merge one override layer onto a base layer.
fn merge_two(base: SeoOverride, over: SeoOverride) -> SeoOverride {
    let mut keywords = base.keywords;
    keywords.extend(over.keywords);
    let mut alternates = base.alternates;
    alternates.extend(over.alternates);
    let mut structured_data = base.structured_data;
    structured_data.extend(over.structured_data);
    let mut additional_meta = base.additional_meta;
    additional_meta.extend(over.additional_meta);

    SeoOverride {
        title: over.title.or(base.title),
        description: over.description.or(base.description),
        keywords: dedupe_keywords(keywords),
        canonical: over.canonical.or(base.canonical),
        robots: over.robots.or(base.robots),
        og: merge_og(base.og, over.og),
        twitter: merge_twitter(base.twitter, over.twitter),
        geo: merge_geo(base.geo, over.geo),
        alternates: dedupe_by(alternates, |a| a.key()),
        structured_data: dedupe_by(structured_data, crate::schema::schema_key),
        additional_meta: dedupe_by(additional_meta, |m| m.key()),
    }
}

/// Merge a base layer with override layers, left to right, later wins.
///
/// `None` overrides (e.g. an absent dynamic layer) are skipped. Collections
/// are deduplicated after every stage, so intermediate results uphold the
/// same invariants as the final one.
pub fn merge<I>(base: SeoOverride, overrides: I) -> SeoOverride
where
    I: IntoIterator<Item = Option<SeoOverride>>,
{
    overrides
        .into_iter()
        .flatten()
        .fold(base, merge_two)
}
