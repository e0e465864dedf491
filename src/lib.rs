//! # seo-resolve
//!
//! A deterministic SEO metadata resolution engine for localized service
//! sites. One call takes a page identity plus optional dynamic entities
//! (article, guide, manufacturer, use-case, location) and produces a single
//! fully-resolved, internally-consistent metadata record — title,
//! description, canonical URL, hreflang alternates, Open Graph/Twitter
//! cards, geo tags, and a structured-data graph — ready for injection into a
//! document head.
//!
//! # Architecture: Layered Override Merge
//!
//! Metadata is assembled from three layers with fixed precedence:
//!
//! ```text
//! global defaults  →  page-specific config  →  dynamic per-entity config
//! (lowest)                                     (highest)
//! ```
//!
//! The merge is asymmetric by design: scalar fields and the nested
//! `og`/`twitter`/`geo` fragments *replace* (later layer wins), while the
//! collection fields — keywords, alternates, additional meta, structured
//! data — *union* across layers and are deduplicated first-occurrence-wins.
//! A page can therefore add FAQ schema or extra keywords without restating
//! what the defaults already declare.
//!
//! Resolution never fails: a detail page without its entity or an unknown
//! location slug degrades to the static layers, and the resolver completes
//! every remaining field from engine-wide constants. The output needs no
//! further deduplication or validation before rendering.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`slug`] | Place names → canonical URL slugs (German transliteration) |
//! | [`dedupe`] | Generic first-occurrence-wins deduplication |
//! | [`types`] | `SeoOverride` layers, `ResolvedSeo` output, page/entity types |
//! | [`regions`] | Service region dataset validation and slug-indexed lookup |
//! | [`schema`] | JSON-LD builders (LocalBusiness, FAQ, breadcrumbs, ...) |
//! | [`location`] | Per-region layer construction + process-lifetime memoization |
//! | [`dynamic`] | Per-entity dynamic layer, incl. German date parsing |
//! | [`merge`] | The replace-scalars / union-collections layer merge |
//! | [`resolve`] | `SeoEngine` orchestrator — the public entry point |
//! | [`config`] | `site.toml` loading: base URL, site identity, fallbacks |
//! | [`data`] | Compiled-in dataset: regions, FAQ, page configs, content |
//! | [`output`] | CLI output formatting |
//!
//! # Example
//!
//! ```
//! use seo_resolve::config::SiteConfig;
//! use seo_resolve::resolve::SeoEngine;
//! use seo_resolve::types::{PageId, ResolveInput};
//!
//! let engine = SeoEngine::new(SiteConfig::default()).unwrap();
//! let seo = engine.resolve(&ResolveInput::page(PageId::Standort, "/standort/berlin"));
//!
//! assert!(seo.canonical.starts_with("https://"));
//! assert_eq!(seo.url, seo.canonical);
//! assert!(seo.structured_data.iter().any(|v| v["@type"] == "LocalBusiness"));
//! ```

pub mod config;
pub mod data;
pub mod dedupe;
pub mod dynamic;
pub mod location;
pub mod merge;
pub mod output;
pub mod regions;
pub mod resolve;
pub mod schema;
pub mod slug;
pub mod types;
