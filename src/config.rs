//! Site-level configuration.
//!
//! Handles loading and validating `site.toml`: the base URL, site identity,
//! and the engine-wide fallback constants the resolver uses when no override
//! layer supplied a value (share image, locale, Twitter handle).
//!
//! All options are optional — a missing file yields the stock defaults, and a
//! partial file overrides only the keys it names:
//!
//! ```toml
//! base_url = "https://www.solarkraft-direkt.de"
//! site_name = "SolarKraft Direkt"
//!
//! [share_image]
//! url = "/images/og-default.jpg"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `site.toml`.
///
/// All fields have sensible defaults; user files only specify overrides.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Absolute site origin, no trailing slash. Every canonical URL and every
    /// relative image path is completed against this.
    pub base_url: String,
    /// Site name used for `og:site_name` and title templates.
    pub site_name: String,
    /// Default `og:locale`, e.g. `de_DE`.
    pub default_locale: String,
    /// Twitter handle for `twitter:site` (with `@`).
    pub twitter_site: String,
    /// Default social share image used when no layer supplies one.
    pub share_image: ShareImageConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.solarkraft-direkt.de".to_string(),
            site_name: "SolarKraft Direkt".to_string(),
            default_locale: "de_DE".to_string(),
            twitter_site: "@solarkraftde".to_string(),
            share_image: ShareImageConfig::default(),
        }
    }
}

/// Default share image settings (`og:image` and friends).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShareImageConfig {
    /// Image location; may be site-relative (completed against `base_url`).
    pub url: String,
    pub width: u32,
    pub height: u32,
    /// MIME type for `og:image:type`.
    pub mime_type: String,
}

impl Default for ShareImageConfig {
    fn default() -> Self {
        Self {
            url: "/images/og-default.jpg".to_string(),
            width: 1200,
            height: 630,
            mime_type: "image/jpeg".to_string(),
        }
    }
}

impl SiteConfig {
    /// Validate config values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.base_url.starts_with("https://") {
            return Err(ConfigError::Validation(
                "base_url must start with https://".into(),
            ));
        }
        if self.base_url.ends_with('/') {
            return Err(ConfigError::Validation(
                "base_url must not end with a slash".into(),
            ));
        }
        if self.site_name.trim().is_empty() {
            return Err(ConfigError::Validation("site_name must not be empty".into()));
        }
        if self.share_image.width == 0 || self.share_image.height == 0 {
            return Err(ConfigError::Validation(
                "share_image dimensions must be non-zero".into(),
            ));
        }
        Ok(())
    }
}

/// Load config from `site.toml` in the given directory.
///
/// A missing file yields the stock defaults. Unknown keys and invalid values
/// are errors.
pub fn load_config(dir: &Path) -> Result<SiteConfig, ConfigError> {
    let config_path = dir.join("site.toml");
    let config = if config_path.exists() {
        let content = fs::read_to_string(&config_path)?;
        toml::from_str(&content)?
    } else {
        SiteConfig::default()
    };
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `site.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# seo-resolve site configuration
# ==============================
# All settings are optional. Values shown below are the defaults.
# Unknown keys will cause an error.

# Absolute site origin, no trailing slash. Canonical URLs and relative
# image paths are completed against this.
base_url = "https://www.solarkraft-direkt.de"

# Site name, used for og:site_name.
site_name = "SolarKraft Direkt"

# Default og:locale.
default_locale = "de_DE"

# Twitter handle for twitter:site.
twitter_site = "@solarkraftde"

# ---------------------------------------------------------------------------
# Default social share image (used when a page supplies none)
# ---------------------------------------------------------------------------
[share_image]
url = "/images/og-default.jpg"
width = 1200
height = 630
mime_type = "image/jpeg"
"##
}
