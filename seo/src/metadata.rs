//! Metadata builder: `PageDescriptor` -> `ResolvedMetadata`.
//!
//! DESIGN
//! ======
//! Canonical URL joining, title composition, keyword hygiene and robots
//! derivation all live here and nowhere else. Route layouts and crawler
//! files consume the resolved values; they never rebuild them.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::descriptor::PageDescriptor;
use crate::error::ConfigurationError;

#[cfg(test)]
#[path = "metadata_test.rs"]
mod metadata_test;

pub const DEFAULT_SITE_URL: &str = "https://arena.gg";
pub const DEFAULT_SITE_NAME: &str = "Arena";
pub const DEFAULT_TITLE_SEPARATOR: &str = " | ";
pub const DEFAULT_LOCALE: &str = "en_US";
pub const DEFAULT_KEYWORDS: [&str; 2] = ["Free Fire", "esports"];

// =============================================================================
// SITE CONFIG
// =============================================================================

/// Site-wide identity applied to every page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    /// Absolute origin without a trailing slash.
    pub base_url: String,
    pub site_name: String,
    pub title_separator: String,
    pub locale: String,
    pub default_keywords: Vec<String>,
}

impl SiteConfig {
    /// Build a config for `base_url` with default separator, locale and keywords.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::InvalidBaseUrl`] unless `base_url` is an
    /// absolute `http://` or `https://` URL with a host.
    pub fn new(base_url: &str, site_name: impl Into<String>) -> Result<Self, ConfigurationError> {
        Ok(Self {
            base_url: normalize_base_url(base_url)?,
            site_name: site_name.into().trim().to_owned(),
            title_separator: DEFAULT_TITLE_SEPARATOR.to_owned(),
            locale: DEFAULT_LOCALE.to_owned(),
            default_keywords: DEFAULT_KEYWORDS.iter().map(|k| (*k).to_owned()).collect(),
        })
    }

    /// Site identity compiled into the binary.
    ///
    /// `ARENA_SITE_URL` and `ARENA_SITE_NAME` override the defaults at build
    /// time so the server and the WASM bundle always agree.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::InvalidBaseUrl`] if the compiled URL is invalid.
    pub fn from_build_env() -> Result<Self, ConfigurationError> {
        let base_url = option_env!("ARENA_SITE_URL").unwrap_or(DEFAULT_SITE_URL);
        let site_name = option_env!("ARENA_SITE_NAME").unwrap_or(DEFAULT_SITE_NAME);
        Self::new(base_url, site_name)
    }
}

fn normalize_base_url(raw: &str) -> Result<String, ConfigurationError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let host = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"))
        .ok_or_else(|| ConfigurationError::InvalidBaseUrl(raw.to_owned()))?;
    let host = host.split('/').next().unwrap_or_default();
    if host.is_empty() || host.chars().any(char::is_whitespace) {
        return Err(ConfigurationError::InvalidBaseUrl(raw.to_owned()));
    }
    Ok(trimmed.to_owned())
}

// =============================================================================
// RESOLVED METADATA
// =============================================================================

/// Robots directive emitted for a page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Robots {
    #[serde(rename = "index,follow")]
    IndexFollow,
    #[serde(rename = "noindex,nofollow")]
    NoIndexNoFollow,
}

impl Robots {
    #[must_use]
    pub fn from_no_index(no_index: bool) -> Self {
        if no_index { Self::NoIndexNoFollow } else { Self::IndexFollow }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::IndexFollow => "index,follow",
            Self::NoIndexNoFollow => "noindex,nofollow",
        }
    }

    #[must_use]
    pub fn is_indexable(self) -> bool {
        self == Self::IndexFollow
    }
}

impl fmt::Display for Robots {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Open Graph values for social link previews.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OpenGraph {
    pub title: String,
    pub description: String,
    pub url: String,
    pub site_name: String,
    pub locale: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Metadata actually emitted into a page head.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResolvedMetadata {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub canonical_url: String,
    pub robots: Robots,
    pub open_graph: OpenGraph,
}

impl ResolvedMetadata {
    /// Same metadata served from a concrete `path` (dynamic routes).
    #[must_use]
    pub fn relocated(&self, site: &SiteConfig, path: &str) -> Self {
        let url = canonical_url(&site.base_url, path);
        let mut moved = self.clone();
        moved.open_graph.url.clone_from(&url);
        moved.canonical_url = url;
        moved
    }

    /// Keywords as a single `content` attribute value.
    #[must_use]
    pub fn keywords_content(&self) -> String {
        self.keywords.join(", ")
    }
}

// =============================================================================
// BUILDER
// =============================================================================

/// Resolve a page descriptor against the site config.
///
/// Pure: equal inputs always produce equal output.
///
/// # Errors
///
/// Returns [`ConfigurationError::EmptyTitle`] or
/// [`ConfigurationError::EmptyUrl`] when a required field is blank.
pub fn generate_page_metadata(site: &SiteConfig, descriptor: &PageDescriptor) -> Result<ResolvedMetadata, ConfigurationError> {
    if descriptor.title.trim().is_empty() {
        return Err(ConfigurationError::EmptyTitle { url: descriptor.url.clone() });
    }
    if descriptor.url.trim().is_empty() {
        return Err(ConfigurationError::EmptyUrl { title: descriptor.title.clone() });
    }

    let title = compose_title(site, &descriptor.title);
    let description = descriptor.description.trim().to_owned();
    let keywords = clean_keywords(descriptor.keywords.iter().chain(site.default_keywords.iter()));
    let canonical = canonical_url(&site.base_url, &descriptor.url);

    Ok(ResolvedMetadata {
        open_graph: OpenGraph {
            title: title.clone(),
            description: description.clone(),
            url: canonical.clone(),
            site_name: site.site_name.clone(),
            locale: site.locale.clone(),
            kind: "website".to_owned(),
        },
        title,
        description,
        keywords,
        canonical_url: canonical,
        robots: Robots::from_no_index(descriptor.no_index),
    })
}

/// Join a base URL and a site-relative path with exactly one slash.
#[must_use]
pub fn canonical_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim().trim_start_matches('/');
    format!("{base}/{path}")
}

fn compose_title(site: &SiteConfig, title: &str) -> String {
    let title = title.trim();
    if site.site_name.is_empty() || title == site.site_name {
        return title.to_owned();
    }
    let suffix = format!("{}{}", site.title_separator, site.site_name);
    if title.ends_with(&suffix) { title.to_owned() } else { format!("{title}{suffix}") }
}

/// Trim, collapse inner whitespace, drop empties, and dedupe case-insensitively.
fn clean_keywords<'a>(keywords: impl IntoIterator<Item = &'a String>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for raw in keywords {
        let keyword = raw.split_whitespace().collect::<Vec<_>>().join(" ");
        if keyword.is_empty() {
            continue;
        }
        if seen.insert(keyword.to_lowercase()) {
            out.push(keyword);
        }
    }
    out
}
