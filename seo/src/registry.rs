//! Explicit route -> page descriptor registration table.
//!
//! DESIGN
//! ======
//! Every reachable route registers exactly one descriptor here, once, at
//! startup. Registration parses the pattern, checks that the descriptor url
//! matches it, rejects duplicates, and resolves metadata with a single call
//! to the builder. Lookups never rebuild metadata.

use std::collections::HashMap;

use crate::descriptor::PageDescriptor;
use crate::error::ConfigurationError;
use crate::metadata::{ResolvedMetadata, SiteConfig, generate_page_metadata};

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;

// =============================================================================
// ROUTE PATTERN
// =============================================================================

/// One segment of a route pattern.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Segment {
    Static(String),
    /// `:name` placeholder matching any non-empty segment.
    Param(String),
}

/// Parsed site-relative route path such as `/news/:id`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RoutePattern {
    raw: String,
    segments: Vec<Segment>,
}

impl RoutePattern {
    /// Parse a pattern. `/` is the root route.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::InvalidPattern`] if the pattern is not
    /// `/`-prefixed, has a trailing slash, or contains an empty segment or an
    /// unnamed parameter.
    pub fn parse(raw: &str) -> Result<Self, ConfigurationError> {
        let invalid = |reason| ConfigurationError::InvalidPattern { pattern: raw.to_owned(), reason };

        let Some(body) = raw.strip_prefix('/') else {
            return Err(invalid("must start with '/'"));
        };
        if body.is_empty() {
            return Ok(Self { raw: raw.to_owned(), segments: Vec::new() });
        }
        if body.ends_with('/') {
            return Err(invalid("trailing slash"));
        }

        let mut segments = Vec::new();
        for part in body.split('/') {
            if part.is_empty() {
                return Err(invalid("empty segment"));
            }
            match part.strip_prefix(':') {
                Some("") => return Err(invalid("unnamed parameter")),
                Some(name) => segments.push(Segment::Param(name.to_owned())),
                None => segments.push(Segment::Static(part.to_owned())),
            }
        }
        Ok(Self { raw: raw.to_owned(), segments })
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Whether both patterns match exactly the same paths. Parameter names
    /// do not matter: `/news/:id` and `/news/:slug` overlap.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.segments.len() == other.segments.len()
            && self.segments.iter().zip(&other.segments).all(|pair| match pair {
                (Segment::Static(a), Segment::Static(b)) => a == b,
                (Segment::Param(_), Segment::Param(_)) => true,
                _ => false,
            })
    }

    #[must_use]
    pub fn is_dynamic(&self) -> bool {
        self.segments.iter().any(|s| matches!(s, Segment::Param(_)))
    }

    /// Match a concrete path, returning captured params in pattern order.
    ///
    /// Query strings and fragments are ignored.
    #[must_use]
    pub fn matches(&self, path: &str) -> Option<Vec<(String, String)>> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let parts: Vec<&str> = path.split('/').filter(|p| !p.is_empty()).collect();
        if parts.len() != self.segments.len() {
            return None;
        }

        let mut params = Vec::new();
        for (segment, part) in self.segments.iter().zip(parts) {
            match segment {
                Segment::Static(expected) if expected == part => {}
                Segment::Static(_) => return None,
                Segment::Param(name) => params.push((name.clone(), part.to_owned())),
            }
        }
        Some(params)
    }
}

// =============================================================================
// REGISTRY
// =============================================================================

/// A registered route with its descriptor and resolved metadata.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteEntry {
    pattern: RoutePattern,
    descriptor: PageDescriptor,
    metadata: ResolvedMetadata,
}

impl RouteEntry {
    #[must_use]
    pub fn pattern(&self) -> &RoutePattern {
        &self.pattern
    }

    #[must_use]
    pub fn descriptor(&self) -> &PageDescriptor {
        &self.descriptor
    }

    #[must_use]
    pub fn metadata(&self) -> &ResolvedMetadata {
        &self.metadata
    }
}

/// Registration table keyed by route pattern, in registration order.
#[derive(Clone, Debug)]
pub struct RouteRegistry {
    site: SiteConfig,
    entries: Vec<RouteEntry>,
    by_pattern: HashMap<String, usize>,
}

impl RouteRegistry {
    #[must_use]
    pub fn new(site: SiteConfig) -> Self {
        Self { site, entries: Vec::new(), by_pattern: HashMap::new() }
    }

    #[must_use]
    pub fn site(&self) -> &SiteConfig {
        &self.site
    }

    /// Register `descriptor` for `pattern` and resolve its metadata.
    ///
    /// # Errors
    ///
    /// Fails on a malformed pattern, a pattern that overlaps an existing one
    /// (same segments, parameter names ignored), a descriptor the
    /// builder rejects, or a descriptor url that differs from the pattern.
    pub fn register(&mut self, pattern: &str, descriptor: PageDescriptor) -> Result<&RouteEntry, ConfigurationError> {
        let pattern = RoutePattern::parse(pattern)?;
        if let Some(existing) = self.entries.iter().find(|e| e.pattern.overlaps(&pattern)) {
            return Err(ConfigurationError::DuplicateRoute {
                pattern: pattern.as_str().to_owned(),
                existing: existing.pattern.as_str().to_owned(),
            });
        }

        let metadata = generate_page_metadata(&self.site, &descriptor)?;
        if descriptor.url.trim() != pattern.as_str() {
            return Err(ConfigurationError::UrlMismatch { pattern: pattern.as_str().to_owned(), url: descriptor.url });
        }

        let index = self.entries.len();
        self.by_pattern.insert(pattern.as_str().to_owned(), index);
        self.entries.push(RouteEntry { pattern, descriptor, metadata });
        Ok(&self.entries[index])
    }

    /// Entry registered under exactly `pattern`.
    #[must_use]
    pub fn get(&self, pattern: &str) -> Option<&RouteEntry> {
        self.by_pattern.get(pattern).map(|&i| &self.entries[i])
    }

    /// Find the entry serving a concrete `path`. Static routes win over
    /// dynamic ones; otherwise registration order decides.
    #[must_use]
    pub fn resolve(&self, path: &str) -> Option<(&RouteEntry, Vec<(String, String)>)> {
        let static_hit = self
            .entries
            .iter()
            .filter(|e| !e.pattern.is_dynamic())
            .find_map(|e| e.pattern.matches(path).map(|params| (e, params)));
        static_hit.or_else(|| {
            self.entries
                .iter()
                .filter(|e| e.pattern.is_dynamic())
                .find_map(|e| e.pattern.matches(path).map(|params| (e, params)))
        })
    }

    /// Metadata for `pattern` as served at the concrete `path`.
    ///
    /// Dynamic routes get a canonical URL for `path`; static routes keep
    /// their registered canonical URL.
    #[must_use]
    pub fn metadata_at(&self, pattern: &str, path: &str) -> Option<ResolvedMetadata> {
        let entry = self.get(pattern)?;
        if entry.pattern.is_dynamic() && entry.pattern.matches(path).is_some() {
            Some(entry.metadata.relocated(&self.site, path))
        } else {
            Some(entry.metadata.clone())
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &RouteEntry> {
        self.entries.iter()
    }

    /// Entries whose robots directive allows indexing.
    pub fn indexable(&self) -> impl Iterator<Item = &RouteEntry> {
        self.entries.iter().filter(|e| e.metadata.robots.is_indexable())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
