//! Page metadata and route catalog for the Arena community site.
//!
//! This crate owns the SEO configuration layer shared by `client` (Leptos
//! layouts emit the resolved tags) and `server` (crawler files). It has no
//! framework dependencies so every rule here is testable as plain Rust.
//!
//! FLOW
//! ====
//! `PageDescriptor` -> `generate_page_metadata` -> `ResolvedMetadata`,
//! registered per route in a `RouteRegistry`. The site's own table lives in
//! `routes` and is built once per process by [`routes::catalog`].

pub mod descriptor;
pub mod error;
pub mod metadata;
pub mod registry;
pub mod routes;
pub mod sitemap;

pub use descriptor::PageDescriptor;
pub use error::{ConfigurationError, SitemapError};
pub use metadata::{OpenGraph, ResolvedMetadata, Robots, SiteConfig, canonical_url, generate_page_metadata};
pub use registry::{RouteEntry, RoutePattern, RouteRegistry};
pub use routes::{Audience, SiteRoute};
