//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It is
//! immutable after startup: the parsed server config and the route catalog
//! that drives `robots.txt` and `sitemap.xml`.

use seo::RouteRegistry;

use crate::config::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    pub config: ServerConfig,
    pub catalog: &'static RouteRegistry,
}

impl AppState {
    #[must_use]
    pub fn new(config: ServerConfig, catalog: &'static RouteRegistry) -> Self {
        Self { config, catalog }
    }
}
