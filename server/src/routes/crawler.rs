//! Crawler files generated from the route catalog.

#[cfg(test)]
#[path = "crawler_test.rs"]
mod crawler_test;

use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;

use crate::state::AppState;

/// `GET /robots.txt`
pub async fn robots(State(state): State<AppState>) -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], seo::sitemap::robots_txt(state.catalog))
}

/// `GET /sitemap.xml`
pub async fn sitemap(State(state): State<AppState>) -> Result<impl IntoResponse, StatusCode> {
    let xml = seo::sitemap::sitemap_xml(state.catalog).map_err(|e| {
        tracing::error!(error = %e, "sitemap render failed");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    Ok(([(header::CONTENT_TYPE, "application/xml")], xml))
}
