//! REST API helpers for communicating with the backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so fetch failures
//! degrade UI behavior without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ContentCard, ContentDetail, ContentKind, User};

const LOGOUT_ENDPOINT: &str = "/api/auth/logout";

/// `id` as a single path segment. `/`, `?`, `#` and the like are
/// percent-encoded, and dot segments are encoded so they cannot climb out of
/// the collection path.
#[cfg(any(test, feature = "hydrate"))]
fn encode_segment(id: &str) -> String {
    match id {
        "." | ".." => id.replace('.', "%2E"),
        _ => urlencoding::encode(id).into_owned(),
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn item_endpoint(kind: ContentKind, id: &str) -> String {
    format!("{}/{}", kind.api_path(), encode_segment(id))
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(what: &str, status: u16) -> String {
    format!("{what} failed: {status}")
}

/// Fetch the currently authenticated user from `/api/auth/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me").send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// End the server session with `POST /api/auth/logout`.
///
/// # Errors
///
/// Returns an error string if the request cannot be sent or the server
/// answers with a non-success status.
pub async fn logout() -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(LOGOUT_ENDPOINT)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("logout", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(format!("{LOGOUT_ENDPOINT} not available on server"))
    }
}

/// Fetch the list for a content collection.
///
/// # Errors
///
/// Returns an error string on transport failure, non-success status, or an
/// undecodable body.
pub async fn fetch_collection(kind: ContentKind) -> Result<Vec<ContentCard>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(kind.api_path())
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message(kind.plural(), resp.status()));
        }
        resp.json::<Vec<ContentCard>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(format!("{} not available on server", kind.api_path()))
    }
}

/// Fetch one record of a content collection.
///
/// # Errors
///
/// Returns an error string on transport failure, non-success status, or an
/// undecodable body.
pub async fn fetch_item(kind: ContentKind, id: &str) -> Result<ContentDetail, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&item_endpoint(kind, id))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message(kind.plural(), resp.status()));
        }
        resp.json::<ContentDetail>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(format!("{} not available on server", kind.api_path()))
    }
}
