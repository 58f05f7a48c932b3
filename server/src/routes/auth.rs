//! Auth routes. Sign-in lives in the external backend; this server only
//! ends the browser session by clearing its cookie.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;

use crate::state::AppState;

pub(crate) const COOKIE_NAME: &str = "session_token";

/// Expired, empty session cookie that tells the browser to drop it.
fn cleared_session_cookie(secure: bool) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(Duration::ZERO)
        .build()
}

/// `POST /api/auth/logout`: clear the session cookie. Always `204`, whether
/// or not a session was present.
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let had_session = jar.get(COOKIE_NAME).is_some_and(|c| !c.value().is_empty());
    tracing::info!(had_session, "session cookie cleared");

    let jar = CookieJar::new().add(cleared_session_cookie(state.config.cookie_secure));
    (jar, StatusCode::NO_CONTENT)
}
