//! Session-exit hook.
//!
//! DESIGN
//! ======
//! [`exit_session`] is the whole logout sequence written against four small
//! seams (auth session, notifier, key-value store, navigator) so it can run
//! against fakes in tests. [`use_logout`] binds the browser implementations
//! from context.
//!
//! Whatever the auth call does, the sequence always clears
//! `lastVisitedPath` and lands on `/?logout=true`. A failed logout is only
//! reported to the user; it never propagates.

#[cfg(test)]
#[path = "logout_test.rs"]
mod logout_test;

use std::future::Future;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::state::toast::{Notifier, ToastState, Toasts};
use crate::util::navigation::{BrowserRouter, Navigator};
use crate::util::storage::{KeyValueStore, LAST_VISITED_PATH_KEY, LocalStorage};

/// Where the user lands after any logout attempt.
pub const LOGOUT_REDIRECT: &str = "/?logout=true";
pub const LOGOUT_SUCCESS_MESSAGE: &str = "Logged out successfully";
pub const LOGOUT_FAILURE_MESSAGE: &str = "Logout failed. Please try again.";

/// The auth collaborator could not end the session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("logout failed: {0}")]
pub struct LogoutFailure(pub String);

/// Auth-context operation that ends the current session.
pub trait SessionAuth {
    fn logout(&self) -> impl Future<Output = Result<(), LogoutFailure>>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogoutOutcome {
    LoggedOut,
    Failed,
}

/// Run the logout sequence.
pub async fn exit_session<A, N, S, R>(auth: &A, notifier: &N, store: &S, router: &R) -> LogoutOutcome
where
    A: SessionAuth,
    N: Notifier,
    S: KeyValueStore,
    R: Navigator,
{
    let outcome = match auth.logout().await {
        Ok(()) => {
            notifier.success(LOGOUT_SUCCESS_MESSAGE);
            LogoutOutcome::LoggedOut
        }
        Err(err) => {
            log::warn!("{err}");
            notifier.error(LOGOUT_FAILURE_MESSAGE);
            LogoutOutcome::Failed
        }
    };

    store.remove_item(LAST_VISITED_PATH_KEY);
    router.push(LOGOUT_REDIRECT);
    outcome
}

/// [`SessionAuth`] that ends the server session and clears the auth context.
#[derive(Clone, Copy)]
pub struct BrowserSession {
    pub auth: RwSignal<AuthState>,
}

impl SessionAuth for BrowserSession {
    async fn logout(&self) -> Result<(), LogoutFailure> {
        crate::net::api::logout().await.map_err(LogoutFailure)?;
        self.auth.try_update(AuthState::clear);
        Ok(())
    }
}

/// Bind the logout sequence to the browser collaborators in context.
///
/// Requires `RwSignal<AuthState>` and `RwSignal<ToastState>` contexts and a
/// surrounding `<Router>`.
pub fn use_logout() -> impl Fn() + Clone + 'static {
    let session = BrowserSession { auth: expect_context::<RwSignal<AuthState>>() };
    let toasts = Toasts(expect_context::<RwSignal<ToastState>>());
    let navigate = use_navigate();

    move || {
        let router = BrowserRouter::new(navigate.clone());
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            exit_session(&session, &toasts, &LocalStorage, &router).await;
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (session, toasts, router, LocalStorage);
        }
    }
}
