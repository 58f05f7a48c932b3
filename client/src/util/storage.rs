//! Browser `localStorage` access behind a small key-value seam.
//!
//! SYSTEM CONTEXT
//! ==============
//! Hooks depend on [`KeyValueStore`] rather than `web-sys` so tests can use
//! an in-memory store. [`LocalStorage`] is the browser implementation; on the
//! server every operation is a no-op.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

/// Key holding the last path the user navigated to.
pub const LAST_VISITED_PATH_KEY: &str = "lastVisitedPath";

/// Query pair marking the post-logout redirect.
const LOGOUT_QUERY: &str = "logout=true";

/// Account-flow pages never recorded as the last visited path.
const TRANSIENT_PATHS: [&str; 5] = ["/login", "/signup", "/forgot-password", "/reset-password", "/verify-token"];

/// Minimal persisted key-value store.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str);
    fn remove_item(&self, key: &str);
}

/// `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl KeyValueStore for LocalStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set_item(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                if let Err(e) = storage.set_item(key, value) {
                    log::warn!("localStorage.setItem({key}) failed: {e:?}");
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }

    fn remove_item(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                if let Err(e) = storage.remove_item(key) {
                    log::warn!("localStorage.removeItem({key}) failed: {e:?}");
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}

/// Whether `path` should be remembered as the last visited page.
///
/// The landing page a logout redirects to (`?logout=true`) is skipped so the
/// key the logout just removed stays removed.
#[must_use]
fn should_remember_path(path: &str) -> bool {
    let without_fragment = path.split('#').next().unwrap_or_default();
    let (pathname, query) = without_fragment.split_once('?').unwrap_or((without_fragment, ""));
    if pathname.is_empty() || TRANSIENT_PATHS.contains(&pathname) {
        return false;
    }
    !is_logout_query(query)
}

fn is_logout_query(query: &str) -> bool {
    query.trim_start_matches('?').split('&').any(|pair| pair == LOGOUT_QUERY)
}

/// Record `path` under [`LAST_VISITED_PATH_KEY`] unless it is an account-flow page.
fn remember_path(store: &impl KeyValueStore, path: &str) {
    if should_remember_path(path) {
        store.set_item(LAST_VISITED_PATH_KEY, path);
    }
}

/// Record a navigation to `pathname` with query string `search`.
///
/// Only the pathname is stored. Nothing is written for the post-logout
/// redirect.
pub fn remember_visit(store: &impl KeyValueStore, pathname: &str, search: &str) {
    if !is_logout_query(search) {
        remember_path(store, pathname);
    }
}
