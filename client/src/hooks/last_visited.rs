//! Remember the last visited page across reloads.
//!
//! Must run under `<Router>`. Each pathname change is written to
//! `localStorage` unless it is an account-flow page. Logout removes the key
//! and the `?logout=true` landing that follows leaves it removed.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::util::storage::{LocalStorage, remember_visit};

pub fn use_last_visited_tracker() {
    let location = use_location();
    Effect::new(move |_| {
        let pathname = location.pathname.get();
        let search = location.search.get();
        remember_visit(&LocalStorage, &pathname, &search);
    });
}
