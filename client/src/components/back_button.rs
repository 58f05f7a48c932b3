//! Back navigation button.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::util::navigation::{BrowserRouter, Navigator};

/// Go to the previous history entry. No confirmation and no guard against an
/// empty history.
#[component]
pub fn BackButton(#[prop(optional, into)] label: Option<String>) -> impl IntoView {
    let label = label.unwrap_or_else(|| "Back".to_owned());
    let router = BrowserRouter::new(use_navigate());

    view! {
        <button type="button" class="back-button" on:click=move |_| router.back() title="Go back">
            <span class="back-button__arrow" aria-hidden="true">"←"</span>
            <span class="back-button__label">{label}</span>
        </button>
    }
}
