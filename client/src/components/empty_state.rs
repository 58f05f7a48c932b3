//! "Nothing found" placeholder.

use leptos::prelude::*;

/// Fixed empty-state treatment around caller-supplied text.
#[component]
pub fn EmptyState(#[prop(into)] text: String) -> impl IntoView {
    view! {
        <div class="empty-state" role="status">
            <svg class="empty-state__icon" viewBox="0 0 24 24" aria-hidden="true">
                <circle cx="11" cy="11" r="7"></circle>
                <line x1="16.5" y1="16.5" x2="21" y2="21"></line>
            </svg>
            <p class="empty-state__text">{text}</p>
        </div>
    }
}
