//! Decorative full-viewport gradient layers.

use leptos::prelude::*;

const LAYER_STYLE: &str = "position:fixed;inset:0;pointer-events:none;z-index:-1;";

/// Two fixed background layers. They take no part in layout and never
/// receive pointer events.
#[component]
pub fn GradientOverlay() -> impl IntoView {
    view! {
        <div class="gradient-overlay gradient-overlay--primary" style=LAYER_STYLE aria-hidden="true"></div>
        <div class="gradient-overlay gradient-overlay--accent" style=LAYER_STYLE aria-hidden="true"></div>
    }
}
