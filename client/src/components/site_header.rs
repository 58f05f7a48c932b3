//! Top navigation bar with section links and the session control.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered once by `App` above the routed content. The logout button is the
//! only caller of the session-exit hook.

use leptos::prelude::*;

use crate::hooks::logout::use_logout;
use crate::state::auth::AuthState;

const NAV_LINKS: [(&str, &str); 5] =
    [("/", "Home"), ("/news", "News"), ("/teams", "Teams"), ("/players", "Players"), ("/shop", "Shop")];

#[component]
pub fn SiteHeader() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let logout = use_logout();

    view! {
        <header class="site-header">
            <a href="/" class="site-header__brand">"Arena"</a>
            <nav class="site-header__nav">
                {NAV_LINKS
                    .iter()
                    .map(|(href, label)| view! { <a class="site-header__link" href=*href>{*label}</a> })
                    .collect::<Vec<_>>()}
            </nav>
            <span class="site-header__spacer"></span>
            <Show
                when=move || auth.get().is_signed_in()
                fallback=|| view! { <a class="btn site-header__login" href="/login">"Log in"</a> }
            >
                <Show when=move || auth.get().is_admin()>
                    <a class="site-header__link" href="/a">"Admin"</a>
                </Show>
                <a class="site-header__link" href="/profile">
                    {move || auth.get().user.map(|u| u.name).unwrap_or_default()}
                </a>
                <button
                    class="btn site-header__logout"
                    on:click={
                        let logout = logout.clone();
                        move |_| logout()
                    }
                    title="Log out"
                >
                    "Log out"
                </button>
            </Show>
        </header>
    }
}
