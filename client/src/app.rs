//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};
use seo::SiteRoute;

use crate::components::empty_state::EmptyState;
use crate::components::site_header::SiteHeader;
use crate::components::toaster::Toaster;
use crate::hooks::last_visited::use_last_visited_tracker;
use crate::layouts::RouteLayout;
use crate::pages::page_for;
use crate::state::auth::AuthState;
use crate::state::toast::ToastState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// `route`'s page inside the shared route layout.
fn routed(route: SiteRoute) -> impl IntoView {
    view! { <RouteLayout route=route>{page_for(route)}</RouteLayout> }
}

#[component]
fn LastVisitedTracker() -> impl IntoView {
    use_last_visited_tracker();
}

/// Root application component.
///
/// Provides the shared auth and toast contexts and sets up client-side
/// routing. Every route goes through `RouteLayout`, which resolves its
/// metadata from the site catalog.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::pending());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(auth);
    provide_context(toasts);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let user = crate::net::api::fetch_current_user().await;
        auth.update(|a| a.resolve(user));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/arena.css"/>

        <Router>
            <LastVisitedTracker/>
            <SiteHeader/>
            <Toaster/>
            <main class="site-main">
                <ErrorBoundary fallback=|errors| {
                    view! {
                        <div class="error-page">
                            {move || {
                                errors
                                    .get()
                                    .into_iter()
                                    .map(|(_, e)| view! { <EmptyState text=e.to_string()/> })
                                    .collect::<Vec<_>>()
                            }}
                        </div>
                    }
                }>
                    <Routes fallback=|| view! { <EmptyState text="Page not found."/> }>
                        <Route path=StaticSegment("") view=|| routed(SiteRoute::Home)/>
                        <Route path=StaticSegment("news") view=|| routed(SiteRoute::News)/>
                        <Route path=(StaticSegment("news"), ParamSegment("id")) view=|| routed(SiteRoute::NewsArticle)/>
                        <Route path=StaticSegment("teams") view=|| routed(SiteRoute::Teams)/>
                        <Route path=(StaticSegment("teams"), ParamSegment("id")) view=|| routed(SiteRoute::TeamProfile)/>
                        <Route path=StaticSegment("players") view=|| routed(SiteRoute::Players)/>
                        <Route path=(StaticSegment("players"), ParamSegment("id")) view=|| routed(SiteRoute::PlayerProfile)/>
                        <Route path=StaticSegment("shop") view=|| routed(SiteRoute::Shop)/>
                        <Route path=(StaticSegment("shop"), ParamSegment("id")) view=|| routed(SiteRoute::ShopItem)/>
                        <Route path=StaticSegment("login") view=|| routed(SiteRoute::Login)/>
                        <Route path=StaticSegment("signup") view=|| routed(SiteRoute::Signup)/>
                        <Route path=StaticSegment("forgot-password") view=|| routed(SiteRoute::ForgotPassword)/>
                        <Route path=StaticSegment("reset-password") view=|| routed(SiteRoute::ResetPassword)/>
                        <Route path=StaticSegment("verify-token") view=|| routed(SiteRoute::VerifyToken)/>
                        <Route path=StaticSegment("profile") view=|| routed(SiteRoute::Profile)/>
                        <Route path=StaticSegment("a") view=|| routed(SiteRoute::AdminDashboard)/>
                        <Route path=(StaticSegment("a"), StaticSegment("news")) view=|| routed(SiteRoute::AdminNews)/>
                        <Route path=(StaticSegment("a"), StaticSegment("teams")) view=|| routed(SiteRoute::AdminTeams)/>
                        <Route path=(StaticSegment("a"), StaticSegment("players")) view=|| routed(SiteRoute::AdminPlayers)/>
                        <Route path=(StaticSegment("a"), StaticSegment("shop")) view=|| routed(SiteRoute::AdminShop)/>
                        <Route path=(StaticSegment("a"), StaticSegment("settings")) view=|| routed(SiteRoute::AdminSettings)/>
                    </Routes>
                </ErrorBoundary>
            </main>
        </Router>
    }
}
