//! Per-route layout shell.
//!
//! DESIGN
//! ======
//! The shell does two things: declare the route's metadata (resolved once by
//! the `seo` catalog when it was built) and render its children, optionally
//! over the gradient backdrop. It fetches nothing and adds no error boundary.
//! Dynamic routes get a canonical URL for the concrete path.

#[cfg(test)]
#[path = "route_layout_test.rs"]
mod route_layout_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;
use seo::SiteRoute;

use crate::components::empty_state::EmptyState;
use crate::components::gradient_overlay::GradientOverlay;
use crate::components::page_meta::PageMeta;

/// Shared visual treatment injected around a route's content.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Decoration {
    #[default]
    None,
    Gradient,
}

impl Decoration {
    /// Account-flow pages sit on the gradient backdrop.
    #[must_use]
    pub fn for_route(route: SiteRoute) -> Self {
        match route {
            SiteRoute::Login
            | SiteRoute::Signup
            | SiteRoute::ForgotPassword
            | SiteRoute::ResetPassword
            | SiteRoute::VerifyToken => Self::Gradient,
            _ => Self::None,
        }
    }
}

/// Layout shell for one [`SiteRoute`].
///
/// Metadata follows the current pathname, so a dynamic route that stays
/// mounted while only its params change still gets the right canonical URL.
#[component]
pub fn RouteLayout(route: SiteRoute, children: Children) -> impl IntoView {
    if let Err(err) = seo::routes::catalog() {
        log::error!("{} has no valid metadata: {err}", route.pattern());
        return view! { <EmptyState text="This page is unavailable."/> }.into_any();
    }

    let location = use_location();
    let metadata = Memo::new(move |_| seo::routes::metadata_at(route, &location.pathname.get()));

    let decoration = Decoration::for_route(route);
    view! {
        {move || match metadata.get() {
            Ok(metadata) => Some(view! { <PageMeta metadata=metadata/> }),
            Err(err) => {
                log::error!("{} has no valid metadata: {err}", route.pattern());
                None
            }
        }}
        {(decoration == Decoration::Gradient).then(|| view! { <GradientOverlay/> })}
        {children()}
    }
    .into_any()
}
