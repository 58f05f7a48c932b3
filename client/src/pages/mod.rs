//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! A page reads route and query parameters, hands them to one feature, and
//! wraps anything asynchronous in a `Boundary`. `page_for` is the single
//! place that maps a `SiteRoute` to its page, so adding a route without a
//! page fails to compile.

pub mod account;
pub mod admin;
pub mod content;
pub mod home;

use leptos::prelude::*;
use seo::SiteRoute;

use crate::features::account::AccountFlow;
use crate::features::admin::AdminSection;
use crate::net::types::ContentKind;

/// Page body for `route`.
pub fn page_for(route: SiteRoute) -> AnyView {
    match route {
        SiteRoute::Home => view! { <home::HomePage/> }.into_any(),
        SiteRoute::News => collection(ContentKind::News, "News"),
        SiteRoute::NewsArticle => item(ContentKind::News),
        SiteRoute::Teams => collection(ContentKind::Team, "Teams"),
        SiteRoute::TeamProfile => item(ContentKind::Team),
        SiteRoute::Players => collection(ContentKind::Player, "Players"),
        SiteRoute::PlayerProfile => item(ContentKind::Player),
        SiteRoute::Shop => collection(ContentKind::Product, "Shop"),
        SiteRoute::ShopItem => item(ContentKind::Product),
        SiteRoute::Login => account(AccountFlow::Login),
        SiteRoute::Signup => account(AccountFlow::Signup),
        SiteRoute::ForgotPassword => account(AccountFlow::ForgotPassword),
        SiteRoute::ResetPassword => account(AccountFlow::ResetPassword),
        SiteRoute::VerifyToken => account(AccountFlow::VerifyToken),
        SiteRoute::Profile => view! { <account::ProfilePage/> }.into_any(),
        SiteRoute::AdminDashboard => admin(AdminSection::Dashboard),
        SiteRoute::AdminNews => admin(AdminSection::News),
        SiteRoute::AdminTeams => admin(AdminSection::Teams),
        SiteRoute::AdminPlayers => admin(AdminSection::Players),
        SiteRoute::AdminShop => admin(AdminSection::Shop),
        SiteRoute::AdminSettings => admin(AdminSection::Settings),
    }
}

fn collection(kind: ContentKind, heading: &'static str) -> AnyView {
    view! { <content::CollectionPage kind=kind heading=heading/> }.into_any()
}

fn item(kind: ContentKind) -> AnyView {
    view! { <content::ItemPage kind=kind/> }.into_any()
}

fn account(flow: AccountFlow) -> AnyView {
    view! { <account::AccountPage flow=flow/> }.into_any()
}

fn admin(section: AdminSection) -> AnyView {
    view! { <admin::AdminPage section=section/> }.into_any()
}
