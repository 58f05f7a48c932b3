//! The site's route table: every reachable route and its page descriptor.
//!
//! SYSTEM CONTEXT
//! ==============
//! `client` mounts one `RouteLayout` per [`SiteRoute`] and `server` renders
//! crawler files from the same catalog, so adding a page means adding a
//! variant here first.

use std::sync::LazyLock;

use crate::descriptor::PageDescriptor;
use crate::error::ConfigurationError;
use crate::metadata::{ResolvedMetadata, SiteConfig};
use crate::registry::RouteRegistry;

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Who a route is for. Only `Public` routes are indexed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Audience {
    /// Discovery pages anyone can land on from search.
    Public,
    /// Sign-in, recovery, and signed-in member pages.
    Account,
    /// The `/a` admin subtree.
    Admin,
}

/// Every reachable route of the site.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SiteRoute {
    Home,
    News,
    NewsArticle,
    Teams,
    TeamProfile,
    Players,
    PlayerProfile,
    Shop,
    ShopItem,
    Login,
    Signup,
    ForgotPassword,
    ResetPassword,
    VerifyToken,
    Profile,
    AdminDashboard,
    AdminNews,
    AdminTeams,
    AdminPlayers,
    AdminShop,
    AdminSettings,
}

impl SiteRoute {
    pub const ALL: [Self; 21] = [
        Self::Home,
        Self::News,
        Self::NewsArticle,
        Self::Teams,
        Self::TeamProfile,
        Self::Players,
        Self::PlayerProfile,
        Self::Shop,
        Self::ShopItem,
        Self::Login,
        Self::Signup,
        Self::ForgotPassword,
        Self::ResetPassword,
        Self::VerifyToken,
        Self::Profile,
        Self::AdminDashboard,
        Self::AdminNews,
        Self::AdminTeams,
        Self::AdminPlayers,
        Self::AdminShop,
        Self::AdminSettings,
    ];

    /// Route pattern, identical to the descriptor url.
    #[must_use]
    pub fn pattern(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::News => "/news",
            Self::NewsArticle => "/news/:id",
            Self::Teams => "/teams",
            Self::TeamProfile => "/teams/:id",
            Self::Players => "/players",
            Self::PlayerProfile => "/players/:id",
            Self::Shop => "/shop",
            Self::ShopItem => "/shop/:id",
            Self::Login => "/login",
            Self::Signup => "/signup",
            Self::ForgotPassword => "/forgot-password",
            Self::ResetPassword => "/reset-password",
            Self::VerifyToken => "/verify-token",
            Self::Profile => "/profile",
            Self::AdminDashboard => "/a",
            Self::AdminNews => "/a/news",
            Self::AdminTeams => "/a/teams",
            Self::AdminPlayers => "/a/players",
            Self::AdminShop => "/a/shop",
            Self::AdminSettings => "/a/settings",
        }
    }

    #[must_use]
    pub fn audience(self) -> Audience {
        match self {
            Self::Home
            | Self::News
            | Self::NewsArticle
            | Self::Teams
            | Self::TeamProfile
            | Self::Players
            | Self::PlayerProfile
            | Self::Shop
            | Self::ShopItem => Audience::Public,
            Self::Login | Self::Signup | Self::ForgotPassword | Self::ResetPassword | Self::VerifyToken | Self::Profile => {
                Audience::Account
            }
            Self::AdminDashboard
            | Self::AdminNews
            | Self::AdminTeams
            | Self::AdminPlayers
            | Self::AdminShop
            | Self::AdminSettings => Audience::Admin,
        }
    }

    /// Page descriptor for this route.
    #[must_use]
    pub fn descriptor(self) -> PageDescriptor {
        let page = |title: &str, description: &str, keywords: &[&str]| {
            PageDescriptor::new(title, self.pattern())
                .description(description)
                .keywords(keywords.iter().copied())
        };

        let descriptor = match self {
            Self::Home => page(
                "Arena",
                "The home of the Free Fire community: news, teams, player profiles and the official shop.",
                &["Free Fire community", "Free Fire tournaments"],
            ),
            Self::News => page(
                "News",
                "Latest Free Fire esports news, patch notes and tournament results.",
                &["Free Fire news", "esports news"],
            ),
            Self::NewsArticle => page(
                "News Article",
                "Read the full story from the Arena newsroom.",
                &["Free Fire news"],
            ),
            Self::Teams => page(
                "Teams",
                "Browse registered Free Fire teams, rosters and standings.",
                &["Free Fire teams", "team rosters"],
            ),
            Self::TeamProfile => page(
                "Team Profile",
                "Roster, achievements and match history for this team.",
                &["Free Fire teams", "team profile"],
            ),
            Self::Players => page(
                "Players",
                "Discover Free Fire players, their stats and their teams.",
                &["Free Fire players", "player stats"],
            ),
            Self::PlayerProfile => page(
                "Player Profile",
                "Stats, team history and highlights for this player.",
                &["Free Fire players", "player profile"],
            ),
            Self::Shop => page(
                "Shop",
                "Official Arena merchandise and in-game items.",
                &["Free Fire shop", "esports merchandise"],
            ),
            Self::ShopItem => page("Shop Item", "Product details from the Arena shop.", &["Free Fire shop"]),
            Self::Login => page("Login", "Sign in to your Arena account.", &["login"]),
            Self::Signup => page("Sign Up", "Create an Arena account.", &["sign up"]),
            Self::ForgotPassword => page("Forgot Password", "Request a password reset link.", &["password reset"]),
            Self::ResetPassword => page("Reset Password", "Choose a new password for your account.", &["password reset"]),
            Self::VerifyToken => page("Verify Account", "Confirm your email address.", &["verify account"]),
            Self::Profile => page("My Profile", "Manage your Arena profile.", &["profile"]),
            Self::AdminDashboard => page("Admin Dashboard", "Arena administration overview.", &["admin"]),
            Self::AdminNews => page("Manage News", "Publish and edit news articles.", &["admin"]),
            Self::AdminTeams => page("Manage Teams", "Review and edit registered teams.", &["admin"]),
            Self::AdminPlayers => page("Manage Players", "Review and edit player profiles.", &["admin"]),
            Self::AdminShop => page("Manage Shop", "Edit shop products and stock.", &["admin"]),
            Self::AdminSettings => page("Admin Settings", "Site-wide configuration.", &["admin"]),
        };

        if self.audience() == Audience::Public { descriptor } else { descriptor.no_index() }
    }
}

/// Register every [`SiteRoute`] against `site`.
///
/// # Errors
///
/// Returns the first [`ConfigurationError`] raised by registration.
pub fn build_catalog(site: SiteConfig) -> Result<RouteRegistry, ConfigurationError> {
    let mut registry = RouteRegistry::new(site);
    for route in SiteRoute::ALL {
        registry.register(route.pattern(), route.descriptor())?;
    }
    Ok(registry)
}

static CATALOG: LazyLock<Result<RouteRegistry, ConfigurationError>> =
    LazyLock::new(|| SiteConfig::from_build_env().and_then(build_catalog));

/// The process-wide catalog, built on first use from the compiled site config.
///
/// # Errors
///
/// Returns the [`ConfigurationError`] that prevented the catalog from building.
pub fn catalog() -> Result<&'static RouteRegistry, ConfigurationError> {
    CATALOG.as_ref().map_err(Clone::clone)
}

/// Catalog metadata for `route` as served at the concrete `path`.
///
/// # Errors
///
/// Returns the catalog's [`ConfigurationError`] if it failed to build, or
/// [`ConfigurationError::UnregisteredRoute`] if `route` is missing from it.
pub fn metadata_at(route: SiteRoute, path: &str) -> Result<ResolvedMetadata, ConfigurationError> {
    catalog()?
        .metadata_at(route.pattern(), path)
        .ok_or_else(|| ConfigurationError::UnregisteredRoute(route.pattern().to_owned()))
}
