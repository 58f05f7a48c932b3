use std::collections::HashSet;

use super::*;
use crate::metadata::Robots;

fn test_catalog() -> RouteRegistry {
    build_catalog(SiteConfig::new("https://arena.test", "Arena").unwrap()).unwrap()
}

// =============================================================================
// Route table invariants
// =============================================================================

#[test]
fn every_route_registers() {
    let catalog = test_catalog();
    assert_eq!(catalog.len(), SiteRoute::ALL.len());
    for route in SiteRoute::ALL {
        assert!(catalog.get(route.pattern()).is_some(), "{route:?}");
    }
}

#[test]
fn patterns_are_unique() {
    let patterns: HashSet<&str> = SiteRoute::ALL.iter().map(|r| r.pattern()).collect();
    assert_eq!(patterns.len(), SiteRoute::ALL.len());
}

#[test]
fn descriptor_url_equals_pattern() {
    for route in SiteRoute::ALL {
        assert_eq!(route.descriptor().url, route.pattern(), "{route:?}");
    }
}

#[test]
fn descriptors_have_titles_and_descriptions() {
    for route in SiteRoute::ALL {
        let descriptor = route.descriptor();
        assert!(!descriptor.title.trim().is_empty(), "{route:?}");
        assert!(!descriptor.description.trim().is_empty(), "{route:?}");
    }
}

#[test]
fn only_public_routes_are_indexed() {
    let catalog = test_catalog();
    for route in SiteRoute::ALL {
        let robots = catalog.get(route.pattern()).unwrap().metadata().robots;
        let expected = if route.audience() == Audience::Public { Robots::IndexFollow } else { Robots::NoIndexNoFollow };
        assert_eq!(robots, expected, "{route:?}");
    }
}

#[test]
fn transient_and_admin_pages_are_noindex() {
    for route in [
        SiteRoute::ResetPassword,
        SiteRoute::VerifyToken,
        SiteRoute::ForgotPassword,
        SiteRoute::Profile,
        SiteRoute::AdminDashboard,
        SiteRoute::AdminSettings,
    ] {
        assert!(route.descriptor().no_index, "{route:?}");
    }
}

#[test]
fn discovery_pages_are_indexed() {
    for route in [SiteRoute::Home, SiteRoute::News, SiteRoute::Teams, SiteRoute::Players, SiteRoute::Shop] {
        assert!(!route.descriptor().no_index, "{route:?}");
    }
}

#[test]
fn admin_routes_live_under_admin_prefix() {
    for route in SiteRoute::ALL.into_iter().filter(|r| r.audience() == Audience::Admin) {
        assert!(route.pattern() == "/a" || route.pattern().starts_with("/a/"), "{route:?}");
    }
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn teams_route_metadata() {
    let catalog = test_catalog();
    let meta = catalog.get("/teams").unwrap().metadata();
    assert_eq!(meta.robots.as_str(), "index,follow");
    assert_eq!(meta.canonical_url, "https://arena.test/teams");
    assert_eq!(meta.title, "Teams | Arena");
    assert!(meta.keywords.iter().any(|k| k == "Free Fire teams"));
}

#[test]
fn admin_settings_route_metadata() {
    let catalog = test_catalog();
    let meta = catalog.get("/a/settings").unwrap().metadata();
    assert_eq!(meta.robots.as_str(), "noindex,nofollow");
}

#[test]
fn home_title_is_bare_site_name() {
    let catalog = test_catalog();
    assert_eq!(catalog.get("/").unwrap().metadata().title, "Arena");
}

// =============================================================================
// Process-wide catalog
// =============================================================================

#[test]
fn compiled_catalog_builds() {
    let catalog = catalog().unwrap();
    assert_eq!(catalog.len(), SiteRoute::ALL.len());
}

#[test]
fn metadata_at_covers_every_route() {
    for route in SiteRoute::ALL {
        let meta = metadata_at(route, route.pattern()).unwrap();
        assert!(!meta.title.is_empty(), "{route:?}");
    }
}

#[test]
fn metadata_at_relocates_dynamic_routes() {
    let meta = metadata_at(SiteRoute::NewsArticle, "/news/finals-recap").unwrap();
    assert!(meta.canonical_url.ends_with("/news/finals-recap"));
    assert_eq!(meta.open_graph.url, meta.canonical_url);
}
