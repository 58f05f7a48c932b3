use super::*;
use crate::descriptor::PageDescriptor;
use crate::metadata::SiteConfig;
use crate::routes::build_catalog;

fn site() -> SiteConfig {
    SiteConfig::new("https://arena.test", "Arena").unwrap()
}

// =============================================================================
// robots.txt
// =============================================================================

#[test]
fn robots_txt_disallows_noindex_routes_and_links_sitemap() {
    let catalog = build_catalog(site()).unwrap();
    let robots = robots_txt(&catalog);

    assert!(robots.starts_with("User-agent: *\nAllow: /\n"));
    for path in ["/login", "/signup", "/forgot-password", "/reset-password", "/verify-token", "/profile", "/a"] {
        assert!(robots.contains(&format!("Disallow: {path}\n")), "missing {path}");
    }
    assert!(robots.ends_with("Sitemap: https://arena.test/sitemap.xml\n"));
}

#[test]
fn robots_txt_collapses_admin_subtree() {
    let catalog = build_catalog(site()).unwrap();
    let robots = robots_txt(&catalog);
    assert!(!robots.contains("Disallow: /a/"));
    assert_eq!(robots.matches("Disallow:").count(), 7);
}

#[test]
fn robots_txt_never_disallows_public_pages() {
    let catalog = build_catalog(site()).unwrap();
    let robots = robots_txt(&catalog);
    for path in ["/news", "/teams", "/players", "/shop"] {
        assert!(!robots.contains(&format!("Disallow: {path}\n")), "{path}");
    }
}

#[test]
fn robots_txt_keeps_siblings_that_only_share_a_prefix() {
    let mut reg = RouteRegistry::new(site());
    reg.register("/a", PageDescriptor::new("Admin", "/a").no_index()).unwrap();
    reg.register("/about-us", PageDescriptor::new("About", "/about-us").no_index()).unwrap();
    let robots = robots_txt(&reg);
    assert!(robots.contains("Disallow: /a\n"));
    assert!(robots.contains("Disallow: /about-us\n"));
}

// =============================================================================
// sitemap.xml
// =============================================================================

#[test]
fn sitemap_lists_indexable_static_routes_in_order() {
    let catalog = build_catalog(site()).unwrap();
    let xml = sitemap_xml(&catalog).unwrap();
    let locs: Vec<&str> = xml
        .lines()
        .filter_map(|l| l.trim().strip_prefix("<url><loc>"))
        .filter_map(|l| l.strip_suffix("</loc></url>"))
        .collect();
    assert_eq!(
        locs,
        vec![
            "https://arena.test/",
            "https://arena.test/news",
            "https://arena.test/teams",
            "https://arena.test/players",
            "https://arena.test/shop",
        ]
    );
}

#[test]
fn sitemap_is_wrapped_in_urlset() {
    let xml = sitemap_xml(&RouteRegistry::new(site())).unwrap();
    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset"));
    assert!(xml.ends_with("</urlset>\n"));
    assert!(!xml.contains("<url>"));
}

#[test]
fn sitemap_escapes_locations() {
    let mut reg = RouteRegistry::new(site());
    reg.register("/q&a", PageDescriptor::new("Q&A", "/q&a")).unwrap();
    let xml = sitemap_xml(&reg).unwrap();
    assert!(xml.contains("<loc>https://arena.test/q&amp;a</loc>"));
}
