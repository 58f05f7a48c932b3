use super::*;

fn registry() -> RouteRegistry {
    RouteRegistry::new(SiteConfig::new("https://arena.test", "Arena").unwrap())
}

fn page(title: &str, url: &str) -> PageDescriptor {
    PageDescriptor::new(title, url).description("desc")
}

// =============================================================================
// RoutePattern
// =============================================================================

#[test]
fn parse_root() {
    let pattern = RoutePattern::parse("/").unwrap();
    assert!(pattern.segments().is_empty());
    assert!(!pattern.is_dynamic());
}

#[test]
fn parse_static_and_param_segments() {
    let pattern = RoutePattern::parse("/news/:id").unwrap();
    assert_eq!(
        pattern.segments(),
        &[Segment::Static("news".to_owned()), Segment::Param("id".to_owned())]
    );
    assert!(pattern.is_dynamic());
}

#[test]
fn parse_rejects_malformed_patterns() {
    for (raw, reason) in [
        ("news", "must start with '/'"),
        ("", "must start with '/'"),
        ("/news/", "trailing slash"),
        ("/a//b", "empty segment"),
        ("/news/:", "unnamed parameter"),
    ] {
        assert_eq!(
            RoutePattern::parse(raw),
            Err(ConfigurationError::InvalidPattern { pattern: raw.to_owned(), reason }),
            "{raw}"
        );
    }
}

#[test]
fn matches_captures_params() {
    let pattern = RoutePattern::parse("/teams/:id").unwrap();
    assert_eq!(pattern.matches("/teams/red-wolves"), Some(vec![("id".to_owned(), "red-wolves".to_owned())]));
    assert_eq!(pattern.matches("/teams/7?tab=roster#top"), Some(vec![("id".to_owned(), "7".to_owned())]));
    assert_eq!(pattern.matches("/teams"), None);
    assert_eq!(pattern.matches("/players/7"), None);
    assert_eq!(pattern.matches("/teams/7/roster"), None);
}

#[test]
fn root_matches_only_root() {
    let pattern = RoutePattern::parse("/").unwrap();
    assert_eq!(pattern.matches("/"), Some(Vec::new()));
    assert_eq!(pattern.matches("/?logout=true"), Some(Vec::new()));
    assert_eq!(pattern.matches("/news"), None);
}

// =============================================================================
// Registration
// =============================================================================

#[test]
fn register_resolves_metadata_once_and_stores_it() {
    let mut reg = registry();
    let entry = reg.register("/teams", page("Teams", "/teams")).unwrap();
    assert_eq!(entry.metadata().canonical_url, "https://arena.test/teams");
    assert_eq!(entry.descriptor().title, "Teams");
    assert_eq!(reg.len(), 1);
    assert!(reg.get("/teams").is_some());
}

#[test]
fn register_rejects_duplicate_pattern() {
    let mut reg = registry();
    reg.register("/teams", page("Teams", "/teams")).unwrap();
    assert_eq!(
        reg.register("/teams", page("Teams again", "/teams")).unwrap_err(),
        ConfigurationError::DuplicateRoute { pattern: "/teams".to_owned(), existing: "/teams".to_owned() }
    );
    assert_eq!(reg.len(), 1);
}

#[test]
fn register_rejects_pattern_differing_only_in_param_name() {
    let mut reg = registry();
    reg.register("/news/:id", page("Article", "/news/:id")).unwrap();
    assert_eq!(
        reg.register("/news/:slug", page("Article by slug", "/news/:slug")).unwrap_err(),
        ConfigurationError::DuplicateRoute { pattern: "/news/:slug".to_owned(), existing: "/news/:id".to_owned() }
    );
    assert_eq!(reg.len(), 1);
    let (entry, params) = reg.resolve("/news/42").unwrap();
    assert_eq!(entry.pattern().as_str(), "/news/:id");
    assert_eq!(params, vec![("id".to_owned(), "42".to_owned())]);
}

#[test]
fn overlaps_ignores_param_names_only() {
    let parse = |raw| RoutePattern::parse(raw).unwrap();
    assert!(parse("/a/:x/b").overlaps(&parse("/a/:y/b")));
    assert!(!parse("/news/:id").overlaps(&parse("/news/latest")));
    assert!(!parse("/news").overlaps(&parse("/news/:id")));
    assert!(parse("/").overlaps(&parse("/")));
}

#[test]
fn register_rejects_url_mismatch() {
    let mut reg = registry();
    assert_eq!(
        reg.register("/teams", page("Teams", "/team")).unwrap_err(),
        ConfigurationError::UrlMismatch { pattern: "/teams".to_owned(), url: "/team".to_owned() }
    );
    assert!(reg.is_empty());
}

#[test]
fn register_surfaces_builder_errors() {
    let mut reg = registry();
    assert!(matches!(
        reg.register("/teams", page("", "/teams")),
        Err(ConfigurationError::EmptyTitle { .. })
    ));
    assert!(matches!(
        reg.register("/teams", page("Teams", "")),
        Err(ConfigurationError::EmptyUrl { .. })
    ));
}

#[test]
fn iter_preserves_registration_order() {
    let mut reg = registry();
    reg.register("/", page("Arena", "/")).unwrap();
    reg.register("/news", page("News", "/news")).unwrap();
    reg.register("/a", page("Admin", "/a").no_index()).unwrap();
    let order: Vec<&str> = reg.iter().map(|e| e.pattern().as_str()).collect();
    assert_eq!(order, vec!["/", "/news", "/a"]);
    let indexable: Vec<&str> = reg.indexable().map(|e| e.pattern().as_str()).collect();
    assert_eq!(indexable, vec!["/", "/news"]);
}

// =============================================================================
// Resolution
// =============================================================================

#[test]
fn resolve_prefers_static_over_dynamic() {
    let mut reg = registry();
    reg.register("/news/:id", page("Article", "/news/:id")).unwrap();
    reg.register("/news/latest", page("Latest", "/news/latest")).unwrap();

    let (entry, params) = reg.resolve("/news/latest").unwrap();
    assert_eq!(entry.pattern().as_str(), "/news/latest");
    assert!(params.is_empty());

    let (entry, params) = reg.resolve("/news/42").unwrap();
    assert_eq!(entry.pattern().as_str(), "/news/:id");
    assert_eq!(params, vec![("id".to_owned(), "42".to_owned())]);
}

#[test]
fn resolve_unknown_path_is_none() {
    let mut reg = registry();
    reg.register("/news", page("News", "/news")).unwrap();
    assert!(reg.resolve("/shop").is_none());
}

#[test]
fn metadata_at_relocates_dynamic_routes() {
    let mut reg = registry();
    reg.register("/players/:id", page("Player", "/players/:id")).unwrap();
    reg.register("/players", page("Players", "/players")).unwrap();

    let meta = reg.metadata_at("/players/:id", "/players/99").unwrap();
    assert_eq!(meta.canonical_url, "https://arena.test/players/99");

    let meta = reg.metadata_at("/players", "/players?page=2").unwrap();
    assert_eq!(meta.canonical_url, "https://arena.test/players");

    assert!(reg.metadata_at("/shop", "/shop").is_none());
}

#[test]
fn metadata_at_ignores_paths_the_pattern_does_not_match() {
    let mut reg = registry();
    reg.register("/players/:id", page("Player", "/players/:id")).unwrap();
    let meta = reg.metadata_at("/players/:id", "/elsewhere").unwrap();
    assert_eq!(meta.canonical_url, "https://arena.test/players/:id");
}
