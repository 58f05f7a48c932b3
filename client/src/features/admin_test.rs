use super::*;

#[test]
fn linked_sections_live_under_admin_prefix() {
    for section in AdminSection::LINKED {
        assert!(section.href().starts_with("/a/"), "{section:?}");
    }
    assert_eq!(AdminSection::Dashboard.href(), "/a");
}

#[test]
fn hrefs_match_registered_routes() {
    for section in AdminSection::LINKED {
        assert!(seo::SiteRoute::ALL.iter().any(|r| r.pattern() == section.href()), "{section:?}");
    }
}

#[test]
fn content_sections_map_to_collections() {
    assert_eq!(AdminSection::Teams.content_kind(), Some(ContentKind::Team));
    assert_eq!(AdminSection::Shop.content_kind(), Some(ContentKind::Product));
    assert_eq!(AdminSection::Settings.content_kind(), None);
    assert_eq!(AdminSection::Dashboard.content_kind(), None);
}
