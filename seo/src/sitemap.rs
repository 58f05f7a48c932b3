//! Crawler files rendered from a route registry: `robots.txt` and `sitemap.xml`.

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::error::SitemapError;
use crate::metadata::canonical_url;
use crate::registry::RouteRegistry;

#[cfg(test)]
#[path = "sitemap_test.rs"]
mod sitemap_test;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Render `robots.txt`.
///
/// Static no-index routes are disallowed. A route nested under an already
/// disallowed prefix (the admin subtree) is not repeated.
#[must_use]
pub fn robots_txt(registry: &RouteRegistry) -> String {
    let mut disallowed: Vec<&str> = Vec::new();
    for entry in registry.iter() {
        let pattern = entry.pattern();
        if entry.metadata().robots.is_indexable() || pattern.is_dynamic() {
            continue;
        }
        let path = pattern.as_str();
        let covered = disallowed.iter().any(|prefix| path.starts_with(&format!("{prefix}/")));
        if !covered {
            disallowed.push(path);
        }
    }

    let mut out = String::from("User-agent: *\nAllow: /\n");
    for path in disallowed {
        out.push_str(&format!("Disallow: {path}\n"));
    }
    out.push_str(&format!("\nSitemap: {}\n", canonical_url(&registry.site().base_url, "/sitemap.xml")));
    out
}

/// Render `sitemap.xml` listing indexable static routes in registration order.
///
/// # Errors
///
/// Returns [`SitemapError`] if the XML writer fails.
pub fn sitemap_xml(registry: &RouteRegistry) -> Result<String, SitemapError> {
    let mut writer = Writer::new(Vec::new());
    let mut write = |event: Event<'_>| writer.write_event(event).map_err(|e| SitemapError(e.to_string()));

    write(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    write(Event::Text(BytesText::new("\n")))?;
    write(Event::Start(BytesStart::new("urlset").with_attributes([("xmlns", SITEMAP_NS)])))?;
    write(Event::Text(BytesText::new("\n")))?;
    for entry in registry.indexable().filter(|e| !e.pattern().is_dynamic()) {
        write(Event::Text(BytesText::new("  ")))?;
        write(Event::Start(BytesStart::new("url")))?;
        write(Event::Start(BytesStart::new("loc")))?;
        write(Event::Text(BytesText::new(&entry.metadata().canonical_url)))?;
        write(Event::End(BytesEnd::new("loc")))?;
        write(Event::End(BytesEnd::new("url")))?;
        write(Event::Text(BytesText::new("\n")))?;
    }
    write(Event::End(BytesEnd::new("urlset")))?;
    write(Event::Text(BytesText::new("\n")))?;

    String::from_utf8(writer.into_inner()).map_err(|e| SitemapError(e.to_string()))
}
