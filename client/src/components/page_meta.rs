//! Head tags for one page's resolved metadata.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered only by `RouteLayout`. Values arrive fully resolved from the
//! `seo` catalog; nothing here composes titles or URLs.

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};
use seo::ResolvedMetadata;

/// Emit title, description, keywords, robots, canonical and Open Graph tags.
#[component]
pub fn PageMeta(metadata: ResolvedMetadata) -> impl IntoView {
    let keywords = metadata.keywords_content();
    let og = metadata.open_graph;

    view! {
        <Title text=metadata.title/>
        <Meta name="description" content=metadata.description/>
        <Meta name="keywords" content=keywords/>
        <Meta name="robots" content=metadata.robots.as_str()/>
        <Link rel="canonical" href=metadata.canonical_url/>
        <Meta property="og:title" content=og.title/>
        <Meta property="og:description" content=og.description/>
        <Meta property="og:url" content=og.url/>
        <Meta property="og:site_name" content=og.site_name/>
        <Meta property="og:locale" content=og.locale/>
        <Meta property="og:type" content=og.kind/>
    }
}
