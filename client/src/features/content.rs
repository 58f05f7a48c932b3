//! News, team, player and shop content views.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use leptos::prelude::*;

use crate::components::back_button::BackButton;
use crate::components::content_card::ContentCard;
use crate::components::empty_state::EmptyState;
use crate::net::types::{ContentCard as Card, ContentDetail, ContentKind};
use crate::state::task::AsyncTask;

/// Start loading the list for `kind`.
pub fn load_collection(kind: ContentKind) -> AsyncTask<Vec<Card>> {
    AsyncTask::spawn(crate::net::api::fetch_collection(kind))
}

/// Start loading item `id` of `kind`.
pub fn load_item(kind: ContentKind, id: String) -> AsyncTask<ContentDetail> {
    AsyncTask::spawn(async move { crate::net::api::fetch_item(kind, &id).await })
}

fn empty_collection_text(kind: ContentKind) -> String {
    format!("No {} found.", kind.plural())
}

/// Split a plain-text body into paragraphs on blank lines.
fn paragraphs(body: &str) -> Vec<String> {
    body.split("\n\n")
        .map(|p| p.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|p| !p.is_empty())
        .collect()
}

/// Grid of cards, or the empty-state placeholder.
#[component]
pub fn CollectionList(kind: ContentKind, items: Vec<Card>) -> impl IntoView {
    if items.is_empty() {
        return view! { <EmptyState text=empty_collection_text(kind)/> }.into_any();
    }

    view! {
        <div class="collection-grid">
            {items.into_iter().map(|card| view! { <ContentCard kind=kind card=card/> }).collect::<Vec<_>>()}
        </div>
    }
    .into_any()
}

/// One article, team, player or product.
#[component]
pub fn ContentDetailView(detail: ContentDetail) -> impl IntoView {
    view! {
        <article class="content-detail">
            <BackButton/>
            <h1 class="content-detail__title">{detail.title}</h1>
            {detail.published_at.map(|at| view! { <time class="content-detail__date">{at}</time> })}
            {detail.image_url.map(|src| view! { <img class="content-detail__image" src=src alt=""/> })}
            {paragraphs(&detail.body).into_iter().map(|p| view! { <p>{p}</p> }).collect::<Vec<_>>()}
        </article>
    }
}
