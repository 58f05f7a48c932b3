//! Collection and detail pages for news, teams, players and the shop.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::boundary::Boundary;
use crate::features::content::{CollectionList, ContentDetailView, load_collection, load_item};
use crate::net::types::{ContentCard, ContentDetail, ContentKind};
use crate::util::params::tracked_param;

/// List page, e.g. `/teams`.
#[component]
pub fn CollectionPage(kind: ContentKind, heading: &'static str) -> impl IntoView {
    let task = load_collection(kind);

    view! {
        <section class="collection-page">
            <h1>{heading}</h1>
            <Boundary
                task=task
                fallback=move || view! { <p class="collection-page__loading">{format!("Loading {}...", kind.plural())}</p> }
                render={move |items: Vec<ContentCard>| view! { <CollectionList kind=kind items=items/> }}
            />
        </section>
    }
}

/// Detail page, e.g. `/teams/:id`. A missing id is reported to the
/// surrounding `ErrorBoundary`.
///
/// Moving between two items keeps this page mounted, so the load is
/// re-spawned whenever the id changes.
#[component]
pub fn ItemPage(kind: ContentKind) -> impl IntoView {
    let params = use_params_map();
    let id = tracked_param("id", move || params.read().get("id"));

    move || {
        id.get().map(|id| {
            let task = load_item(kind, id);
            view! {
                <section class="item-page">
                    <Boundary
                        task=task
                        fallback=|| view! { <p class="item-page__loading">"Loading..."</p> }
                        render={|detail: ContentDetail| view! { <ContentDetailView detail=detail/> }}
                    />
                </section>
            }
        })
    }
}
