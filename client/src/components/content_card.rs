//! Card linking to one content item.

use leptos::prelude::*;

use crate::net::types::{ContentCard as Card, ContentKind};

/// Clickable card for a news article, team, player or product.
#[component]
pub fn ContentCard(kind: ContentKind, card: Card) -> impl IntoView {
    let href = kind.item_href(&card.id);

    view! {
        <a class="content-card" href=href>
            {card.image_url.map(|src| view! { <img class="content-card__image" src=src alt=""/> })}
            <span class="content-card__title">{card.title}</span>
            {card.summary.map(|s| view! { <p class="content-card__summary">{s}</p> })}
        </a>
    }
}
