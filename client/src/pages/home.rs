//! Landing page: hero banner and the latest news.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::boundary::Boundary;
use crate::features::content::{CollectionList, load_collection};
use crate::net::types::{ContentCard, ContentKind};

#[component]
pub fn HomePage() -> impl IntoView {
    let query = use_query_map();
    let logged_out = move || query.with(|q| q.get("logout").is_some_and(|v| v == "true"));
    let news = load_collection(ContentKind::News);

    view! {
        <div class="home-page">
            <Show when=logged_out>
                <p class="home-page__notice">"You have been logged out."</p>
            </Show>
            <section class="home-hero">
                <h1>"Arena"</h1>
                <p class="home-hero__tagline">"News, teams, players and gear for the Free Fire community."</p>
                <div class="home-hero__links">
                    <a class="btn btn--primary" href="/teams">"Browse teams"</a>
                    <a class="btn" href="/shop">"Visit the shop"</a>
                </div>
            </section>
            <section class="home-news">
                <h2>"Latest news"</h2>
                <Boundary
                    task=news
                    fallback=|| view! { <p class="home-news__loading">"Loading news..."</p> }
                    render={|items: Vec<ContentCard>| view! { <CollectionList kind=ContentKind::News items=items/> }}
                />
            </section>
        </div>
    }
}
