//! Admin area: dashboard links and read-only content listings.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use leptos::prelude::*;

use crate::components::boundary::Boundary;
use crate::components::empty_state::EmptyState;
use crate::features::content::{CollectionList, load_collection};
use crate::net::types::{ContentCard as Card, ContentKind};
use crate::state::auth::AuthState;

/// One screen of the admin area.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdminSection {
    Dashboard,
    News,
    Teams,
    Players,
    Shop,
    Settings,
}

impl AdminSection {
    /// Sections linked from the dashboard.
    pub const LINKED: [Self; 5] = [Self::News, Self::Teams, Self::Players, Self::Shop, Self::Settings];

    #[must_use]
    pub fn heading(self) -> &'static str {
        match self {
            Self::Dashboard => "Admin dashboard",
            Self::News => "Manage news",
            Self::Teams => "Manage teams",
            Self::Players => "Manage players",
            Self::Shop => "Manage shop",
            Self::Settings => "Site settings",
        }
    }

    #[must_use]
    pub fn href(self) -> &'static str {
        match self {
            Self::Dashboard => "/a",
            Self::News => "/a/news",
            Self::Teams => "/a/teams",
            Self::Players => "/a/players",
            Self::Shop => "/a/shop",
            Self::Settings => "/a/settings",
        }
    }

    /// Content collection listed by this section, if any.
    #[must_use]
    pub fn content_kind(self) -> Option<ContentKind> {
        match self {
            Self::News => Some(ContentKind::News),
            Self::Teams => Some(ContentKind::Team),
            Self::Players => Some(ContentKind::Player),
            Self::Shop => Some(ContentKind::Product),
            Self::Dashboard | Self::Settings => None,
        }
    }
}

#[component]
fn SectionBody(section: AdminSection) -> impl IntoView {
    if let Some(kind) = section.content_kind() {
        let task = load_collection(kind);
        return view! {
            <Boundary
                task=task
                fallback=|| view! { <p class="admin-panel__loading">"Loading..."</p> }
                render={move |items: Vec<Card>| view! { <CollectionList kind=kind items=items/> }}
            />
        }
        .into_any();
    }

    match section {
        AdminSection::Dashboard => view! {
            <ul class="admin-panel__links">
                {AdminSection::LINKED
                    .into_iter()
                    .map(|s| view! { <li><a href=s.href()>{s.heading()}</a></li> })
                    .collect::<Vec<_>>()}
            </ul>
        }
        .into_any(),
        _ => view! { <EmptyState text="No settings available yet."/> }.into_any(),
    }
}

/// Admin screen, shown only to admins.
#[component]
pub fn AdminPanel(section: AdminSection) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <section class="admin-panel">
            <h1>{section.heading()}</h1>
            <Show
                when=move || auth.get().is_admin()
                fallback=move || {
                    if auth.get().loading {
                        view! { <p class="admin-panel__loading">"Checking access..."</p> }.into_any()
                    } else {
                        view! { <EmptyState text="Admins only."/> }.into_any()
                    }
                }
            >
                <SectionBody section=section/>
            </Show>
        </section>
    }
}
