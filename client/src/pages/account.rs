//! Account pages: login, signup, password recovery, verification, profile.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::features::account::{AccountFlow, AccountForm, ProfileCard};
use crate::util::params::{ParamError, tracked_param};

/// Form page for `flow`. Reset and verification links must carry a
/// `?token=` query; without one the page reports a parameter error.
#[component]
pub fn AccountPage(flow: AccountFlow) -> impl IntoView {
    let query = use_query_map();
    let token = tracked_param("token", move || query.read().get("token"));

    move || -> Result<_, ParamError> {
        let token = if flow.needs_token() { Some(token.get()?) } else { None };
        Ok(view! {
            <div class="account-page">
                <AccountForm flow=flow token=token/>
            </div>
        })
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    view! {
        <div class="account-page">
            <ProfileCard/>
        </div>
    }
}
