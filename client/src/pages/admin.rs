//! Admin area pages under `/a`.

use leptos::prelude::*;

use crate::components::back_button::BackButton;
use crate::features::admin::{AdminPanel, AdminSection};

#[component]
pub fn AdminPage(section: AdminSection) -> impl IntoView {
    view! {
        <div class="admin-page">
            {(section != AdminSection::Dashboard).then(|| view! { <BackButton label="Admin"/> })}
            <AdminPanel section=section/>
        </div>
    }
}
