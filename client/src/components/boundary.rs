//! Suspension boundary over an explicit [`AsyncTask`].

use leptos::prelude::*;

use crate::components::empty_state::EmptyState;
use crate::state::task::{AsyncTask, TaskState};

/// Show `fallback` while `task` is pending, `render(value)` once resolved, and
/// the empty-state placeholder with the error text if it is rejected.
#[component]
pub fn Boundary<T, F, IV>(task: AsyncTask<T>, #[prop(into)] fallback: ViewFn, render: F) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
    F: Fn(T) -> IV + Send + Sync + 'static,
    IV: IntoView + 'static,
{
    move || match task.state() {
        TaskState::Pending => fallback.run(),
        TaskState::Resolved(value) => render(value).into_any(),
        TaskState::Rejected(message) => view! { <EmptyState text=message/> }.into_any(),
    }
}
