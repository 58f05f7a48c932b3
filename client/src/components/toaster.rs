//! Toast stack fed by the shared `ToastState` context.

use leptos::prelude::*;

use crate::state::toast::ToastState;

/// Render queued toasts; clicking one dismisses it early.
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toaster" aria-live="polite">
            <For
                each=move || toasts.get().toasts().to_vec()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class = format!("toast {}", toast.kind.css_modifier());
                    view! {
                        <div class=class role="status" on:click=move |_| {
                            toasts.update(|t| {
                                t.dismiss(id);
                            });
                        }>
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
