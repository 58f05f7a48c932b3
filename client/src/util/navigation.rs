//! Client-side navigation seam.
//!
//! Components and hooks talk to [`Navigator`] so tests can record navigation
//! instead of driving a real router. [`BrowserRouter`] forwards `push` to the
//! Leptos router and `back` to the browser history.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use leptos_router::NavigateOptions;

/// Client-side router operations used by this layer.
pub trait Navigator {
    /// Go to the previous history entry.
    fn back(&self);
    /// Navigate to `path`.
    fn push(&self, path: &str);
}

/// Step back one history entry. Falls back to browser behavior when the
/// history is empty.
pub fn history_back() {
    #[cfg(feature = "hydrate")]
    {
        let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
            return;
        };
        if let Err(e) = history.back() {
            log::warn!("history.back() failed: {e:?}");
        }
    }
}

/// [`Navigator`] over the function returned by `use_navigate`.
#[derive(Clone)]
pub struct BrowserRouter<F> {
    navigate: F,
}

impl<F> BrowserRouter<F>
where
    F: Fn(&str, NavigateOptions),
{
    pub fn new(navigate: F) -> Self {
        Self { navigate }
    }
}

impl<F> Navigator for BrowserRouter<F>
where
    F: Fn(&str, NavigateOptions),
{
    fn back(&self) {
        history_back();
    }

    fn push(&self, path: &str) {
        (self.navigate)(path, NavigateOptions::default());
    }
}
