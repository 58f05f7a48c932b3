//! Route and query parameter extraction for page components.
//!
//! Pages hand the raw `Option<String>` from `use_params_map` /
//! `use_query_map` to [`required_param`]; a missing or blank value becomes a
//! [`ParamError`] that the app-level `ErrorBoundary` renders.
//! [`tracked_param`] wraps the same check in a memo for pages that stay
//! mounted while only their params change.

#[cfg(test)]
#[path = "params_test.rs"]
mod params_test;

use leptos::prelude::*;

/// A route or query parameter the page needs is unusable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParamError {
    #[error("missing parameter `{0}`")]
    Missing(&'static str),
    #[error("parameter `{0}` is blank")]
    Blank(&'static str),
}

/// Trimmed value of a required parameter.
///
/// # Errors
///
/// Returns [`ParamError::Missing`] when absent and [`ParamError::Blank`] when
/// it is empty after trimming.
pub fn required_param(value: Option<String>, name: &'static str) -> Result<String, ParamError> {
    let value = value.ok_or(ParamError::Missing(name))?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ParamError::Blank(name));
    }
    Ok(trimmed.to_owned())
}

/// [`required_param`] re-evaluated whenever the signals `read` touches change.
pub fn tracked_param(
    name: &'static str,
    read: impl Fn() -> Option<String> + Send + Sync + 'static,
) -> Memo<Result<String, ParamError>> {
    Memo::new(move |_| required_param(read(), name))
}
