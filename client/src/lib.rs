//! # client
//!
//! Leptos + WASM frontend for the Arena community site.
//!
//! This crate contains the route table, the shared route layout that applies
//! page metadata from the `seo` catalog, pages and their features, shared
//! components, client state, and the REST helpers that talk to the backend.
//! The `ssr` feature compiles it into the server for rendering; `hydrate`
//! builds the browser bundle.

pub mod app;
pub mod components;
pub mod features;
pub mod hooks;
pub mod layouts;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: attach to the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("logger already set: {e}").into());
    }
    leptos::mount::hydrate_body(app::App);
}
