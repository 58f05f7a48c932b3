//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and small presentational helpers, reading
//! shared state from Leptos context providers where they need it.

pub mod back_button;
pub mod boundary;
pub mod content_card;
pub mod empty_state;
pub mod gradient_overlay;
pub mod page_meta;
pub mod site_header;
pub mod toaster;
