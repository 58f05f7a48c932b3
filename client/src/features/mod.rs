//! Feature components: the views that own data loading for a page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages extract identifiers and hand them to exactly one feature. Content
//! features fetch from the backend through `net::api` as `AsyncTask`s that
//! the page wraps in a `Boundary`. Account and admin features render plain
//! forms and listings whose processing belongs to the backend.

pub mod account;
pub mod admin;
pub mod content;
