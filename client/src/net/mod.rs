//! Networking modules for the community site's HTTP endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps REST calls to the backend and `types` defines the JSON
//! payloads shared with it.

pub mod api;
pub mod types;
