//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `toast`, `task`) so components depend
//! on small focused models. `App` provides the shared ones as `RwSignal`
//! contexts; nothing here is a hidden global.

pub mod auth;
pub mod task;
pub mod toast;
