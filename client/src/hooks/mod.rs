//! Reusable behavior hooks for components.

pub mod last_visited;
pub mod logout;
