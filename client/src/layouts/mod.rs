//! Route layout shells.
//!
//! ARCHITECTURE
//! ============
//! Every route renders inside exactly one `RouteLayout`, which declares the
//! route's metadata and otherwise passes children through untouched.

pub mod route_layout;

pub use route_layout::{Decoration, RouteLayout};
