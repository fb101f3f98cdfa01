//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the shared `AuthContext` from Leptos context; the route
//! guards decide whether page content is shown at all.

pub mod header;
pub mod layout;
pub mod route_guard;
pub mod sidebar;
