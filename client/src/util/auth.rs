//! Role-gating rules shared by the route guards.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guards derive a [`GuardDecision`] from the current [`AuthState`] and only
//! act when that decision changes into [`GuardDecision::Redirect`]. Re-running
//! with the same state therefore never re-navigates.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::Role;
use crate::state::auth::AuthState;

/// Where unauthorized visitors are sent.
pub const FALLBACK_PATH: &str = "/";

/// Which roles may see a guarded subtree.
pub trait RoutePolicy: Copy + Send + Sync + 'static {
    fn allows(self, role: Role) -> bool;

    /// Alert text shown once before redirecting away.
    fn denied_message(self) -> &'static str;

    /// Placeholder text while the auth state is still loading.
    fn loading_text(self) -> &'static str {
        "Loading..."
    }
}

/// Admin pages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SuperadminOnly;

impl RoutePolicy for SuperadminOnly {
    fn allows(self, role: Role) -> bool {
        match role {
            Role::Superadmin => true,
            Role::Teacher | Role::Student => false,
        }
    }

    fn denied_message(self) -> &'static str {
        "Akses ditolak. Anda bukan Superadmin."
    }
}

/// Class management pages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TeacherOrSuperadmin;

impl RoutePolicy for TeacherOrSuperadmin {
    fn allows(self, role: Role) -> bool {
        match role {
            Role::Teacher | Role::Superadmin => true,
            Role::Student => false,
        }
    }

    fn denied_message(self) -> &'static str {
        "Akses ditolak. Anda harus login sebagai Guru atau Superadmin."
    }

    fn loading_text(self) -> &'static str {
        "Loading user data..."
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Auth state unresolved; show the placeholder.
    Loading,
    Render,
    Redirect,
}

/// Decide what a guard with `policy` should do for `state`.
pub fn decide<P: RoutePolicy>(policy: P, state: &AuthState) -> GuardDecision {
    if state.loading() {
        return GuardDecision::Loading;
    }
    match state.role() {
        Some(role) if policy.allows(role) => GuardDecision::Render,
        Some(_) | None => GuardDecision::Redirect,
    }
}

/// True only on the step where the decision becomes `Redirect`.
pub fn redirect_due(previous: Option<GuardDecision>, next: GuardDecision) -> bool {
    next == GuardDecision::Redirect && previous != Some(GuardDecision::Redirect)
}

/// Post-login landing page for `role`.
pub fn home_path(role: Role) -> &'static str {
    match role {
        Role::Superadmin => "/admin/teachers",
        Role::Teacher => "/dashboard/teacher/classes",
        Role::Student => "/",
    }
}

/// Sidebar entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub section: &'static str,
    pub label: &'static str,
    pub href: &'static str,
}

/// Navigation entries visible to `role` (none for guests).
pub fn nav_links(role: Option<Role>) -> Vec<NavLink> {
    let classes = NavLink { section: "Menu", label: "Manajemen Kelas", href: "/dashboard/teacher/classes" };
    let teachers = NavLink { section: "Admin", label: "Manajemen Guru", href: "/admin/teachers" };
    match role {
        Some(Role::Superadmin) => vec![classes, teachers],
        Some(Role::Teacher) => vec![classes],
        Some(Role::Student) | None => Vec::new(),
    }
}
