//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (form state, API calls, guard
//! wrapping) and delegates chrome to `components`.

pub mod admin_teachers;
pub mod home;
pub mod login;
pub mod register;
pub mod teacher_classes;
