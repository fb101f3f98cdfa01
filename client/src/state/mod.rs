//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Only the session lives in shared state; page data (teacher and class
//! lists) is fetched and held by the page that shows it.

pub mod auth;
