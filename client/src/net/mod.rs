//! Networking modules for the SAGE REST API.
//!
//! DESIGN
//! ======
//! `types` holds the wire DTOs, `config` locates the API, and `api` performs
//! the requests. Pages call `api` directly; there is no client-side cache.

pub mod api;
pub mod config;
pub mod types;
