//! # client
//!
//! Leptos front end for the SAGE learning-management system. Server-rendered
//! by the `sage` host and hydrated in the browser as WASM.
//!
//! This crate contains the session model (token store, token decoding, auth
//! state), the role-based route guards, the REST client for the SAGE API, and
//! the pages that sit on top of them.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered `App`.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
