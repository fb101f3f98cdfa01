//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, dialogs,
//! theme) and pure policy logic from page and component code so both can be
//! tested without a DOM.

pub mod auth;
pub mod dark_mode;
pub mod dialog;
pub mod session;
pub mod token_store;
