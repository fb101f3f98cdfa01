//! Persistent home of the raw session token.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser build keeps the token in `localStorage` under [`TOKEN_KEY`].
//! Every operation is fail-silent: an unavailable or throwing storage is
//! logged and treated as "no token", never surfaced to callers.

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

use std::sync::{Mutex, PoisonError};

/// `localStorage` key holding the bearer token.
pub const TOKEN_KEY: &str = "token";

/// Holds at most one raw bearer token.
pub trait TokenStore: Send + Sync {
    fn save(&self, token: &str);
    fn load(&self) -> Option<String>;
    fn clear(&self);
}

/// Browser `localStorage` backed store. Outside the hydrate build it holds nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalTokenStore;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    match web_sys::window().map(|w| w.local_storage()) {
        Some(Ok(Some(storage))) => Some(storage),
        _ => {
            log::warn!("localStorage unavailable; session token not persisted");
            None
        }
    }
}

impl TokenStore for LocalTokenStore {
    fn save(&self, token: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                if storage.set_item(TOKEN_KEY, token).is_err() {
                    log::warn!("failed to write session token to localStorage");
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    }

    fn load(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(TOKEN_KEY).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(TOKEN_KEY);
            }
        }
    }
}

/// In-process store for server rendering and tests.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with `token`, as if a previous tab had logged in.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self { token: Mutex::new(Some(token.into())) }
    }
}

impl TokenStore for MemoryTokenStore {
    fn save(&self, token: &str) {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.to_owned());
    }

    fn load(&self) -> Option<String> {
        self.token.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn clear(&self) {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}
