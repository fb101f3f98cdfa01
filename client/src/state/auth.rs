//! Authentication state: who is signed in, and whether we know yet.
//!
//! DESIGN
//! ======
//! `AuthState` is plain data with pure transitions that take the token store
//! by reference, so every rule is testable without a browser. `AuthContext`
//! is the reactive handle `App` provides once at the root; pages, guards and
//! layout components fetch it with `expect_context` and never touch storage
//! themselves.
//!
//! Lifecycle: `Loading` until `initialize` runs (client-only, from an effect),
//! then `Authenticated`/`Unauthenticated` flip via `login`/`logout`. Nothing
//! returns to `Loading` short of a page reload.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::Arc;

use leptos::prelude::*;

use crate::net::api::ApiError;
use crate::net::types::{Role, UserIdentity};
use crate::util::session::{self, DecodeError};
use crate::util::token_store::TokenStore;

/// Tri-state authentication status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AuthState {
    /// Startup: the stored token has not been checked yet.
    #[default]
    Loading,
    Authenticated { user: UserIdentity, token: String },
    Unauthenticated,
}

impl AuthState {
    pub fn loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn user(&self) -> Option<&UserIdentity> {
        match self {
            Self::Authenticated { user, .. } => Some(user),
            Self::Loading | Self::Unauthenticated => None,
        }
    }

    pub fn token(&self) -> Option<&str> {
        match self {
            Self::Authenticated { token, .. } => Some(token),
            Self::Loading | Self::Unauthenticated => None,
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.user().map(|u| u.role)
    }

    /// Resolve the startup check against whatever token `store` holds.
    ///
    /// A stored token that fails to decode is removed. Calling this after the
    /// state has resolved does nothing.
    pub fn initialize(&mut self, store: &dyn TokenStore) {
        if !self.loading() {
            return;
        }
        *self = match store.load() {
            Some(token) => match session::decode(&token) {
                Ok(user) => {
                    log::debug!("restored session for {} ({})", user.identifier, user.role);
                    Self::Authenticated { user, token }
                }
                Err(e) => {
                    log::warn!("discarding stored session token: {e}");
                    store.clear();
                    Self::Unauthenticated
                }
            },
            None => Self::Unauthenticated,
        };
    }

    /// Adopt `token` as the current session.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] if the token cannot be decoded; the state and
    /// the store are left untouched in that case.
    pub fn login(&mut self, store: &dyn TokenStore, token: &str) -> Result<UserIdentity, DecodeError> {
        let user = session::decode(token)?;
        store.save(token);
        log::info!("signed in as {} ({})", user.identifier, user.role);
        *self = Self::Authenticated { user: user.clone(), token: token.to_owned() };
        Ok(user)
    }

    /// Drop the current session. Idempotent.
    pub fn logout(&mut self, store: &dyn TokenStore) {
        store.clear();
        if matches!(self, Self::Authenticated { .. }) {
            log::info!("signed out");
        }
        *self = Self::Unauthenticated;
    }
}

/// Reactive handle to the application's single [`AuthState`].
///
/// `Copy`, so it can be moved into any number of event handlers and effects.
#[derive(Clone, Copy)]
pub struct AuthContext {
    state: RwSignal<AuthState>,
    store: StoredValue<Arc<dyn TokenStore>>,
}

impl AuthContext {
    pub fn new(store: Arc<dyn TokenStore>) -> Self {
        Self { state: RwSignal::new(AuthState::default()), store: StoredValue::new(store) }
    }

    /// Tracked snapshot of the whole state.
    pub fn get(&self) -> AuthState {
        self.state.get()
    }

    pub fn get_untracked(&self) -> AuthState {
        self.state.get_untracked()
    }

    pub fn loading(&self) -> bool {
        self.state.with(AuthState::loading)
    }

    pub fn user(&self) -> Option<UserIdentity> {
        self.state.with(|s| s.user().cloned())
    }

    pub fn role(&self) -> Option<Role> {
        self.state.with(AuthState::role)
    }

    pub fn token(&self) -> Option<String> {
        self.state.with(|s| s.token().map(str::to_owned))
    }

    /// Untracked token read for use inside event handlers and async tasks.
    pub fn token_untracked(&self) -> Option<String> {
        self.state.with_untracked(|s| s.token().map(str::to_owned))
    }

    pub fn initialize(&self) {
        let store = self.store.get_value();
        if self.state.with_untracked(AuthState::loading) {
            self.state.update(|s| s.initialize(store.as_ref()));
        }
    }

    /// # Errors
    ///
    /// Returns [`DecodeError`] for a malformed token; the current state is kept.
    pub fn login(&self, token: &str) -> Result<UserIdentity, DecodeError> {
        let store = self.store.get_value();
        let mut next = self.state.get_untracked();
        let user = next.login(store.as_ref(), token)?;
        self.state.set(next);
        Ok(user)
    }

    pub fn logout(&self) {
        let store = self.store.get_value();
        if self.state.with_untracked(|s| matches!(s, AuthState::Unauthenticated)) {
            store.clear();
            return;
        }
        self.state.update(|s| s.logout(store.as_ref()));
    }

    /// Tokens are trusted until the API answers 401; that answer ends the session.
    pub fn expire_if_unauthorized(&self, err: &ApiError) {
        if err.is_unauthorized() {
            log::warn!("API rejected session token; signing out");
            self.logout();
        }
    }
}
