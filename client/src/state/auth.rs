//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The router reads this to pick a route partition, and the header reads it
//! for the avatar. The backend owns the session; this side only observes it.
//!
//! LIFECYCLE
//! =========
//! `AuthContext` is built once by the app shell. `bootstrap` performs the
//! initial `/api/auth/user` fetch, `teardown` runs on unmount so a late
//! bootstrap response is dropped instead of writing to a disposed signal.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;

use crate::net::types::User;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for AuthState {
    /// Sessions start indeterminate until the bootstrap fetch resolves.
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Apply the bootstrap result. `None` means no session.
    pub fn resolve(&mut self, user: Option<User>) {
        self.user = user;
        self.loading = false;
    }

    pub fn sign_out(&mut self) {
        self.user = None;
        self.loading = false;
    }
}

/// Explicitly constructed auth provider handed to the component tree.
#[derive(Clone, Debug)]
pub struct AuthContext {
    pub state: RwSignal<AuthState>,
    alive: Arc<AtomicBool>,
}

impl AuthContext {
    pub fn new() -> Self {
        Self { state: RwSignal::new(AuthState::default()), alive: Arc::new(AtomicBool::new(true)) }
    }

    /// Fetch the current session and resolve the loading state.
    pub fn bootstrap(&self) {
        #[cfg(feature = "csr")]
        {
            let ctx = self.clone();
            leptos::task::spawn_local(async move {
                let user = crate::net::api::fetch_current_user().await;
                ctx.resolve(user);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            self.resolve(None);
        }
    }

    /// Write a session result unless the context has been torn down.
    pub fn resolve(&self, user: Option<User>) {
        if !self.is_alive() {
            return;
        }
        self.state.update(|s| s.resolve(user));
    }

    /// End the session: the backend clears its cookie on `/api/logout`.
    pub fn sign_out(&self) {
        if self.is_alive() {
            self.state.update(AuthState::sign_out);
        }
        #[cfg(feature = "csr")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(crate::net::api::LOGOUT_PATH);
            }
        }
    }

    pub fn teardown(&self) {
        self.alive.store(false, Ordering::Release);
    }

    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Acquire)
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}
