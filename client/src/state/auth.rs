//! Auth-session context for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The `session` store is the single writer. This module mirrors its state
//! into an `RwSignal` so route guards and user-aware components re-render on
//! every transition, and exposes fire-and-forget helpers for the async
//! operations.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::Arc;

use leptos::prelude::*;
use session::{AuthState, AuthStore, Subscription};

use crate::net::BrowserTransport;

/// How often a signed-in tab re-probes `/api/me` to notice expired sessions.
pub const SESSION_REFRESH_SECS: u64 = 300;

#[derive(Clone)]
pub struct AuthContext {
    /// Read-only mirror of the store. Write through the store, never here.
    pub state: RwSignal<AuthState>,
    store: AuthStore<BrowserTransport>,
    /// Keeps the mirror alive for as long as any clone of the context.
    _mirror: Arc<Subscription>,
}

impl AuthContext {
    pub fn new(store: AuthStore<BrowserTransport>) -> Self {
        let state = RwSignal::new(store.state());
        let mirror = store.subscribe(move |next| {
            let _ = state.try_set(next.clone());
        });
        Self {
            state,
            store,
            _mirror: Arc::new(mirror),
        }
    }

    pub fn store(&self) -> &AuthStore<BrowserTransport> {
        &self.store
    }

    /// Run the app-start identity probe in the background.
    pub fn spawn_bootstrap(&self) {
        #[cfg(feature = "csr")]
        {
            let store = self.store.clone();
            leptos::task::spawn_local(async move {
                if let Err(error) = store.bootstrap().await {
                    log::debug!("bootstrap skipped: {error}");
                }
            });
        }
    }

    /// Periodically re-probe identity while signed in. A 401 signs the tab
    /// out and the route guard takes it from there.
    pub fn spawn_session_refresh(&self) {
        #[cfg(feature = "csr")]
        {
            let store = self.store.clone();
            leptos::task::spawn_local(async move {
                loop {
                    gloo_timers::future::sleep(std::time::Duration::from_secs(SESSION_REFRESH_SECS)).await;
                    if !should_refresh(&store.state()) {
                        continue;
                    }
                    if let Err(error) = store.refresh().await {
                        log::debug!("session refresh skipped: {error}");
                    }
                }
            });
        }
    }

    /// Sign out in the background. State is anonymous afterwards whatever the
    /// server says.
    pub fn spawn_logout(&self) {
        #[cfg(feature = "csr")]
        {
            let store = self.store.clone();
            leptos::task::spawn_local(async move { store.logout().await });
        }
    }
}

/// Only settled, signed-in sessions are worth re-probing.
pub fn should_refresh(state: &AuthState) -> bool {
    !state.loading && state.is_authenticated()
}

pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}
