//! Auth-session state for the current user, with subscribe/notify.
//!
//! SYSTEM CONTEXT
//! ==============
//! The store is created once by the app shell (or a test) and handed to
//! whoever needs it; there is no global instance. The Leptos client mirrors
//! it into a signal through [`AuthStore::subscribe`], the CLI reads it
//! directly.
//!
//! CONCURRENCY
//! ===========
//! One authoritative operation (`bootstrap`, `login`, `signup`, `refresh`)
//! runs at a time; a second one is rejected with [`AuthError::Busy`] without
//! touching state. `logout` is never rejected: it bumps the state epoch so
//! whatever was in flight lands on the floor. No lock is held across an
//! await or while listeners run.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use crate::api;
use crate::bootstrap::{BootstrapOutcome, bootstrap_auth};
use crate::error::{ApiError, AuthError, Operation, classify};
use crate::http::{HttpClient, Transport};
use crate::types::{CurrentUser, LoginRequest, SignupRequest};

/// Snapshot of who is signed in.
///
/// `is_authenticated()` is derived from `user`, so it can never disagree
/// with it.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub user: Option<CurrentUser>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for AuthState {
    /// App-start state: nothing known yet, bootstrap pending.
    fn default() -> Self {
        Self::pending()
    }
}

impl AuthState {
    #[must_use]
    pub fn pending() -> Self {
        Self { user: None, loading: true, error: None }
    }

    #[must_use]
    pub fn anonymous() -> Self {
        Self { user: None, loading: false, error: None }
    }

    #[must_use]
    pub fn authenticated(user: CurrentUser) -> Self {
        Self { user: Some(user), loading: false, error: None }
    }

    #[must_use]
    pub fn failed(message: String) -> Self {
        Self { user: None, loading: false, error: Some(message) }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

type Listener = Arc<dyn Fn(&AuthState) + Send + Sync>;

struct Shared {
    state: AuthState,
    listeners: Vec<(u64, Listener)>,
    next_listener_id: u64,
    busy: bool,
    /// Bumped by logout; results of operations started under an older epoch
    /// are discarded.
    epoch: u64,
}

fn lock(shared: &Mutex<Shared>) -> MutexGuard<'_, Shared> {
    shared.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Handle returned by [`AuthStore::subscribe`]. Dropping it unsubscribes.
#[must_use = "dropping the subscription removes the listener"]
pub struct Subscription {
    shared: Weak<Mutex<Shared>>,
    id: u64,
}

impl Subscription {
    /// Stop receiving notifications. A no-op once the store is gone.
    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(shared) = self.shared.upgrade() {
            lock(&shared).listeners.retain(|(id, _)| *id != self.id);
        }
    }
}

/// Holds the single in-flight slot until dropped.
struct OperationSlot {
    shared: Arc<Mutex<Shared>>,
    epoch: u64,
}

impl Drop for OperationSlot {
    fn drop(&mut self) {
        lock(&self.shared).busy = false;
    }
}

pub struct AuthStore<T> {
    client: HttpClient<T>,
    shared: Arc<Mutex<Shared>>,
}

impl<T> Clone for AuthStore<T> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<T: Transport> AuthStore<T> {
    pub fn new(client: HttpClient<T>) -> Self {
        Self {
            client,
            shared: Arc::new(Mutex::new(Shared {
                state: AuthState::pending(),
                listeners: Vec::new(),
                next_listener_id: 0,
                busy: false,
                epoch: 0,
            })),
        }
    }

    pub fn client(&self) -> &HttpClient<T> {
        &self.client
    }

    #[must_use]
    pub fn state(&self) -> AuthState {
        lock(&self.shared).state.clone()
    }

    /// Register `listener` to run synchronously after every state change.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&AuthState) + Send + Sync + 'static,
    {
        let mut shared = lock(&self.shared);
        let id = shared.next_listener_id;
        shared.next_listener_id += 1;
        shared.listeners.push((id, Arc::new(listener)));
        Subscription {
            shared: Arc::downgrade(&self.shared),
            id,
        }
    }

    /// Resolve the app-start probe into anonymous or authenticated.
    ///
    /// # Errors
    ///
    /// Only [`AuthError::Busy`]; probe failures resolve to anonymous.
    pub async fn bootstrap(&self) -> Result<(), AuthError> {
        let slot = self.begin()?;
        if !self.state().loading {
            self.apply(slot.epoch, |s| s.loading = true);
        }
        let next = match bootstrap_auth(&self.client).await {
            BootstrapOutcome::Authenticated(user) => AuthState::authenticated(user),
            BootstrapOutcome::Anonymous => AuthState::anonymous(),
        };
        self.apply(slot.epoch, |s| *s = next);
        Ok(())
    }

    /// Sign in, then re-fetch identity.
    ///
    /// # Errors
    ///
    /// The classified failure, which is also stored in `state().error`.
    pub async fn login(&self, username: &str, password: &str) -> Result<(), AuthError> {
        let slot = self.begin()?;
        self.start_sign_in(&slot);
        let request = LoginRequest {
            username: username.to_owned(),
            password: password.to_owned(),
        };
        let outcome = self.login_and_fetch(&request, Operation::Login).await;
        self.settle(&slot, outcome)
    }

    /// Create an account, then sign in with the same credentials.
    ///
    /// # Errors
    ///
    /// The classified failure (409 maps to "Username already exists").
    pub async fn signup(&self, username: &str, password: &str, email: Option<&str>) -> Result<(), AuthError> {
        let slot = self.begin()?;
        self.start_sign_in(&slot);
        let request = SignupRequest {
            username: username.to_owned(),
            password: password.to_owned(),
            email: email.map(str::to_owned),
        };
        let outcome = match api::signup(&self.client, &request).await {
            Ok(()) => {
                let login = LoginRequest {
                    username: request.username,
                    password: request.password,
                };
                self.login_and_fetch(&login, Operation::Signup).await
            }
            Err(error) => Err((Operation::Signup, error)),
        };
        self.settle(&slot, outcome)
    }

    /// Best-effort server logout; local state is cleared whatever happens.
    pub async fn logout(&self) {
        if let Err(error) = api::logout(&self.client).await {
            classify(&error, Operation::Logout).log(Operation::Logout, &error);
        }
        self.notify_after(|shared| {
            shared.epoch += 1;
            shared.state = AuthState::anonymous();
            true
        });
    }

    /// Re-probe identity for a running session. A 401 silently signs the
    /// user out; other failures leave the state as it was.
    ///
    /// # Errors
    ///
    /// [`AuthError::Busy`], or the classified non-401 failure.
    pub async fn refresh(&self) -> Result<(), AuthError> {
        let slot = self.begin()?;
        match api::fetch_me(&self.client).await {
            Ok(user) => {
                self.apply(slot.epoch, |s| *s = AuthState::authenticated(user));
                Ok(())
            }
            Err(error) if error.is_unauthorized() => {
                classify(&error, Operation::Probe).log(Operation::Probe, &error);
                self.apply(slot.epoch, |s| *s = AuthState::anonymous());
                Ok(())
            }
            Err(error) => {
                let classified = classify(&error, Operation::Probe);
                classified.log(Operation::Probe, &error);
                Err(AuthError::Failed(classified))
            }
        }
    }

    /// Login POST failures are attributed to `operation`; the identity
    /// re-fetch that follows is attributed to [`Operation::Establish`].
    async fn login_and_fetch(
        &self,
        request: &LoginRequest,
        operation: Operation,
    ) -> Result<CurrentUser, (Operation, ApiError)> {
        api::login(&self.client, request)
            .await
            .map_err(|error| (operation, error))?;
        api::fetch_me(&self.client)
            .await
            .map_err(|error| (Operation::Establish, error))
    }

    fn begin(&self) -> Result<OperationSlot, AuthError> {
        let mut shared = lock(&self.shared);
        if shared.busy {
            return Err(AuthError::Busy);
        }
        shared.busy = true;
        Ok(OperationSlot {
            shared: Arc::clone(&self.shared),
            epoch: shared.epoch,
        })
    }

    fn start_sign_in(&self, slot: &OperationSlot) {
        self.apply(slot.epoch, |s| {
            s.loading = true;
            s.error = None;
        });
    }

    fn settle(
        &self,
        slot: &OperationSlot,
        outcome: Result<CurrentUser, (Operation, ApiError)>,
    ) -> Result<(), AuthError> {
        match outcome {
            Ok(user) => {
                if self.apply(slot.epoch, |s| *s = AuthState::authenticated(user)) {
                    Ok(())
                } else {
                    Err(AuthError::Superseded)
                }
            }
            Err((operation, error)) => {
                let classified = classify(&error, operation);
                classified.log(operation, &error);
                let message = classified.message.clone();
                self.apply(slot.epoch, |s| *s = AuthState::failed(message));
                Err(AuthError::Failed(classified))
            }
        }
    }

    /// Mutate state if `epoch` is still current, then notify. Returns whether
    /// the change was applied.
    fn apply(&self, epoch: u64, change: impl FnOnce(&mut AuthState)) -> bool {
        self.notify_after(|shared| {
            if shared.epoch != epoch {
                return false;
            }
            change(&mut shared.state);
            true
        })
    }

    fn notify_after(&self, change: impl FnOnce(&mut Shared) -> bool) -> bool {
        let (snapshot, listeners) = {
            let mut shared = lock(&self.shared);
            if !change(&mut shared) {
                return false;
            }
            let listeners: Vec<Listener> = shared.listeners.iter().map(|(_, l)| Arc::clone(l)).collect();
            (shared.state.clone(), listeners)
        };
        for listener in &listeners {
            listener(&snapshot);
        }
        true
    }
}
