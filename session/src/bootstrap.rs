//! One-shot identity probe run at application start.
//!
//! TRADE-OFFS
//! ==========
//! Any failure other than a clean 200 resolves to anonymous. A broken probe
//! shows the login screen instead of hanging the shell; the user can always
//! sign in again.

#[cfg(test)]
#[path = "bootstrap_test.rs"]
mod bootstrap_test;

use crate::api;
use crate::error::{Operation, classify};
use crate::http::{HttpClient, Transport};
use crate::types::CurrentUser;

#[derive(Clone, Debug, PartialEq)]
pub enum BootstrapOutcome {
    Anonymous,
    Authenticated(CurrentUser),
}

impl BootstrapOutcome {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    #[must_use]
    pub fn user(&self) -> Option<&CurrentUser> {
        match self {
            Self::Authenticated(user) => Some(user),
            Self::Anonymous => None,
        }
    }

    #[must_use]
    pub fn into_user(self) -> Option<CurrentUser> {
        match self {
            Self::Authenticated(user) => Some(user),
            Self::Anonymous => None,
        }
    }
}

/// Ask `GET /api/me` who the ambient session belongs to.
///
/// Never fails and never mutates shared state, so it can be called from
/// anywhere (store, tests, CLI).
pub async fn bootstrap_auth<T: Transport>(client: &HttpClient<T>) -> BootstrapOutcome {
    match api::fetch_me(client).await {
        Ok(me) => {
            log::debug!("session bootstrap: signed in as {}", me.username);
            BootstrapOutcome::Authenticated(me)
        }
        Err(error) => {
            classify(&error, Operation::Probe).log(Operation::Probe, &error);
            BootstrapOutcome::Anonymous
        }
    }
}
