//! Client-side session core shared by the browser apps and the CLI.
//!
//! This crate owns everything about "who is signed in" that does not depend
//! on a UI toolkit: the HTTP client and its transport seam, the identity
//! bootstrap probe, the auth store, and the route-guard decision. The
//! `client` crate renders on top of it and the `cli` crate drives it natively.
//!
//! Layering (each module only depends on the ones above it):
//!
//! ```text
//! config, error, types
//! http            (HttpClient + Transport)
//! api             (endpoint wrappers)
//! bootstrap       (one-shot identity probe)
//! store           (AuthStore with subscribe/notify)
//! guard           (pure route decision)
//! ```

pub mod api;
pub mod bootstrap;
pub mod config;
pub mod error;
pub mod guard;
pub mod http;
pub mod store;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;

pub use bootstrap::{BootstrapOutcome, bootstrap_auth};
pub use config::ApiConfig;
pub use error::{ApiError, AuthError, ClassifiedError, ErrorKind, Operation, TransportError, classify};
pub use guard::{GuardDecision, evaluate, login_redirect, post_login_target};
pub use http::{ApiRequest, ApiResponse, HttpClient, Method, RetryPolicy, Transport};
pub use store::{AuthState, AuthStore, Subscription};
pub use types::{CurrentUser, LoginRequest, SignupRequest};
