//! Error types and the single classification point for auth failures.
//!
//! ERROR HANDLING
//! ==============
//! Transport and HTTP failures are raw [`ApiError`]s. Every auth flow maps
//! them through [`classify`] to a [`ClassifiedError`] so the user-facing
//! message and the log severity are decided in one place instead of at each
//! call site.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure below HTTP: the request never produced a status code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request timed out")]
    Timeout,
}

/// Failure of a single API call.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Transport(#[from] TransportError),
    /// Non-2xx response. `message` is the server's `error`/`message` field
    /// when the body carried one.
    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String> },
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl ApiError {
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}

/// Failure of an auth store operation, already classified for display.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("another sign-in request is already in progress")]
    Busy,
    /// A logout landed while this operation was in flight.
    #[error("sign-in was interrupted by sign-out")]
    Superseded,
    #[error(transparent)]
    Failed(ClassifiedError),
}

impl AuthError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Busy => ErrorKind::Busy,
            Self::Superseded => ErrorKind::Cancelled,
            Self::Failed(classified) => classified.kind,
        }
    }

    /// Message suitable for an inline form error.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Busy => BUSY_MESSAGE.to_owned(),
            Self::Superseded => SUPERSEDED_MESSAGE.to_owned(),
            Self::Failed(classified) => classified.message.clone(),
        }
    }
}

/// Which flow produced the failure. The same status means different things
/// on the identity probe and on a login submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Probe,
    Login,
    Signup,
    Logout,
    /// Identity re-fetch right after a successful login POST.
    Establish,
}

impl Operation {
    fn as_str(self) -> &'static str {
        match self {
            Self::Probe => "identity probe",
            Self::Login => "login",
            Self::Signup => "signup",
            Self::Logout => "logout",
            Self::Establish => "session check after sign-in",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// 401 on the identity probe: normal "show login" control flow.
    Unauthenticated,
    InvalidCredentials,
    /// Credentials accepted but the session cookie did not stick.
    SessionNotEstablished,
    Conflict,
    Transient,
    Server,
    /// Other 4xx the server rejected with its own message.
    Rejected,
    Busy,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ClassifiedError {
    pub kind: ErrorKind,
    pub message: String,
}

pub const NOT_SIGNED_IN_MESSAGE: &str = "Not signed in";
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid credentials";
pub const SESSION_NOT_ESTABLISHED_MESSAGE: &str = "Signed in, but the session could not be established";
pub const USERNAME_TAKEN_MESSAGE: &str = "Username already exists";
pub const NETWORK_MESSAGE: &str = "Network error, please check your connection";
pub const SERVER_MESSAGE: &str = "Server error, please try again later";
pub const MALFORMED_MESSAGE: &str = "Unexpected response from server";
pub const BUSY_MESSAGE: &str = "Another sign-in request is already in progress";
pub const SUPERSEDED_MESSAGE: &str = "Signed out before sign-in finished";

/// Map a raw failure to a kind and user-facing message.
#[must_use]
pub fn classify(error: &ApiError, operation: Operation) -> ClassifiedError {
    let (kind, message) = match error {
        ApiError::Transport(_) => (ErrorKind::Transient, NETWORK_MESSAGE.to_owned()),
        ApiError::Json(_) => (ErrorKind::Server, MALFORMED_MESSAGE.to_owned()),
        ApiError::Status { status, message } => match (*status, operation) {
            (401, Operation::Probe | Operation::Logout) => {
                (ErrorKind::Unauthenticated, NOT_SIGNED_IN_MESSAGE.to_owned())
            }
            (401, Operation::Login | Operation::Signup) => {
                (ErrorKind::InvalidCredentials, INVALID_CREDENTIALS_MESSAGE.to_owned())
            }
            (401, Operation::Establish) => (
                ErrorKind::SessionNotEstablished,
                SESSION_NOT_ESTABLISHED_MESSAGE.to_owned(),
            ),
            (409, Operation::Signup) => (ErrorKind::Conflict, USERNAME_TAKEN_MESSAGE.to_owned()),
            (500..=599, _) => (ErrorKind::Server, SERVER_MESSAGE.to_owned()),
            (status, _) => (
                ErrorKind::Rejected,
                message
                    .clone()
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| format!("Request failed ({status})")),
            ),
        },
    };
    ClassifiedError { kind, message }
}

impl ClassifiedError {
    /// Emit one log line at the severity this kind deserves. Expected
    /// unauthenticated probes never log above debug.
    pub fn log(&self, operation: Operation, source: &ApiError) {
        let op = operation.as_str();
        match self.kind {
            ErrorKind::Unauthenticated => log::debug!("{op}: no active session"),
            ErrorKind::InvalidCredentials | ErrorKind::Conflict | ErrorKind::Rejected => {
                log::info!("{op} rejected: {source}");
            }
            ErrorKind::Busy | ErrorKind::Cancelled => log::debug!("{op} dropped: {source}"),
            ErrorKind::Transient | ErrorKind::Server | ErrorKind::SessionNotEstablished => {
                log::warn!("{op} failed: {source}");
            }
        }
    }
}
