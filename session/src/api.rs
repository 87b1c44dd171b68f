//! Auth endpoint wrappers.
//!
//! Thin typed calls over [`HttpClient`]; none of them touch auth state.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::error::ApiError;
use crate::http::{HttpClient, Transport};
use crate::types::{CurrentUser, LoginRequest, SignupRequest};

pub const ME_PATH: &str = "/api/me";
pub const LOGIN_PATH: &str = "/api/auth/login";
pub const LOGOUT_PATH: &str = "/api/auth/logout";
pub const SIGNUP_PATH: &str = "/api/auth/signup";

/// Fetch the user behind the ambient session cookie from `GET /api/me`.
///
/// # Errors
///
/// `401` when there is no valid session, plus transport/decode failures.
pub async fn fetch_me<T: Transport>(client: &HttpClient<T>) -> Result<CurrentUser, ApiError> {
    client.get_json(ME_PATH).await
}

/// `POST /api/auth/login`. On success the server sets the session cookie.
///
/// # Errors
///
/// `401` on bad credentials, plus transport failures.
pub async fn login<T: Transport>(client: &HttpClient<T>, request: &LoginRequest) -> Result<(), ApiError> {
    client.post(LOGIN_PATH, Some(serde_json::to_value(request)?)).await?;
    Ok(())
}

/// `POST /api/auth/logout`.
///
/// # Errors
///
/// Any failure; callers treat logout as best-effort.
pub async fn logout<T: Transport>(client: &HttpClient<T>) -> Result<(), ApiError> {
    client.post(LOGOUT_PATH, None).await?;
    Ok(())
}

/// `POST /api/auth/signup`; 200 and 201 both mean created.
///
/// # Errors
///
/// `409` when the username exists, plus transport failures.
pub async fn signup<T: Transport>(client: &HttpClient<T>, request: &SignupRequest) -> Result<(), ApiError> {
    client.post(SIGNUP_PATH, Some(serde_json::to_value(request)?)).await?;
    Ok(())
}
