//! Shared request client with credential passthrough and a bounded retry.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every API call in the apps goes through [`HttpClient`]. The actual I/O is
//! behind [`Transport`]: `gloo-net` in the browser, `reqwest` in the CLI, a
//! scripted fake in tests.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses come back as [`ApiError::Status`]. A 401 is surfaced
//! like any other status: the client never redirects or retries on it, so the
//! identity probe can treat it as ordinary control flow.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::ApiConfig;
use crate::error::{ApiError, TransportError};
use crate::types::ErrorBody;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }

    /// Only reads may be replayed; anything that mutates is sent once.
    #[must_use]
    pub fn is_retry_safe(self) -> bool {
        matches!(self, Self::Get)
    }
}

/// A fully resolved request handed to the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    /// Serialized JSON body; transports send it as `application/json`.
    pub body: Option<String>,
    pub timeout: Duration,
    /// Attach ambient cookies. Always set by [`HttpClient`].
    pub with_credentials: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Json`] when the body does not match `R`.
    pub fn json<R: DeserializeOwned>(&self) -> Result<R, ApiError> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// The I/O seam under [`HttpClient`].
///
/// Implementations must enforce `request.timeout` and report it as
/// [`TransportError::Timeout`].
pub trait Transport: Send + Sync + 'static {
    fn send(&self, request: ApiRequest) -> impl Future<Output = Result<ApiResponse, TransportError>>;
}

/// Static retry policy: which failures earn the single extra attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u8,
    /// Gateway statuses treated like a dropped connection.
    pub retry_statuses: &'static [u16],
}

pub const RETRY_STATUSES: &[u16] = &[502, 503, 504];

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 1,
            retry_statuses: RETRY_STATUSES,
        }
    }
}

impl RetryPolicy {
    /// No retries at all.
    #[must_use]
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            retry_statuses: &[],
        }
    }

    fn should_retry(&self, outcome: &Result<ApiResponse, TransportError>) -> bool {
        match outcome {
            Err(_) => true,
            Ok(response) => self.retry_statuses.contains(&response.status),
        }
    }
}

pub struct HttpClient<T> {
    transport: Arc<T>,
    config: ApiConfig,
}

impl<T> Clone for HttpClient<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            config: self.config.clone(),
        }
    }
}

impl<T: Transport> HttpClient<T> {
    pub fn new(transport: T, config: ApiConfig) -> Self {
        Self {
            transport: Arc::new(transport),
            config,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// # Errors
    ///
    /// Transport failure after the retry budget, or a non-2xx status.
    pub async fn get(&self, path: &str) -> Result<ApiResponse, ApiError> {
        self.send(Method::Get, path, None).await
    }

    /// # Errors
    ///
    /// Transport failure or a non-2xx status. Never retried.
    pub async fn post(&self, path: &str, body: Option<Value>) -> Result<ApiResponse, ApiError> {
        self.send(Method::Post, path, body).await
    }

    /// # Errors
    ///
    /// Transport failure or a non-2xx status. Never retried.
    pub async fn patch(&self, path: &str, body: Option<Value>) -> Result<ApiResponse, ApiError> {
        self.send(Method::Patch, path, body).await
    }

    /// # Errors
    ///
    /// Transport failure or a non-2xx status. Never retried.
    pub async fn delete(&self, path: &str, body: Option<Value>) -> Result<ApiResponse, ApiError> {
        self.send(Method::Delete, path, body).await
    }

    /// `GET` and decode the JSON body.
    ///
    /// # Errors
    ///
    /// Same as [`HttpClient::get`], plus [`ApiError::Json`] on a body mismatch.
    pub async fn get_json<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.get(path).await?.json()
    }

    /// # Errors
    ///
    /// Propagates transport, status, and JSON errors.
    pub async fn send(&self, method: Method, path: &str, body: Option<Value>) -> Result<ApiResponse, ApiError> {
        let body = body.map(|value| serde_json::to_string(&value)).transpose()?;
        let request = ApiRequest {
            method,
            url: self.config.url(path),
            body,
            timeout: self.config.timeout,
            with_credentials: true,
        };

        let retries = if method.is_retry_safe() {
            self.config.retry.max_retries
        } else {
            0
        };
        let mut attempt: u8 = 0;
        let outcome = loop {
            let outcome = self.transport.send(request.clone()).await;
            if attempt < retries && self.config.retry.should_retry(&outcome) {
                attempt += 1;
                log::debug!("{} {} failed ({}), retrying", method.as_str(), request.url, describe(&outcome));
                continue;
            }
            break outcome;
        };

        let response = outcome?;
        if response.is_success() {
            Ok(response)
        } else {
            Err(ApiError::Status {
                status: response.status,
                message: ErrorBody::message_from(&response.body),
            })
        }
    }
}

fn describe(outcome: &Result<ApiResponse, TransportError>) -> String {
    match outcome {
        Ok(response) => format!("status {}", response.status),
        Err(error) => error.to_string(),
    }
}
