//! API client configuration.
//!
//! The only externally meaningful knob is the base-URL override
//! (`LCHATY_API_BASE_URL`). Native callers read it at runtime through
//! [`ApiConfig::from_env`]; the browser build bakes it in at compile time and
//! passes it to [`ApiConfig::from_override`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use crate::http::RetryPolicy;

pub const BASE_URL_ENV: &str = "LCHATY_API_BASE_URL";
pub const DEFAULT_TIMEOUT_SECS: u64 = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Origin prefix for every request path. Empty means same-origin
    /// relative URLs.
    pub base_url: String,
    /// Fixed per-request timeout enforced by the transport.
    pub timeout: Duration,
    pub retry: RetryPolicy,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            retry: RetryPolicy::default(),
        }
    }
}

impl ApiConfig {
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: normalize_base_url(base_url),
            ..Self::default()
        }
    }

    /// Build config from an optional raw override. Blank values fall back to
    /// same-origin requests.
    #[must_use]
    pub fn from_override(raw: Option<&str>) -> Self {
        raw.map_or_else(Self::default, Self::new)
    }

    /// Build config from `LCHATY_API_BASE_URL`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_override(std::env::var(BASE_URL_ENV).ok().as_deref())
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Join an absolute API path onto the base URL.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}/{path}", self.base_url)
        }
    }
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}
