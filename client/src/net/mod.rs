//! Networking for the browser build.
//!
//! SYSTEM CONTEXT
//! ==============
//! `browser` plugs `gloo-net` into the `session` transport seam. The API
//! base URL is fixed at compile time from `LCHATY_API_BASE_URL`; unset means
//! same-origin requests.

pub mod browser;

use session::{ApiConfig, HttpClient};

pub use browser::BrowserTransport;

pub type ApiClient = HttpClient<BrowserTransport>;

/// Compile-time base-URL override for the API.
pub const BASE_URL_OVERRIDE: Option<&str> = option_env!("LCHATY_API_BASE_URL");

/// Shared request client for the whole app.
pub fn api_client() -> ApiClient {
    HttpClient::new(BrowserTransport, ApiConfig::from_override(BASE_URL_OVERRIDE))
}
