//! `reqwest` implementation of the session transport seam.
//!
//! The client keeps a cookie jar so the HttpOnly session cookie set by the
//! login endpoint rides along on every later request in the same process.
//! A cookie from a previous run can be seeded with [`ReqwestTransport::new`]
//! and read back with [`ReqwestTransport::session_cookie`].

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use std::sync::Arc;

use reqwest::Url;
use reqwest::cookie::{CookieStore, Jar};
use reqwest::header::{CONTENT_TYPE, HeaderValue};
use session::{ApiRequest, ApiResponse, Method, Transport, TransportError};

use crate::CliError;

pub struct ReqwestTransport {
    client: reqwest::Client,
    jar: Arc<Jar>,
    origin: Url,
}

impl ReqwestTransport {
    /// Build a transport for `base_url`, optionally seeding the jar with a
    /// `name=value; other=value` cookie header from an earlier login.
    pub fn new(base_url: &str, session_cookie: Option<&str>) -> Result<Self, CliError> {
        let origin = Url::parse(base_url).map_err(|_| CliError::InvalidBaseUrl(base_url.to_owned()))?;
        let jar = Arc::new(Jar::default());
        if let Some(cookie) = session_cookie {
            for pair in cookie.split(';').map(str::trim).filter(|pair| !pair.is_empty()) {
                jar.add_cookie_str(pair, &origin);
            }
        }
        let client = reqwest::Client::builder().cookie_provider(Arc::clone(&jar)).build()?;
        Ok(Self { client, jar, origin })
    }

    /// Cookie header the jar would send to the API origin right now.
    pub fn session_cookie(&self) -> Option<String> {
        self.jar
            .cookies(&self.origin)
            .and_then(|value| value.to_str().ok().map(str::to_owned))
    }
}

impl Transport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        };
        let mut builder = self.client.request(method, &request.url).timeout(request.timeout);
        if let Some(body) = request.body {
            builder = builder
                .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
                .body(body);
        }

        let response = builder.send().await.map_err(transport_error)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(transport_error)?;
        tracing::debug!(status, url = %request.url, "api response");
        Ok(ApiResponse { status, body })
    }
}

fn transport_error(error: reqwest::Error) -> TransportError {
    if error.is_timeout() {
        TransportError::Timeout
    } else {
        TransportError::Network(error.to_string())
    }
}
