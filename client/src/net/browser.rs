//! `gloo-net` transport for the browser.
//!
//! Client-side (csr): real `fetch` calls with `credentials: include` and a
//! timer racing each request.
//! Native builds (tests, tooling): a stub that reports the network as
//! unavailable, so the rest of the crate still compiles and degrades to
//! "anonymous".

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

use session::{ApiRequest, ApiResponse, Transport, TransportError};

#[cfg(any(test, not(feature = "csr")))]
const UNAVAILABLE: &str = "browser transport is only available in the csr build";

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

impl Transport for BrowserTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        #[cfg(feature = "csr")]
        {
            send_with_timeout(request).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            Err(TransportError::Network(UNAVAILABLE.to_owned()))
        }
    }
}

#[cfg(any(test, feature = "csr"))]
fn timeout_millis(timeout: std::time::Duration) -> u32 {
    u32::try_from(timeout.as_millis()).unwrap_or(u32::MAX)
}

#[cfg(feature = "csr")]
async fn send_with_timeout(request: ApiRequest) -> Result<ApiResponse, TransportError> {
    use futures::future::{Either, select};

    let timer = Box::pin(gloo_timers::future::TimeoutFuture::new(timeout_millis(request.timeout)));
    let fetch = Box::pin(fetch(request));
    match select(fetch, timer).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(TransportError::Timeout),
    }
}

#[cfg(feature = "csr")]
async fn fetch(request: ApiRequest) -> Result<ApiResponse, TransportError> {
    use gloo_net::http::Request;
    use session::Method;
    use web_sys::RequestCredentials;

    let builder = match request.method {
        Method::Get => Request::get(&request.url),
        Method::Post => Request::post(&request.url),
        Method::Patch => Request::patch(&request.url),
        Method::Delete => Request::delete(&request.url),
    };
    let builder = if request.with_credentials {
        builder.credentials(RequestCredentials::Include)
    } else {
        builder
    };
    let prepared = match request.body {
        Some(body) => builder.header("Content-Type", "application/json").body(body),
        None => builder.build(),
    }
    .map_err(network)?;

    let response = prepared.send().await.map_err(network)?;
    let status = response.status();
    let body = response.text().await.map_err(network)?;
    Ok(ApiResponse { status, body })
}

#[cfg(feature = "csr")]
fn network(error: gloo_net::Error) -> TransportError {
    TransportError::Network(error.to_string())
}
