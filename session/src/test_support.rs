//! In-memory transport for unit tests.

use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::Mutex;
use std::task::{Context, Poll};

use serde_json::Value;

use crate::config::ApiConfig;
use crate::error::TransportError;
use crate::http::{ApiRequest, ApiResponse, HttpClient, Method, Transport};

/// Replays queued outcomes in order and records every request it sees.
/// An exhausted script answers with a network error.
#[derive(Default)]
pub struct ScriptedTransport {
    script: Mutex<VecDeque<Result<ApiResponse, TransportError>>>,
    seen: Mutex<Vec<ApiRequest>>,
    yielding: bool,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Suspend once inside every `send`, so concurrently joined operations
    /// interleave.
    pub fn yielding(mut self) -> Self {
        self.yielding = true;
        self
    }

    pub fn respond(self, status: u16, body: Value) -> Self {
        self.push(Ok(ApiResponse { status, body: body.to_string() }))
    }

    pub fn respond_raw(self, status: u16, body: &str) -> Self {
        self.push(Ok(ApiResponse { status, body: body.to_owned() }))
    }

    pub fn fail(self, error: TransportError) -> Self {
        self.push(Err(error))
    }

    fn push(self, outcome: Result<ApiResponse, TransportError>) -> Self {
        self.script.lock().unwrap().push_back(outcome);
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.seen.lock().unwrap().clone()
    }

    pub fn calls(&self) -> Vec<(Method, String)> {
        self.requests().into_iter().map(|r| (r.method, r.url)).collect()
    }
}

impl Transport for ScriptedTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        if self.yielding {
            YieldOnce::default().await;
        }
        self.seen.lock().unwrap().push(request);
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Network("script exhausted".to_owned())))
    }
}

pub fn client(transport: ScriptedTransport) -> HttpClient<ScriptedTransport> {
    HttpClient::new(transport, ApiConfig::default())
}

pub fn alice_json() -> Value {
    serde_json::json!({ "id": "1", "username": "alice", "roles": ["user"] })
}

#[derive(Default)]
struct YieldOnce {
    yielded: bool,
}

impl Future for YieldOnce {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.yielded {
            Poll::Ready(())
        } else {
            self.yielded = true;
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    }
}
