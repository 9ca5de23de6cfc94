//! Shared fixtures for unit tests: a scripted transport and token builders.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use time::OffsetDateTime;

use crate::config::ApiConfig;
use crate::error::TransportError;
use crate::net::http::{ApiRequest, ApiResponse, HttpClient, Transport};
use crate::session::SessionStore;
use crate::storage::MemoryStorage;

/// Fixed "now" used across tests: 2026-01-01T00:00:00Z.
pub const NOW: i64 = 1_767_225_600;

/// Transport that replays queued responses and records every request.
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<Result<ApiResponse, TransportError>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push_json(&self, status: u16, body: serde_json::Value) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(ApiResponse { status, body: body.to_string() }));
    }

    pub fn push_raw(&self, status: u16, body: &str) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(ApiResponse { status, body: body.to_owned() }));
    }

    pub fn push_failure(&self, message: &str) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(TransportError::Request(message.to_owned())));
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Request("no scripted response".to_owned())))
    }
}

/// Unsigned JWT-shaped token around `claims`.
pub fn make_token(claims: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(claims.to_string());
    format!("{header}.{payload}.signature")
}

/// Token for subject `u-1` with `role`, expiring `ttl` seconds after [`NOW`].
pub fn token_for(role: &str, ttl: i64) -> String {
    make_token(&serde_json::json!({
        "sub": "u-1",
        "name": "Alice Nguyen",
        "role": role,
        "unique_name": "alice",
        "nameid": "u-1",
        "exp": NOW + ttl,
    }))
}

pub fn now() -> OffsetDateTime {
    OffsetDateTime::from_unix_timestamp(NOW).unwrap()
}

pub struct Harness {
    pub store: SessionStore,
    pub storage: Arc<MemoryStorage>,
    pub transport: Arc<MockTransport>,
}

/// Store over in-memory storage and a scripted transport, clock pinned to [`NOW`].
pub fn harness() -> Harness {
    let storage = Arc::new(MemoryStorage::new());
    let transport = MockTransport::new();
    let config = ApiConfig::with_base_url("http://api.test").unwrap();
    let http = HttpClient::new(&config, transport.clone(), storage.clone());
    let store = SessionStore::with_clock(http, Arc::new(now));
    Harness { store, storage, transport }
}
