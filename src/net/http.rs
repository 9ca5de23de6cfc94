//! The configured HTTP client every backend call goes through.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`HttpClient`] owns the base URL and attaches `Authorization: Bearer` to
//! each request when a token is known. The actual I/O sits behind
//! [`Transport`] so the same client runs over `reqwest` natively and
//! `gloo-net` in the browser, and so tests can script responses.
//!
//! Failures pass straight through to the caller: no retry, no token refresh.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::sync::{Arc, PoisonError, RwLock};

use serde::Serialize;

use crate::config::ApiConfig;
use crate::error::TransportError;
use crate::session::TOKEN_STORAGE_KEY;
use crate::storage::TokenStorage;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// Fully resolved outgoing request.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    /// Bearer token to send, without the `Bearer ` prefix.
    pub bearer: Option<String>,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    /// Value for the `Authorization` header, if any.
    #[must_use]
    pub fn authorization(&self) -> Option<String> {
        self.bearer.as_ref().map(|token| format!("Bearer {token}"))
    }
}

/// Raw response: status plus body text. Interpretation happens in
/// [`crate::net::types::interpret`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

/// Sends one request and returns whatever the server answered.
///
/// Futures are not required to be `Send` so browser fetch futures fit.
#[async_trait::async_trait(?Send)]
pub trait Transport: Send + Sync {
    /// # Errors
    ///
    /// Returns [`TransportError`] only when no response was obtained. HTTP
    /// error statuses are responses, not transport errors.
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError>;
}

/// Shared, cheaply cloneable client bound to one backend.
#[derive(Clone)]
pub struct HttpClient {
    config: Arc<ApiConfig>,
    transport: Arc<dyn Transport>,
    storage: Arc<dyn TokenStorage>,
    default_bearer: Arc<RwLock<Option<String>>>,
}

impl HttpClient {
    #[must_use]
    pub fn new(config: &ApiConfig, transport: Arc<dyn Transport>, storage: Arc<dyn TokenStorage>) -> Self {
        Self {
            config: Arc::new(config.clone()),
            transport,
            storage,
            default_bearer: Arc::new(RwLock::new(None)),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Storage the token is read from.
    #[must_use]
    pub fn storage(&self) -> Arc<dyn TokenStorage> {
        Arc::clone(&self.storage)
    }

    #[must_use]
    pub fn url(&self, path: &str) -> String {
        self.config.endpoint(path)
    }

    /// Install or clear the fallback bearer token. Only the session store calls this.
    pub(crate) fn set_default_bearer(&self, token: Option<String>) {
        *self.default_bearer.write().unwrap_or_else(PoisonError::into_inner) = token;
    }

    /// Token the next request will carry: the persisted one, else the default.
    #[must_use]
    pub fn bearer_token(&self) -> Option<String> {
        let stored = match self.storage.get(TOKEN_STORAGE_KEY) {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                tracing::warn!(error = %e, "token storage unreadable; sending request without stored token");
                None
            }
        };
        stored.or_else(|| self.default_bearer.read().unwrap_or_else(PoisonError::into_inner).clone())
    }

    /// Build the outgoing request for `path`, attaching the bearer token when known.
    #[must_use]
    pub fn prepare(&self, method: Method, path: &str, body: Option<serde_json::Value>) -> ApiRequest {
        ApiRequest { method, url: self.url(path), bearer: self.bearer_token(), body }
    }

    /// # Errors
    ///
    /// Returns [`TransportError`] when no response was obtained.
    pub async fn get(&self, path: &str) -> Result<ApiResponse, TransportError> {
        self.send(self.prepare(Method::Get, path, None)).await
    }

    /// POST `body` as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when the body cannot be serialized or no
    /// response was obtained.
    pub async fn post_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<ApiResponse, TransportError> {
        let body = serde_json::to_value(body).map_err(|e| TransportError::Request(e.to_string()))?;
        self.send(self.prepare(Method::Post, path, Some(body))).await
    }

    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        tracing::debug!(method = ?request.method, url = %request.url, authenticated = request.bearer.is_some(), "api request");
        let result = self.transport.send(request).await;
        match &result {
            Ok(response) => tracing::debug!(status = response.status, "api response"),
            Err(e) => tracing::warn!(error = %e, "api request failed"),
        }
        result
    }
}

/// Native transport over `reqwest`.
#[cfg(feature = "native")]
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

#[cfg(feature = "native")]
impl ReqwestTransport {
    /// # Errors
    ///
    /// Returns [`TransportError::Request`] if the underlying client cannot be built.
    pub fn new(config: &ApiConfig) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| TransportError::Request(e.to_string()))?;
        Ok(Self { client })
    }
}

#[cfg(feature = "native")]
#[async_trait::async_trait(?Send)]
impl Transport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let mut builder = match request.method {
            Method::Get => self.client.get(&request.url),
            Method::Post => self.client.post(&request.url),
        };
        if let Some(token) = &request.bearer {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }
        let resp = builder
            .send()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;
        let status = resp.status().as_u16();
        let body = resp
            .text()
            .await
            .map_err(|e| TransportError::Body(e.to_string()))?;
        Ok(ApiResponse { status, body })
    }
}
