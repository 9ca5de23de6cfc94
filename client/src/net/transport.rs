//! `fetch`-backed transport.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Elsewhere: every request fails, since there is no browser to send it.

use fieldbook::error::TransportError;
use fieldbook::net::http::{ApiRequest, ApiResponse, Transport};
#[cfg(feature = "csr")]
use fieldbook::net::http::Method;

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

#[async_trait::async_trait(?Send)]
impl Transport for BrowserTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        #[cfg(feature = "csr")]
        {
            let mut builder = match request.method {
                Method::Get => gloo_net::http::Request::get(&request.url),
                Method::Post => gloo_net::http::Request::post(&request.url),
            };
            if let Some(value) = request.authorization() {
                builder = builder.header("Authorization", &value);
            }
            let prepared = match &request.body {
                Some(body) => builder.json(body),
                None => builder.build(),
            }
            .map_err(|e| TransportError::Request(e.to_string()))?;
            let resp = prepared
                .send()
                .await
                .map_err(|e| TransportError::Request(e.to_string()))?;
            let status = resp.status();
            let body = resp.text().await.map_err(|e| TransportError::Body(e.to_string()))?;
            Ok(ApiResponse { status, body })
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(TransportError::Request(format!("no browser to send {}", request.url)))
        }
    }
}
