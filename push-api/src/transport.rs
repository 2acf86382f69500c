//! The HTTP seam between `ApiClient` and the network.
//!
//! `ApiClient` builds a complete `HttpRequest` and hands it to a `Transport`.
//! Production code uses `ReqwestTransport`; tests substitute a transport that
//! records requests and replays canned responses.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::{Client, Method, Url};

use push_core::config::ApiConfig;
use push_core::error::{PushError, PushResult};

/// A fully built outgoing request.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    /// JSON body, if the operation sends one.
    pub body: Option<Vec<u8>>,
}

/// Status and raw body of a completed call.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs one HTTP round trip. Implementations must not retry.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: HttpRequest) -> PushResult<HttpResponse>;
}

/// `Transport` backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    inner: Client,
}

impl ReqwestTransport {
    /// Build a transport using the configured timeouts.
    pub fn new(config: &ApiConfig) -> PushResult<Self> {
        let inner = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .build()
            .map_err(|e| PushError::Http(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { inner })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> PushResult<HttpResponse> {
        let mut builder = self
            .inner
            .request(request.method, request.url)
            .headers(request.headers);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(classify_error)?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| PushError::Http(format!("failed to read response body: {e}")))?;

        Ok(HttpResponse {
            status,
            body: body.to_vec(),
        })
    }
}

/// Classify a reqwest error into a PushError variant.
fn classify_error(e: reqwest::Error) -> PushError {
    if e.is_timeout() {
        PushError::Timeout(e.to_string())
    } else if e.is_builder() {
        PushError::InvalidRequest(e.to_string())
    } else if e.is_connect() {
        PushError::Http(format!("connection failed: {e}"))
    } else {
        PushError::Http(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_builds_from_default_config() {
        assert!(ReqwestTransport::new(&ApiConfig::default()).is_ok());
    }

    #[test]
    fn test_response_success_range() {
        let ok = HttpResponse { status: 204, body: Vec::new() };
        let bad = HttpResponse { status: 400, body: Vec::new() };
        assert!(ok.is_success());
        assert!(!bad.is_success());
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        let config = ApiConfig {
            connect_timeout_ms: 2_000,
            timeout_ms: 2_000,
            ..ApiConfig::default()
        };
        let transport = ReqwestTransport::new(&config).unwrap();
        let request = HttpRequest {
            method: Method::GET,
            url: Url::parse("http://127.0.0.1:1/status/1").unwrap(),
            headers: HeaderMap::new(),
            body: None,
        };
        let err = transport.execute(request).await.unwrap_err();
        assert!(matches!(err, PushError::Http(_) | PushError::Timeout(_)));
    }
}
