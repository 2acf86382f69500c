//! HTTP client for the AppMetrica Push API.
//!
//! `ApiClient` owns the transport handle and the authorization header, both
//! fixed at construction. `dispatch` is the single request path used by every
//! operation: build the request, perform one call, decode the envelope.

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, Url};
use tracing::{debug, warn};

use push_core::config::ApiConfig;
use push_core::constants;
use push_core::error::{PushError, PushResult};

use crate::response::{Envelope, RawEnvelope, RequestBody};
use crate::transport::{HttpRequest, ReqwestTransport, Transport};

/// Client for the push management API.
///
/// Cloning is cheap and clones share the transport. Nothing is mutated after
/// construction, so one instance can serve concurrent callers.
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
    /// Base URL every path is appended to.
    api_root: String,
    /// `OAuth <token>`, marked sensitive.
    authorization: HeaderValue,
}

impl ApiClient {
    /// Create a client backed by reqwest, using the configured token and timeouts.
    pub fn new(config: &ApiConfig) -> PushResult<Self> {
        let transport = ReqwestTransport::new(config)?;
        Self::with_transport(config, Arc::new(transport))
    }

    /// Create a client over any transport.
    pub fn with_transport(config: &ApiConfig, transport: Arc<dyn Transport>) -> PushResult<Self> {
        let mut authorization =
            HeaderValue::from_str(&format!("{} {}", constants::AUTH_SCHEME, config.oauth_token))
                .map_err(|e| PushError::InvalidRequest(format!("invalid oauth token: {e}")))?;
        authorization.set_sensitive(true);

        Ok(Self {
            transport,
            api_root: constants::API_HOST.to_string(),
            authorization,
        })
    }

    /// Perform one API call and return the decoded envelope.
    ///
    /// `path` already contains any path and query parameters. The body, when
    /// present, is sent as JSON. A non-empty `errors` list in the response
    /// becomes `PushError::Api`. A blank body is an empty envelope on a 2xx
    /// status and a decoding failure otherwise.
    pub async fn dispatch(
        &self,
        method: Method,
        path: &str,
        body: Option<RequestBody<'_>>,
    ) -> PushResult<Envelope> {
        let request = self.build_request(method, path, body)?;
        debug!("{} {}", request.method, path);

        let response = self.transport.execute(request).await?;

        if !response.is_success() && RawEnvelope::is_blank(&response.body) {
            return Err(PushError::Deserialization(format!(
                "empty response body (HTTP {})",
                response.status
            )));
        }

        let raw = RawEnvelope::from_slice(&response.body).map_err(|e| {
            PushError::Deserialization(format!(
                "failed to parse response (HTTP {}): {e}",
                response.status
            ))
        })?;

        match raw.into_envelope() {
            Err(PushError::Api(errors)) => {
                warn!(
                    "{} returned {} error(s) (HTTP {}): {}",
                    path,
                    errors.len(),
                    response.status,
                    errors.combined_message()
                );
                Err(PushError::Api(errors))
            }
            other => other,
        }
    }

    /// Build the request: URL, JSON body and headers.
    fn build_request(
        &self,
        method: Method,
        path: &str,
        body: Option<RequestBody<'_>>,
    ) -> PushResult<HttpRequest> {
        let url = Url::parse(&format!("{}{path}", self.api_root))
            .map_err(|e| PushError::InvalidRequest(format!("invalid url for {path}: {e}")))?;

        let body = body
            .map(|b| serde_json::to_vec(&b))
            .transpose()
            .map_err(|e| PushError::Serialization(format!("failed to encode request: {e}")))?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(AUTHORIZATION, self.authorization.clone());

        Ok(HttpRequest {
            method,
            url,
            headers,
            body,
        })
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("api_root", &self.api_root)
            .finish_non_exhaustive()
    }
}
