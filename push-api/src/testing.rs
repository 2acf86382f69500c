//! Test doubles shared by the unit tests of this crate.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use push_core::config::ApiConfig;
use push_core::error::{PushError, PushResult};

use crate::client::ApiClient;
use crate::transport::{HttpRequest, HttpResponse, Transport};

/// Records every request and replays queued responses in order.
/// With the queue drained it answers `200 {}`.
#[derive(Default)]
pub(crate) struct MockTransport {
    responses: Mutex<VecDeque<PushResult<HttpResponse>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn respond_json(self, status: u16, body: serde_json::Value) -> Self {
        self.respond_raw(status, &body.to_string())
    }

    pub(crate) fn respond_raw(self, status: u16, body: &str) -> Self {
        self.push(Ok(HttpResponse {
            status,
            body: body.as_bytes().to_vec(),
        }))
    }

    pub(crate) fn fail_with(self, error: PushError) -> Self {
        self.push(Err(error))
    }

    fn push(self, response: PushResult<HttpResponse>) -> Self {
        self.responses.lock().unwrap().push_back(response);
        self
    }

    pub(crate) fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn last_request(&self) -> HttpRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn execute(&self, request: HttpRequest) -> PushResult<HttpResponse> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Ok(HttpResponse {
                    status: 200,
                    body: b"{}".to_vec(),
                })
            })
    }
}

/// A client with token `test-token` over the given mock.
pub(crate) fn client_with(mock: MockTransport) -> (ApiClient, Arc<MockTransport>) {
    let mock = Arc::new(mock);
    let client = ApiClient::with_transport(&ApiConfig::with_token("test-token"), mock.clone())
        .expect("valid test token");
    (client, mock)
}

/// Request body decoded as JSON.
pub(crate) fn body_json(request: &HttpRequest) -> Option<serde_json::Value> {
    request
        .body
        .as_ref()
        .map(|b| serde_json::from_slice(b).expect("request body is JSON"))
}
