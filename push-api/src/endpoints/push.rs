//! Batched push dispatch endpoint.

use reqwest::Method;
use tracing::debug;

use push_core::constants::endpoints::SEND_BATCH;
use push_core::error::PushResult;
use push_models::{PushBatchRequest, PushResponse};

use crate::client::ApiClient;
use crate::response::RequestBody;

impl ApiClient {
    /// Submit a batched push dispatch.
    ///
    /// Device and group limits are checked by the service, not here.
    pub async fn send_push(&self, request: &PushBatchRequest) -> PushResult<PushResponse> {
        debug!(
            "send-batch group={} tag={} batches={} devices={}",
            request.group_id,
            request.tag,
            request.batch.len(),
            request.device_count()
        );
        self.dispatch(
            Method::POST,
            SEND_BATCH,
            Some(RequestBody::PushBatchRequest(request)),
        )
        .await?
        .into_push_response()
    }
}

#[cfg(test)]
mod tests {
    use crate::testing::{body_json, client_with, MockTransport};
    use push_models::{AndroidMessage, Batch, Device, IdType, PushBatchRequest};
    use reqwest::header::CONTENT_TYPE;
    use reqwest::Method;
    use serde_json::json;

    fn spring_request() -> PushBatchRequest {
        PushBatchRequest::new(7, "spring")
            .with_client_transfer_id(1001)
            .add_batch(
                Batch::new()
                    .with_android(AndroidMessage::new("Sale", "Starts today", false))
                    .add_device(Device::new(IdType::GoogleAid, ["a1", "a2"])),
            )
    }

    #[tokio::test]
    async fn test_send_push_request_shape() {
        let (client, mock) = client_with(MockTransport::new().respond_json(
            200,
            json!({ "push_response": { "transfer_id": 321, "client_transfer_id": 1001 } }),
        ));
        let resp = client.send_push(&spring_request()).await.unwrap();
        assert_eq!(resp.transfer_id, 321);
        assert_eq!(resp.client_transfer_id, Some(1001));

        let req = mock.last_request();
        assert_eq!(req.method, Method::POST);
        assert_eq!(
            req.url.as_str(),
            "https://push.api.appmetrica.yandex.net/push/v1/send-batch"
        );
        assert_eq!(req.headers[CONTENT_TYPE], "application/json");

        let body = body_json(&req).unwrap();
        let push = &body["push_batch_request"];
        assert_eq!(push["group_id"], 7);
        assert_eq!(push["tag"], "spring");
        assert_eq!(push["client_transfer_id"], 1001);
        assert_eq!(push["batch"][0]["devices"][0]["id_values"], json!(["a1", "a2"]));
        assert!(push["batch"][0]["messages"].get("iOS").is_none());
        assert_eq!(push["batch"][0]["messages"]["android"]["content"]["title"], "Sale");
    }

    #[tokio::test]
    async fn test_send_push_api_error() {
        let (client, _mock) = client_with(MockTransport::new().respond_json(
            400,
            json!({ "errors": [ { "error_type": "duplicate", "message": "client_transfer_id already used" } ] }),
        ));
        let err = client.send_push(&spring_request()).await.unwrap_err();
        assert!(err.api_errors().unwrap().has_type("duplicate"));
    }
}
