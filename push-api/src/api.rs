//! The operation set as a trait, so callers can depend on `dyn PushApi`
//! and substitute a fake in their own tests.

use async_trait::async_trait;

use push_core::error::PushResult;
use push_models::{Group, PushBatchRequest, PushResponse, Transfer};

use crate::client::ApiClient;

/// All push management operations.
#[async_trait]
pub trait PushApi: Send + Sync {
    async fn create_group(&self, group: &Group) -> PushResult<Group>;
    async fn get_groups(&self, app_id: i64) -> PushResult<Vec<Group>>;
    async fn get_group(&self, id: i64) -> PushResult<Group>;
    async fn update_group(&self, id: i64, group: &Group) -> PushResult<Group>;
    async fn archive_group(&self, id: i64) -> PushResult<()>;
    async fn restore_group(&self, id: i64) -> PushResult<()>;
    async fn send_push(&self, request: &PushBatchRequest) -> PushResult<PushResponse>;
    async fn get_status_by_transfer_id(&self, transfer_id: i64) -> PushResult<Transfer>;
    async fn get_status_by_client_transfer_id(
        &self,
        group_id: i64,
        client_transfer_id: i64,
    ) -> PushResult<Transfer>;
}

#[async_trait]
impl PushApi for ApiClient {
    async fn create_group(&self, group: &Group) -> PushResult<Group> {
        ApiClient::create_group(self, group).await
    }

    async fn get_groups(&self, app_id: i64) -> PushResult<Vec<Group>> {
        ApiClient::get_groups(self, app_id).await
    }

    async fn get_group(&self, id: i64) -> PushResult<Group> {
        ApiClient::get_group(self, id).await
    }

    async fn update_group(&self, id: i64, group: &Group) -> PushResult<Group> {
        ApiClient::update_group(self, id, group).await
    }

    async fn archive_group(&self, id: i64) -> PushResult<()> {
        ApiClient::archive_group(self, id).await
    }

    async fn restore_group(&self, id: i64) -> PushResult<()> {
        ApiClient::restore_group(self, id).await
    }

    async fn send_push(&self, request: &PushBatchRequest) -> PushResult<PushResponse> {
        ApiClient::send_push(self, request).await
    }

    async fn get_status_by_transfer_id(&self, transfer_id: i64) -> PushResult<Transfer> {
        ApiClient::get_status_by_transfer_id(self, transfer_id).await
    }

    async fn get_status_by_client_transfer_id(
        &self,
        group_id: i64,
        client_transfer_id: i64,
    ) -> PushResult<Transfer> {
        ApiClient::get_status_by_client_transfer_id(self, group_id, client_transfer_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{client_with, MockTransport};
    use push_models::TransferStatus;
    use reqwest::Method;
    use serde_json::json;

    async fn finished(api: &dyn PushApi, transfer_id: i64) -> PushResult<bool> {
        Ok(api.get_status_by_transfer_id(transfer_id).await?.is_finished())
    }

    #[tokio::test]
    async fn test_client_through_trait_object() {
        let (client, mock) = client_with(MockTransport::new().respond_json(
            200,
            json!({ "transfer": { "id": 9, "group_id": 1, "status": "failed" } }),
        ));
        assert!(finished(&client, 9).await.unwrap());
        assert_eq!(mock.last_request().url.path(), "/push/v1/status/9");
    }

    #[tokio::test]
    async fn test_every_operation_is_one_call() {
        let (client, mock) = client_with(
            MockTransport::new()
                .respond_json(200, json!({ "group": { "id": 1, "name": "g" } }))
                .respond_json(200, json!({ "groups": [] }))
                .respond_json(200, json!({ "group": { "id": 1, "name": "g" } }))
                .respond_json(200, json!({ "group": { "id": 1, "name": "h" } }))
                .respond_json(200, json!({}))
                .respond_json(200, json!({}))
                .respond_json(200, json!({ "push_response": { "transfer_id": 2 } }))
                .respond_json(200, json!({ "transfer": { "id": 2, "group_id": 1, "status": "pending" } }))
                .respond_json(200, json!({ "transfer": { "id": 2, "group_id": 1, "status": "sent", "client_transfer_id": 3 } })),
        );
        let api: &dyn PushApi = &client;

        api.create_group(&Group::create_request(4, "g")).await.unwrap();
        api.get_groups(4).await.unwrap();
        api.get_group(1).await.unwrap();
        api.update_group(1, &Group::update_request("h")).await.unwrap();
        api.archive_group(1).await.unwrap();
        api.restore_group(1).await.unwrap();
        api.send_push(&PushBatchRequest::new(1, "t").with_client_transfer_id(3))
            .await
            .unwrap();
        let pending = api.get_status_by_transfer_id(2).await.unwrap();
        let sent = api.get_status_by_client_transfer_id(1, 3).await.unwrap();
        assert_eq!(pending.status, TransferStatus::Pending);
        assert_eq!(sent.status, TransferStatus::Sent);

        let calls: Vec<(Method, String)> = mock
            .requests()
            .into_iter()
            .map(|r| (r.method, r.url.path().trim_start_matches("/push/v1").to_string()))
            .collect();
        assert_eq!(
            calls,
            vec![
                (Method::POST, "/management/groups".to_string()),
                (Method::GET, "/management/groups".to_string()),
                (Method::GET, "/management/group/1".to_string()),
                (Method::PUT, "/management/group/1".to_string()),
                (Method::DELETE, "/management/group/1".to_string()),
                (Method::POST, "/management/group/1/restore".to_string()),
                (Method::POST, "/send-batch".to_string()),
                (Method::GET, "/status/2".to_string()),
                (Method::GET, "/status/1/3".to_string()),
            ]
        );
    }
}
