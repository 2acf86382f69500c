//! Dispatch status endpoints.

use reqwest::Method;

use push_core::constants::endpoints::STATUS;
use push_core::error::PushResult;
use push_models::Transfer;

use crate::client::ApiClient;

impl ApiClient {
    /// Get dispatch status by the server-assigned transfer id.
    pub async fn get_status_by_transfer_id(&self, transfer_id: i64) -> PushResult<Transfer> {
        self.dispatch(Method::GET, &format!("{STATUS}/{transfer_id}"), None)
            .await?
            .into_transfer()
    }

    /// Get dispatch status by group and the caller's client transfer id.
    pub async fn get_status_by_client_transfer_id(
        &self,
        group_id: i64,
        client_transfer_id: i64,
    ) -> PushResult<Transfer> {
        self.dispatch(
            Method::GET,
            &format!("{STATUS}/{group_id}/{client_transfer_id}"),
            None,
        )
        .await?
        .into_transfer()
    }
}
