//! Push group management endpoints.

use reqwest::Method;

use push_core::constants::endpoints::{GROUP, GROUPS};
use push_core::error::PushResult;
use push_models::Group;

use crate::client::ApiClient;
use crate::response::RequestBody;

impl ApiClient {
    /// Create a group. `app_id` and `name` are required by the service.
    pub async fn create_group(&self, group: &Group) -> PushResult<Group> {
        self.dispatch(Method::POST, GROUPS, Some(RequestBody::Group(group)))
            .await?
            .into_group()
    }

    /// List the groups of an application.
    pub async fn get_groups(&self, app_id: i64) -> PushResult<Vec<Group>> {
        self.dispatch(Method::GET, &format!("{GROUPS}?app_id={app_id}"), None)
            .await?
            .into_groups()
    }

    /// Get a single group by id.
    pub async fn get_group(&self, id: i64) -> PushResult<Group> {
        self.dispatch(Method::GET, &format!("{GROUP}/{id}"), None)
            .await?
            .into_group()
    }

    /// Update a group's name or send rate.
    pub async fn update_group(&self, id: i64, group: &Group) -> PushResult<Group> {
        self.dispatch(
            Method::PUT,
            &format!("{GROUP}/{id}"),
            Some(RequestBody::Group(group)),
        )
        .await?
        .into_group()
    }

    /// Archive (soft-delete) a group.
    pub async fn archive_group(&self, id: i64) -> PushResult<()> {
        self.dispatch(Method::DELETE, &format!("{GROUP}/{id}"), None)
            .await?;
        Ok(())
    }

    /// Restore an archived group.
    pub async fn restore_group(&self, id: i64) -> PushResult<()> {
        self.dispatch(Method::POST, &format!("{GROUP}/{id}/restore"), None)
            .await?;
        Ok(())
    }
}
