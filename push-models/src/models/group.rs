//! Push group model.

use serde::{Deserialize, Serialize};
use push_core::constants::limits;

use super::null_as_default;

/// A named, app-scoped push group used to segment and rate-limit dispatches.
///
/// The same structure is sent when creating or updating a group and returned
/// by every group endpoint. Unset fields are omitted from the JSON body, so an
/// update request carries only the name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// Server-assigned group id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Application the group belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_id: Option<i64>,
    /// Group name, unique within the application.
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub name: String,
    /// Dispatch rate limit in pushes per second, 100 to 5000.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub send_rate: Option<u32>,
}

impl Group {
    /// Body for creating a group. App id and name are required by the API.
    pub fn create_request(app_id: i64, name: impl Into<String>) -> Self {
        Self {
            app_id: Some(app_id),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Body for renaming a group.
    pub fn update_request(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the send rate. The service rejects values outside 100..=5000.
    pub fn with_send_rate(mut self, send_rate: u32) -> Self {
        self.send_rate = Some(send_rate);
        self
    }

    /// The configured send rate, or the service default.
    pub fn effective_send_rate(&self) -> u32 {
        self.send_rate.unwrap_or(limits::DEFAULT_SEND_RATE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_null_name_decodes_as_empty() {
        let group: Group =
            serde_json::from_value(json!({ "id": 3, "app_id": 42, "name": null })).unwrap();
        assert_eq!(group.id, Some(3));
        assert!(group.name.is_empty());
    }

    #[test]
    fn test_unset_fields_are_omitted() {
        let group = Group::create_request(42, "promo");
        let value = serde_json::to_value(&group).unwrap();
        assert_eq!(value, json!({ "app_id": 42, "name": "promo" }));

        let decoded: Group = serde_json::from_value(value).unwrap();
        assert_eq!(decoded, group);
        assert!(decoded.id.is_none());
        assert!(decoded.send_rate.is_none());
    }

    #[test]
    fn test_update_request_only_has_name() {
        let value = serde_json::to_value(Group::update_request("renamed")).unwrap();
        assert_eq!(value, json!({ "name": "renamed" }));
    }

    #[test]
    fn test_server_group_decodes() {
        let group: Group = serde_json::from_str(
            r#"{"id":17,"app_id":42,"name":"promo","send_rate":1000}"#,
        )
        .unwrap();
        assert_eq!(group.id, Some(17));
        assert_eq!(group.effective_send_rate(), 1000);
    }

    #[test]
    fn test_effective_send_rate_default() {
        let group = Group::create_request(1, "g");
        assert_eq!(group.effective_send_rate(), 5000);
        assert_eq!(group.with_send_rate(100).effective_send_rate(), 100);
    }
}
