//! Transfer (dispatch status) model.

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::null_as_default;

/// Server-side record of one send-batch dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    pub id: i64,
    pub group_id: i64,
    pub status: TransferStatus,
    #[serde(default, deserialize_with = "null_as_default")]
    pub errors: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tag: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub creation_date: String,
    /// Present only when the transfer was looked up by group and client id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_transfer_id: Option<i64>,
}

impl Transfer {
    /// Parse `creation_date`, accepting RFC 3339 and `YYYY-MM-DD HH:MM:SS`
    /// with either a space or a `T` separator.
    pub fn created_at(&self) -> Option<NaiveDateTime> {
        let raw = self.creation_date.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.naive_utc());
        }
        ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"]
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_terminal()
    }
}

/// Dispatch status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransferStatus {
    Failed,
    InProgress,
    Pending,
    Sent,
    /// A status this client does not know about.
    #[serde(other)]
    Unknown,
}

impl TransferStatus {
    /// Whether the dispatch will not change status again.
    pub fn is_terminal(&self) -> bool {
        matches!(self, TransferStatus::Failed | TransferStatus::Sent)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TransferStatus::Failed => "failed",
            TransferStatus::InProgress => "in_progress",
            TransferStatus::Pending => "pending",
            TransferStatus::Sent => "sent",
            TransferStatus::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for TransferStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    fn transfer(json: &str) -> Transfer {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_transfer_by_id_has_no_client_id() {
        let t = transfer(
            r#"{"id":321,"group_id":7,"status":"in_progress","errors":[],"tag":"spring","creation_date":"2024-03-01 10:20:30"}"#,
        );
        assert_eq!(t.status, TransferStatus::InProgress);
        assert!(t.client_transfer_id.is_none());
        assert!(!t.is_finished());
        let value = serde_json::to_value(&t).unwrap();
        assert!(value.get("client_transfer_id").is_none());
    }

    #[test]
    fn test_null_fields_decode_as_empty() {
        let t = transfer(
            r#"{"id":1,"group_id":1,"status":"sent","errors":null,"tag":null,"creation_date":null}"#,
        );
        assert!(t.errors.is_empty());
        assert_eq!(t.tag, "");
        assert!(t.created_at().is_none());
    }

    #[test]
    fn test_transfer_by_client_id() {
        let t = transfer(
            r#"{"id":321,"group_id":5,"status":"failed","errors":["no devices"],"tag":"t","creation_date":"2024-03-01T10:20:30","client_transfer_id":1001}"#,
        );
        assert_eq!(t.client_transfer_id, Some(1001));
        assert_eq!(t.errors, vec!["no devices".to_string()]);
        assert!(t.is_finished());
    }

    #[test]
    fn test_unknown_status_decodes() {
        let t = transfer(r#"{"id":1,"group_id":1,"status":"cancelled"}"#);
        assert_eq!(t.status, TransferStatus::Unknown);
        assert!(t.errors.is_empty());
    }

    #[test]
    fn test_created_at_formats() {
        let mut t = transfer(r#"{"id":1,"group_id":1,"status":"sent","creation_date":"2024-03-01 10:20:30"}"#);
        let parsed = t.created_at().unwrap();
        assert_eq!((parsed.year(), parsed.month(), parsed.day()), (2024, 3, 1));
        assert_eq!(parsed.hour(), 10);

        t.creation_date = "2024-03-01T10:20:30+03:00".into();
        assert_eq!(t.created_at().unwrap().hour(), 7);

        t.creation_date = "yesterday".into();
        assert!(t.created_at().is_none());
    }

    #[test]
    fn test_status_display_matches_wire() {
        for status in [
            TransferStatus::Failed,
            TransferStatus::InProgress,
            TransferStatus::Pending,
            TransferStatus::Sent,
        ] {
            assert_eq!(serde_json::to_value(status).unwrap(), status.to_string());
        }
    }
}
