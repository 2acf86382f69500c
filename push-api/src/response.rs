//! Request and response envelopes.
//!
//! Every endpoint answers with the same JSON object, which carries at most one
//! result field or an `errors` list:
//! ```json
//! { "group": { "id": 1, "app_id": 42, "name": "promo" } }
//! { "errors": [ { "error_type": "invalid_parameter", "message": "bad name" } ] }
//! ```
//! `RawEnvelope` mirrors that object; `Envelope` is the tagged form handed to
//! the operations, where two result fields at once cannot be represented.

use serde::{Deserialize, Serialize};

use push_core::error::{ApiError, PushError, PushResult};
use push_models::{Group, PushBatchRequest, PushResponse, Transfer};

/// JSON request wrapper. Serializes as `{"group": ...}` or
/// `{"push_batch_request": ...}`.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestBody<'a> {
    Group(&'a Group),
    PushBatchRequest(&'a PushBatchRequest),
}

/// The response object exactly as sent by the server.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawEnvelope {
    pub group: Option<Group>,
    pub groups: Option<Vec<Group>>,
    pub push_response: Option<PushResponse>,
    pub transfer: Option<Transfer>,
    pub errors: Option<Vec<ApiError>>,
}

impl RawEnvelope {
    /// Decode a response body. An empty body is an empty envelope; callers
    /// check the status first with [`RawEnvelope::is_blank`].
    pub fn from_slice(body: &[u8]) -> serde_json::Result<Self> {
        if Self::is_blank(body) {
            return Ok(Self::default());
        }
        serde_json::from_slice(body)
    }

    /// Whether the body has no content besides whitespace.
    pub fn is_blank(body: &[u8]) -> bool {
        body.iter().all(u8::is_ascii_whitespace)
    }

    /// Convert into the tagged form.
    ///
    /// A non-empty `errors` list fails the call whatever else is present.
    /// More than one populated result field is rejected.
    pub fn into_envelope(self) -> PushResult<Envelope> {
        if let Some(errors) = self.errors.filter(|e| !e.is_empty()) {
            return Err(PushError::Api(errors.into()));
        }

        let populated = [
            self.group.is_some(),
            self.groups.is_some(),
            self.push_response.is_some(),
            self.transfer.is_some(),
        ]
        .into_iter()
        .filter(|p| *p)
        .count();
        if populated > 1 {
            return Err(PushError::Deserialization(format!(
                "response envelope carries {populated} result fields, expected at most one"
            )));
        }

        let envelope = if let Some(group) = self.group {
            Envelope::Group(group)
        } else if let Some(groups) = self.groups {
            Envelope::Groups(groups)
        } else if let Some(push) = self.push_response {
            Envelope::Push(push)
        } else if let Some(transfer) = self.transfer {
            Envelope::Transfer(transfer)
        } else {
            Envelope::Empty
        };
        Ok(envelope)
    }
}

/// A successful response, tagged by the result it carries.
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope {
    Empty,
    Group(Group),
    Groups(Vec<Group>),
    Push(PushResponse),
    Transfer(Transfer),
}

impl Envelope {
    /// Name of the envelope field this variant came from.
    pub fn kind(&self) -> &'static str {
        match self {
            Envelope::Empty => "empty",
            Envelope::Group(_) => "group",
            Envelope::Groups(_) => "groups",
            Envelope::Push(_) => "push_response",
            Envelope::Transfer(_) => "transfer",
        }
    }

    pub fn into_group(self) -> PushResult<Group> {
        match self {
            Envelope::Group(group) => Ok(group),
            other => Err(other.unexpected("group")),
        }
    }

    /// Groups list. An empty envelope means the app has no groups.
    pub fn into_groups(self) -> PushResult<Vec<Group>> {
        match self {
            Envelope::Groups(groups) => Ok(groups),
            Envelope::Empty => Ok(Vec::new()),
            other => Err(other.unexpected("groups")),
        }
    }

    pub fn into_push_response(self) -> PushResult<PushResponse> {
        match self {
            Envelope::Push(push) => Ok(push),
            other => Err(other.unexpected("push_response")),
        }
    }

    pub fn into_transfer(self) -> PushResult<Transfer> {
        match self {
            Envelope::Transfer(transfer) => Ok(transfer),
            other => Err(other.unexpected("transfer")),
        }
    }

    fn unexpected(&self, expected: &'static str) -> PushError {
        PushError::UnexpectedResponse {
            expected,
            found: self.kind(),
        }
    }
}
