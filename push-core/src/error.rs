//! Error types for the AppMetrica Push client.
//!
//! Every failure a client call can produce is a `PushError` variant. Errors
//! reported by the service itself keep their structure in `ApiErrors`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Convenience type alias for Results using PushError.
pub type PushResult<T> = Result<T, PushError>;

/// Unified error type for configuration, transport, codec and API failures.
#[derive(Error, Debug)]
pub enum PushError {
    // -- Configuration errors --
    /// Failed to load or parse configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// File system operation failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    // -- Request errors --
    /// The HTTP request could not be built (bad URL, bad header value).
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The request payload could not be encoded as JSON.
    #[error("serialization error: {0}")]
    Serialization(String),

    // -- Network errors --
    /// HTTP request failed (connection, TLS, body read).
    #[error("http error: {0}")]
    Http(String),

    /// HTTP request timed out.
    #[error("request timeout: {0}")]
    Timeout(String),

    // -- Response errors --
    /// The response body was not a valid envelope.
    #[error("deserialization error: {0}")]
    Deserialization(String),

    /// The service reported one or more errors.
    #[error("api error: {}", .0.combined_message())]
    Api(ApiErrors),

    /// A successful envelope did not carry the field the operation returns.
    #[error("unexpected response: expected {expected}, found {found}")]
    UnexpectedResponse {
        /// Envelope field the operation extracts.
        expected: &'static str,
        /// Envelope variant actually received.
        found: &'static str,
    },
}

impl PushError {
    /// The service-reported errors, if this is an API error.
    pub fn api_errors(&self) -> Option<&ApiErrors> {
        match self {
            PushError::Api(errors) => Some(errors),
            _ => None,
        }
    }
}

impl From<toml::de::Error> for PushError {
    fn from(e: toml::de::Error) -> Self {
        PushError::Config(e.to_string())
    }
}

impl From<toml::ser::Error> for PushError {
    fn from(e: toml::ser::Error) -> Self {
        PushError::Config(e.to_string())
    }
}

/// A single error entry from the response envelope's `errors` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// Machine-readable error kind, e.g. "invalid_parameter".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_type: Option<String>,
    /// Human-readable message.
    #[serde(default)]
    pub message: String,
}

/// The ordered list of errors the service reported for one call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiErrors(pub Vec<ApiError>);

impl ApiErrors {
    /// All messages flattened into one string, each followed by ". ".
    pub fn combined_message(&self) -> String {
        self.0
            .iter()
            .map(|e| format!("{}. ", e.message))
            .collect()
    }

    /// Whether any entry has the given `error_type`.
    pub fn has_type(&self, error_type: &str) -> bool {
        self.0
            .iter()
            .any(|e| e.error_type.as_deref() == Some(error_type))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ApiError> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<ApiError>> for ApiErrors {
    fn from(errors: Vec<ApiError>) -> Self {
        ApiErrors(errors)
    }
}
