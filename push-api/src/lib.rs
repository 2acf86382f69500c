//! AppMetrica Push API - HTTP client for the push management REST API.
//!
//! This crate provides a typed client for push groups, batched dispatches and
//! dispatch status. Every operation is exactly one HTTP call: the request body
//! is built from `push-models` types, the response envelope is decoded, and
//! service-reported errors come back as `PushError::Api`.

pub mod api;
pub mod client;
pub mod endpoints;
pub mod response;
pub mod transport;

#[cfg(test)]
pub(crate) mod testing;

// Re-export key types
pub use api::PushApi;
pub use client::ApiClient;
pub use response::{Envelope, RawEnvelope, RequestBody};
pub use transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport};
