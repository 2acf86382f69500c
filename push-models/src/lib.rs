//! AppMetrica Push Models - typed request and response structures.
//!
//! This crate mirrors the JSON schema of the push management API:
//! push groups, send-batch requests with Android and iOS payloads,
//! dispatch results and transfer status records. Every type is a plain
//! value; optional fields are left out of the JSON when unset.

pub mod models;

// Re-export key types
pub use models::group::Group;
pub use models::push::{
    AndroidAction, AndroidContent, AndroidMessage, Attachment, Batch, Device, IdType, IosAction,
    IosContent, IosMessage, IosSound, Message, PushBatchRequest, PushResponse, Urgency,
    Visibility,
};
pub use models::transfer::{Transfer, TransferStatus};
