//! API endpoint modules organized by category.
//!
//! Each module adds typed methods to `ApiClient` for a group of related
//! endpoints. Every method performs exactly one `dispatch`.

pub mod groups;
pub mod push;
pub mod status;
