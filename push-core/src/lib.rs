//! AppMetrica Push Core - errors, configuration, logging and constants.
//!
//! This crate provides the shared foundation used by the other workspace crates:
//! - The unified `PushError` type and the typed API error list
//! - Client configuration persisted as TOML
//! - Structured logging setup with tracing
//! - API host, endpoint paths and documented limits

pub mod config;
pub mod constants;
pub mod error;
pub mod logging;

// Re-export commonly used items at the crate root
pub use config::{ApiConfig, AppConfig};
pub use error::{ApiError, ApiErrors, PushError, PushResult};
pub use logging::{init_logging, init_logging_or_console, LogGuard};
