//! CLI command implementations.

pub mod groups;
pub mod send;
pub mod status;

use serde::Serialize;

use push_api::ApiClient;
use push_core::config::AppConfig;
use push_core::constants;
use push_core::error::{PushError, PushResult};

/// Helper to create an API client from config.
pub fn create_api_client(config: &AppConfig) -> PushResult<ApiClient> {
    if !config.api.is_configured() {
        return Err(PushError::Config(format!(
            "no OAuth token configured; set api.oauth_token, {} or --token",
            constants::TOKEN_ENV_VAR
        )));
    }
    ApiClient::new(&config.api)
}

/// Print a value as pretty JSON.
pub fn print_json<T: Serialize>(value: &T) -> PushResult<()> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| PushError::Serialization(e.to_string()))?;
    println!("{text}");
    Ok(())
}
