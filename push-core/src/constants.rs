//! API host, endpoint paths and limits documented by AppMetrica.

/// Application name, used for config and log directories.
pub const APP_NAME: &str = "appmetrica-push";

/// Crate version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Base URL every request targets.
pub const API_HOST: &str = "https://push.api.appmetrica.yandex.net/push/v1";

/// Authorization scheme keyword placed before the token.
pub const AUTH_SCHEME: &str = "OAuth";

/// Environment variable that overrides the configured OAuth token.
pub const TOKEN_ENV_VAR: &str = "APPMETRICA_OAUTH_TOKEN";

/// Default request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Default connect timeout in milliseconds.
pub const DEFAULT_CONNECT_TIMEOUT_MS: u64 = 15_000;

/// Endpoint paths relative to `API_HOST`.
pub mod endpoints {
    pub const GROUPS: &str = "/management/groups";
    pub const GROUP: &str = "/management/group";
    pub const SEND_BATCH: &str = "/send-batch";
    pub const STATUS: &str = "/status";
}

/// Limits enforced by the service. The client does not check them.
pub mod limits {
    /// Lowest accepted group send rate (pushes per second).
    pub const MIN_SEND_RATE: u32 = 100;
    /// Highest accepted group send rate, also the default.
    pub const MAX_SEND_RATE: u32 = 5000;
    /// Send rate the service applies when none is set.
    pub const DEFAULT_SEND_RATE: u32 = MAX_SEND_RATE;
    /// Devices across all batches of one send-batch request.
    pub const MAX_DEVICES_PER_REQUEST: usize = 250_000;
    /// Device id-type groups in one batch.
    pub const MAX_DEVICE_GROUPS_PER_BATCH: usize = 5;
}
