//! Client configuration management.
//!
//! Handles loading and saving the OAuth token, transport timeouts and logging
//! preferences. Configuration is persisted as TOML on disk and is read once
//! when a client is built.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::error::{PushError, PushResult};

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// API connection settings.
    #[serde(default)]
    pub api: ApiConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// API connection configuration.
#[derive(Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// OAuth token sent as `Authorization: OAuth <token>`.
    #[serde(default)]
    pub oauth_token: String,

    /// Whole-request timeout in milliseconds.
    #[serde(default = "default_timeout")]
    pub timeout_ms: u64,

    /// TCP/TLS connect timeout in milliseconds.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_ms: u64,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Directory for log files. If empty, uses default location.
    #[serde(default)]
    pub directory: String,

    /// Enable JSON structured logging output.
    #[serde(default)]
    pub json_output: bool,
}

// Default value functions for serde

fn default_timeout() -> u64 {
    constants::DEFAULT_TIMEOUT_MS
}

fn default_connect_timeout() -> u64 {
    constants::DEFAULT_CONNECT_TIMEOUT_MS
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            oauth_token: String::new(),
            timeout_ms: default_timeout(),
            connect_timeout_ms: default_connect_timeout(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            directory: String::new(),
            json_output: false,
        }
    }
}

impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("oauth_token", &"<redacted>")
            .field("timeout_ms", &self.timeout_ms)
            .field("connect_timeout_ms", &self.connect_timeout_ms)
            .finish()
    }
}

impl ApiConfig {
    /// Build a config holding only a token; timeouts keep their defaults.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            oauth_token: token.into(),
            ..Self::default()
        }
    }

    /// Whether a token has been set.
    pub fn is_configured(&self) -> bool {
        !self.oauth_token.trim().is_empty()
    }
}

impl AppConfig {
    /// Load configuration from the default config file path.
    pub fn load_default() -> PushResult<Self> {
        let path = Self::default_config_path()?;
        if path.exists() {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file path.
    pub fn load_from_file(path: &Path) -> PushResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save configuration to a specific file path.
    pub fn save_to_file(&self, path: &Path) -> PushResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Get the default configuration file path.
    pub fn default_config_path() -> PushResult<PathBuf> {
        let base = dirs::config_dir()
            .ok_or_else(|| PushError::Config("could not determine config directory".into()))?;
        Ok(base.join(constants::APP_NAME).join("config.toml"))
    }

    /// Get the effective log directory, using the configured path or the default.
    pub fn effective_log_dir(&self) -> PushResult<PathBuf> {
        if self.logging.directory.is_empty() {
            let base = dirs::data_dir()
                .ok_or_else(|| PushError::Config("could not determine data directory".into()))?;
            Ok(base.join(constants::APP_NAME).join("logs"))
        } else {
            Ok(PathBuf::from(&self.logging.directory))
        }
    }

    /// Override settings from the process environment.
    pub fn apply_env(&mut self) {
        self.apply_env_from(|key| std::env::var(key).ok());
    }

    fn apply_env_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(token) = lookup(constants::TOKEN_ENV_VAR).filter(|t| !t.trim().is_empty()) {
            self.api.oauth_token = token;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.api.timeout_ms, 30_000);
        assert_eq!(config.api.connect_timeout_ms, 15_000);
        assert_eq!(config.logging.level, "info");
        assert!(!config.api.is_configured());
    }

    #[test]
    fn test_roundtrip_toml() {
        let mut config = AppConfig::default();
        config.api.oauth_token = "secret".into();
        let serialized = toml::to_string_pretty(&config).unwrap();
        let deserialized: AppConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(deserialized.api.oauth_token, "secret");
        assert_eq!(deserialized.api.timeout_ms, config.api.timeout_ms);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: AppConfig = toml::from_str("[api]\noauth_token = \"abc\"\n").unwrap();
        assert!(config.api.is_configured());
        assert_eq!(config.api.timeout_ms, 30_000);
        assert!(!config.logging.json_output);
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = AppConfig {
            api: ApiConfig::with_token("file-token"),
            ..AppConfig::default()
        };
        config.save_to_file(&path).unwrap();

        let loaded = AppConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded.api.oauth_token, "file-token");
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[api\noauth_token = ").unwrap();
        assert!(matches!(
            AppConfig::load_from_file(&path),
            Err(PushError::Config(_))
        ));
    }

    #[test]
    fn test_env_overrides_token() {
        let mut config = AppConfig::default();
        config.api.oauth_token = "from-file".into();
        config.apply_env_from(|key| {
            (key == constants::TOKEN_ENV_VAR).then(|| "from-env".to_string())
        });
        assert_eq!(config.api.oauth_token, "from-env");

        config.apply_env_from(|_| Some("   ".to_string()));
        assert_eq!(config.api.oauth_token, "from-env");
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = ApiConfig::with_token("very-secret");
        assert!(!format!("{config:?}").contains("very-secret"));
    }
}
