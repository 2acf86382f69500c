//! AppMetrica Push CLI - command-line interface for the push management API.
//!
//! Manages push groups, submits send-batch requests read from JSON files and
//! queries dispatch status. Useful for scripting and for checking a token
//! against the live API.

mod commands;

use std::path::Path;

use clap::{Parser, Subcommand};
use tracing::debug;

use push_core::config::AppConfig;
use push_core::error::PushResult;
use push_core::logging;

/// AppMetrica Push - manage push groups and dispatches.
#[derive(Parser)]
#[command(
    name = "appmetrica-push",
    version,
    about = "AppMetrica Push API command-line client"
)]
struct Cli {
    /// Path to the configuration file.
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// OAuth token (overrides config and APPMETRICA_OAUTH_TOKEN).
    #[arg(long, global = true)]
    token: Option<String>,

    /// Enable verbose logging (debug level).
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (text, json).
    #[arg(short = 'f', long, global = true, default_value = "text")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// JSON output for scripting.
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Create, list and manage push groups.
    Groups {
        #[command(subcommand)]
        action: commands::groups::GroupsAction,
    },
    /// Send a batch of push notifications described by a JSON file.
    Send(commands::send::SendArgs),
    /// Query dispatch status.
    Status {
        #[command(subcommand)]
        action: commands::status::StatusAction,
    },
}

#[tokio::main]
async fn main() -> PushResult<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = match cli.config.as_deref() {
        Some(path) => AppConfig::load_from_file(Path::new(path))?,
        None => AppConfig::load_default()?,
    };
    config.apply_env();
    if let Some(token) = cli.token {
        config.api.oauth_token = token;
    }

    // Initialize logging; an unusable log directory leaves stderr logging only
    let mut log_settings = config.logging.clone();
    if cli.verbose {
        log_settings.level = "debug".to_string();
    }
    let log_dir = config
        .effective_log_dir()
        .unwrap_or_else(|_| std::path::PathBuf::from("logs"));
    let _guard = logging::init_logging_or_console(&log_settings, &log_dir);

    debug!("appmetrica-push v{}", push_core::constants::APP_VERSION);

    // Dispatch to command handlers
    match cli.command {
        Commands::Groups { action } => commands::groups::run(&config, action, cli.format).await,
        Commands::Send(args) => commands::send::run(&config, args, cli.format).await,
        Commands::Status { action } => commands::status::run(&config, action, cli.format).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_groups_create() {
        let cli = Cli::try_parse_from([
            "appmetrica-push",
            "--token",
            "abc",
            "groups",
            "create",
            "--app-id",
            "42",
            "--name",
            "promo",
        ])
        .unwrap();
        assert_eq!(cli.token.as_deref(), Some("abc"));
        assert!(matches!(
            cli.command,
            Commands::Groups {
                action: commands::groups::GroupsAction::Create { app_id: 42, send_rate: None, .. }
            }
        ));
    }

    #[test]
    fn test_parse_status_client() {
        let cli = Cli::try_parse_from(["appmetrica-push", "-f", "json", "status", "client", "5", "1001"])
            .unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(matches!(
            cli.command,
            Commands::Status {
                action: commands::status::StatusAction::Client { group_id: 5, client_transfer_id: 1001 }
            }
        ));
    }

    #[test]
    fn test_send_requires_file() {
        assert!(Cli::try_parse_from(["appmetrica-push", "send"]).is_err());
    }
}
