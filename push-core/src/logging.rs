//! Tracing subscriber setup for the `appmetrica-push` binary.
//!
//! Library crates only emit events. The binary installs one subscriber at
//! startup from its `[logging]` settings: compact stderr output plus a daily
//! rotated log file, or stderr alone when the log directory is unusable.

use std::path::Path;

use tracing::{debug, warn, Subscriber};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer, Registry};

use crate::config::LoggingConfig;
use crate::constants;
use crate::error::{PushError, PushResult};

/// Keeps the background file writer alive. Dropping it flushes the log file.
pub struct LogGuard {
    _worker: WorkerGuard,
}

/// Name of the rotated log file inside the log directory.
pub fn log_file_name() -> String {
    format!("{}.log", constants::APP_NAME)
}

/// Install stderr and rotated file logging.
///
/// `settings.level` accepts a plain level or a filter directive such as
/// `push_api=debug`; anything unparsable falls back to `info`. The file is
/// written as JSON lines when `settings.json_output` is set.
pub fn init_logging(settings: &LoggingConfig, log_dir: &Path) -> PushResult<LogGuard> {
    std::fs::create_dir_all(log_dir)?;

    let (writer, worker) =
        tracing_appender::non_blocking(rolling::daily(log_dir, log_file_name()));

    let file_layer: Box<dyn Layer<Registry> + Send + Sync> = if settings.json_output {
        fmt::layer()
            .with_writer(writer)
            .json()
            .with_file(true)
            .with_line_number(true)
            .boxed()
    } else {
        fmt::layer()
            .with_writer(writer)
            .with_ansi(false)
            .with_file(true)
            .with_line_number(true)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(file_layer)
        .with(console_layer())
        .with(level_filter(&settings.level))
        .try_init()
        .map_err(|e| PushError::Config(format!("logging already initialized: {e}")))?;

    debug!(
        "logging to {} at level {}",
        log_dir.join(log_file_name()).display(),
        settings.level
    );
    Ok(LogGuard { _worker: worker })
}

/// Install stderr-only logging. Returns `false` if a subscriber was already set.
pub fn init_console_logging(level: &str) -> bool {
    tracing_subscriber::registry()
        .with(console_layer())
        .with(level_filter(level))
        .try_init()
        .is_ok()
}

/// File and stderr logging, degrading to stderr only when the log directory
/// cannot be used. Commands run either way.
pub fn init_logging_or_console(settings: &LoggingConfig, log_dir: &Path) -> Option<LogGuard> {
    match init_logging(settings, log_dir) {
        Ok(guard) => Some(guard),
        Err(e) => {
            init_console_logging(&settings.level);
            warn!("file logging disabled for {}: {e}", log_dir.display());
            None
        }
    }
}

fn console_layer<S>() -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .compact()
}

fn level_filter(level: &str) -> EnvFilter {
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"))
}
