//! Structured logging infrastructure for SiegeBot

use crate::error::{Result, SiegeError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt::{self, writer::BoxMakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer,
};

/// Output format of log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Multi-line human friendly output
    #[default]
    Pretty,
    /// Single-line output
    Compact,
    /// Newline delimited JSON
    Json,
}

/// Configuration for the logging system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "siege_stats=debug"); `RUST_LOG` wins when set
    pub level: String,
    /// Line format
    pub format: LogFormat,
    /// Optional file to write logs to instead of stdout
    pub file_path: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
            file_path: None,
        }
    }
}

/// Keeps the background log writer alive; drop it only at shutdown.
#[must_use = "dropping the guard stops file logging"]
pub struct LoggingGuard {
    _worker: Option<WorkerGuard>,
}

/// Initialize the tracing subscriber with the given configuration
pub fn init_logging(config: &LoggingConfig) -> Result<LoggingGuard> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let (writer, worker, ansi) = match &config.file_path {
        Some(path) => {
            let (directory, file_name) = split_log_path(path)?;
            let appender = tracing_appender::rolling::never(directory, file_name);
            let (non_blocking, guard) = tracing_appender::non_blocking(appender);
            (BoxMakeWriter::new(non_blocking), Some(guard), false)
        }
        None => (BoxMakeWriter::new(std::io::stdout), None, true),
    };

    let layer = match config.format {
        LogFormat::Pretty => fmt::layer()
            .pretty()
            .with_ansi(ansi)
            .with_target(true)
            .with_writer(writer)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_ansi(ansi)
            .with_target(true)
            .with_writer(writer)
            .boxed(),
        LogFormat::Json => fmt::layer().json().with_writer(writer).boxed(),
    };

    tracing_subscriber::registry()
        .with(layer)
        .with(env_filter)
        .try_init()
        .map_err(|e| SiegeError::config_with_source("Failed to install log subscriber", e))?;

    Ok(LoggingGuard { _worker: worker })
}

/// Subscriber covering startup, before the configured one can be installed.
///
/// Use it scoped with [`tracing::subscriber::with_default`] around config
/// loading so those log lines are not lost.
pub fn bootstrap_subscriber() -> impl tracing::Subscriber + Send + Sync {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .compact()
        .with_target(true)
        .with_env_filter(env_filter)
        .finish()
}

fn split_log_path(path: &Path) -> Result<(PathBuf, PathBuf)> {
    let file_name = path.file_name().ok_or_else(|| {
        SiegeError::validation_field(
            format!("Log file path '{}' has no file name", path.display()),
            "logging.file_path",
        )
    })?;

    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    Ok((directory, PathBuf::from(file_name)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info");
        assert_eq!(config.format, LogFormat::Pretty);
        assert!(config.file_path.is_none());
    }

    #[test]
    fn test_split_log_path() {
        let (dir, file) = split_log_path(Path::new("logs/siegebot.log")).unwrap();
        assert_eq!(dir, PathBuf::from("logs"));
        assert_eq!(file, PathBuf::from("siegebot.log"));

        let (dir, file) = split_log_path(Path::new("siegebot.log")).unwrap();
        assert_eq!(dir, PathBuf::from("."));
        assert_eq!(file, PathBuf::from("siegebot.log"));

        assert!(split_log_path(Path::new("/")).is_err());
    }

    #[test]
    fn test_bootstrap_subscriber_is_active_in_scope() {
        tracing::subscriber::with_default(bootstrap_subscriber(), || {
            assert!(tracing::enabled!(tracing::Level::WARN));
            tracing::info!("Loading configuration");
        });
    }

    #[test]
    fn test_log_format_deserialization() {
        let config: LoggingConfig =
            serde_json::from_str(r#"{"level": "debug", "format": "json"}"#).unwrap();
        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.level, "debug");
        assert!(config.file_path.is_none());
    }
}
