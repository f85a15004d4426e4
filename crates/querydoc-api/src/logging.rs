//! Logging configuration for querydoc
//!
//! Logging uses the `tracing` framework. Builders and the output writer emit
//! `debug`/`trace` events while a query is assembled and an `info` event
//! carrying the JSON when a query is written out.

use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing::warn;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter};

const DEFAULT_LOG_FILE: &str = "querydoc.log";

/// Log output destination
#[derive(Debug, Clone)]
pub enum LogOutput {
    /// Output to stdout
    Stdout,
    /// Output to a daily-rotated file
    File(PathBuf),
    /// Output to both stdout and file
    Both(PathBuf),
}

/// Log format style
#[derive(Debug, Clone, Copy)]
pub enum LogFormat {
    /// Human-readable multi-line format with colors (default)
    Pretty,
    /// Compact single-line format
    Compact,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Minimum log level filter, overridden by `RUST_LOG`
    pub level: String,
    /// Output destination
    pub output: LogOutput,
    /// Format style
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            output: LogOutput::Stdout,
            format: LogFormat::Pretty,
        }
    }
}

impl LogConfig {
    /// Info level, stdout
    pub fn info() -> Self {
        Self::default()
    }

    /// Debug level, stdout. Shows every builder step.
    pub fn debug() -> Self {
        Self {
            level: "debug".to_string(),
            ..Default::default()
        }
    }

    /// Warn level, stdout. Silences the query echo.
    pub fn warn() -> Self {
        Self {
            level: "warn".to_string(),
            ..Default::default()
        }
    }

    /// Set log output to a rotated file
    pub fn with_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.output = LogOutput::File(path.into());
        self
    }

    /// Set log output to both stdout and file
    pub fn with_both<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.output = LogOutput::Both(path.into());
        self
    }

    /// Set log format
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Set log level filter
    pub fn with_level<S: Into<String>>(mut self, level: S) -> Self {
        self.level = level.into();
        self
    }

    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&self.level))
            .unwrap_or_else(|_| EnvFilter::new("info"))
    }

    /// Initialize global logging with this configuration
    ///
    /// Returns a guard that must be kept alive while logging to a file;
    /// dropping it shuts the writer thread down. If a global subscriber is
    /// already installed the new one is dropped and a warning is logged
    /// through the existing one.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use querydoc::logging::LogConfig;
    ///
    /// let _guard = LogConfig::info().init();
    /// ```
    pub fn init(self) -> Option<WorkerGuard> {
        let env_filter = self.env_filter();

        match self.output {
            LogOutput::Stdout => {
                let registry = tracing_subscriber::registry().with(env_filter);
                report(match self.format {
                    LogFormat::Pretty => registry.with(fmt::layer().pretty()).try_init(),
                    LogFormat::Compact => registry.with(fmt::layer().compact()).try_init(),
                });
                None
            }
            LogOutput::File(path) => {
                let (writer, guard) = file_writer(&path);
                let registry = tracing_subscriber::registry().with(env_filter);
                report(match self.format {
                    LogFormat::Pretty => registry
                        .with(fmt::layer().with_writer(writer).with_ansi(false).pretty())
                        .try_init(),
                    LogFormat::Compact => registry
                        .with(fmt::layer().with_writer(writer).with_ansi(false).compact())
                        .try_init(),
                });
                Some(guard)
            }
            LogOutput::Both(path) => {
                let (writer, guard) = file_writer(&path);
                // single-line format on both sinks
                report(
                    tracing_subscriber::registry()
                        .with(env_filter)
                        .with(fmt::layer().compact())
                        .with(fmt::layer().with_writer(writer).with_ansi(false).compact())
                        .try_init(),
                );
                Some(guard)
            }
        }
    }
}

/// Returns whether the subscriber was installed.
fn report(result: Result<(), TryInitError>) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            warn!(error = %e, "Global subscriber already set, keeping the existing one");
            false
        }
    }
}

fn file_writer(path: &Path) -> (NonBlocking, WorkerGuard) {
    let appender = tracing_appender::rolling::daily(
        path.parent().unwrap_or_else(|| Path::new(".")),
        path.file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(DEFAULT_LOG_FILE),
    );
    tracing_appender::non_blocking(appender)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_config_defaults() {
        let config = LogConfig::default();
        assert_eq!(config.level, "info");
        assert!(matches!(config.output, LogOutput::Stdout));
        assert!(matches!(config.format, LogFormat::Pretty));
    }

    #[test]
    fn test_log_config_builders() {
        let config = LogConfig::debug()
            .with_file("/tmp/querydoc-test.log")
            .with_format(LogFormat::Compact);
        assert_eq!(config.level, "debug");
        assert!(matches!(config.output, LogOutput::File(_)));
        assert!(matches!(config.format, LogFormat::Compact));

        let config = LogConfig::warn().with_level("trace").with_both("logs/q.log");
        assert_eq!(config.level, "trace");
        assert!(matches!(config.output, LogOutput::Both(ref p) if p.ends_with("q.log")));
    }

    #[test]
    fn test_second_init_keeps_first_subscriber() {
        let compact = || {
            tracing_subscriber::registry()
                .with(EnvFilter::new("warn"))
                .with(fmt::layer().compact())
                .try_init()
        };

        // only this test installs a global subscriber in this binary
        assert!(report(compact()));
        assert!(!report(compact()));
        assert!(LogConfig::warn().init().is_none());
    }
}
