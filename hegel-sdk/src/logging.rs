//! Logging infrastructure for the Hegel SDK
//!
//! Centralized tracing setup so embedding applications (particularly TUI
//! remotes) can pick an output mode without wiring subscribers themselves.

use tracing_subscriber::{fmt, EnvFilter, Registry};

/// Logging mode for different use cases
#[derive(Debug, Clone, Copy)]
pub enum LoggingMode {
    /// No output - for TUI applications that own the terminal
    Silent,
    /// Compact stderr output for development
    Development,
    /// Verbose diagnostics with source locations
    Debug,
}

/// Logging configuration error
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Failed to initialize tracing subscriber: {0}")]
    TracingInit(String),
}

/// Initialize logging with the specified mode
///
/// Call early, before any SDK operation that might emit log output.
///
/// # Environment Variables
///
/// - `HEGEL_LOG_LEVEL`: override the log level (error, warn, info, debug, trace)
/// - `RUST_LOG`: standard filter syntax, used when `HEGEL_LOG_LEVEL` is unset
pub fn init_logging(mode: LoggingMode) -> Result<(), LoggingError> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    match mode {
        LoggingMode::Silent => Ok(()),
        LoggingMode::Development => {
            let subscriber = Registry::default()
                .with(
                    fmt::layer()
                        .with_target(false)
                        .with_thread_ids(false)
                        .with_file(false)
                        .with_line_number(false)
                        .compact(),
                )
                .with(env_filter("info"));

            subscriber
                .try_init()
                .map_err(|e| LoggingError::TracingInit(e.to_string()))?;
            Ok(())
        }
        LoggingMode::Debug => {
            let subscriber = Registry::default()
                .with(
                    fmt::layer()
                        .pretty()
                        .with_thread_ids(true)
                        .with_file(true)
                        .with_line_number(true),
                )
                .with(env_filter("debug"));

            subscriber
                .try_init()
                .map_err(|e| LoggingError::TracingInit(e.to_string()))?;
            Ok(())
        }
    }
}

/// Initialize logging from the `HEGEL_LOG_MODE` environment variable
///
/// Recognizes "development" and "debug"; anything else (including unset)
/// defaults to silent so TUI remotes render cleanly.
pub fn init_logging_from_env() -> Result<(), LoggingError> {
    let mode = match std::env::var("HEGEL_LOG_MODE").as_deref() {
        Ok("development") => LoggingMode::Development,
        Ok("debug") => LoggingMode::Debug,
        _ => LoggingMode::Silent,
    };

    init_logging(mode)
}

/// Build the level filter: `HEGEL_LOG_LEVEL`, then `RUST_LOG`, then default
fn env_filter(default_level: &str) -> EnvFilter {
    if let Ok(level) = std::env::var("HEGEL_LOG_LEVEL") {
        EnvFilter::new(level)
    } else if let Ok(rust_log) = std::env::var("RUST_LOG") {
        EnvFilter::new(rust_log)
    } else {
        EnvFilter::new(default_level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silent_mode() {
        assert!(init_logging(LoggingMode::Silent).is_ok());
    }

    #[test]
    fn test_logging_mode_debug() {
        format!("{:?}", LoggingMode::Debug);
    }
}
