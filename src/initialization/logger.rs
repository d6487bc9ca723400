//! Logger initialization.
//!
//! This module provides functions to initialize the logger with custom formatting.

use std::io::Write;

use crate::config::LogFormat;
use crate::error_handling::InitializationError;
use colored::*;
use log::LevelFilter;

/// Initializes the logger with the specified level and format.
///
/// Configures `env_logger` with custom formatting. Supports both plain text
/// (with colors and emojis) and JSON formats for structured logging.
///
/// The logger reads from the `RUST_LOG` environment variable by default, but
/// the provided `level` parameter will override it.
///
/// # Arguments
///
/// * `level` - Minimum log level to display (overrides `RUST_LOG` if set)
/// * `format` - Log format (Plain or Json)
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
///
/// # Examples
///
/// ```bash
/// # Per-module filtering via RUST_LOG
/// RUST_LOG=email_check=debug,hickory_resolver=debug email_check --log-level info
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    let mut builder = env_logger::Builder::from_default_env();

    builder.filter_level(level);
    builder.filter_module("hyper", LevelFilter::Info);
    // Truncated or malformed UDP answers are retried by hickory itself
    builder.filter_module("hickory_proto", LevelFilter::Error);
    builder.filter_module("hickory_resolver", LevelFilter::Warn);
    builder.filter_module("email_check", level);

    match format {
        LogFormat::Json => {
            builder.format(|buf, record| {
                writeln!(
                    buf,
                    "{{\"ts\":{},\"level\":\"{}\",\"target\":\"{}\",\"msg\":{}}}",
                    chrono::Utc::now().timestamp_millis(),
                    record.level(),
                    record.target(),
                    serde_json::to_string(&record.args().to_string())
                        .unwrap_or_else(|_| "\"\"".into())
                )
            });
        }
        LogFormat::Plain => {
            colored::control::set_override(true);
            builder.format(|buf, record| {
                let level = record.level();
                let colored_level = match level {
                    log::Level::Error => level.to_string().red(),
                    log::Level::Warn => level.to_string().yellow(),
                    log::Level::Info => level.to_string().green(),
                    log::Level::Debug => level.to_string().blue(),
                    log::Level::Trace => level.to_string().purple(),
                };

                let emoji = match level {
                    log::Level::Error => "❌",
                    log::Level::Warn => "⚠️",
                    log::Level::Info => "✔️",
                    log::Level::Debug => "🔍",
                    log::Level::Trace => "🔬",
                };

                writeln!(
                    buf,
                    "{} {} {} [{}] {}",
                    chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                    emoji,
                    record.target().cyan(),
                    colored_level,
                    record.args()
                )
            });
        }
    }

    // try_init() so a second initialization (e.g. in tests) errors instead of panicking
    builder.try_init().map_err(InitializationError::from)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logger_twice_reports_error() {
        // Only one logger can be installed per process; whichever call comes
        // second must fail with LoggerError rather than panic.
        let first = init_logger_with(LevelFilter::Info, LogFormat::Plain);
        let second = init_logger_with(LevelFilter::Debug, LogFormat::Json);
        assert!(second.is_err());
        if first.is_ok() {
            assert!(matches!(
                second,
                Err(InitializationError::LoggerError(_))
            ));
        }
    }
}
