//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::net::{IpAddr, SocketAddr};

use clap::{Parser, ValueEnum};

use crate::config::constants::{DEFAULT_BIND_ADDR, DEFAULT_PORT};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// How lookup failures during a domain check are reported to the caller.
///
/// Every failure is logged in both modes. The modes differ only in whether the
/// last failure is surfaced alongside the (partial) report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LookupMode {
    /// Any failed lookup fails the check; the HTTP layer answers 500.
    Strict,
    /// Failed lookups count as "no records"; the partial report is returned.
    BestEffort,
}

/// Service configuration.
///
/// Parsed from the command line and `EMAIL_CHECK_*` environment variables, or
/// constructed programmatically.
///
/// # Examples
///
/// ```no_run
/// use email_check::{Config, LookupMode};
///
/// let config = Config {
///     port: 8080,
///     lookup_mode: LookupMode::BestEffort,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "email_check",
    version,
    about = "Reports the MX, SPF and DMARC posture of an email address's domain"
)]
pub struct Config {
    /// Address to listen on
    #[arg(long, env = "EMAIL_CHECK_BIND", default_value_t = DEFAULT_BIND_ADDR)]
    pub bind: IpAddr,

    /// Port to listen on
    #[arg(long, env = "EMAIL_CHECK_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Log level
    #[arg(long, env = "EMAIL_CHECK_LOG_LEVEL", value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, env = "EMAIL_CHECK_LOG_FORMAT", value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Whether a failed DNS lookup fails the whole check
    #[arg(long, env = "EMAIL_CHECK_LOOKUP_MODE", value_enum, default_value_t = LookupMode::Strict)]
    pub lookup_mode: LookupMode,

    /// Issue the MX, TXT and DMARC lookups concurrently
    #[arg(long, env = "EMAIL_CHECK_PARALLEL_LOOKUPS")]
    pub parallel_lookups: bool,

    /// Per-query DNS timeout in seconds (system resolver setting if unset)
    #[arg(long, env = "EMAIL_CHECK_DNS_TIMEOUT_SECS")]
    pub dns_timeout_secs: Option<u64>,

    /// DNS query attempts before giving up (system resolver setting if unset)
    #[arg(long, env = "EMAIL_CHECK_DNS_ATTEMPTS")]
    pub dns_attempts: Option<usize>,
}

impl Config {
    /// Socket address the HTTP server binds to.
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND_ADDR,
            port: DEFAULT_PORT,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            lookup_mode: LookupMode::Strict,
            parallel_lookups: false,
            dns_timeout_secs: None,
            dns_attempts: None,
        }
    }
}
