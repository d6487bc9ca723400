//! Error type definitions.

use log::SetLoggerError;
use strum_macros::Display;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error reading the system resolver configuration.
    #[error("DNS resolver initialization error: {0}")]
    DnsResolverError(String),
}

/// Errors for email addresses that cannot be split into local part and domain.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EmailError {
    /// The address does not contain exactly one `@`.
    #[error("Invalid email address format")]
    InvalidFormat,
}

/// The three lookups performed by a domain check, in the order they are issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
pub enum LookupKind {
    /// MX records of the domain
    #[strum(serialize = "MX")]
    Mx,
    /// TXT records of the domain (SPF discovery)
    #[strum(serialize = "TXT")]
    Txt,
    /// TXT records of `_dmarc.<domain>`
    #[strum(serialize = "DMARC")]
    Dmarc,
}

/// A failed DNS lookup.
///
/// Displays as the resolver's own message so it can be handed to HTTP clients
/// unchanged; `kind` and `name` carry the context for logging.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct LookupError {
    /// Which of the three lookups failed
    pub kind: LookupKind,
    /// Name that was queried
    pub name: String,
    /// Message reported by the resolver
    pub message: String,
}

impl LookupError {
    /// Creates a lookup error for `name`.
    pub fn new(kind: LookupKind, name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            message: message.into(),
        }
    }
}
