//! Error types.
//!
//! This module provides:
//! - Initialization errors (logger, DNS resolver)
//! - Input errors (malformed email addresses)
//! - Lookup errors raised while checking a domain
//!
//! Lookup errors never abort a check on their own; see [`crate::LookupMode`]
//! for how they reach the caller.

mod types;

// Re-export public API
pub use types::{EmailError, InitializationError, LookupError, LookupKind};
