//! Server data structures.

use serde::Serialize;

use crate::checker::CheckOptions;

/// Shared state for the HTTP handlers.
///
/// Read-only: the resolver handle and the per-check options.
#[derive(Clone)]
pub struct AppState<R> {
    /// Resolver used by every check
    pub resolver: R,
    /// Lookup mode and scheduling
    pub options: CheckOptions,
}

impl<R> AppState<R> {
    /// Creates the handler state.
    pub fn new(resolver: R, options: CheckOptions) -> Self {
        Self { resolver, options }
    }
}

/// JSON body for every error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}
