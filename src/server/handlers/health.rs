//! Liveness handler.

use axum::http::StatusCode;

use crate::config::HEALTH_BODY;

/// Liveness endpoint; independent of DNS state
pub async fn health_handler() -> (StatusCode, &'static str) {
    (StatusCode::OK, HEALTH_BODY)
}
