//! HTTP server exposing the email check.
//!
//! Provides two endpoints:
//! - `GET /health` - Liveness check, always `200 OK`
//! - `POST /email/check` - Field `email` (url-encoded or multipart body, or query); JSON domain report
//!
//! Every request is logged once by the request logging layer.

mod extract;
mod handlers;
mod middleware;
mod shutdown;
mod types;

use std::net::SocketAddr;

use axum::routing::{get, post};
use axum::Router;

use crate::config::{EMAIL_CHECK_PATH, EMAIL_ROUTES_PREFIX, HEALTH_PATH};
use crate::dns::RecordResolver;
use handlers::{check_email_handler, health_handler};
use middleware::log_request;
use shutdown::shutdown_signal;
pub use extract::EmailField;
pub use types::{AppState, ErrorResponse};

/// Builds the service router with its state attached.
pub fn build_router<R: RecordResolver>(state: AppState<R>) -> Router {
    Router::new()
        .route(HEALTH_PATH, get(health_handler))
        .nest(EMAIL_ROUTES_PREFIX, email_routes::<R>())
        .layer(axum::middleware::from_fn(log_request))
        .with_state(state)
}

fn email_routes<R: RecordResolver>() -> Router<AppState<R>> {
    Router::new().route(EMAIL_CHECK_PATH, post(check_email_handler::<R>))
}

/// Binds `addr` and serves the router until a shutdown signal arrives.
pub async fn start_server<R: RecordResolver>(
    addr: SocketAddr,
    state: AppState<R>,
) -> Result<(), anyhow::Error> {
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind server to {}: {}", addr, e))?;

    log::info!("Server listening on http://{}/", addr);
    log::info!("  - Health: GET http://{}{}", addr, HEALTH_PATH);
    log::info!(
        "  - Check: POST http://{}{}{}",
        addr,
        EMAIL_ROUTES_PREFIX,
        EMAIL_CHECK_PATH
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    log::info!("Server stopped");
    Ok(())
}
