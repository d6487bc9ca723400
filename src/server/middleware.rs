//! Request logging layer.

use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Logs method, path, status and latency of every request.
pub async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let start = Instant::now();

    let response = next.run(request).await;

    log::info!(
        "\"{} {}\" {} in {:.3}ms",
        method,
        path,
        response.status().as_u16(),
        start.elapsed().as_secs_f64() * 1000.0
    );
    response
}
