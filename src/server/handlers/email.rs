//! Email check handler.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::super::extract::EmailField;
use super::super::types::{AppState, ErrorResponse};
use crate::checker::check_domain;
use crate::dns::RecordResolver;
use crate::domain::domain_from_email;

/// Checks the domain of the submitted `email` field.
///
/// A missing field is the empty address, which fails the `@` split with 400.
pub async fn check_email_handler<R: RecordResolver>(
    State(state): State<AppState<R>>,
    EmailField(email): EmailField,
) -> Response {
    let domain = match domain_from_email(&email) {
        Ok(domain) => domain,
        Err(e) => return error_response(StatusCode::BAD_REQUEST, e),
    };

    match check_domain(&state.resolver, domain, state.options).await {
        Ok(report) => {
            log::info!("Domain checks for {domain}: {report:?}");
            (StatusCode::OK, Json(report)).into_response()
        }
        Err(e) => error_response(StatusCode::INTERNAL_SERVER_ERROR, e),
    }
}

fn error_response(status: StatusCode, error: impl ToString) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
        }),
    )
        .into_response()
}
