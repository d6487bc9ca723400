// Shared test helpers: router construction and request/response plumbing.

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use email_check::{build_router, AppState, CheckOptions, LookupMode, StaticResolver};

/// Builds the service router over canned DNS answers.
pub fn test_router(resolver: StaticResolver, mode: LookupMode) -> Router {
    let options = CheckOptions {
        mode,
        parallel_lookups: false,
    };
    build_router(AppState::new(resolver, options))
}

/// The domain from the reference scenario: MX, SPF and DMARC all published.
#[allow(dead_code)]
pub fn example_com() -> StaticResolver {
    StaticResolver::new()
        .with_mx("example.com", &["mx1.example.com"])
        .with_txt("example.com", &["v=spf1 include:_spf.example.com ~all"])
        .with_txt("_dmarc.example.com", &["v=DMARC1; p=reject"])
}

/// Builds a form-encoded `POST /email/check` request.
#[allow(dead_code)]
pub fn check_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/email/check")
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Builds a `multipart/form-data` `POST /email/check` request from text fields.
#[allow(dead_code)]
pub fn multipart_check_request(fields: &[(&str, &str)]) -> Request<Body> {
    let boundary = "email-check-boundary";
    let mut body = String::new();
    for (name, value) in fields {
        body.push_str(&format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
        ));
    }
    body.push_str(&format!("--{boundary}--\r\n"));

    Request::builder()
        .method("POST")
        .uri("/email/check")
        .header(
            "content-type",
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(body))
        .unwrap()
}

/// Sends one request through the router.
pub async fn send(router: Router, request: Request<Body>) -> Response<Body> {
    router.oneshot(request).await.unwrap()
}

/// Reads a response body as UTF-8 text.
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Reads a response body as JSON.
#[allow(dead_code)]
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_str(&body_text(response).await).unwrap()
}
