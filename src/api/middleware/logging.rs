//! Request/response logging middleware

use std::time::Instant;

use axum::{
    body::Body,
    extract::MatchedPath,
    http::Request,
    middleware::Next,
    response::Response,
};
use tracing::{info, warn};

/// Logs every request and its outcome.
/// `TraceLayer` owns the request span, so no span is opened here.
pub async fn logging_middleware(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let uri = request.uri().clone();
    let path = route_path(&request);
    let request_id = request_id(&request);

    info!(
        method = %method,
        path = %path,
        uri = %uri,
        request_id = %request_id,
        "Incoming request"
    );

    let response = next.run(request).await;

    let duration = start.elapsed();
    let status = response.status();

    if status.is_server_error() {
        warn!(
            method = %method,
            path = %path,
            status = %status.as_u16(),
            duration_ms = %duration.as_millis(),
            request_id = %request_id,
            "Request failed"
        );
    } else {
        info!(
            method = %method,
            path = %path,
            status = %status.as_u16(),
            duration_ms = %duration.as_millis(),
            request_id = %request_id,
            "Request completed"
        );
    }

    response
}

/// Matched route template, or the raw path when no route matched
pub(crate) fn route_path(request: &Request<Body>) -> String {
    request
        .extensions()
        .get::<MatchedPath>()
        .map(|mp| mp.as_str().to_string())
        .unwrap_or_else(|| request.uri().path().to_string())
}

fn request_id(request: &Request<Body>) -> String {
    request
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_path_falls_back_to_uri() {
        let request = Request::builder()
            .uri("/users/7?verbose=1")
            .body(Body::empty())
            .unwrap();

        assert_eq!(route_path(&request), "/users/7");
    }

    #[test]
    fn test_request_id_header() {
        let request = Request::builder()
            .uri("/users")
            .header("x-request-id", "abc-123")
            .body(Body::empty())
            .unwrap();
        assert_eq!(request_id(&request), "abc-123");

        let request = Request::builder().uri("/users").body(Body::empty()).unwrap();
        assert_eq!(request_id(&request), "-");
    }
}
