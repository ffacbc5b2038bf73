//! Request ID middleware for request tracing and correlation.
//!
//! Uses the `x-request-id` set by an upstream proxy when it looks sane,
//! otherwise generates a UUID v4. The ID is recorded on the current tracing
//! span, tagged on the Sentry scope, and echoed in the response.

use axum::{
    extract::Request,
    http::{HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};
use tracing::Span;
use uuid::Uuid;

/// The HTTP header name for request IDs.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Longest upstream request ID we accept.
const MAX_REQUEST_ID_LEN: usize = 128;

/// Middleware that ensures every request has a request ID.
pub async fn request_id_middleware(request: Request, next: Next) -> Response {
    let request_id = resolve_request_id(request.headers());

    Span::current().record("request_id", request_id.as_str());
    sentry::configure_scope(|scope| {
        scope.set_tag("request_id", &request_id);
    });

    let mut response = next.run(request).await;

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}

/// Pick the upstream ID if present and well-formed, else mint a new one.
fn resolve_request_id(headers: &HeaderMap) -> String {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|h| h.to_str().ok())
        .map(str::trim)
        .filter(|id| is_acceptable(id))
        .map_or_else(|| Uuid::new_v4().to_string(), String::from)
}

fn is_acceptable(id: &str) -> bool {
    !id.is_empty()
        && id.len() <= MAX_REQUEST_ID_LEN
        && id
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'.'))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn headers_with(id: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_str(id).unwrap());
        headers
    }

    #[test]
    fn test_upstream_id_is_kept() {
        assert_eq!(resolve_request_id(&headers_with("cf-1234abcd")), "cf-1234abcd");
    }

    #[test]
    fn test_missing_id_is_generated() {
        let id = resolve_request_id(&HeaderMap::new());
        assert!(Uuid::parse_str(&id).is_ok());
    }

    #[test]
    fn test_malformed_id_is_replaced() {
        let id = resolve_request_id(&headers_with("bad id with spaces"));
        assert!(Uuid::parse_str(&id).is_ok());

        let long = "a".repeat(MAX_REQUEST_ID_LEN + 1);
        let id = resolve_request_id(&headers_with(&long));
        assert!(Uuid::parse_str(&id).is_ok());
    }
}
