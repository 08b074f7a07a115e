//! Request logging middleware.
//!
//! Every request is logged twice: once on entry at `debug` with the handler name, headers and
//! body, and once on completion at `info` with the status and duration. Handler names come
//! from an explicit table keyed by method and matched route.

use axum::body::Body;
use axum::extract::{MatchedPath, Request};
use axum::http::{Method, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::time::Instant;

/// Largest request body buffered for logging.
pub const MAX_LOGGED_BODY: usize = 1024 * 1024;

const ROUTE_NAMES: &[(&str, &str, &str)] = &[
    ("POST", "/oauth/token", "issue_token"),
    ("GET", "/oauth/authorize", "authorize"),
    ("GET", "/v3.0/search", "search"),
    ("GET", "/v3.0/:id/record", "get_record"),
    ("GET", "/v3.0/:id/person", "get_person"),
    ("POST", "/v3.0/:id/work", "create_work"),
    ("GET", "/v3.0/:id/work/:put_code", "get_work"),
    ("PUT", "/v3.0/:id/work/:put_code", "update_work"),
    ("POST", "/v3.0/:id/employment", "create_employment"),
    ("GET", "/v3.0/:id/employment/:put_code", "get_employment"),
    ("PUT", "/v3.0/:id/employment/:put_code", "update_employment"),
    ("GET", "/api-docs/openapi.json", "openapi_json"),
];

/// Handler name for a method and matched route, or `unknown`.
pub fn handler_name(method: &Method, matched: Option<&str>) -> &'static str {
    let Some(matched) = matched else {
        return "unknown";
    };
    ROUTE_NAMES
        .iter()
        .find(|(m, path, _)| *m == method.as_str() && *path == matched)
        .map(|(_, _, name)| *name)
        .unwrap_or("unknown")
}

pub async fn log_requests(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let matched = request
        .extensions()
        .get::<MatchedPath>()
        .map(|m| m.as_str().to_owned());
    let name = handler_name(&method, matched.as_deref());

    let (parts, body) = request.into_parts();
    let bytes = match axum::body::to_bytes(body, MAX_LOGGED_BODY).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!("handler-name" = name, error = %e, "request body rejected");
            return (StatusCode::PAYLOAD_TOO_LARGE, "Request body too large").into_response();
        }
    };

    tracing::debug!(
        "handler-name" = name,
        headers = ?parts.headers,
        body = %String::from_utf8_lossy(&bytes),
        "Handling request"
    );

    let response = next.run(Request::from_parts(parts, Body::from(bytes))).await;

    tracing::info!(
        method = %method,
        path = %path,
        status = response.status().as_u16(),
        duration_ms = start.elapsed().as_secs_f64() * 1000.0,
        "Request processed"
    );
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_routes_resolve_to_handler_names() {
        assert_eq!(handler_name(&Method::POST, Some("/oauth/token")), "issue_token");
        assert_eq!(handler_name(&Method::GET, Some("/v3.0/:id/record")), "get_record");
        assert_eq!(
            handler_name(&Method::PUT, Some("/v3.0/:id/employment/:put_code")),
            "update_employment"
        );
    }

    #[test]
    fn method_is_part_of_the_key() {
        assert_eq!(handler_name(&Method::GET, Some("/v3.0/:id/work/:put_code")), "get_work");
        assert_eq!(handler_name(&Method::PUT, Some("/v3.0/:id/work/:put_code")), "update_work");
        assert_eq!(handler_name(&Method::DELETE, Some("/v3.0/:id/work/:put_code")), "unknown");
    }

    #[test]
    fn unmatched_routes_are_unknown() {
        assert_eq!(handler_name(&Method::GET, None), "unknown");
        assert_eq!(handler_name(&Method::GET, Some("/not/a/route")), "unknown");
    }
}
