//! # Middleware
//!
//! `from_fn` middleware wrapped around every route:
//! - request id propagation
//! - request timing

use std::time::Instant;

use axum::{
    extract::Request,
    http::HeaderValue,
    middleware::Next,
    response::Response,
};
use tracing::info;

/// Header carrying the request id.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// New random request id.
#[must_use]
pub fn generate_request_id() -> String {
    nanoid::nanoid!(12)
}

// =====================================
// Request ID Middleware
// =====================================
/// Reuse the caller's `X-Request-Id` or generate one, and echo it on the response.
///
/// ```rust,ignore
/// let app = Router::new()
///     .layer(axum::middleware::from_fn(request_id));
/// ```
pub async fn request_id(mut request: Request, next: Next) -> Response {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .cloned()
        .or_else(|| HeaderValue::from_str(&generate_request_id()).ok());

    if let Some(id) = &request_id {
        request.headers_mut().insert(REQUEST_ID_HEADER, id.clone());
    }

    let mut response = next.run(request).await;

    if let Some(id) = request_id {
        response.headers_mut().insert(REQUEST_ID_HEADER, id);
    }

    response
}

// =====================================
// Request Timing Middleware
// =====================================
/// Log method, path, status and duration of each request.
pub async fn request_timing(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let start = Instant::now();
    let response = next.run(request).await;
    let duration = start.elapsed();

    info!(
        method = %method,
        uri = %uri,
        status = %response.status(),
        duration_ms = %duration.as_millis(),
        "Request completed"
    );

    response
}
