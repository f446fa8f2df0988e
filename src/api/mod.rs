//! # API layer
//!
//! Thin HTTP adapter over the shortener engine.
//!
//! ## Routes
//! - `POST /shorten` - create a short id
//! - `GET /:short_id` - 302 redirect to the original URL
//! - `GET /health` - health check
//!
//! `/` and multi-segment paths are a 404 for `GET`; any other method on a path other
//! than `/` is a 405.

pub mod extractors;
pub mod handlers;
pub mod middleware;

pub use extractors::*;
pub use middleware::*;

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::services::AppState;

// =====================================
// Router Builder
// =====================================
/// Build the application router around `state`.
///
/// Static routes win over `/:short_id`, so `GET /shorten` is a 405 rather than a lookup.
pub fn create_router(state: AppState) -> Router {
    let timeout = state.config().request_timeout();

    Router::new()
        .route("/shorten", post(handlers::url::shorten))
        .route("/health", get(handlers::health::health_check))
        .route("/:short_id", get(handlers::url::redirect))
        .fallback(handlers::fallback)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::new(timeout))
                .layer(axum_middleware::from_fn(request_id))
                .layer(axum_middleware::from_fn(request_timing)),
        )
        .with_state(state)
}
