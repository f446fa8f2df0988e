//! # Health Check Handler

use axum::{extract::State, Json};

use crate::{models::HealthResponse, services::AppState};

/// Liveness probe.
///
/// # Endpoint
/// `GET /health`
///
/// # Response
/// ```json
/// { "status": "healthy", "version": "0.1.0", "links": 42 }
/// ```
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::healthy(state.shortener.len()))
}
