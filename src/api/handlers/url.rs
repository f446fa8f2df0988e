//! # Short link handlers

use axum::{
    extract::{Path, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use tracing::info;

use crate::{
    api::extractors::JsonBody,
    error::{AppError, Result, ShortenerError},
    models::{ShortenRequest, ShortenResponse},
    services::AppState,
    utils,
};

// =====================================
// Shorten
// =====================================
/// Create a short id for a URL.
///
/// # Endpoint
/// `POST /shorten`
///
/// # Request Body
/// ```json
/// { "url": "http://example.com/long/path" }
/// ```
///
/// # Response
/// ```json
/// { "short_url": "Xk3_a9Zq", "original_url": "http://example.com/long/path" }
/// ```
///
/// - 400 for malformed JSON or an invalid URL
/// - 415 for a non-JSON content type
/// - 500 if no free id could be generated
pub async fn shorten(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<ShortenRequest>,
) -> Result<Json<ShortenResponse>> {
    let short_url = state.shortener.shorten(&request.url)?;

    Ok(Json(ShortenResponse {
        short_url,
        original_url: request.url,
    }))
}

// =====================================
// Redirect
// =====================================
/// Redirect to the URL behind a short id.
///
/// # Endpoint
/// `GET /:short_id`
///
/// # Response
/// - 302 Found with `Location` set to the stored URL, non-ASCII bytes percent-encoded
/// - 404 if the id is unknown or cannot be a short id at all
pub async fn redirect(
    State(state): State<AppState>,
    Path(short_id): Path<String>,
) -> Result<Response> {
    if !utils::is_well_formed_short_id(&short_id) {
        return Err(AppError::short_id_not_found(&short_id));
    }

    let original_url = state.shortener.resolve(&short_id).map_err(|e| match e {
        ShortenerError::NotFound => AppError::short_id_not_found(&short_id),
        other => other.into(),
    })?;

    let location = HeaderValue::try_from(utils::location_header(&original_url))
        .map_err(|e| AppError::Internal(format!("stored url is not a valid header: {}", e)))?;

    info!(short_id = %short_id, "Redirecting");

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}
