//! # Custom Extractors
//!
//! axum's own `Json` extractor insists on an `application/json` content type. The shorten
//! endpoint also accepts requests that send no content type at all, so it uses
//! [`JsonBody`] instead.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::header,
};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::AppError;

/// Content type prefix accepted by [`JsonBody`].
pub const JSON_CONTENT_TYPE: &str = "application/json";

// =====================================
// JSON Body Extractor
// =====================================
/// Strict JSON body.
///
/// - a `Content-Type` that is present and not `application/json…` → 415
/// - malformed JSON, unknown fields (if `T` denies them) or anything after the first
///   value → 400
///
/// # Usage
/// ```rust,ignore
/// async fn handler(JsonBody(request): JsonBody<ShortenRequest>) -> ... {
///     // request is fully parsed
/// }
/// ```
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if let Some(content_type) = req.headers().get(header::CONTENT_TYPE) {
            let accepted = content_type
                .to_str()
                .map(|ct| ct.is_empty() || ct.starts_with(JSON_CONTENT_TYPE))
                .unwrap_or(false);

            if !accepted {
                return Err(AppError::UnsupportedMediaType(
                    "unsupported content type".to_string(),
                ));
            }
        }

        let body = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(format!("failed to read body: {}", e)))?;

        // from_slice also fails on trailing data after the first value
        let value = serde_json::from_slice(&body).map_err(|e| {
            debug!(error = %e, "Rejected request body");
            AppError::BadRequest("invalid json".to_string())
        })?;

        Ok(JsonBody(value))
    }
}
