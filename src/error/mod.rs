//! # Error handling
//!
//! Two layers of errors live here:
//!
//! - [`ShortenerError`]: the three failure kinds of the shortener engine. These never carry
//!   HTTP knowledge and the engine is usable again after any of them.
//! - [`AppError`]: everything the service can surface to a client or to `main`, with a
//!   status code and an [`IntoResponse`] implementation so handlers can return it directly.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

// =====================================
// Result Type Alias
// =====================================
/// Crate-wide result type, defaulting to [`AppError`].
pub type Result<T, E = AppError> = std::result::Result<T, E>;

// =====================================
// Engine Errors
// =====================================
/// Failure kinds of the shortener engine.
///
/// None of them leaves a partial entry behind in the mapping.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShortenerError {
    /// The candidate URL failed validation (empty, unparseable, wrong scheme or no host).
    #[error("invalid url")]
    InvalidUrl,

    /// The short id is unknown, or empty after trimming.
    #[error("short id not found")]
    NotFound,

    /// Every generated id collided with an existing key.
    #[error("failed to generate unique short id after {attempts} attempts")]
    GenerationExhausted { attempts: usize },
}

// =====================================
// Application Errors
// =====================================
/// Errors surfaced by the HTTP layer and the process bootstrap.
#[derive(Debug, Error)]
pub enum AppError {
    // ----------------------------------------
    // Client errors (4xx)
    // ----------------------------------------

    /// Malformed request or rejected URL - 400
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Nothing behind this path or short id - 404
    #[error("Not found: {0}")]
    NotFound(String),

    /// Wrong method for the path - 405
    #[error("Method not allowed: {0}")]
    MethodNotAllowed(String),

    /// Request body is not JSON - 415
    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),

    // ----------------------------------------
    // Server errors (5xx)
    // ----------------------------------------

    /// Internal server error - 500
    #[error("Internal server error: {0}")]
    Internal(String),

    /// The HTTP server itself failed
    #[error("Server error: {0}")]
    Server(String),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error, e.g. binding the listener
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// HTTP status code for this error.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            Self::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,

            Self::Internal(_)
            | Self::Server(_)
            | Self::Config(_)
            | Self::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Whether this is a 5xx error.
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        self.status_code().is_server_error()
    }

    /// Not found error for a short id.
    #[must_use]
    pub fn short_id_not_found(short_id: &str) -> Self {
        Self::NotFound(format!("short id '{}' not found", short_id))
    }
}

/// Maps each engine failure onto a distinct status:
/// `InvalidUrl` → 400, `NotFound` → 404, `GenerationExhausted` → 500.
impl From<ShortenerError> for AppError {
    fn from(err: ShortenerError) -> Self {
        match err {
            ShortenerError::InvalidUrl => AppError::BadRequest(err.to_string()),
            ShortenerError::NotFound => AppError::NotFound(err.to_string()),
            ShortenerError::GenerationExhausted { .. } => AppError::Internal(err.to_string()),
        }
    }
}

// =====================================
// Error Response DTO
// =====================================
/// JSON body of every error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Reason phrase, e.g. "Not Found"
    pub error: String,

    /// Human readable message
    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            status_code: None,
        }
    }

    #[must_use]
    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status_code = Some(status.as_u16());
        self
    }
}

// =====================================
// IntoResponse Implementation
// =====================================
/// Lets handlers return `Result<_, AppError>` directly.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.is_server_error() {
            error!(error = %self, "Server error occurred");
        }

        let status = self.status_code();

        let error_response = ErrorResponse::new(
            status.canonical_reason().unwrap_or("Error"),
            self.to_string(),
        )
        .with_status(status);

        (status, Json(error_response)).into_response()
    }
}
