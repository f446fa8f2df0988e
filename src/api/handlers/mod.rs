//! # HTTP Handlers

pub mod health;
pub mod url;

use axum::http::{Method, Uri};

use crate::error::AppError;

/// Fallback for paths no route matches, e.g. `/` or `/a/b`.
///
/// `/` is always a 404. Any other unmatched path sits under the redirect route, which
/// only answers `GET`, so other methods get a 405 before the path shape is considered.
pub async fn fallback(method: Method, uri: Uri) -> AppError {
    let path = uri.path();

    if path != "/" && method != Method::GET && method != Method::HEAD {
        return AppError::MethodNotAllowed(format!("{} not allowed on '{}'", method, path));
    }

    AppError::NotFound(format!("no route for '{}'", path))
}
