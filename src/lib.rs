//! # tiny-links
//!
//! An in-memory URL shortener. Long URLs get random 8 character ids drawn from the
//! URL-safe base64 alphabet; ids resolve back to the exact URL that was submitted.
//!
//! ## Layout
//!
//! ```text
//! src/
//! ├── lib.rs          # library root
//! ├── main.rs         # binary entry point
//! ├── config/         # settings from the environment
//! ├── error/          # engine and HTTP errors
//! ├── models/         # wire types
//! ├── services/       # shortener engine + shared state
//! ├── api/            # axum router, handlers, middleware
//! └── utils/          # id generation and URL validation
//! ```
//!
//! ## Example
//!
//! ```rust
//! use tiny_links::services::Shortener;
//! use tiny_links::ShortenerError;
//!
//! let shortener = Shortener::new();
//!
//! let id = shortener.shorten("https://example.com/a/very/long/path").unwrap();
//! assert_eq!(shortener.resolve(&id).unwrap(), "https://example.com/a/very/long/path");
//!
//! assert_eq!(shortener.shorten("ftp://example.com"), Err(ShortenerError::InvalidUrl));
//! assert_eq!(shortener.resolve("missing"), Err(ShortenerError::NotFound));
//! ```

pub mod config;

pub mod error;

pub mod models;

pub mod services;

pub mod api;

pub mod utils;

// =====================================
// Re-exports
// =====================================
pub use error::{AppError, Result, ShortenerError};

/// Commonly used items.
///
/// ```rust
/// use tiny_links::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::create_router;
    pub use crate::config::Config;
    pub use crate::error::{AppError, Result, ShortenerError};
    pub use crate::models::*;
    pub use crate::services::*;
}
