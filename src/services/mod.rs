//! # Services (business logic)
//!
//! ```text
//! ┌─────────────────┐
//! │    API Layer    │  <-- HTTP handlers (axum)
//! ├─────────────────┤
//! │  Service Layer  │  <-- Shortener engine (here)
//! └─────────────────┘
//! ```
//!
//! There is no storage layer below: the engine keeps its mapping in memory for the
//! lifetime of the process.

mod shortener;

pub use shortener::*;

use std::sync::Arc;

use crate::config::Config;

// =====================================
// Application State
// =====================================
/// State shared by every handler.
///
/// Cloning only bumps the `Arc` counts; all clones talk to the same engine.
#[derive(Clone, Debug)]
pub struct AppState {
    pub config: Arc<Config>,

    pub shortener: Arc<Shortener>,
}

impl AppState {
    /// State with a fresh, empty engine.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self::with_shortener(config, Arc::new(Shortener::new()))
    }

    /// State around an existing engine, e.g. one a test already filled.
    #[must_use]
    pub fn with_shortener(config: Config, shortener: Arc<Shortener>) -> Self {
        Self {
            config: Arc::new(config),
            shortener,
        }
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }
}
