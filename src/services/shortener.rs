//! # Shortener engine
//!
//! Owns the id → URL mapping and answers create and resolve queries.
//!
//! ## Locking
//! The mapping sits behind one reader-writer lock. `shorten` holds the write lock for the
//! whole validate → generate → check → insert sequence, so two concurrent calls can never
//! claim the same free id. `resolve` only takes a read lock and runs alongside other
//! resolves. No lock is held across an `.await`; every operation is synchronous.

use std::collections::HashMap;

use parking_lot::RwLock;
use tracing::{debug, info, instrument, warn};

use crate::{
    error::ShortenerError,
    utils::{self, MAX_GENERATION_ATTEMPTS},
};

// =====================================
// Id Generators
// =====================================
/// Source of candidate short ids.
///
/// Implementations only produce candidates; uniqueness is enforced by [`Shortener`].
pub trait IdGenerator: Send + Sync + 'static {
    fn generate(&self) -> String;
}

/// Default generator: 6 random bytes, URL-safe base64, 8 characters.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn generate(&self) -> String {
        utils::generate_short_id()
    }
}

// =====================================
// Shortener
// =====================================
/// In-memory URL shortener.
///
/// Entries are never mutated or removed and live as long as the instance.
///
/// # Example
/// ```rust
/// use tiny_links::services::Shortener;
///
/// let shortener = Shortener::new();
/// let id = shortener.shorten("http://example.com/long/path").unwrap();
/// assert_eq!(id.len(), 8);
/// assert_eq!(shortener.resolve(&id).unwrap(), "http://example.com/long/path");
/// ```
pub struct Shortener<G = RandomIdGenerator> {
    urls: RwLock<HashMap<String, String>>,
    generator: G,
}

impl Shortener {
    #[must_use]
    pub fn new() -> Self {
        Self::with_generator(RandomIdGenerator)
    }
}

impl Default for Shortener {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: IdGenerator> Shortener<G> {
    /// Engine drawing candidate ids from `generator`.
    pub fn with_generator(generator: G) -> Self {
        Self {
            urls: RwLock::new(HashMap::new()),
            generator,
        }
    }

    /// Create a short id for `original_url`.
    ///
    /// The input is stored exactly as given, surrounding whitespace included; trimming only
    /// applies to the emptiness check.
    ///
    /// # Errors
    /// - `InvalidUrl`: the input failed validation, nothing was stored
    /// - `GenerationExhausted`: every attempt collided, nothing was stored
    #[instrument(skip(self, original_url))]
    pub fn shorten(&self, original_url: &str) -> Result<String, ShortenerError> {
        let mut urls = self.urls.write();

        if !utils::is_valid_url(original_url) {
            debug!("Rejected invalid url");
            return Err(ShortenerError::InvalidUrl);
        }

        for attempt in 1..=MAX_GENERATION_ATTEMPTS {
            let id = self.generator.generate();

            if urls.contains_key(&id) {
                warn!(attempt, short_id = %id, "Short id collision");
                continue;
            }

            urls.insert(id.clone(), original_url.to_owned());
            info!(short_id = %id, "Created short id");
            return Ok(id);
        }

        Err(ShortenerError::GenerationExhausted {
            attempts: MAX_GENERATION_ATTEMPTS,
        })
    }

    /// Look up the URL stored under `short_id`.
    ///
    /// The lookup is exact; only the emptiness check trims.
    ///
    /// # Errors
    /// `NotFound` when the id is blank or unknown.
    #[instrument(skip(self))]
    pub fn resolve(&self, short_id: &str) -> Result<String, ShortenerError> {
        if short_id.trim().is_empty() {
            return Err(ShortenerError::NotFound);
        }

        self.urls
            .read()
            .get(short_id)
            .cloned()
            .ok_or(ShortenerError::NotFound)
    }

    /// Number of stored mappings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.urls.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.urls.read().is_empty()
    }
}

impl<G> std::fmt::Debug for Shortener<G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Shortener")
            .field("links", &self.urls.read().len())
            .finish_non_exhaustive()
    }
}
