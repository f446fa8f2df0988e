//! # Models
//!
//! Wire types of the HTTP API. The engine itself only deals in plain strings.

mod dto;

pub use dto::*;
