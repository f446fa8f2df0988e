//! # Data Transfer Objects (DTOs)

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// =====================================
// Shorten
// =====================================
/// Body of `POST /shorten`.
///
/// The `url` key matches case-insensitively (`URL`, `Url`, ...); any other key is rejected.
/// A missing `url` becomes the empty string, which the engine then rejects as an invalid
/// URL, and so does `null`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct ShortenRequest {
    pub url: String,
}

impl TryFrom<Map<String, Value>> for ShortenRequest {
    type Error = String;

    fn try_from(object: Map<String, Value>) -> Result<Self, Self::Error> {
        let mut url = String::new();

        for (key, value) in object {
            if !key.eq_ignore_ascii_case("url") {
                return Err(format!("unknown field `{}`", key));
            }

            match value {
                Value::String(s) => url = s,
                Value::Null => {}
                other => return Err(format!("`{}` must be a string, got {}", key, other)),
            }
        }

        Ok(Self { url })
    }
}

/// Response of `POST /shorten`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortenResponse {
    /// The generated short id
    pub short_url: String,

    /// The URL exactly as submitted
    pub original_url: String,
}

// =====================================
// Health Check
// =====================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,

    /// Number of stored short links
    pub links: usize,
}

impl HealthResponse {
    #[must_use]
    pub fn healthy(links: usize) -> Self {
        Self {
            status: "healthy".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            links,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shorten_request_rejects_unknown_fields() {
        let result = serde_json::from_str::<ShortenRequest>(r#"{"url":"http://a.b","x":1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_shorten_request_missing_url_is_empty() {
        let request: ShortenRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.url, "");
    }

    #[test]
    fn test_shorten_request_key_is_case_insensitive() {
        let request: ShortenRequest =
            serde_json::from_str(r#"{"URL":"http://example.com"}"#).unwrap();
        assert_eq!(request.url, "http://example.com");

        let request: ShortenRequest =
            serde_json::from_str(r#"{"Url":"http://example.com/x"}"#).unwrap();
        assert_eq!(request.url, "http://example.com/x");
    }

    #[test]
    fn test_shorten_request_rejects_non_string_url() {
        assert!(serde_json::from_str::<ShortenRequest>(r#"{"url":42}"#).is_err());
        assert!(serde_json::from_str::<ShortenRequest>(r#"["http://example.com"]"#).is_err());
    }

    #[test]
    fn test_shorten_request_null_url_is_empty() {
        let request: ShortenRequest = serde_json::from_str(r#"{"url":null}"#).unwrap();
        assert_eq!(request.url, "");
    }

    #[test]
    fn test_shorten_request_rejects_trailing_data() {
        let result =
            serde_json::from_str::<ShortenRequest>(r#"{"url":"http://example.com"}{"x":1}"#);
        assert!(result.is_err());
    }
}
