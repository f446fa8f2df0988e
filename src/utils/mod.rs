//! # Utilities
//!
//! Short id generation and the syntactic checks applied to candidate URLs.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use percent_encoding::{utf8_percent_encode, CONTROLS};
use rand::RngCore;
use url::Url;

// =====================================
// Constants
// =====================================
/// Random bytes drawn per short id.
pub const SHORT_ID_BYTES: usize = 6;

/// Length of every generated short id (6 bytes of base64 without padding).
pub const SHORT_ID_LENGTH: usize = 8;

/// Shortest id accepted as well-formed.
pub const MIN_SHORT_ID_LENGTH: usize = 6;

/// Generation attempts before giving up on a collision streak.
pub const MAX_GENERATION_ATTEMPTS: usize = 10;

/// Schemes a stored URL may use. Compared against the literal scheme text.
pub const ALLOWED_SCHEMES: [&str; 2] = ["http", "https"];

// =====================================
// Short Id Generation
// =====================================
/// Generate a random short id.
///
/// Draws [`SHORT_ID_BYTES`] bytes from the thread-local CSPRNG and encodes them with the
/// URL-safe base64 alphabet, padding stripped.
///
/// # Example
/// ```rust
/// use tiny_links::utils::{generate_short_id, SHORT_ID_LENGTH};
///
/// let id = generate_short_id();
/// assert_eq!(id.len(), SHORT_ID_LENGTH);
/// ```
#[must_use]
pub fn generate_short_id() -> String {
    let mut bytes = [0u8; SHORT_ID_BYTES];
    rand::thread_rng().fill_bytes(&mut bytes);

    URL_SAFE_NO_PAD.encode(bytes)
}

/// Whether `c` belongs to the URL-safe base64 alphabet.
#[must_use]
pub fn is_short_id_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

/// Whether `id` looks like a short id: 6 to 8 characters from the URL-safe alphabet.
///
/// The generator always emits 8; shorter ids are accepted for forward compatibility.
///
/// ```rust
/// use tiny_links::utils::is_well_formed_short_id;
///
/// assert!(is_well_formed_short_id("aZ09-_xy"));
/// assert!(!is_well_formed_short_id("abc"));
/// assert!(!is_well_formed_short_id("abc+/def"));
/// ```
#[must_use]
pub fn is_well_formed_short_id(id: &str) -> bool {
    (MIN_SHORT_ID_LENGTH..=SHORT_ID_LENGTH).contains(&id.len()) && id.chars().all(is_short_id_char)
}

// =====================================
// URL Validation
// =====================================
/// Validate a candidate URL.
///
/// All of these must hold:
/// 1. non-empty after trimming whitespace
/// 2. no ASCII control characters (0x00-0x1f, 0x7f) left after trimming
/// 3. parses as an absolute URL
/// 4. scheme is exactly `http` or `https` as written (`HTTP://` is rejected)
/// 5. the authority has a non-empty host (`http:///path` is rejected)
///
/// The `url` crate strips tabs and newlines, percent-encodes other control characters,
/// lowercases schemes and repairs a missing authority for special schemes, so rules 2, 4
/// and 5 are checked against the raw text as well as the parsed value.
///
/// The raw text is what gets stored, so rule 2 also keeps every stored URL usable as a
/// `Location` header.
///
/// ```rust
/// use tiny_links::utils::is_valid_url;
///
/// assert!(is_valid_url("https://example.com/a?b=c"));
/// assert!(!is_valid_url("ftp://example.com/file"));
/// assert!(!is_valid_url("http:///path"));
/// assert!(!is_valid_url("http://example.com/a\nb"));
/// ```
#[must_use]
pub fn is_valid_url(candidate: &str) -> bool {
    let trimmed = candidate.trim();
    if trimmed.is_empty() || trimmed.chars().any(|c| c.is_ascii_control()) {
        return false;
    }

    let Ok(parsed) = Url::parse(trimmed) else {
        return false;
    };

    let Some((scheme, rest)) = trimmed.split_once(':') else {
        return false;
    };

    if !ALLOWED_SCHEMES.contains(&scheme) {
        return false;
    }

    match raw_host(rest) {
        Some(host) => !host.is_empty() && parsed.host().is_some(),
        None => false,
    }
}

/// Host (with port) as written after `scheme:`, or `None` when there is no `//` authority.
fn raw_host(after_scheme: &str) -> Option<&str> {
    let authority = after_scheme.strip_prefix("//")?;

    let end = authority
        .find(|c| matches!(c, '/' | '?' | '#'))
        .unwrap_or(authority.len());
    let authority = &authority[..end];

    // drop userinfo
    Some(authority.rsplit_once('@').map_or(authority, |(_, host)| host))
}

// =====================================
// Redirect Target
// =====================================
/// `Location` header text for a stored URL.
///
/// Bytes outside printable ASCII are percent-encoded; the stored URL itself is left as is.
///
/// ```rust
/// use tiny_links::utils::location_header;
///
/// assert_eq!(location_header("https://example.com/ü"), "https://example.com/%C3%BC");
/// assert_eq!(location_header("https://example.com/a?b=c"), "https://example.com/a?b=c");
/// ```
#[must_use]
pub fn location_header(stored_url: &str) -> String {
    utf8_percent_encode(stored_url, CONTROLS).to_string()
}

// =====================================
// Tests
// =====================================
#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_short_id_shape() {
        for _ in 0..1_000 {
            let id = generate_short_id();
            assert_eq!(id.len(), SHORT_ID_LENGTH);
            assert!(id.chars().all(is_short_id_char), "unexpected char in {id}");
        }
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let ids: HashSet<String> = (0..1_000).map(|_| generate_short_id()).collect();
        assert_eq!(ids.len(), 1_000);
    }

    #[test]
    fn test_well_formed_short_id() {
        assert!(is_well_formed_short_id("abcdef"));
        assert!(is_well_formed_short_id("abcdefg"));
        assert!(is_well_formed_short_id("ABCD-_12"));
        assert!(!is_well_formed_short_id("abcde"));
        assert!(!is_well_formed_short_id("abcdefghi"));
        assert!(!is_well_formed_short_id("abc def"));
        assert!(!is_well_formed_short_id("abc=defg"));
    }

    #[test]
    fn test_valid_urls() {
        assert!(is_valid_url("http://example.com"));
        assert!(is_valid_url("https://google.com/search?q=test"));
        assert!(is_valid_url("https://example.com/a?b=c"));
        assert!(is_valid_url("http://user:pw@example.com:8080/x#frag"));
        assert!(is_valid_url("http://127.0.0.1/"));
        assert!(is_valid_url("http://[::1]:3000/"));
        assert!(is_valid_url("  http://example.com/padded  "));
    }

    #[test]
    fn test_invalid_urls() {
        assert!(!is_valid_url(""));
        assert!(!is_valid_url("   "));
        assert!(!is_valid_url("not-a-url"));
        assert!(!is_valid_url("example.com/a"));
        assert!(!is_valid_url("ftp://example.com"));
        assert!(!is_valid_url("mailto:someone@example.com"));
    }

    #[test]
    fn test_missing_host_is_invalid() {
        assert!(!is_valid_url("http:///a"));
        assert!(!is_valid_url("http:///path"));
        assert!(!is_valid_url("https:/example.com"));
        assert!(!is_valid_url("http:example.com"));
        assert!(!is_valid_url("http://user@/path"));
    }

    #[test]
    fn test_embedded_control_characters_are_invalid() {
        assert!(!is_valid_url("http://example.com/a\nb"));
        assert!(!is_valid_url("http://exa\tmple.com/"));
        assert!(!is_valid_url("http://example.com/a\rb"));
        assert!(!is_valid_url("http://example.com/a\u{1}b"));
        assert!(!is_valid_url("http://example.com/a\u{7f}b"));
        assert!(!is_valid_url("http://example.com/\u{0}"));
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed_before_control_check() {
        assert!(is_valid_url("\t http://example.com/a \r\n"));
    }

    #[test]
    fn test_unparseable_authorities_are_invalid() {
        // empty host with a port, and a port out of range
        assert!(!is_valid_url("http://:80/"));
        assert!(!is_valid_url("http://example.com:99999/"));
    }

    #[test]
    fn test_location_header() {
        assert_eq!(location_header("http://example.com/long/path"), "http://example.com/long/path");
        assert_eq!(
            location_header("https://пример.рф/"),
            "https://%D0%BF%D1%80%D0%B8%D0%BC%D0%B5%D1%80.%D1%80%D1%84/"
        );
        assert_eq!(location_header("  http://a.b/ "), "  http://a.b/ ");
        assert_eq!(location_header("\thttp://a.b/\n"), "%09http://a.b/%0A");
    }

    #[test]
    fn test_scheme_is_case_sensitive() {
        assert!(!is_valid_url("HTTP://example.com"));
        assert!(!is_valid_url("Https://example.com"));
    }

    #[test]
    fn test_raw_host() {
        assert_eq!(raw_host("//example.com/path"), Some("example.com"));
        assert_eq!(raw_host("//u:p@example.com:80?q"), Some("example.com:80"));
        assert_eq!(raw_host("///path"), Some(""));
        assert_eq!(raw_host("/path"), None);
    }
}
