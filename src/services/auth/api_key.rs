//! `Authorization: ApiKey <key>` header parsing.
//!
//! This module only checks the *shape* of the header. Whether the key is known
//! or still active is decided by whoever consumes the returned string.
//!
//! Kept free of axum extractors and logging so the middleware (and anything
//! else holding a `HeaderMap`) can call it directly.

use axum::http::{HeaderMap, header};
use thiserror::Error;

/// Scheme token expected as the first word of the header. Matched case-sensitively.
pub const API_KEY_SCHEME: &str = "ApiKey";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ApiKeyError {
    /// No `Authorization` header, or its first value is empty.
    #[error("no authorization header included")]
    MissingHeader,
    /// Header present but not of the form `ApiKey <key> [...]`.
    #[error("malformed authorization header")]
    MalformedHeader,
}

impl ApiKeyError {
    /// Stable machine-readable kind, used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiKeyError::MissingHeader => "missing_header",
            ApiKeyError::MalformedHeader => "malformed_header",
        }
    }
}

/// Extract the API key from the first `Authorization` value of `headers`.
///
/// - `ApiKey valid-key-123` → `Ok("valid-key-123")`
/// - `ApiKey key1 key2` → `Ok("key1")` (trailing tokens are ignored)
/// - missing / `""` → `Err(MissingHeader)`
/// - `Bearer x`, `ApiKey` → `Err(MalformedHeader)`
///
/// ```
/// use apikey_auth::services::auth::api_key::{ApiKeyError, get_api_key};
/// use axum::http::{HeaderMap, HeaderValue, header};
///
/// let mut headers = HeaderMap::new();
/// assert_eq!(get_api_key(&headers), Err(ApiKeyError::MissingHeader));
///
/// headers.insert(header::AUTHORIZATION, HeaderValue::from_static("ApiKey abc"));
/// assert_eq!(get_api_key(&headers).as_deref(), Ok("abc"));
/// ```
pub fn get_api_key(headers: &HeaderMap) -> Result<String, ApiKeyError> {
    // HeaderMap::get returns the first value when the header is repeated
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or(ApiKeyError::MissingHeader)?;

    if value.is_empty() {
        return Err(ApiKeyError::MissingHeader);
    }

    // non-visible-ASCII bytes: present, but not something we can parse
    let value = value.to_str().map_err(|_| ApiKeyError::MalformedHeader)?;

    let mut tokens = value.split_whitespace();
    match (tokens.next(), tokens.next()) {
        (Some(API_KEY_SCHEME), Some(key)) => Ok(key.to_string()),
        _ => Err(ApiKeyError::MalformedHeader),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderName, HeaderValue};

    fn headers_with(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn valid_api_key_header() {
        let headers = headers_with("ApiKey valid-key-123");
        assert_eq!(get_api_key(&headers), Ok("valid-key-123".to_string()));
    }

    #[test]
    fn no_authorization_header() {
        let headers = HeaderMap::new();
        assert_eq!(get_api_key(&headers), Err(ApiKeyError::MissingHeader));
    }

    #[test]
    fn empty_authorization_header() {
        let headers = headers_with("");
        assert_eq!(get_api_key(&headers), Err(ApiKeyError::MissingHeader));
    }

    #[test]
    fn bearer_scheme_is_malformed() {
        let headers = headers_with("Bearer some-token");
        assert_eq!(get_api_key(&headers), Err(ApiKeyError::MalformedHeader));
    }

    #[test]
    fn scheme_without_key_is_malformed() {
        assert_eq!(
            get_api_key(&headers_with("ApiKey")),
            Err(ApiKeyError::MalformedHeader)
        );
        assert_eq!(
            get_api_key(&headers_with("ApiKey   ")),
            Err(ApiKeyError::MalformedHeader)
        );
    }

    #[test]
    fn whitespace_only_is_malformed() {
        // non-empty value, so not "missing"
        assert_eq!(
            get_api_key(&headers_with("   ")),
            Err(ApiKeyError::MalformedHeader)
        );
    }

    #[test]
    fn extra_tokens_are_ignored() {
        let headers = headers_with("ApiKey key1 key2");
        assert_eq!(get_api_key(&headers), Ok("key1".to_string()));
    }

    #[test]
    fn scheme_match_is_case_sensitive() {
        assert_eq!(
            get_api_key(&headers_with("apikey some-key")),
            Err(ApiKeyError::MalformedHeader)
        );
        assert_eq!(
            get_api_key(&headers_with("APIKEY some-key")),
            Err(ApiKeyError::MalformedHeader)
        );
    }

    #[test]
    fn scheme_must_be_whole_token() {
        assert_eq!(
            get_api_key(&headers_with("ApiKeyabc")),
            Err(ApiKeyError::MalformedHeader)
        );
    }

    #[test]
    fn surrounding_and_repeated_whitespace_is_tolerated() {
        let headers = headers_with("  ApiKey \t  spaced-key  ");
        assert_eq!(get_api_key(&headers), Ok("spaced-key".to_string()));
    }

    #[test]
    fn key_is_returned_verbatim() {
        let headers = headers_with("ApiKey a+b/c=d%20e");
        assert_eq!(get_api_key(&headers), Ok("a+b/c=d%20e".to_string()));
    }

    #[test]
    fn only_first_value_is_consulted() {
        let mut headers = HeaderMap::new();
        headers.append(header::AUTHORIZATION, HeaderValue::from_static("ApiKey first"));
        headers.append(header::AUTHORIZATION, HeaderValue::from_static("ApiKey second"));
        assert_eq!(get_api_key(&headers), Ok("first".to_string()));

        let mut headers = HeaderMap::new();
        headers.append(header::AUTHORIZATION, HeaderValue::from_static("Bearer nope"));
        headers.append(header::AUTHORIZATION, HeaderValue::from_static("ApiKey second"));
        assert_eq!(get_api_key(&headers), Err(ApiKeyError::MalformedHeader));

        let mut headers = HeaderMap::new();
        headers.append(header::AUTHORIZATION, HeaderValue::from_static(""));
        headers.append(header::AUTHORIZATION, HeaderValue::from_static("ApiKey second"));
        assert_eq!(get_api_key(&headers), Err(ApiKeyError::MissingHeader));
    }

    #[test]
    fn header_name_lookup_is_case_insensitive() {
        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_bytes(b"AUTHORIZATION").unwrap(),
            HeaderValue::from_static("ApiKey upper"),
        );
        assert_eq!(get_api_key(&headers), Ok("upper".to_string()));
    }

    #[test]
    fn opaque_bytes_are_malformed() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_bytes(b"ApiKey \xffkey").unwrap(),
        );
        assert_eq!(get_api_key(&headers), Err(ApiKeyError::MalformedHeader));
    }

    #[test]
    fn repeated_calls_agree() {
        for headers in [
            HeaderMap::new(),
            headers_with(""),
            headers_with("ApiKey valid-key-123"),
            headers_with("Bearer some-token"),
        ] {
            assert_eq!(get_api_key(&headers), get_api_key(&headers));
        }
    }

    #[test]
    fn error_messages_are_fixed() {
        assert_eq!(
            ApiKeyError::MissingHeader.to_string(),
            "no authorization header included"
        );
        assert_eq!(
            ApiKeyError::MalformedHeader.to_string(),
            "malformed authorization header"
        );
        assert_eq!(ApiKeyError::MissingHeader.kind(), "missing_header");
        assert_eq!(ApiKeyError::MalformedHeader.kind(), "malformed_header");
    }
}
