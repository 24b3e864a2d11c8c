//! Short, non-reversible identifier for a presented API key.
//!
//! Handlers and logs refer to a caller by fingerprint so the raw key never
//! leaves the request that carried it.

use sha2::{Digest, Sha256};

/// Number of digest bytes kept in the fingerprint (hex doubles it).
const FINGERPRINT_BYTES: usize = 8;

/// Lowercase hex of the first 8 bytes of SHA-256(`key`).
pub fn key_fingerprint(key: &str) -> String {
    let digest = Sha256::digest(key.as_bytes());
    digest[..FINGERPRINT_BYTES]
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect()
}
