//! Etag generation
//!
//! Etags are one-way cache validation tokens. They are compared for equality
//! and never decoded.

use std::fmt::Display;

use sha2::{Digest, Sha256};

/// Prefix of every etag; bumping the crate version invalidates cached tokens
pub const ETAG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of hex characters of the digest kept in the token
const ETAG_DIGEST_LENGTH: usize = 16;

/// Derive an etag from a name and a version counter
pub fn etag(name: &str, version: u64) -> String {
    etag_from_parts(&[&name, &version])
}

/// Derive an etag from any number of displayable parts
///
/// Parts are separated by a NUL byte before hashing so `("ab", "c")` and
/// `("a", "bc")` produce different tokens.
pub fn etag_from_parts(parts: &[&dyn Display]) -> String {
    let mut hasher = Sha256::new();

    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            hasher.update([0u8]);
        }
        hasher.update(part.to_string().as_bytes());
    }

    let digest = hex::encode(hasher.finalize());
    format!("{}.{}", ETAG_VERSION, &digest[..ETAG_DIGEST_LENGTH])
}
