//! Content digest for hash tokens.

use md5::{Digest, Md5};

/// Length of a rendered digest in hex characters.
pub const DIGEST_HEX_LEN: usize = 32;

/// Lowercase hex MD5 of `content`'s UTF-8 bytes.
///
/// Used only as a stable fingerprint, not for security.
pub fn hex_digest(content: &str) -> String {
    hex::encode(Md5::digest(content.as_bytes()))
}
