//! Canonical hashing via `ring::digest`.

use ring::digest::{digest, SHA256};

/// Compute SHA-256 of raw bytes.
///
/// Returns the full 64-character lowercase hex digest; no truncation, no
/// salting.
#[must_use]
pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(digest(&SHA256, data).as_ref())
}

/// Canonical text encoding for pixel buffers: comma-joined decimal bytes.
///
/// Fixed per artifact type; the digest of a readback is
/// `sha256_hex(comma_joined(pixels).as_bytes())`.
#[must_use]
pub fn comma_joined(bytes: &[u8]) -> String {
    use std::fmt::Write;

    let mut out = String::with_capacity(bytes.len() * 4);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        let _ = write!(out, "{b}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha256_known_vector() {
        assert_eq!(
            sha256_hex(b"hello world"),
            "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
        );
    }

    #[test]
    fn sha256_empty_input() {
        assert_eq!(
            sha256_hex(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn comma_joined_encoding() {
        assert_eq!(comma_joined(&[0, 10, 255]), "0,10,255");
        assert_eq!(comma_joined(&[]), "");
        assert_eq!(comma_joined(&[7]), "7");
    }
}
