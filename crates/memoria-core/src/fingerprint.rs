//! Content fingerprinting and storage-key derivation
//!
//! Keys are a pure function of their inputs: the same identifier, original
//! bytes, rendered bytes, and style always produce the same key. That makes
//! the key itself a deduplicating cache handle for repeated uploads.

use md5::{Digest, Md5};

use crate::models::ORIGINAL_STYLE;

/// Hex-encoded 128-bit MD5 digest of the given bytes.
pub fn content_digest(data: &[u8]) -> String {
    let mut hasher = Md5::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

/// The rendition token embedded in the key: the literal style name for the
/// canonical rendition, the rendered-content digest for everything else.
pub fn rendition_token<'a>(style_name: &str, rendered_digest: &'a str) -> &'a str {
    if style_name == ORIGINAL_STYLE {
        ORIGINAL_STYLE
    } else {
        rendered_digest
    }
}

/// Assemble the storage key. `extension` carries its leading dot.
pub fn storage_key(id: &str, original_digest: &str, token: &str, extension: &str) -> String {
    format!("{}_{}_{}{}", id, original_digest, token, extension)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_is_stable() {
        let first = content_digest(b"the quick brown fox");
        let second = content_digest(b"the quick brown fox");
        assert_eq!(first, second);
        assert_eq!(first.len(), 32);
        assert!(first.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_known_digest() {
        // RFC 1321 test vector
        assert_eq!(content_digest(b"abc"), "900150983cd24fb0d6963f7d28e17f72");
    }

    #[test]
    fn test_different_bytes_different_digests() {
        assert_ne!(content_digest(b"one"), content_digest(b"two"));
    }

    #[test]
    fn test_original_token_is_literal() {
        assert_eq!(rendition_token(ORIGINAL_STYLE, "abc123"), "original");
        assert_eq!(rendition_token("thumbnail", "abc123"), "abc123");
    }

    #[test]
    fn test_key_shape() {
        let original = content_digest(b"raw");
        let rendered = content_digest(b"rendered");
        let token = rendition_token("thumbnail", &rendered);
        let key = storage_key("42", &original, token, ".jpg");
        assert_eq!(key, format!("42_{}_{}.jpg", original, rendered));
    }

    #[test]
    fn test_key_determinism() {
        let original = content_digest(b"raw");
        let a = storage_key("42", &original, "original", ".jpg");
        let b = storage_key("42", &original, "original", ".jpg");
        assert_eq!(a, b);
    }

    #[test]
    fn test_key_varies_with_content() {
        let a = storage_key("42", &content_digest(b"one"), "original", ".jpg");
        let b = storage_key("42", &content_digest(b"two"), "original", ".jpg");
        assert_ne!(a, b);
    }
}
