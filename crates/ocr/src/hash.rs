use sha2::{Digest, Sha256};

/// Compute SHA-256 of an in-memory byte slice.
pub fn sha256_bytes(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Lowercase hex SHA-256 of an upload (64 chars). Used to correlate log lines
/// for one document; uploads are never stored.
pub fn fingerprint(data: &[u8]) -> String {
    hex::encode(sha256_bytes(data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fingerprint_known_vector() {
        // SHA-256 of empty bytes is a known constant.
        assert_eq!(
            fingerprint(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn fingerprint_deterministic() {
        assert_eq!(fingerprint(b"card"), fingerprint(b"card"));
        assert_ne!(fingerprint(b"card"), fingerprint(b"licence"));
        assert_eq!(fingerprint(b"card").len(), 64);
    }
}
