//! Content fingerprinting for duplicate-post suppression.

use sha2::{Digest, Sha256};
use tracing::warn;

/// Raised when raw bytes handed in by a collaborator cannot be fingerprinted.
#[derive(Debug, thiserror::Error)]
pub enum FingerprintFault {
    #[error("post content is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),
}

/// Compute the SHA-256 fingerprint of post text.
///
/// Returns the lowercase hex digest (64 characters). The same text always
/// yields the same fingerprint, which is what callers compare to drop
/// duplicate posts. Empty text has a defined digest like any other input.
#[must_use]
pub fn fingerprint(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Fingerprint raw bytes, such as OCR output read straight from a process.
///
/// Bytes that are not valid UTF-8 are logged and yield an empty string,
/// which callers treat as "no dedup possible".
#[must_use]
pub fn fingerprint_bytes(bytes: &[u8]) -> String {
    match try_fingerprint_bytes(bytes) {
        Ok(digest) => digest,
        Err(e) => {
            warn!("Fingerprint skipped: {e}");
            String::new()
        }
    }
}

fn try_fingerprint_bytes(bytes: &[u8]) -> Result<String, FingerprintFault> {
    let text = std::str::from_utf8(bytes)?;
    Ok(fingerprint(text))
}
