use sha1::{Digest, Sha1};

use crate::domain::AppSecret;

/// Per-call signing material sent as `Nonce`, `Timestamp` and `Signature` headers.
///
/// RongCloud checks timestamp/nonce freshness server-side, so a value must never be
/// reused across calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    pub nonce: String,
    pub timestamp: String,
    pub signature: String,
}

impl Signature {
    /// Sign with a random nonce and the current Unix time.
    pub fn generate(secret: &AppSecret) -> Self {
        let nonce = rand::random::<u32>().to_string();
        let timestamp = chrono::Utc::now().timestamp().to_string();
        Self::compute(secret.as_str(), nonce, timestamp)
    }

    /// Lowercase hex SHA-1 of `secret + nonce + timestamp`.
    pub fn compute(secret: &str, nonce: impl Into<String>, timestamp: impl Into<String>) -> Self {
        let nonce = nonce.into();
        let timestamp = timestamp.into();

        let mut hasher = Sha1::new();
        hasher.update(secret.as_bytes());
        hasher.update(nonce.as_bytes());
        hasher.update(timestamp.as_bytes());
        let signature = hex::encode(hasher.finalize());

        Self {
            nonce,
            timestamp,
            signature,
        }
    }
}
