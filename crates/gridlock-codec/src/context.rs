//! Context resolution - the identity a token is bound to
//!
//! A token must not be portable between installations. Whatever identity
//! the host platform provides (an installation id, a device serial, a
//! keystore handle) is injected behind [`ContextSource`] and resolved to
//! bytes on every call; the codec never persists, logs, or transmits the
//! resolved bytes, and never caches key material derived from them.

use sha2::{Digest, Sha256};

use crate::{Error, Result};

/// A resolvable source of stable installation-identity bytes.
///
/// Resolution may block (some platforms read the identity from disk or a
/// keystore); callers that need cancellation wrap the call with their own
/// deadline. A failed resolution is a hard stop: implementations must
/// return [`Error::ContextUnavailable`] rather than fall back to a fixed
/// value, which would silently unbind every token.
pub trait ContextSource: Send + Sync {
    /// Resolve the identity to stable bytes. Same installation, same bytes.
    fn resolve(&self) -> Result<Vec<u8>>;
}

/// Fixed in-memory context, for callers that already hold identity bytes.
#[derive(Clone)]
pub struct StaticContext {
    bytes: Vec<u8>,
}

impl StaticContext {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }

    /// Short non-reversible identifier, safe for logs and Debug output.
    pub fn fingerprint(&self) -> [u8; 8] {
        fingerprint(&self.bytes)
    }
}

impl ContextSource for StaticContext {
    fn resolve(&self) -> Result<Vec<u8>> {
        if self.bytes.is_empty() {
            return Err(Error::ContextUnavailable(
                "identity resolved to zero bytes".into(),
            ));
        }
        Ok(self.bytes.clone())
    }
}

impl From<&str> for StaticContext {
    fn from(id: &str) -> Self {
        Self::new(id.as_bytes().to_vec())
    }
}

impl std::fmt::Debug for StaticContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print the identity itself
        write!(
            f,
            "StaticContext(fingerprint: {})",
            hex::encode(self.fingerprint())
        )
    }
}

/// First 8 bytes of SHA-256 over the identity bytes.
pub fn fingerprint(bytes: &[u8]) -> [u8; 8] {
    let hash = Sha256::digest(bytes);
    let mut fp = [0u8; 8];
    fp.copy_from_slice(&hash[..8]);
    fp
}
