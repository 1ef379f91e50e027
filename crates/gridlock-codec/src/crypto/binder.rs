//! Key binding - deterministic key material from installation identity
//!
//! The hierarchy is flat: each strategy derives one symmetric key from the
//! resolved context bytes via HKDF-SHA256, with a fixed salt and its own
//! label. Same context and label, same key; different contexts diverge at
//! the extract step, different labels at the expand step. Nothing is
//! cached or persisted -- every call recomputes and the key zeroizes on
//! drop.

use hkdf::Hkdf;
use sha2::Sha256;
use zeroize::Zeroize;

use crate::{ContextSource, Result};

/// Fixed HKDF salt. Constant across installations: uniqueness comes from
/// the context bytes, separation between strategies from the label.
const BINDING_SALT: &[u8] = b"gridlock-binding-salt-v1";

/// Symmetric key bound to one installation and one strategy label.
#[derive(Clone)]
pub struct BindingKey {
    inner: [u8; 32],
}

impl Zeroize for BindingKey {
    fn zeroize(&mut self) {
        self.inner.zeroize();
    }
}

impl Drop for BindingKey {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl BindingKey {
    /// Derive the key for `label` from a freshly resolved context.
    ///
    /// Fails with [`crate::Error::ContextUnavailable`] when the identity
    /// source cannot resolve; there is no fallback key.
    pub fn derive(ctx: &dyn ContextSource, label: &[u8]) -> Result<Self> {
        let mut material = ctx.resolve()?;

        let hk = Hkdf::<Sha256>::new(Some(BINDING_SALT), &material);
        let mut inner = [0u8; 32];
        hk.expand(label, &mut inner)
            .expect("32 bytes is valid for HKDF");

        material.zeroize();
        Ok(Self { inner })
    }

    /// Get the raw bytes (for handing to the transform only)
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.inner
    }
}

impl std::fmt::Debug for BindingKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print the key
        write!(f, "BindingKey([REDACTED])")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, StaticContext};

    struct Unavailable;

    impl ContextSource for Unavailable {
        fn resolve(&self) -> Result<Vec<u8>> {
            Err(Error::ContextUnavailable("identity store offline".into()))
        }
    }

    #[test]
    fn test_derivation_deterministic() {
        let ctx = StaticContext::from("app-install-123");

        let key1 = BindingKey::derive(&ctx, b"seal-v1").unwrap();
        let key2 = BindingKey::derive(&ctx, b"seal-v1").unwrap();

        // Same context + label = same key
        assert_eq!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn test_different_context_different_key() {
        let key1 =
            BindingKey::derive(&StaticContext::from("app-install-123"), b"seal-v1").unwrap();
        let key2 =
            BindingKey::derive(&StaticContext::from("app-install-456"), b"seal-v1").unwrap();

        assert_ne!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn test_different_label_different_key() {
        let ctx = StaticContext::from("app-install-123");

        let key1 = BindingKey::derive(&ctx, b"seal-v1").unwrap();
        let key2 = BindingKey::derive(&ctx, b"seal-v2").unwrap();

        assert_ne!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn test_unavailable_context_propagates() {
        assert!(matches!(
            BindingKey::derive(&Unavailable, b"seal-v1"),
            Err(Error::ContextUnavailable(_))
        ));
    }

    #[test]
    fn test_debug_never_shows_key() {
        let ctx = StaticContext::from("app-install-123");
        let key = BindingKey::derive(&ctx, b"seal-v1").unwrap();

        assert_eq!(format!("{:?}", key), "BindingKey([REDACTED])");
    }
}
