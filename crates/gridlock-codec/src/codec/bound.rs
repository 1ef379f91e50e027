//! Default strategy - sealed and bound to the installation context

use super::SealStrategy;
use crate::crypto::{self, BindingKey};
use crate::{ContextSource, Result};

/// ChaCha20-Poly1305 under an HKDF key bound to the installation.
///
/// Token body layout: `[nonce | ciphertext | auth tag]`. A token sealed
/// on one installation fails authentication on every other, and so does
/// any token edited in storage.
pub struct BoundStrategy;

impl BoundStrategy {
    /// Strategy tag carried by sealed tokens.
    pub const TAG: u8 = 1;

    /// HKDF expansion label; versioned together with the body layout.
    pub const LABEL: &'static [u8] = b"gridlock-sealed-v1";
}

impl SealStrategy for BoundStrategy {
    fn tag(&self) -> u8 {
        Self::TAG
    }

    fn seal(&self, ctx: &dyn ContextSource, plain: &[u8]) -> Result<Vec<u8>> {
        let key = BindingKey::derive(ctx, Self::LABEL)?;
        Ok(crypto::seal(&key, plain))
    }

    fn open(&self, ctx: &dyn ContextSource, body: &[u8]) -> Result<Vec<u8>> {
        let key = BindingKey::derive(ctx, Self::LABEL)?;
        crypto::open(&key, body)
    }
}
