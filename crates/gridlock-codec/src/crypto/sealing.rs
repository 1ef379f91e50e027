//! Authenticated transform - ChaCha20-Poly1305 over the packed gesture
//!
//! ## Security
//! - Fresh 12-byte nonce per seal from OS entropy, prepended to the output
//! - The Poly1305 tag is verified before a single byte is released
//! - Without the tag, whoever can write the stored token could craft one
//!   that decodes to a pattern of their choosing; with it, any edit fails

use chacha20poly1305::{
    aead::{Aead, KeyInit},
    ChaCha20Poly1305, Nonce,
};

use super::BindingKey;
use crate::{Error, Result};

/// ChaCha20-Poly1305 nonce length in bytes.
pub const NONCE_LEN: usize = 12;

/// Poly1305 authentication tag length in bytes.
pub const TAG_LEN: usize = 16;

/// Encrypt and authenticate `plaintext` under `key`.
///
/// Output layout: `[nonce | ciphertext | tag]`. Two calls with identical
/// inputs produce different output; both open to the same plaintext.
pub fn seal(key: &BindingKey, plaintext: &[u8]) -> Vec<u8> {
    let mut nonce_bytes = [0u8; NONCE_LEN];
    getrandom::getrandom(&mut nonce_bytes).expect("OS entropy source failed");

    let cipher = ChaCha20Poly1305::new_from_slice(key.as_bytes())
        .expect("32 bytes is valid key size");
    let nonce = Nonce::from_slice(&nonce_bytes);
    let ciphertext = cipher
        .encrypt(nonce, plaintext)
        .expect("encryption should not fail with valid inputs");

    let mut sealed = Vec::with_capacity(NONCE_LEN + ciphertext.len());
    sealed.extend_from_slice(&nonce_bytes);
    sealed.extend_from_slice(&ciphertext);
    sealed
}

/// Verify and decrypt `sealed`. Exact inverse of [`seal`] under the same key.
///
/// Payloads too short to carry a nonce and tag are rejected as
/// [`Error::MalformedPatternData`] before any decryption is attempted; an
/// authentication mismatch is [`Error::IntegrityCheckFailed`] and returns
/// no partial data.
pub fn open(key: &BindingKey, sealed: &[u8]) -> Result<Vec<u8>> {
    if sealed.len() < NONCE_LEN + TAG_LEN {
        return Err(Error::MalformedPatternData);
    }

    let (nonce_bytes, ciphertext) = sealed.split_at(NONCE_LEN);
    let cipher = ChaCha20Poly1305::new_from_slice(key.as_bytes())
        .expect("32 bytes is valid key size");

    cipher
        .decrypt(Nonce::from_slice(nonce_bytes), ciphertext)
        .map_err(|_| Error::IntegrityCheckFailed)
}
