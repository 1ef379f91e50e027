//! Cryptographic core - context-bound keys and the authenticated transform
//!
//! Two pieces, composed by the sealed strategy:
//! - [`BindingKey`]: deterministic key material from installation identity
//! - [`seal`]/[`open`]: ChaCha20-Poly1305 over the packed gesture bytes

mod binder;
mod sealing;

pub use binder::BindingKey;
pub use sealing::{open, seal, NONCE_LEN, TAG_LEN};
