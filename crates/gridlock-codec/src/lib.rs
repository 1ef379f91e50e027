//! # Gridlock Codec
//!
//! Reversible, context-bound encoding for grid unlock gestures.
//!
//! A drawn pattern (an ordered sequence of distinct pad cells) is packed
//! into canonical bytes, sealed under a key derived from the installation's
//! identity, and emitted as a printable token fit for a plain text field:
//!
//! ```text
//! Pattern ──pack──▶ bytes ──seal──▶ [ nonce │ ciphertext │ auth tag ]
//!                                               │
//! Token  ◀──────────── base64 ── [ strategy tag │ sealed bytes ]
//! ```
//!
//! `decode` inverts every step and rejects anything it cannot prove
//! authentic: a token sealed on one installation never opens on another,
//! and a token that has been edited in storage never yields a pattern.
//!
//! The codec holds no state between calls and derives keys fresh on every
//! call, so `encode` and `decode` are safe to run concurrently.

pub mod codec;
pub mod context;
pub mod crypto;
pub mod pattern;
pub mod token;

pub use codec::{BoundStrategy, PatternCodec, PlainStrategy, SealStrategy};
pub use context::{ContextSource, StaticContext};
pub use crypto::BindingKey;
pub use pattern::{Cell, Grid, Pattern};

/// Result type for gridlock-codec operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while encoding or decoding pattern tokens.
///
/// Every failure is classified; nothing is swallowed and no best-guess
/// pattern is ever returned. When surfacing results to an end user, treat
/// every variant except [`Error::ContextUnavailable`] as "pattern does not
/// match" -- distinguishing them outside internal logs hands an oracle to
/// whoever is probing stored tokens.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The identity source could not produce stable context bytes.
    /// A hard stop: never retried internally, never replaced by a
    /// fallback key.
    #[error("context identity unavailable: {0}")]
    ContextUnavailable(String),

    /// The token is not valid printable encoding.
    #[error("token is not a valid printable encoding")]
    MalformedToken,

    /// The token's leading strategy tag is not registered with this codec.
    #[error("unrecognized strategy tag {0:#04x}")]
    UnsupportedVersion(u8),

    /// Authentication failed: the token was tampered with, corrupted, or
    /// sealed under a different context.
    #[error("token failed authentication")]
    IntegrityCheckFailed,

    /// Bytes that passed authentication do not describe a valid pattern.
    /// Points at a logic or version bug rather than tampering.
    #[error("payload does not describe a valid pattern")]
    MalformedPatternData,
}
