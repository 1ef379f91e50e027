//! Printable token form - base64 over the framed bytes
//!
//! Storage sees an opaque string and nothing else; this module is the only
//! place that knows the alphabet. For the default strategy a token stays
//! well under a hundred characters even for a full 16x16 walk.

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::{Error, Result};

/// Render framed bytes as printable characters.
pub fn to_text(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Exact inverse of [`to_text`].
///
/// Fails with [`Error::MalformedToken`] on characters outside the
/// alphabet or on bad padding/length.
pub fn from_text(text: &str) -> Result<Vec<u8>> {
    STANDARD.decode(text).map_err(|_| Error::MalformedToken)
}
