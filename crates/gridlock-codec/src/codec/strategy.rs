//! Strategy contract - how packed gesture bytes become a token body

use crate::{ContextSource, Result};

/// A sealing strategy: transforms packed pattern bytes to and from the
/// token body that follows the strategy tag.
///
/// Implementations must be stateless across calls and safe to use
/// concurrently. A tag must keep meaning the same body layout across
/// releases; a new layout takes a new tag rather than reusing one.
pub trait SealStrategy: Send + Sync {
    /// Leading byte identifying tokens produced by this strategy.
    fn tag(&self) -> u8;

    /// Transform packed pattern bytes into the token body.
    fn seal(&self, ctx: &dyn ContextSource, plain: &[u8]) -> Result<Vec<u8>>;

    /// Exact inverse of [`SealStrategy::seal`] under the same context.
    fn open(&self, ctx: &dyn ContextSource, body: &[u8]) -> Result<Vec<u8>>;
}
