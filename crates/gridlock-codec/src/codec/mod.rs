//! Pattern codec - the public encode/decode surface
//!
//! Composition, per token:
//!
//! ```text
//! encode:  pattern ──pack──▶ bytes ──strategy.seal──▶ body
//!          token = base64( [strategy tag | body] )
//!
//! decode:  base64⁻¹(token) ─▶ [tag | body] ─▶ strategy.open ─▶ unpack
//! ```
//!
//! Encoding always uses the most recently registered strategy; decoding
//! dispatches on the token's leading tag, so tokens written by an earlier
//! strategy keep decoding after a migration.

mod bound;
mod plain;
mod strategy;

pub use bound::BoundStrategy;
pub use plain::PlainStrategy;
pub use strategy::SealStrategy;

use tracing::debug;

use crate::pattern::{pack, unpack};
use crate::{token, ContextSource, Error, Grid, Pattern, Result};

/// Stateless encoder/decoder for grid gestures.
///
/// Holds only configuration: the shared grid geometry and the registered
/// strategies. Calls touch no shared mutable state and derive keys fresh
/// each time, so one codec can serve any number of threads.
pub struct PatternCodec {
    grid: Grid,
    strategies: Vec<Box<dyn SealStrategy>>,
}

impl PatternCodec {
    /// Codec for `grid` with the default sealed strategy registered.
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            strategies: vec![Box::new(BoundStrategy)],
        }
    }

    /// Register `strategy` and make it the one `encode` uses.
    ///
    /// Earlier strategies stay registered for decoding. Panics when the
    /// tag is already taken: one tag, one body layout, forever.
    pub fn with_strategy(mut self, strategy: impl SealStrategy + 'static) -> Self {
        assert!(
            self.strategies.iter().all(|s| s.tag() != strategy.tag()),
            "strategy tag {:#04x} is already registered",
            strategy.tag()
        );
        self.strategies.push(Box::new(strategy));
        self
    }

    /// Grid geometry this codec packs against.
    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// Encode a gesture into a storable printable token.
    ///
    /// Pure apart from the strategy's nonce entropy: no external state is
    /// touched. On well-formed input the only failure is
    /// [`Error::ContextUnavailable`]; a gesture that does not fit the
    /// configured grid is [`Error::MalformedPatternData`].
    pub fn encode(&self, ctx: &dyn ContextSource, pattern: &Pattern) -> Result<String> {
        let strategy = self.active();
        let plain = pack(self.grid, pattern)?;
        let body = strategy.seal(ctx, &plain)?;

        let mut framed = Vec::with_capacity(1 + body.len());
        framed.push(strategy.tag());
        framed.extend_from_slice(&body);
        Ok(token::to_text(&framed))
    }

    /// Decode a stored token back into the original gesture.
    ///
    /// Every failure is classified and no partial pattern is ever
    /// returned. User-facing callers must collapse all failures other
    /// than [`Error::ContextUnavailable`] into "pattern does not match";
    /// the variants exist for internal logs, not for storage probes.
    pub fn decode(&self, ctx: &dyn ContextSource, tok: &str) -> Result<Pattern> {
        let raw = token::from_text(tok)?;
        let (tag, body) = match raw.split_first() {
            Some((tag, body)) => (*tag, body),
            None => return Err(Error::MalformedToken),
        };

        let strategy = match self.strategies.iter().find(|s| s.tag() == tag) {
            Some(strategy) => strategy,
            None => {
                debug!(tag, "token carries an unregistered strategy tag");
                return Err(Error::UnsupportedVersion(tag));
            }
        };

        let plain = match strategy.open(ctx, body) {
            Ok(plain) => plain,
            Err(err) => {
                debug!(tag, %err, "token body failed to open");
                return Err(err);
            }
        };

        unpack(self.grid, &plain)
    }

    /// Compare a stored token against a freshly captured gesture.
    ///
    /// Implements the unlock flow: any decode failure short of an
    /// unresolvable context reads as a mismatch, so probing with corrupted
    /// tokens learns nothing beyond "does not match".
    pub fn verify(
        &self,
        ctx: &dyn ContextSource,
        tok: &str,
        candidate: &Pattern,
    ) -> Result<bool> {
        match self.decode(ctx, tok) {
            Ok(stored) => Ok(stored == *candidate),
            Err(Error::ContextUnavailable(reason)) => Err(Error::ContextUnavailable(reason)),
            Err(_) => Ok(false),
        }
    }

    // Internal: the strategy encode writes with
    fn active(&self) -> &dyn SealStrategy {
        self.strategies
            .last()
            .expect("codec always holds at least one strategy")
            .as_ref()
    }
}

impl Default for PatternCodec {
    /// Sealed codec on the classic 3x3 pad.
    fn default() -> Self {
        Self::new(Grid::default())
    }
}
