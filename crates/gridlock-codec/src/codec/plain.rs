//! Passthrough strategy - no confidentiality, no integrity
//!
//! The token body is the packed pattern, unchanged: anyone holding the
//! token can read the gesture and forge a replacement. Kept for migration
//! off legacy stores and for tests that need to see the wire form. Do not
//! use it for real credentials.

use super::SealStrategy;
use crate::{ContextSource, Result};

/// Reserved tag `0`: identity transform, context ignored.
pub struct PlainStrategy;

impl PlainStrategy {
    /// Strategy tag carried by passthrough tokens.
    pub const TAG: u8 = 0;
}

impl SealStrategy for PlainStrategy {
    fn tag(&self) -> u8 {
        Self::TAG
    }

    fn seal(&self, _ctx: &dyn ContextSource, plain: &[u8]) -> Result<Vec<u8>> {
        Ok(plain.to_vec())
    }

    fn open(&self, _ctx: &dyn ContextSource, body: &[u8]) -> Result<Vec<u8>> {
        Ok(body.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StaticContext;

    #[test]
    fn test_body_is_the_plain_bytes() {
        let ctx = StaticContext::from("app-install-123");

        let body = PlainStrategy.seal(&ctx, &[0, 1, 4, 8]).unwrap();
        assert_eq!(body, vec![0, 1, 4, 8]);
        assert_eq!(PlainStrategy.open(&ctx, &body).unwrap(), vec![0, 1, 4, 8]);
    }

    #[test]
    fn test_context_is_ignored() {
        // The passthrough provides no binding at all
        let body = PlainStrategy
            .seal(&StaticContext::from("app-install-123"), &[0, 1])
            .unwrap();

        let opened = PlainStrategy
            .open(&StaticContext::from("app-install-456"), &body)
            .unwrap();
        assert_eq!(opened, vec![0, 1]);
    }
}
