//! Continuity gate over block sequence counters.
//!
//! `BlockSequence` is intentionally small so the scan can carry it by value
//! without allocation. It is the sole check keeping frames from an
//! unrelated or later transfer session out of the reconstruction.

use super::BlockCounter;

/// Track the most recently accepted block counter across one decode.
///
/// The first candidate is accepted unconditionally; every later candidate
/// must directly succeed the previous one. There is no wraparound at the
/// byte boundary, matching the captures this tool was written against.
///
/// # Examples
///
/// ```
/// use tracelift::{BlockCounter, BlockSequence};
/// let mut sequence = BlockSequence::new();
/// assert!(sequence.accept(BlockCounter::new(0x07)));
/// assert!(sequence.accept(BlockCounter::new(0x08)));
/// assert!(!sequence.accept(BlockCounter::new(0x0A)));
/// assert_eq!(sequence.last(), Some(BlockCounter::new(0x08)));
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct BlockSequence {
    last: Option<BlockCounter>,
}

impl BlockSequence {
    /// Create a tracker that will accept any first counter.
    #[must_use]
    pub const fn new() -> Self { Self { last: None } }

    /// Most recently accepted counter, if any block has been accepted.
    #[must_use]
    pub const fn last(&self) -> Option<BlockCounter> { self.last }

    /// Accept `candidate` when it starts or continues the sequence.
    ///
    /// Acceptance records the candidate as the new tail. Rejection leaves
    /// the tracker untouched so a later frame may still continue the
    /// original sequence.
    pub fn accept(&mut self, candidate: BlockCounter) -> bool {
        let continues = self.last.is_none_or(|previous| candidate.follows(previous));
        if continues {
            self.last = Some(candidate);
        }
        continues
    }
}
