//! One-byte block sequence counters carried by `TransferData` requests.
//!
//! Provides [`BlockCounter`], a type-safe wrapper around `u8` with an
//! overflow-aware successor check for validating block order.

use derive_more::{Display, From, Into};

/// Sequence counter stamped on each `TransferData` request frame.
///
/// Counters must advance by exactly one between accepted blocks. Wraparound
/// at the byte boundary is deliberately not modelled: `0xFF` has no
/// successor, so a transfer whose counter rolls over to `0x00` ends the
/// scan at that point.
///
/// # Examples
///
/// ```
/// use tracelift::BlockCounter;
/// let first = BlockCounter::new(0x41);
/// assert!(BlockCounter::new(0x42).follows(first));
/// assert!(!BlockCounter::new(0x43).follows(first));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, From, Into)]
#[display("{_0:#04x}")]
pub struct BlockCounter(u8);

impl BlockCounter {
    /// Construct a counter from its raw byte value.
    #[must_use]
    pub const fn new(value: u8) -> Self { Self(value) }

    /// Return the underlying byte value.
    #[must_use]
    pub const fn get(self) -> u8 { self.0 }

    /// Whether `self` directly succeeds `previous` without wrapping.
    #[must_use]
    pub fn follows(self, previous: Self) -> bool { previous.0.checked_add(1) == Some(self.0) }
}
