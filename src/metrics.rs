//! Metric helpers for `tracelift`.
//!
//! This module defines metric names and simple helper functions
//! wrapping the [`metrics`](https://docs.rs/metrics) crate.

use metrics::counter;

/// Name of the counter tracking accepted transfer blocks.
pub const BLOCKS_RECOVERED: &str = "tracelift_blocks_recovered_total";
/// Name of the counter tracking reconstructed image bytes.
pub const IMAGE_BYTES: &str = "tracelift_image_bytes_total";

/// Record an accepted transfer block.
pub fn inc_blocks() { counter!(BLOCKS_RECOVERED).increment(1); }

/// Record `count` bytes appended to a reconstructed image.
pub fn add_image_bytes(count: u64) { counter!(IMAGE_BYTES).increment(count); }
