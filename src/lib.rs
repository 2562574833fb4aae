//! Public API for the `tracelift` library.
//!
//! This crate rebuilds a contiguous flash memory image from a logged UDS
//! (ISO 14229) diagnostic session in which an ECU streams memory to a host
//! through repeated `TransferData` exchanges. The decode itself is a pure,
//! synchronous function over a fully loaded capture buffer; acquiring the
//! capture and delivering the image are the asynchronous collaborators in
//! [`storage`].

pub mod metrics;
pub mod storage;
pub mod transfer;

pub use storage::StorageError;
pub use transfer::{BlockCounter, BlockSequence, FRAME_WIDTH, FrameRecord, TraceFrames, reassemble};
