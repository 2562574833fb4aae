//! Transfer-block reassembly for UDS diagnostic trace captures.
//!
//! This module collects the domain types used to rebuild a flashed memory
//! image from a logged `TransferData` (service `0x36`) exchange. Each
//! sub-module focuses on a single concept to keep the code small and easy
//! to audit while still providing a cohesive API at the crate root.

pub mod counter;
pub mod frame;
mod payload;
pub mod reassembler;
pub mod sequence;

pub use counter::BlockCounter;
pub use frame::{FRAME_WIDTH, FrameRecord, TraceFrames};
pub use reassembler::reassemble;
pub use sequence::BlockSequence;
