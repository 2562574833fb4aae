//! Scan driver that stitches acknowledged transfer blocks into an image.
//!
//! The scan walks the capture one record at a time through four phases:
//! seek the next in-sequence request, collect that block's payload, seek
//! the matching acknowledgement, and repeat. Whenever a phase cannot make
//! progress the scan ends and keeps the bytes gathered so far. A block
//! only has to be acknowledged for the scan to *continue*: an
//! unacknowledged tail block indicates a truncated or aborted session, and
//! the scan stops rather than guessing at what follows.

use super::{BlockCounter, BlockSequence, TraceFrames, payload};

/// Reconstruct the transferred memory image from a raw capture buffer.
///
/// Pure and total over any byte buffer: malformed input degrades to a
/// shorter (possibly empty) image rather than an error, and decoding the
/// same capture twice yields byte-identical output. The capture must be
/// fully in memory before the call; nothing here suspends or blocks.
///
/// # Examples
///
/// ```
/// use tracelift::reassemble;
/// assert!(reassemble(&[]).is_empty());
/// ```
#[must_use]
pub fn reassemble(trace: &[u8]) -> Vec<u8> { Scan::new(TraceFrames::new(trace)).run() }

/// Scan phases. `Done` is reached both on clean exhaustion and on an
/// aborted session; the two differ only in how much image was recovered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    SeekRequest,
    CollectPayload {
        request: usize,
        counter: BlockCounter,
    },
    SeekAck {
        counter: BlockCounter,
    },
    Done,
}

/// One in-flight decode: the frame view, the scan cursor, the sequence
/// gate, and the image accumulated so far. Nothing outlives `run`.
struct Scan<'a> {
    frames: TraceFrames<'a>,
    cursor: usize,
    sequence: BlockSequence,
    image: Vec<u8>,
}

impl<'a> Scan<'a> {
    fn new(frames: TraceFrames<'a>) -> Self {
        Self {
            frames,
            cursor: 0,
            sequence: BlockSequence::new(),
            image: Vec::new(),
        }
    }

    fn run(mut self) -> Vec<u8> {
        let mut phase = Phase::SeekRequest;
        loop {
            phase = match phase {
                Phase::SeekRequest => self.seek_request(),
                Phase::CollectPayload { request, counter } => {
                    self.collect_payload(request, counter)
                }
                Phase::SeekAck { counter } => self.seek_ack(counter),
                Phase::Done => break,
            };
        }
        tracing::debug!(bytes = self.image.len(), "capture scan finished");
        self.image
    }

    /// Advance to the next request frame that continues the block
    /// sequence, skipping noise and out-of-sequence candidates alike.
    fn seek_request(&mut self) -> Phase {
        while let Some(record) = self.frames.get(self.cursor) {
            match record.block_counter() {
                Some(counter) if record.is_transfer_request() => {
                    if self.sequence.accept(counter) {
                        return Phase::CollectPayload {
                            request: self.cursor,
                            counter,
                        };
                    }
                    tracing::trace!(%counter, "request frame outside the accepted sequence");
                }
                _ => {}
            }
            self.cursor += 1;
        }
        Phase::Done
    }

    fn collect_payload(&mut self, request: usize, counter: BlockCounter) -> Phase {
        let before = self.image.len();
        self.cursor = payload::collect_block(&self.frames, request, &mut self.image);
        let appended = self.image.len() - before;
        tracing::debug!(%counter, bytes = appended, "collected transfer block");
        crate::metrics::inc_blocks();
        crate::metrics::add_image_bytes(appended as u64);
        Phase::SeekAck { counter }
    }

    /// Find the device's positive response for the block just collected.
    /// The capture ending first means the session aborted; keep what was
    /// gathered and stop.
    fn seek_ack(&mut self, counter: BlockCounter) -> Phase {
        while let Some(record) = self.frames.get(self.cursor) {
            self.cursor += 1;
            if record.is_transfer_ack(counter) {
                return Phase::SeekRequest;
            }
        }
        tracing::debug!(%counter, "capture ended before the block was acknowledged");
        Phase::Done
    }
}
