//! Builders for synthetic trace captures shared across the test modules.

use crate::transfer::FRAME_WIDTH;

/// Padding byte used to fill continuation frames past their payload.
pub(super) const PAD: u8 = 0xAA;

/// A `TransferData` request frame declaring `declared` payload bytes and
/// carrying `head` inline.
pub(super) fn request_frame(counter: u8, declared: usize, head: [u8; 4]) -> [u8; FRAME_WIDTH] {
    let raw = u16::try_from(declared + 1).expect("declared length must fit the PCI field");
    assert!(raw <= 0x0FFF, "declared length must fit the PCI field");
    let mut frame = [0_u8; FRAME_WIDTH];
    frame[9] = (raw >> 8) as u8;
    frame[10] = (raw & 0xFF) as u8;
    frame[11] = 0x36;
    frame[12] = counter;
    frame[13..].copy_from_slice(&head);
    frame
}

/// The frame directly after a request; carries no block data.
pub(super) fn flow_frame() -> [u8; FRAME_WIDTH] { [0_u8; FRAME_WIDTH] }

/// A continuation frame carrying `data` at offset 10, padded out with
/// [`PAD`].
pub(super) fn continuation_frame(data: &[u8]) -> [u8; FRAME_WIDTH] {
    assert!(data.len() <= 7, "continuation frames carry at most seven bytes");
    let mut frame = [0_u8; FRAME_WIDTH];
    for slot in &mut frame[10..] {
        *slot = PAD;
    }
    frame[10..10 + data.len()].copy_from_slice(data);
    frame
}

/// A positive response acknowledging the block stamped `counter`.
pub(super) fn ack_frame(counter: u8) -> [u8; FRAME_WIDTH] {
    let mut frame = [0_u8; FRAME_WIDTH];
    frame[10] = 0x76;
    frame[11] = counter;
    frame
}

/// A record that classifies as neither request nor acknowledgement.
pub(super) fn other_frame() -> [u8; FRAME_WIDTH] {
    let mut frame = [0_u8; FRAME_WIDTH];
    frame[11] = 0x10;
    frame
}

/// Request, empty follow-up, and enough continuation frames to carry
/// `payload`, without the closing acknowledgement.
pub(super) fn block_without_ack(counter: u8, payload: &[u8]) -> Vec<u8> {
    assert!(payload.len() >= 4, "a request frame always contributes four bytes");
    let mut head = [0_u8; 4];
    head.copy_from_slice(&payload[..4]);

    let mut trace = Vec::new();
    trace.extend_from_slice(&request_frame(counter, payload.len(), head));
    trace.extend_from_slice(&flow_frame());
    for chunk in payload[4..].chunks(7) {
        trace.extend_from_slice(&continuation_frame(chunk));
    }
    trace
}

/// A complete acknowledged block for `payload`.
pub(super) fn acknowledged_block(counter: u8, payload: &[u8]) -> Vec<u8> {
    let mut trace = block_without_ack(counter, payload);
    trace.extend_from_slice(&ack_frame(counter));
    trace
}

/// Concatenate whole frames into a capture buffer.
pub(super) fn trace_of(frames: &[[u8; FRAME_WIDTH]]) -> Vec<u8> { frames.concat() }
