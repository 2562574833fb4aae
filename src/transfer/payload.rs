//! Payload extraction for accepted transfer blocks.
//!
//! A block's payload is spread across its request frame and a run of
//! continuation frames. The request frame carries the first four bytes
//! after its header; each continuation frame carries up to seven more at
//! offset 10. The frame directly after the request carries none and is
//! stepped over. Whatever a continuation frame holds beyond the declared
//! length is bus padding and is discarded.

use super::frame::TraceFrames;

/// Append the payload of the block whose request frame sits at ordinal
/// `request`, returning the ordinal of the first frame the block did not
/// consume.
///
/// The caller must have classified the record at `request` as a
/// `TransferData` request. Collection stops as soon as the declared length
/// is reached or the capture ends, whichever comes first; a capture that
/// ends mid-block leaves the bytes gathered so far in `image`.
pub(crate) fn collect_block(
    frames: &TraceFrames<'_>,
    request: usize,
    image: &mut Vec<u8>,
) -> usize {
    let Some(frame) = frames.get(request) else {
        return request;
    };
    let declared = frame.declared_length().unwrap_or(0);

    let head = frame.request_payload();
    image.extend_from_slice(head);
    let mut written = head.len();

    // The frame directly after the request never carries block data.
    let mut cursor = request + 2;

    while written < declared {
        let Some(record) = frames.get(cursor) else {
            break;
        };
        let chunk = record.continuation_payload();
        let take = usize::min(chunk.len(), declared - written);
        image.extend_from_slice(&chunk[..take]);
        written += take;
        cursor += 1;
    }

    cursor
}
