//! Length-delimited framing for record streams.
//!
//! Each record stands alone on the wire; a stream is just frames
//! back-to-back, each prefixed with its varint length. Unknown field numbers
//! inside a frame are skipped by the decoder, which is what keeps old readers
//! working against payloads from newer schemas.

use bytes::{Buf, BytesMut};
use prost::Message;
use tracing::debug;

use crate::Result;

/// Append one length-prefixed record to the buffer.
pub fn write_frame<M: Message>(msg: &M, buf: &mut BytesMut) -> Result<()> {
    msg.encode_length_delimited(buf)?;
    Ok(())
}

/// Append a whole stream of records to the buffer.
pub fn write_frames<'a, M, I>(msgs: I, buf: &mut BytesMut) -> Result<usize>
where
    M: Message + 'a,
    I: IntoIterator<Item = &'a M>,
{
    let mut count = 0;
    for msg in msgs {
        msg.encode_length_delimited(buf)?;
        count += 1;
    }
    debug!(frames = count, "encoded frame stream");
    Ok(count)
}

/// Decode length-prefixed records until the buffer is exhausted.
///
/// Truncated or corrupt frames surface as [`crate::Error::Decode`]; nothing
/// semantic is checked.
pub fn read_frames<M: Message + Default>(mut buf: impl Buf) -> Result<Vec<M>> {
    let mut msgs = Vec::new();
    while buf.has_remaining() {
        msgs.push(M::decode_length_delimited(&mut buf)?);
    }
    debug!(frames = msgs.len(), "decoded frame stream");
    Ok(msgs)
}
