//! The unsigned 4-byte big-endian length prefix shared by text and
//! variable-length sequences.
//!
//! Fixed arrays and record fields never carry a prefix: their sizes are
//! implied by the type and known to both peers.
use crate::{
    error::{length_overflow, Result},
    io::{ReadCursor, WriteCursor},
};

/// Width of every length/count prefix on the wire.
pub const PREFIX_LEN: usize = size_of::<u32>();

/// Write `len` as an unsigned 4-byte big-endian prefix.
#[inline]
pub fn encode_len(writer: &mut WriteCursor, len: usize) -> Result<()> {
    let Ok(len) = u32::try_from(len) else {
        return Err(length_overflow(len));
    };
    writer.write(&len.to_be_bytes());
    Ok(())
}

/// Read an unsigned 4-byte big-endian prefix.
#[inline]
pub fn decode_len(reader: &mut ReadCursor<'_>) -> Result<usize> {
    Ok(u32::from_be_bytes(reader.take_array()?) as usize)
}
