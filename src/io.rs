//! [`WriteCursor`] and [`ReadCursor`], the byte cursors backing every
//! encode and decode walk.
use crate::error::{truncated, Result};

/// Growable, append-only write buffer.
///
/// The encoder only ever appends; the cursor never rewinds. Output length
/// therefore equals [`WriteCursor::position`] at all times.
#[derive(Debug, Default)]
pub struct WriteCursor {
    buf: Vec<u8>,
}

impl WriteCursor {
    pub const fn new() -> Self {
        Self { buf: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    /// Number of bytes written so far.
    pub fn position(&self) -> usize {
        self.buf.len()
    }

    /// Append `src` verbatim.
    #[inline]
    pub fn write(&mut self, src: &[u8]) {
        self.buf.extend_from_slice(src);
    }

    /// Append a single byte.
    #[inline]
    pub fn write_byte(&mut self, byte: u8) {
        self.buf.push(byte);
    }

    /// Consume the cursor and return its contents.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}

/// Bounds-checked read position over an immutable byte buffer.
///
/// Every read advances the position; a read past the end of the buffer
/// fails with [`Error::Truncated`](crate::Error::Truncated) and leaves the
/// position where it was.
#[derive(Debug)]
pub struct ReadCursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> ReadCursor<'a> {
    pub const fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Current offset into the buffer.
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Bytes left between the position and the end of the buffer.
    pub const fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    pub const fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Borrow exactly `len` bytes and advance by `len`.
    #[inline]
    pub fn take(&mut self, len: usize) -> Result<&'a [u8]> {
        let Some(chunk) = self.buf[self.pos..].get(..len) else {
            return Err(truncated(len, self.remaining()));
        };
        self.pos += len;
        Ok(chunk)
    }

    /// Read exactly `N` bytes into an array and advance by `N`.
    #[inline]
    pub fn take_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let Some((chunk, _)) = self.buf[self.pos..].split_first_chunk::<N>() else {
            return Err(truncated(N, self.remaining()));
        };
        self.pos += N;
        Ok(*chunk)
    }

    /// Read a single byte and advance by one.
    #[inline]
    pub fn take_byte(&mut self) -> Result<u8> {
        Ok(self.take_array::<1>()?[0])
    }
}
