use crate::serde::{CodecError, FixedWidth, Result};

/// A read position within a borrowed byte buffer.
///
/// Every read is bounds-checked first; a short read fails with
/// [`CodecError::TruncatedBuffer`] and leaves the position unchanged.
///
/// The cursor is `Copy`. Decoders that must not be observed half-done
/// work on a copy and write it back only on success.
#[derive(Clone, Copy, Debug)]
pub struct ReadCursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> From<&'a [u8]> for ReadCursor<'a> {
    fn from(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }
}

impl<'a> ReadCursor<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self::from(buf)
    }

    /// Bytes consumed since the start of the buffer.
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// The unconsumed tail of the buffer.
    pub fn rest(&self) -> &'a [u8] {
        &self.buf[self.pos..]
    }

    pub fn read_fixed<T: FixedWidth>(&mut self) -> Result<T> {
        let len = self.ensure(T::WIDTH as u64)?;
        let val = T::read_fixed(&self.buf[self.pos..]);
        self.pos += len;
        Ok(val)
    }

    /// `len` comes straight off the wire, hence `u64`.
    pub fn read_bytes(&mut self, len: u64) -> Result<&'a [u8]> {
        let len = self.ensure(len)?;
        let bytes = &self.buf[self.pos..self.pos + len];
        self.pos += len;
        Ok(bytes)
    }

    pub fn skip_bytes(&mut self, len: u64) -> Result<()> {
        self.read_bytes(len).map(|_| ())
    }

    fn ensure(&self, needed: u64) -> Result<usize> {
        let remaining = self.remaining();
        match usize::try_from(needed) {
            Ok(len) if len <= remaining => Ok(len),
            _ => Err(CodecError::TruncatedBuffer {
                offset: self.pos,
                needed,
                remaining,
            }),
        }
    }
}
