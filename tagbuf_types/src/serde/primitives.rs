use std::mem;

/// A scalar that is written and read as a fixed number of little-endian bytes.
///
/// Neither method checks bounds.
/// Readers go through [`crate::serde::ReadCursor::read_fixed`], which does.
pub trait FixedWidth: Sized + Copy {
    const WIDTH: usize;

    /// Appends the little-endian representation; returns the number of bytes appended.
    fn write_fixed(self, buf: &mut Vec<u8>) -> usize;

    /// `bytes` must hold at least [`Self::WIDTH`] bytes. Trailing bytes are ignored.
    fn read_fixed(bytes: &[u8]) -> Self;
}

impl FixedWidth for u64 {
    const WIDTH: usize = mem::size_of::<u64>();

    fn write_fixed(self, buf: &mut Vec<u8>) -> usize {
        buf.extend_from_slice(&self.to_le_bytes());
        Self::WIDTH
    }

    fn read_fixed(bytes: &[u8]) -> Self {
        let mut arr = [0u8; mem::size_of::<u64>()];
        arr.copy_from_slice(&bytes[..Self::WIDTH]);
        u64::from_le_bytes(arr)
    }
}

impl FixedWidth for f64 {
    const WIDTH: usize = mem::size_of::<f64>();

    fn write_fixed(self, buf: &mut Vec<u8>) -> usize {
        buf.extend_from_slice(&self.to_le_bytes());
        Self::WIDTH
    }

    fn read_fixed(bytes: &[u8]) -> Self {
        let mut arr = [0u8; mem::size_of::<f64>()];
        arr.copy_from_slice(&bytes[..Self::WIDTH]);
        f64::from_le_bytes(arr)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn little_endian_layout() {
        let mut buf = vec![];
        assert_eq!(8, 0x0102_0304_0506_0708u64.write_fixed(&mut buf));
        assert_eq!(vec![8, 7, 6, 5, 4, 3, 2, 1], buf);
        assert_eq!(0x0102_0304_0506_0708u64, u64::read_fixed(&buf));

        buf.clear();
        1.0f64.write_fixed(&mut buf);
        assert_eq!(vec![0, 0, 0, 0, 0, 0, 0xF0, 0x3F], buf);
        assert_eq!(1.0f64, f64::read_fixed(&buf));
    }

    #[test]
    fn read_ignores_trailing_bytes() {
        let bytes = [42, 0, 0, 0, 0, 0, 0, 0, 0xFF, 0xFF];
        assert_eq!(42u64, u64::read_fixed(&bytes));
    }
}
