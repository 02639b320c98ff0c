use crate::serde::{FixedWidth, ReadCursor, Result};
use derive_more::{Add, AddAssign, Deref, From, Into};
use std::mem;

/// The smallest possible encoded [`crate::serde::Any`]: a `value_type` plus an 8-byte body field.
pub const MIN_ANY_LEN: usize = 2 * mem::size_of::<u64>();

/// The most members any single `Sequence` or `Container` preallocates for.
/// Larger lists grow as members are actually decoded.
pub const MAX_PREALLOC_MEMBERS: usize = 16;

/// Bytes appended by a serialization call.
#[derive(From, Into, Deref, Add, AddAssign, PartialEq, Eq, Default, Clone, Copy, Debug)]
pub struct WriteLen(usize);
impl WriteLen {
    pub fn new_manual(len: usize) -> Self {
        Self(len)
    }
}

/// The `body_len` of a `String`.
#[derive(Deref, Clone, Copy, Debug)]
pub struct BodyLen(u64);
impl BodyLen {
    pub fn from_body(body: &[u8]) -> Self {
        Self(body.len() as u64)
    }
    pub fn deser(r: &mut ReadCursor) -> Result<Self> {
        let int = r.read_fixed::<u64>()?;
        Ok(Self(int))
    }
    pub fn ser(self, buf: &mut Vec<u8>) -> usize {
        self.0.write_fixed(buf)
    }
}

/// The `members_count` of a `Sequence` or a `Container`.
#[derive(From, Deref, Clone, Copy, Debug)]
pub struct MembersCount(u64);
impl MembersCount {
    pub fn from_members<T>(members: &[T]) -> Self {
        Self(members.len() as u64)
    }
    pub fn deser(r: &mut ReadCursor) -> Result<Self> {
        let int = r.read_fixed::<u64>()?;
        Ok(Self(int))
    }
    pub fn ser(self, buf: &mut Vec<u8>) -> usize {
        self.0.write_fixed(buf)
    }

    /// How many members it is safe to preallocate for.
    ///
    /// The count is untrusted; no more members can follow than `remaining / MIN_ANY_LEN`.
    /// Nested lists share `remaining`, so the hint is also capped at [`MAX_PREALLOC_MEMBERS`].
    pub fn capacity_hint(self, remaining: usize) -> usize {
        let max_fit = (remaining / MIN_ANY_LEN).min(MAX_PREALLOC_MEMBERS);
        usize::try_from(self.0).map_or(max_fit, |ct| ct.min(max_fit))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn capacity_hint_is_bounded_by_remaining() {
        let mut buf = vec![];
        MembersCount(u64::MAX).ser(&mut buf);
        let ct = MembersCount::deser(&mut ReadCursor::new(&buf)).unwrap();
        assert_eq!(u64::MAX, *ct);
        assert_eq!(0, ct.capacity_hint(15));
        assert_eq!(2, ct.capacity_hint(32));
        assert_eq!(MAX_PREALLOC_MEMBERS, ct.capacity_hint(1 << 20));

        assert_eq!(3, MembersCount::from_members(&[1, 2, 3]).capacity_hint(1024));
    }
}
