use crate::serde::{
    Any, DecodeCtx, MembersCount, ReadCursor, Result, ValueType, Variant, WriteLen,
};
use derive_more::{Deref, From, Into};
use std::mem;
use std::slice;
use std::vec;

/// An ordered list of [`Any`]. Member order is significant, both for equality and on the wire.
#[derive(From, Into, Deref, PartialEq, Eq, Clone, Default, Debug)]
pub struct SequenceValue(Vec<Any>);

impl SequenceValue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push<V: Into<Any>>(&mut self, val: V) {
        self.0.push(val.into());
    }
}

impl<V: Into<Any>> FromIterator<V> for SequenceValue {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
impl<V: Into<Any>> Extend<V> for SequenceValue {
    fn extend<I: IntoIterator<Item = V>>(&mut self, iter: I) {
        self.0.extend(iter.into_iter().map(Into::into));
    }
}
impl IntoIterator for SequenceValue {
    type Item = Any;
    type IntoIter = vec::IntoIter<Any>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
impl<'a> IntoIterator for &'a SequenceValue {
    type Item = &'a Any;
    type IntoIter = slice::Iter<'a, Any>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Variant for SequenceValue {
    const VALUE_TYPE: ValueType = ValueType::Sequence;

    fn from_any(any: &Any) -> Option<&Self> {
        match any {
            Any::Sequence(val) => Some(val),
            _ => None,
        }
    }

    fn ser_body(&self, buf: &mut Vec<u8>) -> WriteLen {
        /* members_count */
        let mut w_len = WriteLen::new_manual(MembersCount::from_members(&self.0).ser(buf));

        /* members */
        for member in self.0.iter() {
            w_len += member.encode(buf);
        }

        w_len
    }

    /// Members are collected locally; a failing member discards them all.
    fn deser_body(r: &mut ReadCursor, ctx: DecodeCtx) -> Result<Self> {
        /* members_count */
        let membs_ct = MembersCount::deser(r)?;

        let ctx = ctx.enter_sequence()?;

        /* members */
        let mut members = Vec::with_capacity(membs_ct.capacity_hint(r.remaining()));
        for _ in 0..*membs_ct {
            let member = Any::deser_nested(r, ctx)?;
            members.push(member);
        }

        Ok(Self(members))
    }

    fn body_len(&self) -> usize {
        let membs_ct_len = mem::size_of::<MembersCount>();
        let membs_len: usize = self.0.iter().map(Any::encoded_len).sum();
        membs_ct_len + membs_len
    }
}
