use crate::iters::ValueIter;
use crate::serde::{Any, DecodeConfig, MembersCount, Result, WriteLen};
use anyhow::Context;
use std::io::{Read, Write};
use std::mem;
use std::slice;
use std::vec;

mod test;

/// The top-level ordered list of values that forms one complete buffer.
///
/// The buffer is `members_count` followed by each member's encoding, in insertion order.
#[derive(PartialEq, Eq, Clone, Default, Debug)]
pub struct Container {
    values: Vec<Any>,
}

impl Container {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push<V: Into<Any>>(&mut self, val: V) {
        self.values.push(val.into());
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Any> {
        self.values.iter()
    }

    pub fn as_slice(&self) -> &[Any] {
        &self.values
    }

    pub fn into_values(self) -> Vec<Any> {
        self.values
    }
}

/* Serialization. */
impl Container {
    pub fn encode(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.encoded_len());
        self.encode_into(&mut buf);
        buf
    }

    /// Appends the whole container to `buf`.
    pub fn encode_into(&self, buf: &mut Vec<u8>) -> WriteLen {
        /* members_count */
        let mut w_len = WriteLen::new_manual(MembersCount::from_members(&self.values).ser(buf));

        /* members */
        for val in self.values.iter() {
            w_len += val.encode(buf);
        }

        w_len
    }

    pub fn encoded_len(&self) -> usize {
        let membs_ct_len = mem::size_of::<MembersCount>();
        let membs_len: usize = self.values.iter().map(Any::encoded_len).sum();
        membs_ct_len + membs_len
    }

    pub fn write_to<W: Write>(&self, w: &mut W) -> anyhow::Result<WriteLen> {
        let buf = self.encode();
        w.write_all(&buf)?;
        Ok(WriteLen::new_manual(buf.len()))
    }
}

/* Deserialization. */
impl Container {
    pub fn decode(buf: &[u8]) -> Result<Self> {
        Self::decode_with(buf, DecodeConfig::default())
    }

    /// Either every declared member is decoded, or an error is returned; never a partial list.
    pub fn decode_with(buf: &[u8], config: DecodeConfig) -> Result<Self> {
        let values = ValueIter::with_config(buf, config).collect::<Result<Vec<_>>>()?;
        Ok(Self { values })
    }

    /// Reads `r` to its end, then decodes what was read.
    pub fn read_from<R: Read>(r: &mut R) -> anyhow::Result<Self> {
        Self::read_from_with(r, DecodeConfig::default())
    }

    pub fn read_from_with<R: Read>(r: &mut R, config: DecodeConfig) -> anyhow::Result<Self> {
        let mut buf = vec![];
        r.read_to_end(&mut buf)?;
        let cont = Self::decode_with(&buf, config)
            .with_context(|| format!("Decoding a {}-byte container buffer.", buf.len()))?;
        Ok(cont)
    }
}

impl From<Vec<Any>> for Container {
    fn from(values: Vec<Any>) -> Self {
        Self { values }
    }
}

impl<V: Into<Any>> FromIterator<V> for Container {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<V: Into<Any>> Extend<V> for Container {
    fn extend<I: IntoIterator<Item = V>>(&mut self, iter: I) {
        self.values.extend(iter.into_iter().map(Into::into));
    }
}

impl IntoIterator for Container {
    type Item = Any;
    type IntoIter = vec::IntoIter<Any>;
    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a Container {
    type Item = &'a Any;
    type IntoIter = slice::Iter<'a, Any>;
    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
