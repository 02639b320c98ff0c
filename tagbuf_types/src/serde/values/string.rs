use crate::serde::{Any, BodyLen, DecodeCtx, ReadCursor, Result, ValueType, Variant, WriteLen};
use derive_more::{Deref, From, Into};
use std::mem;
use std::str::{self, Utf8Error};

/// Text held as raw bytes. Decoding does not validate UTF-8,
/// so that every well-formed buffer re-encodes byte for byte.
#[derive(From, Into, Deref, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Default, Debug)]
pub struct StringValue(Vec<u8>);

impl From<&str> for StringValue {
    fn from(s: &str) -> Self {
        Self(s.as_bytes().to_vec())
    }
}
impl From<String> for StringValue {
    fn from(s: String) -> Self {
        Self(s.into_bytes())
    }
}
impl From<&[u8]> for StringValue {
    fn from(b: &[u8]) -> Self {
        Self(b.to_vec())
    }
}

impl StringValue {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn to_str(&self) -> Result<&str, Utf8Error> {
        str::from_utf8(&self.0)
    }
}

impl Variant for StringValue {
    const VALUE_TYPE: ValueType = ValueType::String;

    fn from_any(any: &Any) -> Option<&Self> {
        match any {
            Any::String(val) => Some(val),
            _ => None,
        }
    }

    fn ser_body(&self, buf: &mut Vec<u8>) -> WriteLen {
        let mut w_len = WriteLen::new_manual(BodyLen::from_body(&self.0).ser(buf));
        buf.extend_from_slice(&self.0);
        w_len += WriteLen::new_manual(self.0.len());
        w_len
    }

    fn deser_body(r: &mut ReadCursor, _ctx: DecodeCtx) -> Result<Self> {
        /* body_len */
        let body_len = BodyLen::deser(r)?;

        /* value_body */
        let body = r.read_bytes(*body_len)?;

        Ok(Self(body.to_vec()))
    }

    fn body_len(&self) -> usize {
        mem::size_of::<BodyLen>() + self.0.len()
    }
}
