use crate::serde::{Any, CodecError, FixedWidth, ReadCursor, Result};
use derive_more::{Deref, From};
use num_derive::FromPrimitive;
use num_traits::FromPrimitive;
use std::fmt;

/// A `value_type` ordinal as read off the wire, not yet known to be valid.
#[derive(From, Deref, PartialEq, Eq, Clone, Copy, Debug)]
pub struct ValueTypeInt(u64);
impl From<ValueType> for ValueTypeInt {
    fn from(val_type: ValueType) -> Self {
        Self(val_type as u64)
    }
}
impl ValueTypeInt {
    pub fn deser(r: &mut ReadCursor) -> Result<Self> {
        let int = r.read_fixed::<u64>()?;
        Ok(Self(int))
    }

    pub fn ser(self, buf: &mut Vec<u8>) -> usize {
        self.0.write_fixed(buf)
    }
}

/// The closed set of value kinds.
///
/// Discriminants are spelled out because they are the wire ordinals,
/// and must not move if members are reordered.
#[repr(u64)]
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, FromPrimitive, Debug)]
pub enum ValueType {
    Integer = 0,
    Float = 1,
    String = 2,
    Sequence = 3,
}

impl TryFrom<ValueTypeInt> for ValueType {
    type Error = ValueTypeInt;
    fn try_from(int: ValueTypeInt) -> Result<Self, ValueTypeInt> {
        ValueType::from_u64(int.0).ok_or(int)
    }
}

impl From<&Any> for ValueType {
    fn from(any: &Any) -> Self {
        match any {
            Any::Integer(_) => ValueType::Integer,
            Any::Float(_) => ValueType::Float,
            Any::String(_) => ValueType::String,
            Any::Sequence(_) => ValueType::Sequence,
        }
    }
}

impl ValueType {
    pub fn ordinal(self) -> u64 {
        *ValueTypeInt::from(self)
    }

    /// Reads a `value_type` and requires it to be one of the known ordinals.
    pub fn deser(r: &mut ReadCursor) -> Result<Self> {
        let offset = r.position();
        let int = ValueTypeInt::deser(r)?;
        ValueType::try_from(int).map_err(|int| CodecError::UnknownTag {
            offset,
            tag: *int,
        })
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueType::Integer => "Integer",
            ValueType::Float => "Float",
            ValueType::String => "String",
            ValueType::Sequence => "Sequence",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn ordinals_are_fixed() {
        let exp = [
            (ValueType::Integer, 0u64),
            (ValueType::Float, 1),
            (ValueType::String, 2),
            (ValueType::Sequence, 3),
        ];
        for (val_type, ordinal) in exp {
            assert_eq!(ordinal, val_type.ordinal());
            assert_eq!(Ok(val_type), ValueType::try_from(ValueTypeInt::from(ordinal)));
        }
        assert_eq!(
            Err(ValueTypeInt::from(4u64)),
            ValueType::try_from(ValueTypeInt::from(4u64))
        );
    }

    #[test]
    fn unknown_ordinal_reports_offset() {
        let mut buf = vec![0u8; 3];
        ValueTypeInt::from(99u64).ser(&mut buf);
        let mut r = ReadCursor::new(&buf);
        r.skip_bytes(3).unwrap();

        assert_eq!(
            Err(CodecError::UnknownTag { offset: 3, tag: 99 }),
            ValueType::deser(&mut r)
        );
    }
}
