use crate::serde::{Any, DecodeCtx, FixedWidth, ReadCursor, Result, ValueType, Variant, WriteLen};
use derive_more::{Deref, From, Into};
use std::hash::{Hash, Hasher};

#[derive(From, Into, Deref, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct IntegerValue(u64);

impl Variant for IntegerValue {
    const VALUE_TYPE: ValueType = ValueType::Integer;

    fn from_any(any: &Any) -> Option<&Self> {
        match any {
            Any::Integer(val) => Some(val),
            _ => None,
        }
    }

    fn ser_body(&self, buf: &mut Vec<u8>) -> WriteLen {
        WriteLen::new_manual(self.0.write_fixed(buf))
    }

    fn deser_body(r: &mut ReadCursor, _ctx: DecodeCtx) -> Result<Self> {
        r.read_fixed::<u64>().map(Self)
    }

    fn body_len(&self) -> usize {
        u64::WIDTH
    }
}

/// Compared by bit pattern, not by IEEE-754 semantics:
/// a NaN equals an identically encoded NaN, and `0.0` differs from `-0.0`.
#[derive(From, Into, Deref, Clone, Copy, Debug)]
pub struct FloatValue(f64);

impl PartialEq for FloatValue {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}
impl Eq for FloatValue {}
impl Hash for FloatValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl Variant for FloatValue {
    const VALUE_TYPE: ValueType = ValueType::Float;

    fn from_any(any: &Any) -> Option<&Self> {
        match any {
            Any::Float(val) => Some(val),
            _ => None,
        }
    }

    fn ser_body(&self, buf: &mut Vec<u8>) -> WriteLen {
        WriteLen::new_manual(self.0.write_fixed(buf))
    }

    fn deser_body(r: &mut ReadCursor, _ctx: DecodeCtx) -> Result<Self> {
        r.read_fixed::<f64>().map(Self)
    }

    fn body_len(&self) -> usize {
        f64::WIDTH
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn float_equality_is_bitwise() {
        assert_eq!(FloatValue::from(f64::NAN), FloatValue::from(f64::NAN));
        assert_ne!(FloatValue::from(0.0f64), FloatValue::from(-0.0f64));
        assert_eq!(FloatValue::from(1.5f64), FloatValue::from(1.5f64));
    }
}
