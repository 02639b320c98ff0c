use crate::serde::{
    CodecError, FloatValue, IntegerValue, Result, SequenceValue, StringValue, ValueType, Variant,
};
use derive_more::From;

mod deser;
mod ser;

/// Exactly one value of one of the four kinds, tagged on the wire by its [`ValueType`].
///
/// Two `Any`s are equal iff they hold the same variant and the held values are equal.
#[derive(From, PartialEq, Eq, Clone, Debug)]
pub enum Any {
    Integer(IntegerValue),
    Float(FloatValue),
    String(StringValue),
    Sequence(SequenceValue),
}

impl From<u64> for Any {
    fn from(i: u64) -> Self {
        Self::Integer(IntegerValue::from(i))
    }
}
impl From<f64> for Any {
    fn from(f: f64) -> Self {
        Self::Float(FloatValue::from(f))
    }
}
impl From<&str> for Any {
    fn from(s: &str) -> Self {
        Self::String(StringValue::from(s))
    }
}
impl From<String> for Any {
    fn from(s: String) -> Self {
        Self::String(StringValue::from(s))
    }
}
impl From<Vec<u8>> for Any {
    fn from(b: Vec<u8>) -> Self {
        Self::String(StringValue::from(b))
    }
}
impl From<Vec<Any>> for Any {
    fn from(members: Vec<Any>) -> Self {
        Self::Sequence(SequenceValue::from(members))
    }
}

impl Any {
    pub fn tag(&self) -> ValueType {
        ValueType::from(self)
    }

    /// The held value, if it is a `V`.
    pub fn get_as<V: Variant>(&self) -> Result<&V> {
        V::from_any(self).ok_or(CodecError::WrongVariant {
            expected: V::VALUE_TYPE,
            found: self.tag(),
        })
    }
}
