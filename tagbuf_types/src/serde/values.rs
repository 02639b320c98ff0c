use crate::serde::{
    Any, CodecError, DecodeConfig, DecodeCtx, ReadCursor, Result, ValueType, ValueTypeInt,
    WriteLen,
};
use std::mem;

mod scalar;
mod sequence;
mod string;

pub use scalar::*;
pub use sequence::*;
pub use string::*;

/// One of the four value kinds that an [`Any`] may hold.
///
/// Implementors provide the body codec; the `value_type` framing is shared.
pub trait Variant: Sized + Into<Any> {
    const VALUE_TYPE: ValueType;

    fn from_any(any: &Any) -> Option<&Self>;

    /// Serializes everything after `value_type`.
    fn ser_body(&self, buf: &mut Vec<u8>) -> WriteLen;

    /// Deserializes everything after `value_type`.
    fn deser_body(r: &mut ReadCursor, ctx: DecodeCtx) -> Result<Self>;

    /// The length of what [`Self::ser_body`] would write.
    fn body_len(&self) -> usize;

    fn encode(&self, buf: &mut Vec<u8>) -> WriteLen {
        let mut w_len = WriteLen::new_manual(ValueTypeInt::from(Self::VALUE_TYPE).ser(buf));
        w_len += self.ser_body(buf);
        w_len
    }

    fn encoded_len(&self) -> usize {
        mem::size_of::<u64>() + self.body_len()
    }

    fn decode(r: &mut ReadCursor) -> Result<Self> {
        Self::decode_with(r, DecodeConfig::default())
    }

    fn decode_with(r: &mut ReadCursor, config: DecodeConfig) -> Result<Self> {
        Self::deser_nested(r, DecodeCtx::from(config))
    }

    /// Reads `value_type`, requires it to be [`Self::VALUE_TYPE`], then reads the body.
    ///
    /// On failure `r` is not advanced.
    fn deser_nested(r: &mut ReadCursor, ctx: DecodeCtx) -> Result<Self> {
        let mut attempt = *r;

        /* value_type */
        let offset = attempt.position();
        let found = ValueType::deser(&mut attempt)?;
        if found != Self::VALUE_TYPE {
            return Err(CodecError::TagMismatch {
                offset,
                expected: Self::VALUE_TYPE,
                found,
            });
        }

        /* body */
        let val = Self::deser_body(&mut attempt, ctx)?;

        *r = attempt;
        Ok(val)
    }
}
