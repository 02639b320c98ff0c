use crate::serde::{
    Any, BodyLen, DecodeConfig, DecodeCtx, FixedWidth, FloatValue, IntegerValue, MembersCount,
    ReadCursor, Result, SequenceValue, StringValue, ValueType, Variant,
};

impl Any {
    pub fn decode(r: &mut ReadCursor) -> Result<Self> {
        Self::decode_with(r, DecodeConfig::default())
    }

    pub fn decode_with(r: &mut ReadCursor, config: DecodeConfig) -> Result<Self> {
        Self::deser_nested(r, DecodeCtx::from(config))
    }

    /// Peeks `value_type`, then hands the whole value (tag included) to that variant.
    ///
    /// On failure `r` is not advanced.
    pub fn deser_nested(r: &mut ReadCursor, ctx: DecodeCtx) -> Result<Self> {
        let mut peek = *r;
        let val = match ValueType::deser(&mut peek)? {
            ValueType::Integer => Any::Integer(IntegerValue::deser_nested(r, ctx)?),
            ValueType::Float => Any::Float(FloatValue::deser_nested(r, ctx)?),
            ValueType::String => Any::String(StringValue::deser_nested(r, ctx)?),
            ValueType::Sequence => Any::Sequence(SequenceValue::deser_nested(r, ctx)?),
        };
        Ok(val)
    }

    /// Decodes one value from the start of `buf`.
    /// Returns the number of bytes read along with the value.
    pub fn deser_solo(buf: &[u8]) -> Result<(usize, Self)> {
        let mut r = ReadCursor::new(buf);
        let val = Self::decode(&mut r)?;
        Ok((r.position(), val))
    }

    /// Validates and steps over one value without materializing it.
    /// Returns the number of bytes skipped.
    pub fn skip(r: &mut ReadCursor) -> Result<usize> {
        Self::skip_with(r, DecodeConfig::default())
    }

    pub fn skip_with(r: &mut ReadCursor, config: DecodeConfig) -> Result<usize> {
        Self::skip_nested(r, DecodeCtx::from(config))
    }

    /// On failure `r` is not advanced.
    pub fn skip_nested(r: &mut ReadCursor, ctx: DecodeCtx) -> Result<usize> {
        let mut attempt = *r;
        let start = attempt.position();

        /* value_type */
        let val_type = ValueType::deser(&mut attempt)?;

        /* body */
        match val_type {
            ValueType::Integer => attempt.skip_bytes(u64::WIDTH as u64)?,
            ValueType::Float => attempt.skip_bytes(f64::WIDTH as u64)?,
            ValueType::String => {
                let body_len = BodyLen::deser(&mut attempt)?;
                attempt.skip_bytes(*body_len)?;
            }
            ValueType::Sequence => {
                let membs_ct = MembersCount::deser(&mut attempt)?;
                let ctx = ctx.enter_sequence()?;
                for _ in 0..*membs_ct {
                    Self::skip_nested(&mut attempt, ctx)?;
                }
            }
        }

        let r_len = attempt.position() - start;
        *r = attempt;
        Ok(r_len)
    }
}
