use crate::serde::{Any, Variant, WriteLen};

impl Any {
    /// Appends `value_type` and body of the held variant.
    pub fn encode(&self, buf: &mut Vec<u8>) -> WriteLen {
        match self {
            Any::Integer(val) => val.encode(buf),
            Any::Float(val) => val.encode(buf),
            Any::String(val) => val.encode(buf),
            Any::Sequence(val) => val.encode(buf),
        }
    }

    /// The exact length [`Self::encode`] would write.
    pub fn encoded_len(&self) -> usize {
        match self {
            Any::Integer(val) => val.encoded_len(),
            Any::Float(val) => val.encoded_len(),
            Any::String(val) => val.encoded_len(),
            Any::Sequence(val) => val.encoded_len(),
        }
    }

    pub fn ser_solo(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.encoded_len());
        self.encode(&mut buf);
        buf
    }
}
