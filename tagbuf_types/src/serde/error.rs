use crate::serde::ValueType;
use thiserror::Error;

pub type Result<T, E = CodecError> = std::result::Result<T, E>;

/// Every way a de/serialization call can fail.
///
/// Offsets are byte positions within the buffer being decoded,
/// pointing at the start of the field that could not be read.
#[derive(Error, PartialEq, Eq, Clone, Debug)]
pub enum CodecError {
    #[error("Truncated buffer at offset {offset}: {needed} bytes needed, {remaining} remaining.")]
    TruncatedBuffer {
        offset: usize,
        needed: u64,
        remaining: usize,
    },

    #[error("Tag mismatch at offset {offset}: expected {expected}, found {found}.")]
    TagMismatch {
        offset: usize,
        expected: ValueType,
        found: ValueType,
    },

    #[error("Unknown tag {tag} at offset {offset}.")]
    UnknownTag { offset: usize, tag: u64 },

    #[error("Length mismatch: decoded content ends at {declared_end}, but the buffer is {buffer_len} bytes long.")]
    LengthMismatch {
        declared_end: usize,
        buffer_len: usize,
    },

    #[error("Wrong variant: expected {expected}, found {found}.")]
    WrongVariant {
        expected: ValueType,
        found: ValueType,
    },

    #[error("Sequence nesting exceeds the maximum depth of {max_depth}.")]
    DepthExceeded { max_depth: usize },
}
