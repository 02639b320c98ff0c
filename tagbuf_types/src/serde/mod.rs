//! # Serialization format
//!
//! The de/serializable value is [`Any`], which holds exactly one of four variants:
//! [`IntegerValue`], [`FloatValue`], [`StringValue`] and [`SequenceValue`].
//!
//! Every field is little-endian and 8 bytes wide, except for raw string bytes.
//!
//! Every value starts with `value_type`, encoded in `u64`. The ordinals are fixed:
//! `Integer = 0`, `Float = 1`, `String = 2`, `Sequence = 3`.
//! There is no magic number, version, or checksum.
//!
//! Fixed-length variants do not encode their body length.
//! `String` encodes the byte length of its body; `Sequence` encodes its members count.
//!
//! A `Sequence` nests other values, including possibly other `Sequence`s.
//!
//! ```text
//! struct Any::Integer {
//!     value_type:     u64,        // 0
//!     value_body:     u64,
//! }
//!
//! struct Any::Float {
//!     value_type:     u64,        // 1
//!     value_body:     f64,
//! }
//!
//! struct Any::String {
//!     value_type:     u64,        // 2
//!     body_len:       u64,
//!     value_body:     [u8; body_len],
//! }
//!
//! struct Any::Sequence {
//!     value_type:     u64,        // 3
//!     members_count:  u64,
//!     member_0:       Any::*,
//!     member_1:       Any::*,
//!     ...
//! }
//! ```
//!
//! A [`crate::types::Container`] buffer has the same shape as a `Sequence` body:
//!
//! ```text
//! struct Container {
//!     members_count:  u64,
//!     member_0:       Any::*,
//!     ...
//! }
//! ```
//!
//! Decoding never guesses. A short buffer is [`CodecError::TruncatedBuffer`],
//! an ordinal outside the four variants is [`CodecError::UnknownTag`],
//! and a variant decoder that meets another variant's tag is [`CodecError::TagMismatch`].
//! A failed decode leaves the [`ReadCursor`] where it was.

mod any;
mod config;
mod cursor;
mod error;
mod lengths;
mod primitives;
mod value_type;
mod values;

pub use any::*;
pub use config::*;
pub use cursor::*;
pub use error::*;
pub use lengths::*;
pub use primitives::*;
pub use value_type::*;
pub use values::*;
