//! A self-describing little-endian binary codec for a small recursive value model.
//!
//! See [`serde`] for the wire format, [`types::Container`] for whole-buffer
//! de/serialization, and [`iters::ValueIter`] for lazy top-level decoding.

pub mod iters;
pub mod serde;
pub mod types;
