//! Iterators work on a whole `Container` buffer held in memory:
//!
//! ```text
//! struct Container {
//!     members_count:  u64,
//!     member_0:       Any::*,
//!     ...
//! }
//! ```

mod iter_values;

pub use iter_values::*;
