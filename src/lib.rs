//! # ordseq
//!
//! An in-memory sorted set of unique elements backed by a single contiguous
//! `Vec`, with a comparator chosen per instance.
//!
//! ## Overview
//!
//! - **Sequence**: [`OrderedUniqueSequence`](sequence::OrderedUniqueSequence)
//!   with indexed access, value-range queries, and removal by value, index,
//!   or range
//! - **Comparators**: [`NaturalOrder`](comparator::NaturalOrder),
//!   [`ReverseOrder`](comparator::ReverseOrder), or any
//!   `Fn(&T, &T) -> Ordering`
//! - **Errors**: [`SequenceError`](error::SequenceError) for the fallible
//!   `try_*` operations
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` as an ascending sequence
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use ordseq::prelude::*;
//!
//! let mut sequence = OrderedUniqueSequence::from_vec(vec![10, 30, 20, 10]);
//! assert_eq!(sequence.len(), 3);
//!
//! sequence.add(25);
//! assert_eq!(sequence.get_between(&20, &30, BoundMode::Exclusive), vec![25]);
//! assert_eq!(sequence.remove(&10), Some(10));
//! assert_eq!(sequence.to_string(), "20,25,30");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use ordseq::prelude::*;
/// ```
pub mod prelude {
    pub use crate::comparator::*;
    pub use crate::error::*;
    pub use crate::sequence::*;
}

pub mod comparator;
pub mod error;
pub mod sequence;
