//! Sorted collections backed by contiguous storage.
//!
//! - [`OrderedUniqueSequence`]: mutable sorted set over a single `Vec`
//! - [`BoundMode`]: inclusive or exclusive value-range bounds
//!
//! Each [`OrderedUniqueSequence`] owns both its storage and its
//! [`Comparator`](crate::comparator::Comparator). Instances never share
//! state, so mutating one cannot be observed through another.
//!
//! # Examples
//!
//! ```rust
//! use ordseq::comparator::ReverseOrder;
//! use ordseq::sequence::OrderedUniqueSequence;
//!
//! let mut ascending = OrderedUniqueSequence::from_vec(vec![2, 3, 1]);
//! let descending = OrderedUniqueSequence::from_vec_with(vec![2, 3, 1], ReverseOrder);
//!
//! ascending.clear();
//! assert!(ascending.is_empty());
//! assert_eq!(descending.to_vec(), vec![3, 2, 1]);
//! ```

mod ordered_unique_sequence;

pub use ordered_unique_sequence::BoundMode;
pub use ordered_unique_sequence::OrderedUniqueSequence;
pub use ordered_unique_sequence::OrderedUniqueSequenceIntoIterator;
pub use ordered_unique_sequence::OrderedUniqueSequenceIterator;
