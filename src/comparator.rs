//! Element orderings for sorted collections.
//!
//! A [`Comparator`] decides the total order an
//! [`OrderedUniqueSequence`](crate::sequence::OrderedUniqueSequence) keeps its
//! elements in. Each collection owns its comparator, so two collections over
//! the same element type can be ordered differently without interfering.
//!
//! # Provided Orderings
//!
//! - [`NaturalOrder`]: ascending per [`Ord`] (the default)
//! - [`ReverseOrder`]: descending per [`Ord`]
//! - Any `Fn(&T, &T) -> Ordering` closure
//!
//! # Examples
//!
//! ```rust
//! use std::cmp::Ordering;
//! use ordseq::comparator::{Comparator, NaturalOrder, ReverseOrder};
//!
//! assert_eq!(NaturalOrder.compare(&1, &2), Ordering::Less);
//! assert_eq!(ReverseOrder.compare(&1, &2), Ordering::Greater);
//!
//! let by_length = |left: &&str, right: &&str| left.len().cmp(&right.len());
//! assert_eq!(by_length.compare(&"ab", &"c"), Ordering::Greater);
//! ```

use std::cmp::Ordering;

/// A total order over values of type `T`.
///
/// Implementations must be consistent: for any `a`, `b`, `c`, exactly one of
/// `Less`, `Equal`, `Greater` holds for `compare(a, b)`, `compare(a, b)` is the
/// reverse of `compare(b, a)`, and the relation is transitive. Collections
/// built on an inconsistent comparator stay memory safe but may report
/// incorrect membership.
pub trait Comparator<T: ?Sized> {
    /// Compares `left` with `right`.
    fn compare(&self, left: &T, right: &T) -> Ordering;

    /// Returns `true` if `left` and `right` compare equal.
    #[inline]
    fn equivalent(&self, left: &T, right: &T) -> bool {
        self.compare(left, right) == Ordering::Equal
    }
}

/// Ascending order per the element type's [`Ord`] implementation.
///
/// For numeric element types this is numeric ascending order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NaturalOrder;

impl<T: Ord + ?Sized> Comparator<T> for NaturalOrder {
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        left.cmp(right)
    }
}

/// Descending order per the element type's [`Ord`] implementation.
///
/// # Examples
///
/// ```rust
/// use ordseq::comparator::ReverseOrder;
/// use ordseq::sequence::OrderedUniqueSequence;
///
/// let sequence = OrderedUniqueSequence::from_vec_with(vec![1, 3, 2], ReverseOrder);
/// assert_eq!(sequence.to_vec(), vec![3, 2, 1]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ReverseOrder;

impl<T: Ord + ?Sized> Comparator<T> for ReverseOrder {
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        right.cmp(left)
    }
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        self(left, right)
    }
}
