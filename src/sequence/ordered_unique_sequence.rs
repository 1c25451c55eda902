//! Array-backed sorted set with a per-instance comparator.
//!
//! This module provides [`OrderedUniqueSequence`], a mutable collection of
//! unique elements kept in a single sorted `Vec`.
//!
//! # Overview
//!
//! `OrderedUniqueSequence` maintains two invariants under every operation:
//! - **Uniqueness**: no two stored elements compare equal
//! - **Strict order**: each element compares less than its successor
//!
//! Order is decided by a [`Comparator`] owned by each instance. The default
//! is [`NaturalOrder`], which follows the element type's [`Ord`].
//!
//! Lookups by position or value report a missing element with `None`.
//! Range queries that match nothing, or that describe an invalid range,
//! return an empty `Vec`. The `try_*` methods report invalid ranges as a
//! [`SequenceError`] instead.
//!
//! Every `Vec` returned by this type is a fresh copy; mutating it never
//! affects the collection.
//!
//! # Time Complexity
//!
//! | Operation         | Complexity   |
//! |-------------------|--------------|
//! | `at` / `get`      | O(1)         |
//! | `len`             | O(1)         |
//! | `contains`        | O(log n)     |
//! | `add`             | O(n)         |
//! | `remove`          | O(n)         |
//! | `remove_at`       | O(n)         |
//! | `get_between`     | O(log n + k) |
//! | `remove_between`  | O(n)         |
//! | `get_range`       | O(k)         |
//! | construction      | O(n log n)   |
//!
//! # Examples
//!
//! ```rust
//! use ordseq::sequence::{BoundMode, OrderedUniqueSequence};
//!
//! let mut sequence = OrderedUniqueSequence::from_vec(vec![3, 1, 2, 1, 3]);
//! assert_eq!(sequence.to_vec(), vec![1, 2, 3]);
//!
//! sequence.add(5);
//! sequence.add(4);
//! assert_eq!(sequence.to_string(), "1,2,3,4,5");
//!
//! assert_eq!(sequence.get_between(&2, &4, BoundMode::Exclusive), vec![3]);
//! assert_eq!(sequence.remove_between(&2, &4, BoundMode::Inclusive), vec![2, 3, 4]);
//! assert_eq!(sequence.to_vec(), vec![1, 5]);
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;
use std::ops::Range;

use crate::comparator::{Comparator, NaturalOrder};
use crate::error::SequenceError;

/// Whether range bounds admit elements equal to the bound values.
///
/// # Examples
///
/// ```rust
/// use ordseq::sequence::{BoundMode, OrderedUniqueSequence};
///
/// let sequence = OrderedUniqueSequence::from_vec(vec![1, 2, 3, 4, 5]);
/// assert_eq!(sequence.get_between(&2, &4, BoundMode::Inclusive), vec![2, 3, 4]);
/// assert_eq!(sequence.get_between(&2, &4, BoundMode::Exclusive), vec![3]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum BoundMode {
    /// `lower <= element <= upper`.
    #[default]
    Inclusive,
    /// `lower < element < upper`.
    Exclusive,
}

impl BoundMode {
    /// Maps an `exclusive` flag onto a bound mode.
    #[inline]
    #[must_use]
    pub const fn from_exclusive(exclusive: bool) -> Self {
        if exclusive {
            Self::Exclusive
        } else {
            Self::Inclusive
        }
    }

    /// Returns `true` for [`BoundMode::Exclusive`].
    #[inline]
    #[must_use]
    pub const fn is_exclusive(self) -> bool {
        matches!(self, Self::Exclusive)
    }
}

/// A sorted set of unique elements stored in one contiguous `Vec`.
///
/// # Type Parameters
///
/// * `T` - The element type.
/// * `C` - The [`Comparator`] that orders elements. Defaults to [`NaturalOrder`].
///
/// # Examples
///
/// ```rust
/// use ordseq::sequence::OrderedUniqueSequence;
///
/// let mut sequence = OrderedUniqueSequence::new();
/// sequence.add(30);
/// sequence.add(10);
/// sequence.add(20);
///
/// assert_eq!(sequence.at(0), Some(&10));
/// assert_eq!(sequence.remove_at(1), Some(20));
/// assert_eq!(sequence.to_vec(), vec![10, 30]);
/// ```
#[derive(Clone)]
pub struct OrderedUniqueSequence<T, C = NaturalOrder> {
    elements: Vec<T>,
    comparator: C,
}

static_assertions::assert_impl_all!(OrderedUniqueSequence<i32>: Send, Sync, Clone, Default);
static_assertions::assert_not_impl_any!(OrderedUniqueSequence<std::rc::Rc<i32>>: Send, Sync);

impl<T> OrderedUniqueSequence<T> {
    /// Creates an empty sequence ordered by [`NaturalOrder`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordseq::sequence::OrderedUniqueSequence;
    ///
    /// let sequence: OrderedUniqueSequence<i32> = OrderedUniqueSequence::new();
    /// assert!(sequence.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
            comparator: NaturalOrder,
        }
    }
}

impl<T: Ord> OrderedUniqueSequence<T> {
    /// Creates a sequence from arbitrary input ordered by [`NaturalOrder`].
    ///
    /// The input is sorted and runs of equal elements are collapsed to their
    /// first occurrence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordseq::sequence::OrderedUniqueSequence;
    ///
    /// let sequence = OrderedUniqueSequence::from_vec(vec![7, 7, 7]);
    /// assert_eq!(sequence.to_vec(), vec![7]);
    /// ```
    #[must_use]
    pub fn from_vec(elements: Vec<T>) -> Self {
        Self::from_vec_with(elements, NaturalOrder)
    }
}

impl<T, C: Comparator<T>> OrderedUniqueSequence<T, C> {
    /// Creates an empty sequence ordered by `comparator`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordseq::sequence::OrderedUniqueSequence;
    ///
    /// let mut sequence =
    ///     OrderedUniqueSequence::with_comparator(|left: &f64, right: &f64| left.total_cmp(right));
    /// sequence.add(2.5);
    /// sequence.add(-1.0);
    /// assert_eq!(sequence.to_vec(), vec![-1.0, 2.5]);
    /// ```
    #[inline]
    #[must_use]
    pub const fn with_comparator(comparator: C) -> Self {
        Self {
            elements: Vec::new(),
            comparator,
        }
    }

    /// Creates a sequence from arbitrary input ordered by `comparator`.
    ///
    /// The sort is stable, so among elements that compare equal the one that
    /// appeared first in `elements` is kept.
    #[must_use]
    pub fn from_vec_with(mut elements: Vec<T>, comparator: C) -> Self {
        elements.sort_by(|left, right| comparator.compare(left, right));
        elements.dedup_by(|current, previous| comparator.equivalent(previous, current));
        debug_assert!(is_strictly_sorted(&elements, &comparator));
        Self {
            elements,
            comparator,
        }
    }

    /// Creates a sequence from an iterator ordered by `comparator`.
    #[must_use]
    pub fn from_iter_with<I>(iter: I, comparator: C) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::from_vec_with(iter.into_iter().collect(), comparator)
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the sequence holds no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the comparator that orders this sequence.
    #[inline]
    #[must_use]
    pub const fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Returns the element at `index` in sort order, or `None` if
    /// `index >= len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordseq::sequence::OrderedUniqueSequence;
    ///
    /// let sequence = OrderedUniqueSequence::from_vec(vec![20, 10]);
    /// assert_eq!(sequence.at(1), Some(&20));
    /// assert_eq!(sequence.at(2), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn at(&self, index: usize) -> Option<&T> {
        self.elements.get(index)
    }

    /// Returns the single element at `index`, or `None` when out of range.
    ///
    /// Same as [`at`](Self::at). Use [`get_range`](Self::get_range) to copy
    /// out several elements.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.at(index)
    }

    /// Returns the smallest element, or `None` if empty.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.elements.first()
    }

    /// Returns the largest element, or `None` if empty.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.elements.last()
    }

    /// Borrows the elements as an ascending slice.
    #[inline]
    #[must_use]
    pub const fn as_slice(&self) -> &[T] {
        self.elements.as_slice()
    }

    /// Returns an iterator over the elements in ascending order.
    #[inline]
    pub fn iter(&self) -> OrderedUniqueSequenceIterator<'_, T> {
        OrderedUniqueSequenceIterator {
            inner: self.elements.iter(),
        }
    }

    /// Returns `true` if an element comparing equal to `element` is stored.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordseq::sequence::OrderedUniqueSequence;
    ///
    /// let sequence = OrderedUniqueSequence::from_vec(vec![1, 2, 3]);
    /// assert!(sequence.contains(&2));
    /// assert!(!sequence.contains(&4));
    /// ```
    #[inline]
    #[must_use]
    pub fn contains(&self, element: &T) -> bool {
        self.search(element).is_ok()
    }

    /// Returns the position of the element comparing equal to `element`.
    #[inline]
    #[must_use]
    pub fn index_of(&self, element: &T) -> Option<usize> {
        self.search(element).ok()
    }

    /// Visits every element in ascending order.
    ///
    /// `visit` receives the element, its index, and the full ascending slice
    /// as it stood when iteration started.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordseq::sequence::OrderedUniqueSequence;
    ///
    /// let sequence = OrderedUniqueSequence::from_vec(vec![3, 1, 2]);
    /// let mut visited = Vec::new();
    /// sequence.for_each(|element, index, snapshot| {
    ///     assert_eq!(snapshot.len(), 3);
    ///     visited.push((index, *element));
    /// });
    /// assert_eq!(visited, vec![(0, 1), (1, 2), (2, 3)]);
    /// ```
    pub fn for_each<F>(&self, mut visit: F)
    where
        F: FnMut(&T, usize, &[T]),
    {
        let snapshot = self.elements.as_slice();
        for (index, element) in snapshot.iter().enumerate() {
            visit(element, index, snapshot);
        }
    }

    /// Visits elements in ascending order until `visit` returns an error.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `visit`. Later elements are not
    /// visited.
    pub fn try_for_each<E, F>(&self, mut visit: F) -> Result<(), E>
    where
        F: FnMut(&T, usize, &[T]) -> Result<(), E>,
    {
        let snapshot = self.elements.as_slice();
        for (index, element) in snapshot.iter().enumerate() {
            visit(element, index, snapshot)?;
        }
        Ok(())
    }

    /// Asynchronous traversal. Not implemented; `visit` is never called.
    ///
    /// # Errors
    ///
    /// Always returns [`SequenceError::InvalidOperation`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordseq::error::SequenceError;
    /// use ordseq::sequence::OrderedUniqueSequence;
    ///
    /// let sequence = OrderedUniqueSequence::from_vec(vec![1]);
    /// let result = sequence.for_each_async(|_, _, _| panic!("never called"));
    /// assert!(matches!(result, Err(SequenceError::InvalidOperation { .. })));
    /// ```
    pub fn for_each_async<F>(&self, _visit: F) -> Result<(), SequenceError>
    where
        F: FnMut(&T, usize, &[T]),
    {
        Err(SequenceError::InvalidOperation {
            operation: "for_each_async",
            reason: "asynchronous traversal is not implemented",
        })
    }

    /// Inserts `element` at its sorted position.
    ///
    /// Returns `false` and leaves the sequence unchanged if an equal element
    /// is already stored.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordseq::sequence::OrderedUniqueSequence;
    ///
    /// let mut sequence = OrderedUniqueSequence::new();
    /// assert!(sequence.add(5));
    /// assert!(!sequence.add(5));
    /// assert_eq!(sequence.len(), 1);
    /// ```
    pub fn add(&mut self, element: T) -> bool {
        match self.search(&element) {
            Ok(_) => false,
            Err(position) => {
                self.elements.insert(position, element);
                true
            }
        }
    }

    /// Removes the stored element comparing equal to `element` and returns it.
    ///
    /// The returned value is the stored element, which may differ from
    /// `element` when the comparator treats distinct values as equal.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordseq::sequence::OrderedUniqueSequence;
    ///
    /// let mut sequence = OrderedUniqueSequence::from_vec(vec![1, 2, 3]);
    /// assert_eq!(sequence.remove(&2), Some(2));
    /// assert_eq!(sequence.remove(&2), None);
    /// assert_eq!(sequence.to_vec(), vec![1, 3]);
    /// ```
    pub fn remove(&mut self, element: &T) -> Option<T> {
        self.search(element)
            .ok()
            .map(|position| self.elements.remove(position))
    }

    /// Removes and returns the element at `index`, or `None` if
    /// `index >= len()`.
    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        if index < self.elements.len() {
            Some(self.elements.remove(index))
        } else {
            None
        }
    }

    /// Removes and returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::IndexOutOfRange`] if `index >= len()`.
    pub fn try_remove_at(&mut self, index: usize) -> Result<T, SequenceError> {
        let length = self.elements.len();
        self.remove_at(index)
            .ok_or(SequenceError::IndexOutOfRange { index, length })
    }

    /// Removes every element within the bounds and returns them in
    /// ascending order.
    ///
    /// Bounds that enclose no element leave the sequence unchanged and
    /// return an empty `Vec`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordseq::sequence::{BoundMode, OrderedUniqueSequence};
    ///
    /// let mut sequence = OrderedUniqueSequence::from_vec(vec![1, 2, 3, 4, 5]);
    /// assert_eq!(sequence.remove_between(&2, &4, BoundMode::Inclusive), vec![2, 3, 4]);
    /// assert_eq!(sequence.to_vec(), vec![1, 5]);
    /// ```
    pub fn remove_between(&mut self, lower: &T, upper: &T, mode: BoundMode) -> Vec<T> {
        let range = self.between_positions(lower, upper, mode);
        if range.is_empty() {
            return Vec::new();
        }
        self.elements.drain(range).collect()
    }

    /// Removes all elements.
    #[inline]
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Consumes the sequence and returns its ascending `Vec`.
    #[inline]
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }

    #[inline]
    fn search(&self, element: &T) -> Result<usize, usize> {
        self.elements
            .binary_search_by(|probe| self.comparator.compare(probe, element))
    }

    /// Index range of the elements lying within the bounds.
    ///
    /// The lower cursor advances from the front past elements below
    /// `lower`, and the upper cursor retreats from the back past elements
    /// above `upper`. Neither cursor leaves `0..=len`, and the upper cursor
    /// never passes the lower one, so an empty sequence, a range with no
    /// members, or `lower > upper` all yield an empty range.
    fn between_positions(&self, lower: &T, upper: &T, mode: BoundMode) -> Range<usize> {
        let comparator = &self.comparator;
        let below_lower = |element: &T| {
            let ordering = comparator.compare(element, lower);
            if mode.is_exclusive() {
                ordering.is_le()
            } else {
                ordering.is_lt()
            }
        };
        let within_upper = |element: &T| {
            let ordering = comparator.compare(element, upper);
            if mode.is_exclusive() {
                ordering.is_lt()
            } else {
                ordering.is_le()
            }
        };

        let start = self.elements.partition_point(below_lower);
        let end = start + self.elements[start..].partition_point(within_upper);
        start..end
    }
}

impl<T: Clone, C: Comparator<T>> OrderedUniqueSequence<T, C> {
    /// Returns an ascending copy of every element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordseq::sequence::OrderedUniqueSequence;
    ///
    /// let sequence = OrderedUniqueSequence::from_vec(vec![2, 1]);
    /// let mut snapshot = sequence.to_vec();
    /// snapshot.push(99);
    /// assert_eq!(sequence.to_vec(), vec![1, 2]);
    /// ```
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.elements.clone()
    }

    /// Copies out the elements at positions `start..=end`.
    ///
    /// Returns an empty `Vec` unless `start <= end < len()`. Use
    /// [`try_get_range`](Self::try_get_range) to learn why a range was
    /// rejected.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordseq::sequence::OrderedUniqueSequence;
    ///
    /// let sequence = OrderedUniqueSequence::from_vec(vec![1, 2, 3, 4]);
    /// assert_eq!(sequence.get_range(1, 2), vec![2, 3]);
    /// assert_eq!(sequence.get_range(1, 4), Vec::<i32>::new());
    /// ```
    #[must_use]
    pub fn get_range(&self, start: usize, end: usize) -> Vec<T> {
        self.try_get_range(start, end).unwrap_or_default()
    }

    /// Copies out the elements at positions `start..=end`.
    ///
    /// # Errors
    ///
    /// - [`SequenceError::InvalidRange`] if `start > end`
    /// - [`SequenceError::IndexOutOfRange`] if `end >= len()`
    pub fn try_get_range(&self, start: usize, end: usize) -> Result<Vec<T>, SequenceError> {
        if start > end {
            return Err(SequenceError::InvalidRange { start, end });
        }
        self.elements
            .get(start..=end)
            .map(<[T]>::to_vec)
            .ok_or(SequenceError::IndexOutOfRange {
                index: end,
                length: self.elements.len(),
            })
    }

    /// Copies out every element within the bounds in ascending order.
    #[must_use]
    pub fn get_between(&self, lower: &T, upper: &T, mode: BoundMode) -> Vec<T> {
        let range = self.between_positions(lower, upper, mode);
        self.elements[range].to_vec()
    }
}

impl<T, C: Default> Default for OrderedUniqueSequence<T, C> {
    #[inline]
    fn default() -> Self {
        Self {
            elements: Vec::new(),
            comparator: C::default(),
        }
    }
}

impl<T, C: Comparator<T> + Default> FromIterator<T> for OrderedUniqueSequence<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_iter_with(iter, C::default())
    }
}

impl<T, C: Comparator<T> + Default> From<Vec<T>> for OrderedUniqueSequence<T, C> {
    fn from(elements: Vec<T>) -> Self {
        Self::from_vec_with(elements, C::default())
    }
}

impl<T, C: Comparator<T> + Default, const N: usize> From<[T; N]> for OrderedUniqueSequence<T, C> {
    fn from(elements: [T; N]) -> Self {
        Self::from_vec_with(Vec::from(elements), C::default())
    }
}

impl<T, C: Comparator<T>> Extend<T> for OrderedUniqueSequence<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.add(element);
        }
    }
}

impl<T: fmt::Debug, C> fmt::Debug for OrderedUniqueSequence<T, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.elements.iter()).finish()
    }
}

/// Renders elements in ascending order separated by `,` with no spaces.
///
/// ```rust
/// use ordseq::sequence::OrderedUniqueSequence;
///
/// let sequence = OrderedUniqueSequence::from_vec(vec![3, 1, 2]);
/// assert_eq!(format!("{sequence}"), "1,2,3");
/// ```
impl<T: fmt::Display, C> fmt::Display for OrderedUniqueSequence<T, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for element in &self.elements {
            if first {
                first = false;
            } else {
                write!(formatter, ",")?;
            }
            write!(formatter, "{element}")?;
        }
        Ok(())
    }
}

impl<T: PartialEq, C> PartialEq for OrderedUniqueSequence<T, C> {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

impl<T: Eq, C> Eq for OrderedUniqueSequence<T, C> {}

impl<T: Hash, C> Hash for OrderedUniqueSequence<T, C> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.elements.hash(state);
    }
}

/// Iterator over references to elements in ascending order.
pub struct OrderedUniqueSequenceIterator<'a, T> {
    inner: std::slice::Iter<'a, T>,
}

impl<'a, T> Iterator for OrderedUniqueSequenceIterator<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for OrderedUniqueSequenceIterator<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for OrderedUniqueSequenceIterator<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for OrderedUniqueSequenceIterator<'_, T> {}

/// Owning iterator over elements in ascending order.
pub struct OrderedUniqueSequenceIntoIterator<T> {
    inner: std::vec::IntoIter<T>,
}

impl<T> Iterator for OrderedUniqueSequenceIntoIterator<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for OrderedUniqueSequenceIntoIterator<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for OrderedUniqueSequenceIntoIterator<T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for OrderedUniqueSequenceIntoIterator<T> {}

impl<'a, T, C: Comparator<T>> IntoIterator for &'a OrderedUniqueSequence<T, C> {
    type Item = &'a T;
    type IntoIter = OrderedUniqueSequenceIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, C> IntoIterator for OrderedUniqueSequence<T, C> {
    type Item = T;
    type IntoIter = OrderedUniqueSequenceIntoIterator<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        OrderedUniqueSequenceIntoIterator {
            inner: self.elements.into_iter(),
        }
    }
}

// =============================================================================
// Serde
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize, C> serde::Serialize for OrderedUniqueSequence<T, C> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut sequence = serializer.serialize_seq(Some(self.elements.len()))?;
        for element in &self.elements {
            sequence.serialize_element(element)?;
        }
        sequence.end()
    }
}

#[cfg(feature = "serde")]
struct OrderedUniqueSequenceVisitor<T, C> {
    marker: std::marker::PhantomData<(T, C)>,
}

#[cfg(feature = "serde")]
impl<T, C> OrderedUniqueSequenceVisitor<T, C> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T, C> serde::de::Visitor<'de> for OrderedUniqueSequenceVisitor<T, C>
where
    T: serde::Deserialize<'de>,
    C: Comparator<T> + Default,
{
    type Value = OrderedUniqueSequence<T, C>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        // Input order is untrusted; construction re-sorts and deduplicates.
        let mut elements = Vec::with_capacity(access.size_hint().unwrap_or(0).min(4096));
        while let Some(element) = access.next_element()? {
            elements.push(element);
        }
        Ok(OrderedUniqueSequence::from_vec_with(elements, C::default()))
    }
}

#[cfg(feature = "serde")]
impl<'de, T, C> serde::Deserialize<'de> for OrderedUniqueSequence<T, C>
where
    T: serde::Deserialize<'de>,
    C: Comparator<T> + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(OrderedUniqueSequenceVisitor::new())
    }
}

fn is_strictly_sorted<T, C: Comparator<T>>(elements: &[T], comparator: &C) -> bool {
    elements
        .windows(2)
        .all(|window| comparator.compare(&window[0], &window[1]).is_lt())
}

// =============================================================================
// Tests
// =============================================================================
