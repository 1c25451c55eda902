//! Error types for sorted sequence operations.
//!
//! Most lookups on [`OrderedUniqueSequence`](crate::sequence::OrderedUniqueSequence)
//! report a missing element with `None` or an empty `Vec`. The `try_*`
//! variants and unsupported operations return [`SequenceError`] instead, so
//! callers can tell "nothing matched" apart from "the request was invalid".

use std::fmt;

/// Represents errors that can occur when querying or mutating a sequence.
///
/// # Examples
///
/// ```rust
/// use ordseq::error::SequenceError;
///
/// let error = SequenceError::IndexOutOfRange { index: 5, length: 3 };
/// assert_eq!(format!("{error}"), "index 5 is out of range for length 3");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    /// The operation cannot be performed on this collection.
    InvalidOperation {
        /// The name of the rejected operation.
        operation: &'static str,
        /// Why the operation was rejected.
        reason: &'static str,
    },
    /// An index was outside `0..length`.
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The length of the sequence at the time of the call.
        length: usize,
    },
    /// A range whose start lies after its end.
    InvalidRange {
        /// The requested start index.
        start: usize,
        /// The requested end index.
        end: usize,
    },
}

impl fmt::Display for SequenceError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidOperation { operation, reason } => {
                write!(formatter, "invalid operation {operation}: {reason}")
            }
            Self::IndexOutOfRange { index, length } => {
                write!(formatter, "index {index} is out of range for length {length}")
            }
            Self::InvalidRange { start, end } => {
                write!(formatter, "range start {start} is greater than end {end}")
            }
        }
    }
}

impl std::error::Error for SequenceError {}
