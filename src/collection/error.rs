//! Error types for the collection module.
//!
//! Every fallible [`Array`](super::Array) operation fails for exactly one
//! reason: the requested index or range lies outside the current bounds.
//! [`OutOfRangeError`] records which operation was called, what was
//! requested, and how long the array was at the time of the call.

use std::fmt;

/// The position or range a caller asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Requested {
    /// A single element index. Valid when `index < length`.
    Index(usize),
    /// A half-open range `start..end`. Valid when `start <= end <= length`.
    Range {
        /// Inclusive lower bound.
        start: usize,
        /// Exclusive upper bound. Saturates at `usize::MAX` on overflow.
        end: usize,
    },
}

impl fmt::Display for Requested {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(formatter, "index {index}"),
            Self::Range { start, end } => write!(formatter, "range {start}..{end}"),
        }
    }
}

/// Represents an index or range that falls outside an array's bounds.
///
/// # Examples
///
/// ```rust
/// use kitbag::collection::{Array, OutOfRangeError, Requested};
///
/// let array = Array::from(vec![1, 2, 3]);
/// let error = array.at(5).unwrap_err();
///
/// assert_eq!(
///     error,
///     OutOfRangeError {
///         operation: "Array::at",
///         requested: Requested::Index(5),
///         length: 3,
///     }
/// );
/// assert_eq!(
///     format!("{error}"),
///     "Array::at: index 5 out of range for length 3"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OutOfRangeError {
    /// The name of the operation that rejected the request.
    pub operation: &'static str,
    /// The index or range that was requested.
    pub requested: Requested,
    /// The length of the array when the request was made.
    pub length: usize,
}

impl OutOfRangeError {
    pub(crate) fn index(operation: &'static str, index: usize, length: usize) -> Self {
        tracing::debug!(operation, index, length, "index out of range");
        Self {
            operation,
            requested: Requested::Index(index),
            length,
        }
    }

    pub(crate) fn range(operation: &'static str, start: usize, end: usize, length: usize) -> Self {
        tracing::debug!(operation, start, end, length, "range out of range");
        Self {
            operation,
            requested: Requested::Range { start, end },
            length,
        }
    }
}

impl fmt::Display for OutOfRangeError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "{}: {} out of range for length {}",
            self.operation, self.requested, self.length
        )
    }
}

impl std::error::Error for OutOfRangeError {}
