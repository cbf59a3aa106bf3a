//! Mutable, lock-guarded collections.
//!
//! This module provides:
//!
//! - [`Array`]: an insertion-ordered sequence with positional access,
//!   push/pop, slicing, splicing, search, and filtering, safe to share
//!   between threads
//! - [`OutOfRangeError`]: the single failure mode of [`Array`] operations
//!
//! # Examples
//!
//! ```rust
//! use kitbag::collection::Array;
//!
//! let array = Array::new();
//! array.push_all([1, 2, 3, 4]);
//!
//! assert_eq!(array.filter(|value| value % 2 == 0), vec![2, 4]);
//! assert_eq!(array.index_of(&3), Some(2));
//!
//! // Round-trip: removing a range and re-inserting it restores the array
//! let removed = array.splice(1, 2, []).unwrap();
//! array.splice(1, 0, removed).unwrap();
//! assert_eq!(array.to_vec(), vec![1, 2, 3, 4]);
//! ```

mod array;
mod error;

pub use array::Array;
pub use error::{OutOfRangeError, Requested};
