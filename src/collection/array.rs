//! Lock-guarded ordered array.
//!
//! This module provides [`Array`], an insertion-ordered sequence that can be
//! shared between threads and mutated through `&self`. It supports positional
//! access, end-based push/pop, range extraction, in-place splicing, linear
//! search, filtering, and ordered traversal.
//!
//! # Locking
//!
//! Every operation acquires the same [`parking_lot::RwLock`]. Structural
//! mutations (`push`, `push_all`, `pop`, `take`, `set`, `splice`, `clear`)
//! take the exclusive side; queries take the shared side. Two concurrent
//! splices are therefore mutually exclusive, and no query ever observes a
//! half-applied mutation.
//!
//! Queries acquire the shared side recursively: a reader never queues behind
//! a waiting writer while any shared guard is held. Predicates passed to
//! [`Array::find`], [`Array::position`], and [`Array::filter`] may therefore
//! read the same array, but must not mutate it. [`Array::for_each`] iterates
//! over a snapshot, so its callback may. Under a continuous stream of readers
//! a writer can wait until the readers drain.
//!
//! # Absent Values
//!
//! Operations that can legitimately produce nothing (`pop` on an empty array,
//! `find` or `index_of` without a match) return `Option`. Only index and range
//! violations are errors, reported as [`OutOfRangeError`].
//!
//! # Time Complexity
//!
//! | Operation        | Complexity                      |
//! |------------------|---------------------------------|
//! | `at` / `get`     | O(1)                            |
//! | `first` / `last` | O(1)                            |
//! | `push`           | O(1) amortized                  |
//! | `pop`            | O(1)                            |
//! | `take`           | O(n)                            |
//! | `splice`         | O(n + inserted)                 |
//! | `slice`          | O(end - start)                  |
//! | `contains`       | O(n)                            |
//! | `index_of`       | O(n)                            |
//! | `find`           | O(n)                            |
//! | `filter`         | O(n)                            |
//! | `for_each`       | O(n) plus an O(n) snapshot      |
//!
//! # Examples
//!
//! ```rust
//! use kitbag::collection::Array;
//!
//! let array = Array::from(["a", "b", "c"]);
//!
//! let removed = array.splice(1, 1, ["x", "y"]).unwrap();
//! assert_eq!(removed.to_vec(), vec!["b"]);
//! assert_eq!(array.to_vec(), vec!["a", "x", "y", "c"]);
//!
//! assert_eq!(array.take(0), Ok("a"));
//! assert_eq!(array.pop(), Some("c"));
//! assert_eq!(array.to_vec(), vec!["x", "y"]);
//! ```

use std::fmt;
use std::ops::{Bound, RangeBounds};

use parking_lot::{RwLock, RwLockReadGuard};

use super::OutOfRangeError;

/// An insertion-ordered sequence guarded by a single reader-writer lock.
///
/// `Array<T>` owns its elements exclusively. Sub-sequences returned by
/// [`slice`](Array::slice) and [`splice`](Array::splice) are independent
/// arrays, never views into the original.
///
/// The element type must implement `PartialEq`; equality drives
/// [`contains`](Array::contains) and [`index_of`](Array::index_of).
/// Accessors that hand out elements (`at`, `first`, `find`, ...) return
/// clones, because no reference may outlive the lock guard.
///
/// # Thread Safety
///
/// `Array<T>` is `Send + Sync` whenever `T: Send + Sync`. Share it with
/// `Arc<Array<T>>`.
///
/// # Examples
///
/// ```rust
/// use kitbag::collection::Array;
/// use std::sync::Arc;
/// use std::thread;
///
/// let array = Arc::new(Array::new());
///
/// let handles: Vec<_> = (0..4)
///     .map(|worker| {
///         let array = Arc::clone(&array);
///         thread::spawn(move || {
///             array.push(worker);
///         })
///     })
///     .collect();
///
/// for handle in handles {
///     handle.join().unwrap();
/// }
///
/// assert_eq!(array.len(), 4);
/// ```
pub struct Array<T: PartialEq> {
    elements: RwLock<Vec<T>>,
}

static_assertions::assert_impl_all!(Array<i32>: Send, Sync);
static_assertions::assert_impl_all!(Array<String>: Send, Sync);

impl<T: PartialEq> Array<T> {
    /// Creates a new empty array.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kitbag::collection::Array;
    ///
    /// let array: Array<i32> = Array::new();
    /// assert!(array.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::from(Vec::new())
    }

    /// Creates a new empty array with room for `capacity` elements.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from(Vec::with_capacity(capacity))
    }

    /// Returns the number of elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kitbag::collection::Array;
    ///
    /// let array = Array::from(vec![1, 2, 3]);
    /// assert_eq!(array.len(), 3);
    /// ```
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.shared().len()
    }

    /// Returns `true` if the array contains no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shared().is_empty()
    }

    /// Acquires the shared lock without queueing behind waiting writers, so
    /// queries nested inside a predicate cannot deadlock.
    #[inline]
    fn shared(&self) -> RwLockReadGuard<'_, Vec<T>> {
        self.elements.read_recursive()
    }

    /// Appends a value to the end of the array and returns its index.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kitbag::collection::Array;
    ///
    /// let array = Array::new();
    /// assert_eq!(array.push('a'), 0);
    /// assert_eq!(array.push('b'), 1);
    /// ```
    pub fn push(&self, value: T) -> usize {
        let mut elements = self.elements.write();
        elements.push(value);
        elements.len() - 1
    }

    /// Appends every value, in iteration order, under a single lock.
    ///
    /// Returns the index of the last element after the append, or `None` if
    /// the array is still empty (nothing was pushed onto an empty array).
    ///
    /// The values are collected before the lock is taken, so the iterator may
    /// read from this same array.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kitbag::collection::Array;
    ///
    /// let array = Array::new();
    /// assert_eq!(array.push_all(["a", "b", "c"]), Some(2));
    /// assert_eq!(array.len(), 3);
    ///
    /// let empty: Array<i32> = Array::new();
    /// assert_eq!(empty.push_all([]), None);
    /// ```
    pub fn push_all<I>(&self, values: I) -> Option<usize>
    where
        I: IntoIterator<Item = T>,
    {
        let values: Vec<T> = values.into_iter().collect();
        let mut elements = self.elements.write();
        elements.extend(values);
        elements.len().checked_sub(1)
    }

    /// Removes and returns the last element, or `None` if the array is empty.
    ///
    /// An empty array is left unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kitbag::collection::Array;
    ///
    /// let array = Array::from(vec![1, 2, 3]);
    /// assert_eq!(array.pop(), Some(3));
    /// assert_eq!(array.to_vec(), vec![1, 2]);
    ///
    /// let empty: Array<i32> = Array::new();
    /// assert_eq!(empty.pop(), None);
    /// ```
    pub fn pop(&self) -> Option<T> {
        self.elements.write().pop()
    }

    /// Removes every element.
    pub fn clear(&self) {
        let mut elements = self.elements.write();
        tracing::trace!(removed = elements.len(), "clearing array");
        elements.clear();
    }

    /// Removes the element at `index` and returns it.
    ///
    /// Equivalent to [`at`](Self::at) followed by a one-element
    /// [`splice`](Self::splice), performed under one exclusive lock so that
    /// no other mutation can slip in between the read and the removal.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRangeError`] if `index >= len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kitbag::collection::Array;
    ///
    /// let array = Array::from(vec!['a', 'b', 'c']);
    /// assert_eq!(array.take(0), Ok('a'));
    /// assert_eq!(array.to_vec(), vec!['b', 'c']);
    /// assert!(array.take(2).is_err());
    /// ```
    pub fn take(&self, index: usize) -> Result<T, OutOfRangeError> {
        let mut elements = self.elements.write();
        let length = elements.len();
        if index >= length {
            return Err(OutOfRangeError::index("Array::take", index, length));
        }
        tracing::trace!(index, length, "taking element");
        Ok(elements.remove(index))
    }

    /// Replaces the element at `index` and returns the previous value.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRangeError`] if `index >= len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kitbag::collection::Array;
    ///
    /// let array = Array::from(vec![1, 2, 3]);
    /// assert_eq!(array.set(1, 20), Ok(2));
    /// assert_eq!(array.to_vec(), vec![1, 20, 3]);
    /// ```
    pub fn set(&self, index: usize, value: T) -> Result<T, OutOfRangeError> {
        let mut elements = self.elements.write();
        let length = elements.len();
        elements
            .get_mut(index)
            .map(|slot| std::mem::replace(slot, value))
            .ok_or_else(|| OutOfRangeError::index("Array::set", index, length))
    }

    /// Removes `remove_count` elements starting at `offset`, inserts `values`
    /// in their place, and returns the removed elements as a new array.
    ///
    /// The whole operation runs under the exclusive lock: bounds are validated
    /// first, so a rejected splice leaves the array untouched. The relative
    /// order of the surrounding elements and of the inserted values is
    /// preserved, and the length changes by `values.len() - remove_count`.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRangeError`] if `offset + remove_count > len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kitbag::collection::Array;
    ///
    /// let array = Array::from(vec![1, 2, 3]);
    /// let removed = array.splice(1, 1, [8, 9]).unwrap();
    ///
    /// assert_eq!(removed.to_vec(), vec![2]);
    /// assert_eq!(array.to_vec(), vec![1, 8, 9, 3]);
    ///
    /// // Pure insertion
    /// array.splice(0, 0, [0]).unwrap();
    /// assert_eq!(array.to_vec(), vec![0, 1, 8, 9, 3]);
    ///
    /// // Rejected splices do not mutate
    /// assert!(array.splice(4, 2, [7]).is_err());
    /// assert_eq!(array.len(), 5);
    /// ```
    pub fn splice<I>(
        &self,
        offset: usize,
        remove_count: usize,
        values: I,
    ) -> Result<Self, OutOfRangeError>
    where
        I: IntoIterator<Item = T>,
    {
        let values: Vec<T> = values.into_iter().collect();
        let mut elements = self.elements.write();
        let length = elements.len();

        let end = offset
            .checked_add(remove_count)
            .filter(|&end| end <= length)
            .ok_or_else(|| {
                OutOfRangeError::range(
                    "Array::splice",
                    offset,
                    offset.saturating_add(remove_count),
                    length,
                )
            })?;

        let inserted = values.len();
        let removed: Vec<T> = elements.splice(offset..end, values).collect();
        tracing::trace!(
            offset,
            removed = removed.len(),
            inserted,
            length = elements.len(),
            "spliced array"
        );

        Ok(Self::from(removed))
    }

    /// Returns `true` if an element equal to `value` exists.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kitbag::collection::Array;
    ///
    /// let array = Array::from(vec!["a", "b"]);
    /// assert!(array.contains(&"a"));
    /// assert!(!array.contains(&"z"));
    /// ```
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.shared().contains(value)
    }

    /// Returns the index of the first element equal to `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kitbag::collection::Array;
    ///
    /// let array = Array::from(vec!['a', 'b', 'c', 'b']);
    /// assert_eq!(array.index_of(&'b'), Some(1));
    /// assert_eq!(array.index_of(&'z'), None);
    /// ```
    #[must_use]
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.shared()
            .iter()
            .position(|element| element == value)
    }

    /// Returns the index of the first element satisfying `predicate`.
    ///
    /// The predicate runs under the shared lock. It may read this array but
    /// must not mutate it.
    pub fn position<P>(&self, mut predicate: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        self.shared()
            .iter()
            .position(|element| predicate(element))
    }

    /// Calls `function` with a borrow of the elements under the shared lock.
    ///
    /// This is the zero-copy way to inspect the whole array. `function` may
    /// read this array but must not mutate it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kitbag::collection::Array;
    ///
    /// let array = Array::from(vec![1, 2, 3]);
    /// let sum: i32 = array.read_with(|elements| elements.iter().sum());
    /// assert_eq!(sum, 6);
    /// ```
    pub fn read_with<R, F>(&self, function: F) -> R
    where
        F: FnOnce(&[T]) -> R,
    {
        function(&self.shared())
    }

    /// Consumes the array and returns the backing vector.
    #[inline]
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.elements.into_inner()
    }
}

impl<T: PartialEq + Clone> Array<T> {
    /// Returns a clone of the first element.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRangeError`] if the array is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kitbag::collection::Array;
    ///
    /// let array = Array::from(vec![1, 2, 3]);
    /// assert_eq!(array.first(), Ok(1));
    ///
    /// let empty: Array<i32> = Array::new();
    /// assert!(empty.first().is_err());
    /// ```
    pub fn first(&self) -> Result<T, OutOfRangeError> {
        let elements = self.shared();
        elements
            .first()
            .cloned()
            .ok_or_else(|| OutOfRangeError::index("Array::first", 0, 0))
    }

    /// Returns a clone of the last element.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRangeError`] if the array is empty.
    pub fn last(&self) -> Result<T, OutOfRangeError> {
        let elements = self.shared();
        elements
            .last()
            .cloned()
            .ok_or_else(|| OutOfRangeError::index("Array::last", 0, 0))
    }

    /// Returns a clone of the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRangeError`] if `index >= len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kitbag::collection::Array;
    ///
    /// let array = Array::from(vec!["a", "b", "c"]);
    /// assert_eq!(array.at(2), Ok("c"));
    /// assert!(array.at(3).is_err());
    /// ```
    pub fn at(&self, index: usize) -> Result<T, OutOfRangeError> {
        let elements = self.shared();
        elements
            .get(index)
            .cloned()
            .ok_or_else(|| OutOfRangeError::index("Array::at", index, elements.len()))
    }

    /// Alias for [`at`](Self::at).
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRangeError`] if `index >= len()`.
    #[inline]
    pub fn get(&self, index: usize) -> Result<T, OutOfRangeError> {
        self.at(index)
    }

    /// Returns a new array holding a copy of the elements in `range`.
    ///
    /// The source is not modified, and the result shares no storage with it.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRangeError`] if the range starts after it ends or ends
    /// past `len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kitbag::collection::Array;
    ///
    /// let array = Array::from(vec!['a', 'b', 'c', 'd']);
    ///
    /// assert_eq!(array.slice(1..3).unwrap().to_vec(), vec!['b', 'c']);
    /// assert_eq!(array.slice(1..).unwrap().to_vec(), vec!['b', 'c', 'd']);
    /// assert_eq!(array.slice(4..).unwrap().len(), 0);
    /// assert!(array.slice(2..5).is_err());
    /// assert_eq!(array.len(), 4);
    /// ```
    pub fn slice<R>(&self, range: R) -> Result<Self, OutOfRangeError>
    where
        R: RangeBounds<usize>,
    {
        let elements = self.shared();
        let length = elements.len();
        let (start, end) = resolve_range(&range, length);

        if start > end || end > length {
            return Err(OutOfRangeError::range("Array::slice", start, end, length));
        }

        Ok(Self::from(elements[start..end].to_vec()))
    }

    /// Returns a clone of the first element satisfying `predicate`.
    ///
    /// The predicate runs under the shared lock. It may read this array but
    /// must not mutate it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kitbag::collection::Array;
    ///
    /// let array = Array::from(vec![1, 2, 3, 4]);
    /// assert_eq!(array.find(|value| value % 2 == 0), Some(2));
    /// assert_eq!(array.find(|value| *value > 10), None);
    /// ```
    pub fn find<P>(&self, mut predicate: P) -> Option<T>
    where
        P: FnMut(&T) -> bool,
    {
        self.shared()
            .iter()
            .find(|element| predicate(element))
            .cloned()
    }

    /// Returns clones of every element satisfying `predicate`, in order.
    ///
    /// The predicate runs under the shared lock. It may read this array but
    /// must not mutate it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kitbag::collection::Array;
    ///
    /// let array = Array::from(vec![1, 2, 3, 4]);
    /// assert_eq!(array.filter(|value| value % 2 == 0), vec![2, 4]);
    /// ```
    pub fn filter<P>(&self, mut predicate: P) -> Vec<T>
    where
        P: FnMut(&T) -> bool,
    {
        self.shared()
            .iter()
            .filter(|element| predicate(element))
            .cloned()
            .collect()
    }

    /// Calls `callback(element, index)` for every element in order.
    ///
    /// Iteration runs over a snapshot taken under the shared lock, which is
    /// released before the first callback. The callback may therefore mutate
    /// this array; such mutations are not observed by the ongoing iteration.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kitbag::collection::Array;
    ///
    /// let array = Array::from(vec![10, 20]);
    /// array.for_each(|value, index| {
    ///     array.push(value + index as i32);
    /// });
    /// assert_eq!(array.to_vec(), vec![10, 20, 10, 21]);
    /// ```
    pub fn for_each<F>(&self, mut callback: F)
    where
        F: FnMut(&T, usize),
    {
        let snapshot = self.to_vec();
        for (index, element) in snapshot.iter().enumerate() {
            callback(element, index);
        }
    }

    /// Returns a copy of the current elements.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.shared().clone()
    }
}

/// Resolves `range` against `length` into half-open `(start, end)` bounds.
///
/// Bounds are not validated here; overflowing inclusive bounds saturate so
/// that validation rejects them.
fn resolve_range<R: RangeBounds<usize>>(range: &R, length: usize) -> (usize, usize) {
    let start = match range.start_bound() {
        Bound::Included(&start) => start,
        Bound::Excluded(&start) => start.saturating_add(1),
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&end) => end.saturating_add(1),
        Bound::Excluded(&end) => end,
        Bound::Unbounded => length,
    };
    (start, end)
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T: PartialEq> Default for Array<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> From<Vec<T>> for Array<T> {
    fn from(elements: Vec<T>) -> Self {
        Self {
            elements: RwLock::new(elements),
        }
    }
}

impl<T: PartialEq, const N: usize> From<[T; N]> for Array<T> {
    fn from(elements: [T; N]) -> Self {
        Self::from(Vec::from(elements))
    }
}

impl<T: PartialEq> FromIterator<T> for Array<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<T>>())
    }
}

impl<T: PartialEq> Extend<T> for Array<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.elements.get_mut().extend(iter);
    }
}

impl<T: PartialEq> IntoIterator for Array<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl<T: PartialEq + Clone> Clone for Array<T> {
    fn clone(&self) -> Self {
        Self::from(self.to_vec())
    }
}

impl<T: PartialEq> PartialEq for Array<T> {
    fn eq(&self, other: &Self) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }
        let left = self.shared();
        let right = other.shared();
        *left == *right
    }
}

impl<T: Eq> Eq for Array<T> {}

impl<T: PartialEq + fmt::Debug> fmt::Debug for Array<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_list()
            .entries(self.shared().iter())
            .finish()
    }
}

impl<T: PartialEq + fmt::Display> fmt::Display for Array<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let elements = self.shared();
        write!(formatter, "[")?;
        let mut first = true;
        for element in elements.iter() {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: PartialEq + serde::Serialize> serde::Serialize for Array<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let elements = self.shared();
        let mut seq = serializer.serialize_seq(Some(elements.len()))?;
        for element in elements.iter() {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct ArrayVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<T> ArrayVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for ArrayVisitor<T>
where
    T: PartialEq + serde::Deserialize<'de>,
{
    type Value = Array<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut elements = Vec::with_capacity(capacity);
        while let Some(element) = seq.next_element()? {
            elements.push(element);
        }
        Ok(Array::from(elements))
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Array<T>
where
    T: PartialEq + serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(ArrayVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================
