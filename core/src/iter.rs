//! A position-tracking cursor over an owned snapshot of a sequence.
//!
//! [`Cursor`] carries a read position that only moves forward. Operations
//! that derive a new sequence (`take`, `filter`, `map`, `flat_map`) return a
//! fresh cursor over freshly materialized elements, positioned at `0`, and
//! leave the receiver untouched. Stepping through elements one at a time goes
//! through [`Steps`], which moves the cursor as it yields.
//!
//! # Example
//!
//! ```
//! use polyfill_core::Cursor;
//!
//! let mut cursor = Cursor::new(vec![1, 2, 3]);
//! cursor.drop(1);
//! assert_eq!(cursor.to_vec(), vec![2, 3]);
//! assert_eq!(cursor.map(|_, x| x * 10).to_vec(), vec![20, 30]);
//!
//! assert_eq!(cursor.steps().next(), Some(2));
//! assert_eq!(cursor.position(), 2);
//! ```

use core::iter::FusedIterator;

use crate::{Vec, array, error::RangeError, nested::Nested};

/// Cursor over an owned sequence snapshot.
///
/// Callbacks receive the position of the element in the snapshot (not its
/// offset from the cursor), alongside a reference to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cursor<T> {
    elements: Vec<T>,
    // invariant: index <= elements.len()
    index: usize,
    error: Option<RangeError>,
}

impl<T> Cursor<T> {
    pub fn new(elements: Vec<T>) -> Self {
        Self {
            elements,
            index: 0,
            error: None,
        }
    }

    /// Current read position in `[0, size]`.
    pub fn position(&self) -> usize {
        self.index
    }

    /// Length of the whole snapshot, consumed elements included.
    pub fn size(&self) -> usize {
        self.elements.len()
    }

    /// Number of elements not consumed yet.
    pub fn remaining(&self) -> usize {
        self.elements.len() - self.index
    }

    pub fn is_exhausted(&self) -> bool {
        self.index == self.elements.len()
    }

    /// The sticky error recorded by an invalid [`drop`](Self::drop), if any.
    ///
    /// The error is never cleared.
    pub fn error(&self) -> Option<&RangeError> {
        self.error.as_ref()
    }

    /// The elements not consumed yet.
    pub fn as_slice(&self) -> &[T] {
        &self.elements[self.index..]
    }

    /// Skip `limit` elements.
    ///
    /// A negative `limit` records [`RangeError::NegativeDrop`] and leaves the
    /// position unchanged. Once an error is recorded, every later `drop` is a
    /// no-op. Skipping past the end stops at the end.
    pub fn drop(&mut self, limit: isize) -> &mut Self {
        if self.error.is_some() {
            return self;
        }
        if limit < 0 {
            tracing::debug!(limit, "negative drop limit, cursor error is now set");
            self.error = Some(RangeError::NegativeDrop { limit });
            return self;
        }

        let limit = limit.unsigned_abs();
        if limit > self.remaining() {
            tracing::debug!(
                limit,
                remaining = self.remaining(),
                "drop limit past the end, clamping"
            );
        }
        self.index += limit.min(self.remaining());
        self
    }

    /// The first remaining element that passes `predicate`.
    ///
    /// Does not move the cursor, whether or not an element is found.
    pub fn find<F>(&self, mut predicate: F) -> Option<&T>
    where
        F: FnMut(usize, &T) -> bool,
    {
        let start = self.index;
        array::find(self.as_slice(), |offset, element| {
            predicate(start + offset, element)
        })
    }

    /// Whether any remaining element passes `predicate`. Does not move the cursor.
    pub fn some<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(usize, &T) -> bool,
    {
        let start = self.index;
        array::some(self.as_slice(), |offset, element| {
            predicate(start + offset, element)
        })
    }

    /// Whether every remaining element passes `predicate`.
    ///
    /// Always leaves the cursor exhausted, even when the scan stops early.
    /// An already exhausted cursor passes vacuously, the same as
    /// [`array::every`] on an empty slice, rather than reporting `false`.
    pub fn every<F>(&mut self, mut predicate: F) -> bool
    where
        F: FnMut(usize, &T) -> bool,
    {
        let start = self.index;
        let passed = array::every(self.as_slice(), |offset, element| {
            predicate(start + offset, element)
        });
        self.index = self.elements.len();
        passed
    }

    /// Fold the remaining elements left to right. Does not move the cursor.
    pub fn reduce<A, F>(&self, f: F, initial: A) -> A
    where
        F: FnMut(A, &T) -> A,
    {
        array::reduce(self.as_slice(), f, initial)
    }

    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(usize, &T),
    {
        let start = self.index;
        array::for_each(self.as_slice(), |offset, element| f(start + offset, element));
    }

    /// Step through the remaining elements, advancing the cursor past each
    /// element as it is yielded.
    pub fn steps(&mut self) -> Steps<'_, T> {
        Steps { cursor: self }
    }

    /// A new cursor over the remaining elements transformed by `f`.
    pub fn map<U, F>(&self, mut f: F) -> Cursor<U>
    where
        F: FnMut(usize, &T) -> U,
    {
        let start = self.index;
        Cursor::new(array::map(self.as_slice(), |offset, element| {
            f(start + offset, element)
        }))
    }

    /// A new cursor over the remaining elements mapped by `f` and flattened
    /// one level.
    pub fn flat_map<U, F>(&self, mut f: F) -> Cursor<Nested<U>>
    where
        F: FnMut(usize, &T) -> Nested<U>,
    {
        let start = self.index;
        Cursor::new(array::flat_map(self.as_slice(), |offset, element| {
            f(start + offset, element)
        }))
    }
}

impl<T: Clone> Cursor<T> {
    /// A new cursor over the next `limit` elements. Does not move the cursor.
    ///
    /// A `limit` past the end is clamped to the remaining elements.
    pub fn take(&self, limit: usize) -> Cursor<T> {
        if limit > self.remaining() {
            tracing::debug!(
                limit,
                remaining = self.remaining(),
                "take limit past the end, clamping"
            );
        }
        let end = self.index + limit.min(self.remaining());
        Cursor::new(self.elements[self.index..end].to_vec())
    }

    /// A new cursor over the remaining elements that pass `predicate`.
    pub fn filter<F>(&self, mut predicate: F) -> Cursor<T>
    where
        F: FnMut(usize, &T) -> bool,
    {
        let start = self.index;
        Cursor::new(array::filter(self.as_slice(), |offset, element| {
            predicate(start + offset, element)
        }))
    }

    /// Copy the remaining elements into a new `Vec`, independent of the cursor.
    pub fn to_vec(&self) -> Vec<T> {
        self.as_slice().to_vec()
    }
}

impl<T> From<Vec<T>> for Cursor<T> {
    fn from(elements: Vec<T>) -> Self {
        Self::new(elements)
    }
}

impl<T> FromIterator<T> for Cursor<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Iterator over the remaining elements of a [`Cursor`].
///
/// Each `next` returns a clone of the element at the cursor position and
/// advances past it; once exhausted it keeps returning `None`. Stopping early
/// leaves the cursor right after the last yielded element.
#[derive(Debug)]
pub struct Steps<'a, T> {
    cursor: &'a mut Cursor<T>,
}

impl<T: Clone> Iterator for Steps<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let element = self.cursor.elements.get(self.cursor.index)?.clone();
        self.cursor.index += 1;
        Some(element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.cursor.remaining();
        (remaining, Some(remaining))
    }
}

impl<T: Clone> ExactSizeIterator for Steps<'_, T> {}

impl<T: Clone> FusedIterator for Steps<'_, T> {}

impl<'a, T: Clone> IntoIterator for &'a mut Cursor<T> {
    type Item = T;
    type IntoIter = Steps<'a, T>;

    fn into_iter(self) -> Steps<'a, T> {
        self.steps()
    }
}

/// Yields the remaining elements by value.
impl<T> IntoIterator for Cursor<T> {
    type Item = T;
    type IntoIter = alloc::vec::IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        self.elements.split_off(self.index).into_iter()
    }
}

#[cfg(test)]
#[path = "iter_test.rs"]
mod iter_test;
