//! Element access, views and construction of new sequences.

use core::ops::RangeBounds;

use crate::{
    Vec,
    error::RangeError,
    iter::Cursor,
    normalize::{normalize_range, resolve_index},
};

// ============================================================================
// Element Access
// ============================================================================

/// Get the element at `index`, counting from the end when negative.
///
/// # Examples
/// - `at(&[1, 2, 3, 4], -1)` → `Some(&4)`
/// - `at(&[1, 2, 3, 4], 5)` → `None`
/// - `at(&[1, 2, 3, 4], -5)` → `None`
pub fn at<T>(arr: &[T], index: isize) -> Option<&T> {
    resolve_index(index, arr.len()).map(|index| &arr[index])
}

/// Copy the sequence with the element at `index` replaced by `element`.
///
/// Unlike the range-based operations, an out-of-range index cannot be
/// clamped into something meaningful, so it is reported.
///
/// # Errors
/// - [`RangeError::IndexOutOfRange`] if `index` is outside `[-len, len)`.
pub fn with<T: Clone>(arr: &[T], index: isize, element: T) -> Result<Vec<T>, RangeError> {
    let Some(position) = resolve_index(index, arr.len()) else {
        tracing::debug!(index, len = arr.len(), "rejected out-of-range replacement");
        return Err(RangeError::IndexOutOfRange {
            index,
            len: arr.len(),
        });
    };
    let mut result = arr.to_vec();
    result[position] = element;
    Ok(result)
}

/// The indices of the sequence, `0..len`.
pub fn keys<T>(arr: &[T]) -> Vec<usize> {
    (0..arr.len()).collect()
}

/// A cursor over `(index, element)` pairs of a snapshot of the sequence.
pub fn entries<T: Clone>(arr: &[T]) -> Cursor<(usize, T)> {
    Cursor::new(arr.iter().cloned().enumerate().collect())
}

/// A cursor over a snapshot of the sequence.
pub fn values<T: Clone>(arr: &[T]) -> Cursor<T> {
    Cursor::new(arr.to_vec())
}

// ============================================================================
// Views and Concatenation
// ============================================================================

/// Borrow the portion of the sequence addressed by `bounds`.
///
/// # Edge Cases
///
/// - `..` returns the whole sequence
/// - If `start >= end` after normalization, returns an empty slice
/// - Bounds past either end are clamped
///
/// # Examples
/// - `slice(&[1, 2, 3, 4, 5], 1..4)` → `[2, 3, 4]`
/// - `slice(&[1, 2, 3], -2..)` → `[2, 3]`
/// - `slice(&[1, 2, 3], bounds(Some(2), Some(1)))` → `[]`
pub fn slice<T>(arr: &[T], bounds: impl RangeBounds<isize>) -> &[T] {
    &arr[normalize_range(arr.len(), bounds)]
}

/// A new sequence holding `arr` followed by every source, in argument order.
///
/// # Examples
/// - `concat(&[1, 2], [&[3][..], &[4, 5]])` → `[1, 2, 3, 4, 5]`
/// - `concat(&[1, 2], [] as [&[i32]; 0])` → `[1, 2]`
pub fn concat<T, S>(arr: &[T], sources: impl IntoIterator<Item = S>) -> Vec<T>
where
    T: Clone,
    S: AsRef<[T]>,
{
    let mut result = arr.to_vec();
    for source in sources {
        result.extend_from_slice(source.as_ref());
    }
    result
}

#[cfg(test)]
#[path = "access_test.rs"]
mod access_test;
