//! In-place operations on a caller-owned sequence.
//!
//! Operations that keep the length take `&mut [T]` and hand the same slice
//! back for chaining. Operations that grow or shrink the sequence take
//! `&mut Vec<T>`.

use core::cmp::Ordering;
use core::ops::RangeBounds;

use crate::{
    Vec,
    normalize::{normalize_index, normalize_range},
};

// ============================================================================
// Growing and Shrinking
// ============================================================================

/// Append elements to the end. Returns the new length.
pub fn push<T>(arr: &mut Vec<T>, elements: impl IntoIterator<Item = T>) -> usize {
    arr.extend(elements);
    arr.len()
}

/// Remove and return the last element, or `None` if the sequence is empty.
pub fn pop<T>(arr: &mut Vec<T>) -> Option<T> {
    arr.pop()
}

/// Remove and return the first element, or `None` if the sequence is empty.
pub fn shift<T>(arr: &mut Vec<T>) -> Option<T> {
    if arr.is_empty() {
        None
    } else {
        Some(arr.remove(0))
    }
}

/// Insert elements at the front, keeping their order. Returns the new length.
///
/// # Examples
/// - `unshift(&mut vec![3, 4], [1, 2])` leaves `[1, 2, 3, 4]` and returns `4`
pub fn unshift<T>(arr: &mut Vec<T>, elements: impl IntoIterator<Item = T>) -> usize {
    let tail = core::mem::take(arr);
    arr.extend(elements);
    arr.extend(tail);
    arr.len()
}

/// Remove `delete_count` elements starting at `start` and insert `items` in
/// their place. Returns the removed elements.
///
/// # Edge Cases
///
/// - `start` is normalized: negative counts from the end, past the end appends
/// - a negative `delete_count` removes nothing
/// - `delete_count` is clamped to the elements remaining after `start`
/// - nothing removed gives an empty `Vec`, never an error
///
/// # Examples
/// - `splice(&mut vec![1, 2, 3, 4], 1, 2, [5, 6])` returns `[2, 3]` and leaves `[1, 5, 6, 4]`
/// - `splice(&mut vec![1, 2, 3, 4], -1, 0, [5, 6])` returns `[]` and leaves `[1, 2, 3, 5, 6, 4]`
pub fn splice<T>(
    arr: &mut Vec<T>,
    start: isize,
    delete_count: isize,
    items: impl IntoIterator<Item = T>,
) -> Vec<T> {
    let start = normalize_index(start, arr.len());
    let delete_count = delete_count.max(0).unsigned_abs().min(arr.len() - start);
    arr.splice(start..start + delete_count, items).collect()
}

// ============================================================================
// Length-Preserving Mutation
// ============================================================================

/// Overwrite the elements addressed by `bounds` with clones of `element`.
///
/// # Examples
/// - `fill(&mut [1, 2, 3, 4], 0, 1..3)` → `[1, 0, 0, 4]`
/// - `fill(&mut [1, 2, 3], 9, -1..)` → `[1, 2, 9]`
pub fn fill<T: Clone>(arr: &mut [T], element: T, bounds: impl RangeBounds<isize>) -> &mut [T] {
    let range = normalize_range(arr.len(), bounds);
    arr[range].fill(element);
    arr
}

/// Copy the elements addressed by `bounds` to the position `target`.
///
/// `target` is normalized like any other index. The copy stops at the end of
/// the sequence, so the length never changes. Overlapping source and
/// destination behave as if the source was copied out first.
///
/// # Examples
/// - `copy_within(&mut [1, 2, 3, 4, 5], 0, 3..)` → `[4, 5, 3, 4, 5]`
/// - `copy_within(&mut [1, 2, 3, 4, 5], 1, ..)` → `[1, 1, 2, 3, 4]`
/// - `copy_within(&mut [1, 2, 3, 4, 5], -2, ..)` → `[1, 2, 3, 1, 2]`
pub fn copy_within<T: Clone>(
    arr: &mut [T],
    target: isize,
    bounds: impl RangeBounds<isize>,
) -> &mut [T] {
    let size = arr.len();
    let target = normalize_index(target, size);
    let source = normalize_range(size, bounds);
    let count = source.len().min(size - target);

    if target < source.start {
        for offset in 0..count {
            arr[target + offset] = arr[source.start + offset].clone();
        }
    } else if target > source.start {
        // copy back to front so an overlapping source is read before it is overwritten
        for offset in (0..count).rev() {
            arr[target + offset] = arr[source.start + offset].clone();
        }
    }
    arr
}

/// Reverse the sequence in place.
pub fn reverse<T>(arr: &mut [T]) -> &mut [T] {
    arr.reverse();
    arr
}

/// Sort the sequence in place with `compare`.
///
/// Sorting is unstable: equal elements may be reordered.
pub fn sort<T, F>(arr: &mut [T], compare: F) -> &mut [T]
where
    F: FnMut(&T, &T) -> Ordering,
{
    arr.sort_unstable_by(compare);
    arr
}

#[cfg(test)]
#[path = "mutate_test.rs"]
mod mutate_test;
