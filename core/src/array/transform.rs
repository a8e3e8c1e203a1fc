//! Operations that derive a new sequence or a single value from a sequence.

use core::cmp::Ordering;
use core::fmt::Display;

use itertools::Itertools;

use crate::{String, Vec, nested::Nested};

// ============================================================================
// Higher-Order Functions
// ============================================================================

/// Map a function over a sequence.
///
/// The element type may change: `&[T]` with `(usize, &T) -> U` gives `Vec<U>`.
///
/// # Examples
/// - `map(&[1, 2, 3], |_, x| x * 2)` → `[2, 4, 6]`
/// - `map(&["a", "bb"], |_, s| s.len())` → `[1, 2]`
pub fn map<T, U, F>(arr: &[T], mut f: F) -> Vec<U>
where
    F: FnMut(usize, &T) -> U,
{
    arr.iter()
        .enumerate()
        .map(|(index, element)| f(index, element))
        .collect()
}

/// A new sequence with the elements that pass `predicate`, in order.
pub fn filter<T, F>(arr: &[T], mut predicate: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(usize, &T) -> bool,
{
    arr.iter()
        .enumerate()
        .filter(|&(index, element)| predicate(index, element))
        .map(|(_, element)| element.clone())
        .collect()
}

pub fn for_each<T, F>(arr: &[T], mut f: F)
where
    F: FnMut(usize, &T),
{
    for (index, element) in arr.iter().enumerate() {
        f(index, element);
    }
}

/// Fold the sequence left to right, starting from `initial`.
///
/// There is no implicit seeding with the first element: an empty sequence
/// returns `initial` unchanged.
///
/// # Examples
/// - `reduce(&[1, 2, 3], |acc, x| acc + x, 0)` → `6`
/// - `reduce(&["a", "b"], |acc, s| acc + *s, String::new())` → `"ab"`
pub fn reduce<T, A, F>(arr: &[T], f: F, initial: A) -> A
where
    F: FnMut(A, &T) -> A,
{
    arr.iter().fold(initial, f)
}

/// Same as [`reduce`], but folds right to left.
///
/// # Examples
/// - `reduce_right(&["a", "b"], |acc, s| acc + *s, String::new())` → `"ba"`
pub fn reduce_right<T, A, F>(arr: &[T], f: F, initial: A) -> A
where
    F: FnMut(A, &T) -> A,
{
    arr.iter().rev().fold(initial, f)
}

// ============================================================================
// Flattening
// ============================================================================

/// Concatenate nested lists into their parent, up to `depth` levels.
///
/// `None` flattens one level; a negative depth flattens everything. Plain
/// items pass through unchanged, and lists deeper than `depth` are kept as
/// lists.
///
/// # Examples
/// - `flat(&[1, [2, [3]]], None)` → `[1, 2, [3]]`
/// - `flat(&[1, [2, [3]]], Some(-1))` → `[1, 2, 3]`
/// - `flat(&[1, [2]], Some(0))` → `[1, [2]]`
pub fn flat<T: Clone>(arr: &[Nested<T>], depth: Option<isize>) -> Vec<Nested<T>> {
    let depth = match depth {
        None => 1,
        Some(depth) if depth < 0 => usize::MAX,
        Some(depth) => depth.unsigned_abs(),
    };
    let mut result = Vec::with_capacity(arr.len());
    flatten_into(arr, depth, &mut result);
    result
}

fn flatten_into<T: Clone>(arr: &[Nested<T>], depth: usize, out: &mut Vec<Nested<T>>) {
    for element in arr {
        match element {
            Nested::List(items) if depth > 0 => flatten_into(items, depth - 1, out),
            other => out.push(other.clone()),
        }
    }
}

/// Flatten every level, yielding the plain elements in order.
pub fn flat_deep<T: Clone>(arr: &[Nested<T>]) -> Vec<T> {
    fn collect_leaves<T: Clone>(arr: &[Nested<T>], out: &mut Vec<T>) {
        for element in arr {
            match element {
                Nested::Item(item) => out.push(item.clone()),
                Nested::List(items) => collect_leaves(items, out),
            }
        }
    }

    let mut result = Vec::with_capacity(arr.len());
    collect_leaves(arr, &mut result);
    result
}

/// Map each element, then flatten the results exactly one level.
///
/// A [`Nested::List`] result has its members spliced in; a [`Nested::Item`]
/// result is appended as is.
///
/// # Examples
/// - `flat_map(&[1, 2], |_, x| Nested::list([*x, x * 10]))` → `[1, 10, 2, 20]`
/// - `flat_map(&[1, 2], |_, x| Nested::Item(*x))` → `[1, 2]`
pub fn flat_map<T, U, F>(arr: &[T], mut f: F) -> Vec<Nested<U>>
where
    F: FnMut(usize, &T) -> Nested<U>,
{
    let mut result = Vec::with_capacity(arr.len());
    for (index, element) in arr.iter().enumerate() {
        match f(index, element) {
            Nested::List(items) => result.extend(items),
            item => result.push(item),
        }
    }
    result
}

// ============================================================================
// Reordered Copies
// ============================================================================

/// A reversed copy of the sequence.
pub fn to_reversed<T: Clone>(arr: &[T]) -> Vec<T> {
    arr.iter().rev().cloned().collect()
}

/// A sorted copy of the sequence; the source is left untouched.
///
/// Sorting is unstable: equal elements may be reordered.
pub fn to_sorted<T, F>(arr: &[T], compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut result = arr.to_vec();
    result.sort_unstable_by(compare);
    result
}

// ============================================================================
// Rendering
// ============================================================================

/// Render every element and join them with `separator`.
///
/// # Examples
/// - `join(&[1, 2, 3], ", ")` → `"1, 2, 3"`
/// - `join(&[1], ", ")` → `"1"`
/// - `join::<i32>(&[], ", ")` → `""`
pub fn join<T: Display>(arr: &[T], separator: &str) -> String {
    arr.iter().join(separator)
}

/// Render every element back to back, without a separator.
pub fn to_string<T: Display>(arr: &[T]) -> String {
    arr.iter().join("")
}

#[cfg(test)]
#[path = "transform_test.rs"]
mod transform_test;
