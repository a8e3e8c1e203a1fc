//! Predicate and equality searches.
//!
//! Predicates are called with `(index, &element)`. Index-returning searches
//! report "not found" as `None`.

// ============================================================================
// Predicate Tests
// ============================================================================

/// Whether every element passes `predicate`. Stops at the first failure.
///
/// An empty sequence passes vacuously.
pub fn every<T, F>(arr: &[T], mut predicate: F) -> bool
where
    F: FnMut(usize, &T) -> bool,
{
    arr.iter()
        .enumerate()
        .all(|(index, element)| predicate(index, element))
}

/// Whether at least one element passes `predicate`. Stops at the first match.
pub fn some<T, F>(arr: &[T], mut predicate: F) -> bool
where
    F: FnMut(usize, &T) -> bool,
{
    arr.iter()
        .enumerate()
        .any(|(index, element)| predicate(index, element))
}

// ============================================================================
// Predicate Searches
// ============================================================================

/// The first element that passes `predicate`.
pub fn find<T, F>(arr: &[T], predicate: F) -> Option<&T>
where
    F: FnMut(usize, &T) -> bool,
{
    find_index(arr, predicate).map(|index| &arr[index])
}

/// The index of the first element that passes `predicate`.
pub fn find_index<T, F>(arr: &[T], mut predicate: F) -> Option<usize>
where
    F: FnMut(usize, &T) -> bool,
{
    arr.iter()
        .enumerate()
        .position(|(index, element)| predicate(index, element))
}

/// The last element that passes `predicate`.
pub fn find_last<T, F>(arr: &[T], predicate: F) -> Option<&T>
where
    F: FnMut(usize, &T) -> bool,
{
    find_last_index(arr, predicate).map(|index| &arr[index])
}

/// The index of the last element that passes `predicate`.
///
/// Scans right to left, so `predicate` sees the highest indices first.
pub fn find_last_index<T, F>(arr: &[T], mut predicate: F) -> Option<usize>
where
    F: FnMut(usize, &T) -> bool,
{
    arr.iter()
        .enumerate()
        .rposition(|(index, element)| predicate(index, element))
}

// ============================================================================
// Equality Searches
// ============================================================================

pub fn includes<T: PartialEq>(arr: &[T], element: &T) -> bool {
    arr.contains(element)
}

pub fn index_of<T: PartialEq>(arr: &[T], element: &T) -> Option<usize> {
    arr.iter().position(|candidate| candidate == element)
}

pub fn last_index_of<T: PartialEq>(arr: &[T], element: &T) -> Option<usize> {
    arr.iter().rposition(|candidate| candidate == element)
}

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;
