//! Tests for predicate and equality searches

use super::*;
use crate::{Vec, vec};
use pretty_assertions::assert_eq;

#[test]
fn test_every() {
    assert!(every(&[2, 4, 6], |_, x| x % 2 == 0));
    assert!(!every(&[2, 3, 6], |_, x| x % 2 == 0));
    assert!(every::<i32, _>(&[], |_, _| false));
}

#[test]
fn test_every_stops_at_first_failure() {
    let mut seen = Vec::new();
    every(&[1, 2, 3, 4], |i, x| {
        seen.push(i);
        *x < 2
    });
    assert_eq!(seen, vec![0, 1]);
}

#[test]
fn test_some() {
    assert!(some(&[1, 3, 4], |_, x| x % 2 == 0));
    assert!(!some(&[1, 3, 5], |_, x| x % 2 == 0));
    assert!(!some::<i32, _>(&[], |_, _| true));
    // the index is passed along
    assert!(some(&["a", "b"], |i, _| i == 1));
}

#[test]
fn test_find() {
    let arr = [5, 12, 8, 130, 44];

    assert_eq!(find(&arr, |_, x| *x > 10), Some(&12));
    assert_eq!(find(&arr, |_, x| *x > 1000), None);
    assert_eq!(find(&arr, |i, _| i == 3), Some(&130));
}

#[test]
fn test_find_index() {
    let arr = [5, 12, 8, 130, 44];

    assert_eq!(find_index(&arr, |_, x| *x > 10), Some(1));
    assert_eq!(find_index(&arr, |_, x| *x > 1000), None);
    assert_eq!(find_index::<i32, _>(&[], |_, _| true), None);
}

#[test]
fn test_find_last() {
    let arr = [5, 12, 8, 130, 44];

    assert_eq!(find_last(&arr, |_, x| *x > 10), Some(&44));
    assert_eq!(find_last(&arr, |_, x| *x < 5), None);
}

#[test]
fn test_find_last_index() {
    let arr = [5, 12, 8, 130, 44];

    assert_eq!(find_last_index(&arr, |_, x| *x > 10), Some(4));
    assert_eq!(find_last_index(&arr, |_, x| *x < 10), Some(2));
    assert_eq!(find_last_index(&arr, |_, x| *x < 5), None);
}

#[test]
fn test_find_last_index_scans_right_to_left() {
    let mut seen = Vec::new();
    find_last_index(&[1, 2, 3], |i, _| {
        seen.push(i);
        false
    });
    assert_eq!(seen, vec![2, 1, 0]);
}

#[test]
fn test_includes() {
    let arr = ["cat", "dog", "bat"];

    assert!(includes(&arr, &"dog"));
    assert!(!includes(&arr, &"cow"));
    assert!(!includes::<&str>(&[], &"cat"));
}

#[test]
fn test_index_of_and_last_index_of() {
    let arr = [2, 9, 9, 4, 2];

    assert_eq!(index_of(&arr, &2), Some(0));
    assert_eq!(last_index_of(&arr, &2), Some(4));
    assert_eq!(index_of(&arr, &9), Some(1));
    assert_eq!(last_index_of(&arr, &9), Some(2));
    assert_eq!(index_of(&arr, &7), None);
    assert_eq!(last_index_of(&arr, &7), None);
}
