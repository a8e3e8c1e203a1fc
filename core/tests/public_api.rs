//! Integration tests for the public API.
//!
//! These tests chain operations the way a host program would, going through
//! the crate root re-exports only.

use polyfill_core::{Cursor, Nested, RangeError, array, bounds, normalize_range};
use pretty_assertions::assert_eq;

#[test]
fn test_optional_bounds_as_bound_pairs() {
    // a host forwarding optional (start, end) arguments
    let arr = [1, 2, 3, 4, 5];
    assert_eq!(array::slice(&arr, bounds(None, None)), &arr[..]);
    assert_eq!(array::slice(&arr, bounds(Some(-2), None)), &[4, 5]);
    assert_eq!(array::slice(&arr, bounds(Some(1), Some(3))), &[2, 3]);
    assert_eq!(normalize_range(arr.len(), bounds(Some(4), Some(1))), 4..4);
}

#[test]
fn test_pipeline_over_owned_vec() {
    let mut scores = vec![70, 95, 40, 88, 61];

    array::push(&mut scores, [99]);
    let passing = array::filter(&scores, |_, s| *s >= 60);
    let sorted = array::to_sorted(&passing, |a, b| b.cmp(a));
    let top_three = array::slice(&sorted, ..3);

    assert_eq!(top_three, &[99, 95, 88]);
    assert_eq!(array::join(top_three, " > "), "99 > 95 > 88");
    assert_eq!(array::reduce(top_three, |acc, s| acc + s, 0), 282);
    // scores only grew
    assert_eq!(scores, vec![70, 95, 40, 88, 61, 99]);
}

#[test]
fn test_mutating_family_shares_the_callers_vec() {
    let mut queue = vec!["b", "c"];

    assert_eq!(array::unshift(&mut queue, ["a"]), 3);
    assert_eq!(array::push(&mut queue, ["d", "e"]), 5);
    assert_eq!(array::shift(&mut queue), Some("a"));
    assert_eq!(array::pop(&mut queue), Some("e"));
    assert_eq!(array::splice(&mut queue, 1, 1, ["x", "y"]), vec!["c"]);
    assert_eq!(queue, vec!["b", "x", "y", "d"]);

    array::reverse(&mut queue);
    array::fill(&mut queue, "_", -1..);
    assert_eq!(queue, vec!["d", "y", "x", "_"]);
}

#[test]
fn test_with_reports_range_error() {
    let arr = [1, 2, 3];
    let err = array::with(&arr, 3, 0).unwrap_err();
    assert_eq!(err, RangeError::IndexOutOfRange { index: 3, len: 3 });
    assert_eq!(
        err.to_string(),
        "range error: index 3 is out of range for length 3"
    );
    let err: Box<dyn std::error::Error> = Box::new(err);
    assert!(err.to_string().starts_with("range error"));
}

#[test]
fn test_cursor_chain() {
    let mut cursor = array::values(&[1, 2, 3, 4, 5, 6, 7, 8]);
    cursor.drop(2);

    let doubled_odds = cursor.filter(|_, x| x % 2 == 1).map(|_, x| x * 2);
    assert_eq!(doubled_odds.to_vec(), vec![6, 10, 14]);

    let window = cursor.take(3);
    assert_eq!(window.reduce(|acc, x| acc + x, 0), 3 + 4 + 5);
    assert_eq!(cursor.position(), 2);
}

#[test]
fn test_entries_cursor() {
    let cursor = array::entries(&["a", "b", "c"]);
    let found = cursor.find(|_, (_, v)| *v == "b");
    assert_eq!(found, Some(&(1, "b")));
}

#[test]
fn test_flatten_nested_documents() {
    let tree: Vec<Nested<&str>> = vec![
        Nested::Item("root"),
        Nested::List(vec![
            Nested::Item("a"),
            Nested::List(vec![Nested::Item("a1"), Nested::Item("a2")]),
        ]),
        Nested::list(["b"]),
    ];

    assert_eq!(array::flat(&tree, None).len(), 4);
    assert_eq!(array::flat_deep(&tree), vec!["root", "a", "a1", "a2", "b"]);
    assert_eq!(
        array::flat(&tree, Some(-1)),
        array::map(&array::flat_deep(&tree), |_, s| Nested::Item(*s))
    );
}

#[test]
fn test_cursor_from_collect() {
    let mut cursor: Cursor<char> = "hello".chars().collect();
    cursor.drop(1);
    assert!(cursor.some(|_, c| *c == 'l'));
    assert!(!cursor.every(|_, c| *c != 'l'));
    assert!(cursor.is_exhausted());
}
