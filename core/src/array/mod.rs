//! Sequence operation set.
//!
//! Free functions over caller-owned sequences, in two families:
//!
//! - pure operations take `&[T]` and return a new `Vec`, a borrowed view,
//!   a scalar or a [`Cursor`](crate::Cursor);
//! - mutating operations take `&mut [T]` (length preserved) or `&mut Vec<T>`
//!   (length may change) and modify the caller's sequence in place.
//!
//! Callbacks receive the element's index alongside a reference to it.
//! Range arguments accept any `RangeBounds<isize>` (`..`, `1..`, `-2..`,
//! `1..3`) and go through [`normalize_range`](crate::normalize_range), so
//! negative indices count from the end and out-of-range bounds are clamped.

mod access;
mod mutate;
mod search;
mod transform;

pub use access::{at, concat, entries, keys, slice, values, with};
pub use mutate::{copy_within, fill, pop, push, reverse, shift, sort, splice, unshift};
pub use search::{
    every, find, find_index, find_last, find_last_index, includes, index_of, last_index_of, some,
};
pub use transform::{
    filter, flat, flat_deep, flat_map, for_each, join, map, reduce, reduce_right, to_reversed,
    to_sorted, to_string,
};
