//! Polyfill - array operations with familiar index rules for Rust sequences
//!
//! # Overview
//!
//! Polyfill provides the high-level sequence operation set scripting hosts
//! expect (slice, splice, flat, reduce, ...) as free functions over plain
//! Rust slices and vectors, plus a chainable [`Cursor`] for lazy-looking
//! pipelines over a snapshot. Common use cases include:
//!
//! - Embedding a scripting runtime that forwards array calls to Rust
//! - Porting code that relies on negative-index and clamping semantics
//! - Flattening loosely nested documents
//!
//! # Quick Start
//!
//! ```
//! use polyfill::array;
//!
//! let mut arr = vec![1, 2, 3, 4];
//! let removed = array::splice(&mut arr, 1, 2, [5, 6]);
//! assert_eq!(removed, vec![2, 3]);
//! assert_eq!(arr, vec![1, 5, 6, 4]);
//!
//! assert_eq!(array::at(&arr, -1), Some(&4));
//! assert_eq!(array::at(&arr, 5), None);
//! assert_eq!(array::slice(&arr, -2..), &[6, 4]);
//! ```
//!
//! # Index Rules
//!
//! Every range argument is normalized by [`normalize_range`]: negative
//! indices count from the end, out-of-range bounds are clamped and an
//! inverted range is empty. Single-element lookups go through
//! [`resolve_index`] and report `None` instead of clamping.
//!
//! # Cursors
//!
//! ```
//! use polyfill::{Cursor, RangeError};
//!
//! let mut cursor = Cursor::new(vec![1, 2, 3]);
//! cursor.drop(1);
//! assert_eq!(cursor.to_vec(), vec![2, 3]);
//!
//! // a negative drop is recorded, not raised
//! cursor.drop(-1);
//! assert_eq!(cursor.error(), Some(&RangeError::NegativeDrop { limit: -1 }));
//! assert_eq!(cursor.steps().next(), Some(2));
//! ```
//!
//! # Nested Sequences
//!
//! ```
//! use polyfill::{Nested, array};
//!
//! let tree = vec![Nested::Item(1), Nested::list([2, 3])];
//! assert_eq!(array::flat_deep(&tree), vec![1, 2, 3]);
//! ```

pub use polyfill_core::{
    Bounds, Cursor, Nested, RangeError, Steps, array, bounds, normalize_index, normalize_range,
    resolve_index,
};
pub use polyfill_core::{error, iter, nested, normalize};
