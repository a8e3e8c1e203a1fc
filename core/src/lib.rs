#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

//! Array polyfills over plain Rust slices and vectors.
//!
//! Free functions in [`array`] mirror the familiar high-level sequence
//! operations (slice, splice, flat, reduce, ...) with the same index rules:
//! negative indices count from the end and out-of-range bounds are clamped by
//! [`normalize`]. [`iter::Cursor`] offers a subset of them through a chainable,
//! position-tracking handle.

// This works on std and no_std and is harmless.
extern crate alloc;

// Exports some symbols publicly so the facade crate and doctests can always
// refer to the same types regardless of the `std` feature.
#[doc(hidden)]
pub mod shim {
    pub use alloc::{string::String, vec, vec::Vec};
}

// Re-export (crate only) for convenience so other modules don't need alloc:: prefix
#[allow(unused_imports)]
pub(crate) use shim::*;

pub mod array;
pub mod error;
pub mod iter;
pub mod nested;
pub mod normalize;

pub use error::RangeError;
pub use iter::{Cursor, Steps};
pub use nested::Nested;
pub use normalize::{Bounds, bounds, normalize_index, normalize_range, resolve_index};

static_assertions::assert_impl_all!(RangeError: Send, Sync, Clone);
static_assertions::assert_impl_all!(Cursor<i64>: Send, Sync);
