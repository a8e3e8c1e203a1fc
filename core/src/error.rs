//! Error kinds reported by the operation set.
//!
//! Almost nothing in this crate can fail: indices and bounds are clamped by
//! [`crate::normalize`], and "not found" or "empty" outcomes are plain
//! `Option`s. The only reportable failures are arguments that clamping cannot
//! give a meaning to.

use thiserror::Error;

/// A structurally invalid argument that cannot be resolved by clamping.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeError {
    /// [`Cursor::drop`](crate::Cursor::drop) was asked to skip a negative
    /// number of elements.
    #[error("range error: drop limit must be non-negative, got {limit}")]
    NegativeDrop { limit: isize },

    /// A single-element replacement addressed a position outside the sequence.
    #[error("range error: index {index} is out of range for length {len}")]
    IndexOutOfRange { index: isize, len: usize },
}
