//! Index normalization shared by every range-based operation.
//!
//! Raw indices are `isize`: negative values count back from the end of the
//! sequence. Normalization never fails, it clamps into `[0, size]`.

use core::ops::{Bound, Range, RangeBounds};

/// Clamp a raw index into `[0, size]`.
///
/// Negative indices are offset from `size` and clamped to `0` if still
/// negative; indices past the end clamp to `size`.
///
/// # Examples
/// - `normalize_index(-1, 4)` → `3`
/// - `normalize_index(-9, 4)` → `0`
/// - `normalize_index(9, 4)` → `4`
pub fn normalize_index(index: isize, size: usize) -> usize {
    if index < 0 {
        size.saturating_sub(index.unsigned_abs())
    } else {
        index.unsigned_abs().min(size)
    }
}

/// Resolve a raw index to an element position in `[0, size)`.
///
/// Uses the same negative-offset rule as [`normalize_index`] but reports
/// `None` instead of clamping, which is what single-element lookups need.
pub fn resolve_index(index: isize, size: usize) -> Option<usize> {
    if index < 0 {
        size.checked_sub(index.unsigned_abs())
    } else {
        let index = index.unsigned_abs();
        (index < size).then_some(index)
    }
}

/// Normalize optional `(start, end)` bounds into a half-open range.
///
/// Missing bounds default to `0` and `size`, so `..` covers the whole
/// sequence and `start..` runs to the end. The result always satisfies
/// `start <= end <= size`: an inverted pair collapses to an empty range
/// positioned at `start`.
///
/// Inclusive ends (`..=e`) and excluded starts (from a `(Bound, Bound)` pair)
/// address the position just after the resolved element.
///
/// Start and end values only known at runtime can be passed through
/// [`bounds`], which also accepts an inverted pair.
pub fn normalize_range(size: usize, bounds: impl RangeBounds<isize>) -> Range<usize> {
    let start = match bounds.start_bound() {
        Bound::Unbounded => 0,
        Bound::Included(&start) => normalize_index(start, size),
        Bound::Excluded(&start) => position_after(start, size),
    };
    let end = match bounds.end_bound() {
        Bound::Unbounded => size,
        Bound::Excluded(&end) => normalize_index(end, size),
        Bound::Included(&end) => position_after(end, size),
    };
    start..end.max(start)
}

/// Explicit `(start, end)` bounds, for callers holding optional raw indices.
pub type Bounds = (Bound<isize>, Bound<isize>);

/// Build [`Bounds`] from an optional start (inclusive) and end (exclusive).
///
/// `bounds(None, None)` is the same as `..`, `bounds(Some(s), None)` the same
/// as `s..`.
pub fn bounds(start: Option<isize>, end: Option<isize>) -> Bounds {
    (
        start.map_or(Bound::Unbounded, Bound::Included),
        end.map_or(Bound::Unbounded, Bound::Excluded),
    )
}

fn position_after(index: isize, size: usize) -> usize {
    match resolve_index(index, size) {
        Some(position) => position + 1,
        None if index < 0 => 0,
        None => size,
    }
}
