//! Tagged element type for sequences that may contain sequences.
//!
//! [`flat`](crate::array::flat) and [`flat_map`](crate::array::flat_map) need
//! to tell "an element" from "a nested sequence of elements". Instead of
//! inspecting element types at runtime, the nesting is spelled out in the
//! element type itself.

use crate::Vec;

/// Either a single element or a nested sequence of (possibly nested) elements.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Nested<T> {
    Item(T),
    List(Vec<Nested<T>>),
}

impl<T> Nested<T> {
    /// Build a one-level list from plain elements.
    ///
    /// `Nested::list([1, 2])` is `List([Item(1), Item(2)])`.
    pub fn list(items: impl IntoIterator<Item = T>) -> Self {
        Nested::List(items.into_iter().map(Nested::Item).collect())
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Nested::List(_))
    }

    pub fn as_item(&self) -> Option<&T> {
        match self {
            Nested::Item(item) => Some(item),
            Nested::List(_) => None,
        }
    }

    pub fn into_item(self) -> Option<T> {
        match self {
            Nested::Item(item) => Some(item),
            Nested::List(_) => None,
        }
    }

    /// Count the plain elements at every depth.
    pub fn leaf_count(&self) -> usize {
        match self {
            Nested::Item(_) => 1,
            Nested::List(items) => items.iter().map(Nested::leaf_count).sum(),
        }
    }
}

impl<T> From<T> for Nested<T> {
    fn from(item: T) -> Self {
        Nested::Item(item)
    }
}
