//! Unordered pair keys.
//!
//! Relations between two people are symmetric, so they are keyed by a pair
//! whose elements are stored in ascending order. `{a, b}` and `{b, a}` are
//! the same key.

use std::fmt;

/// An unordered pair of two distinct values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pair<T> {
    low: T,
    high: T,
}

impl<T: Ord> Pair<T> {
    /// Create a pair from two values in any order.
    ///
    /// Returns `None` when both values are equal.
    pub fn new(a: T, b: T) -> Option<Self> {
        match a.cmp(&b) {
            std::cmp::Ordering::Less => Some(Self { low: a, high: b }),
            std::cmp::Ordering::Greater => Some(Self { low: b, high: a }),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// The smaller element.
    pub fn first(&self) -> &T {
        &self.low
    }

    /// The larger element.
    pub fn second(&self) -> &T {
        &self.high
    }

    /// Borrow both elements, smaller first.
    pub fn as_tuple(&self) -> (&T, &T) {
        (&self.low, &self.high)
    }
}

impl<T: Copy> Pair<T> {
    /// Copy both elements out, smaller first.
    pub fn get(&self) -> (T, T) {
        (self.low, self.high)
    }
}

impl<T: fmt::Display> fmt::Display for Pair<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}, {}}}", self.low, self.high)
    }
}
