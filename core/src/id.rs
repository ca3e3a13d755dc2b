//! Identity types for Teamify entities.
//!
//! A `PersonId` is the position of a person in a frozen roster. It is only
//! meaningful relative to the registry that assigned it.

use std::fmt;

/// Stable index of a person in a frozen roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PersonId(pub u32);

impl PersonId {
    /// Create a new PersonId from a raw value.
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw value.
    pub fn raw(&self) -> u32 {
        self.0
    }

    /// Get the value as a slice index.
    pub fn index(&self) -> usize {
        self.0 as usize
    }

    /// Build the id for a roster position.
    ///
    /// Rosters are bounded by the enumeration cost long before `u32::MAX`,
    /// so positions always fit.
    pub fn from_index(index: usize) -> Self {
        Self(index as u32)
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "p{}", self.0)
    }
}

impl From<u32> for PersonId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}
