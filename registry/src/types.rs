//! Registry definition types.

use std::fmt;

use teamify_core::{Pair, PersonId};

/// Lifecycle phase of a registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// People and relations may change; indices are not assigned yet.
    Draft,
    /// Roster and relations are fixed; indices are stable.
    Frozen,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Draft => f.write_str("draft"),
            Phase::Frozen => f.write_str("frozen"),
        }
    }
}

/// Kind of relation between two people.
///
/// A pair of people carries at most one kind, which makes "required and
/// forbidden at once" unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RelationKind {
    /// Both people must be in the same team.
    Required,
    /// The two people must be in different teams.
    Forbidden,
}

impl RelationKind {
    pub(crate) fn add_operation(self) -> &'static str {
        match self {
            RelationKind::Required => "add_required_pair",
            RelationKind::Forbidden => "add_forbidden_pair",
        }
    }

    pub(crate) fn remove_operation(self) -> &'static str {
        match self {
            RelationKind::Required => "remove_required_pair",
            RelationKind::Forbidden => "remove_forbidden_pair",
        }
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelationKind::Required => f.write_str("required"),
            RelationKind::Forbidden => f.write_str("forbidden"),
        }
    }
}

/// Read-only view of a frozen registry, in index space.
///
/// This is everything the enumerator needs: how many people there are and
/// which index pairs are constrained.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'r> {
    /// Number of people; valid indices are `0..roster_size`.
    pub roster_size: usize,
    /// Pairs that must share a team.
    pub required: &'r [Pair<PersonId>],
    /// Pairs that must not share a team.
    pub forbidden: &'r [Pair<PersonId>],
}

impl<'r> Snapshot<'r> {
    /// Build a snapshot from parts.
    pub fn new(
        roster_size: usize,
        required: &'r [Pair<PersonId>],
        forbidden: &'r [Pair<PersonId>],
    ) -> Self {
        Self {
            roster_size,
            required,
            forbidden,
        }
    }
}
