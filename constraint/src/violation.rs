//! Constraint violation types.

use std::fmt;

use teamify_core::{Pair, PersonId};

/// A reason a partition is not acceptable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// A required pair is spread over two teams. `None` marks an endpoint
    /// that is in no team at all.
    RequiredSplit {
        pair: Pair<PersonId>,
        teams: (Option<usize>, Option<usize>),
    },
    /// A forbidden pair shares a team.
    ForbiddenTogether { pair: Pair<PersonId>, team: usize },
    /// A person of the roster is in no team.
    Uncovered { person: PersonId },
    /// A person appears in more than one team.
    Duplicated { person: PersonId, teams: (usize, usize) },
    /// A team holds an index outside the roster.
    OutOfRange { person: PersonId, team: usize },
}

impl Violation {
    /// Check if this violation comes from a relation.
    pub fn is_relation(&self) -> bool {
        matches!(
            self,
            Violation::RequiredSplit { .. } | Violation::ForbiddenTogether { .. }
        )
    }

    /// Check if this violation is about the shape of the partition.
    pub fn is_coverage(&self) -> bool {
        !self.is_relation()
    }
}

fn team_label(team: Option<usize>) -> String {
    match team {
        Some(t) => format!("team {}", t + 1),
        None => "no team".to_string(),
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::RequiredSplit { pair, teams } => write!(
                f,
                "required pair {} is split between {} and {}",
                pair,
                team_label(teams.0),
                team_label(teams.1)
            ),
            Violation::ForbiddenTogether { pair, team } => {
                write!(f, "forbidden pair {} shares team {}", pair, team + 1)
            }
            Violation::Uncovered { person } => write!(f, "{} is in no team", person),
            Violation::Duplicated { person, teams } => write!(
                f,
                "{} is in both team {} and team {}",
                person,
                teams.0 + 1,
                teams.1 + 1
            ),
            Violation::OutOfRange { person, team } => {
                write!(f, "team {} holds unknown person {}", team + 1, person)
            }
        }
    }
}

/// Collection of violations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Violations {
    violations: Vec<Violation>,
}

impl Violations {
    /// Create a new empty violations collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a violation.
    pub fn push(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    /// Check if there are any violations.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Get all violations.
    pub fn all(&self) -> &[Violation] {
        &self.violations
    }

    /// Get relation violations.
    pub fn relations(&self) -> impl Iterator<Item = &Violation> {
        self.violations.iter().filter(|v| v.is_relation())
    }

    /// Get coverage violations.
    pub fn coverage(&self) -> impl Iterator<Item = &Violation> {
        self.violations.iter().filter(|v| v.is_coverage())
    }

    /// Get the number of violations.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Merge another violations collection.
    pub fn merge(&mut self, other: Violations) {
        self.violations.extend(other.violations);
    }
}

impl IntoIterator for Violations {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.into_iter()
    }
}

impl<'a> IntoIterator for &'a Violations {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.iter()
    }
}
