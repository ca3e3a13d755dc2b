//! Constraint checking.

use teamify_core::{Pair, Partition, PersonId, Team};
use teamify_registry::Snapshot;

use crate::violation::{Violation, Violations};

/// Check one team in isolation.
///
/// A team is rejected if it holds exactly one member of a required pair, or
/// both members of a forbidden pair. The required rule only looks at the
/// team boundary, so a partition is valid exactly when every one of its
/// teams passes.
pub fn is_team_valid(
    team: &Team,
    required: &[Pair<PersonId>],
    forbidden: &[Pair<PersonId>],
) -> bool {
    let splits = required.iter().any(|pair| {
        let (a, b) = pair.get();
        team.contains(a) != team.contains(b)
    });
    if splits {
        return false;
    }

    !forbidden.iter().any(|pair| {
        let (a, b) = pair.get();
        team.contains(a) && team.contains(b)
    })
}

/// Team number of every person in the roster.
struct Assignment {
    team_of: Vec<Option<usize>>,
}

impl Assignment {
    /// Index every member of `partition`. When a person appears twice the
    /// first team wins; out-of-range indices are skipped.
    fn new(partition: &Partition, roster_size: usize) -> Self {
        let mut team_of = vec![None; roster_size];
        for (t, team) in partition.iter().enumerate() {
            for id in team.iter() {
                if let Some(slot) = team_of.get_mut(id.index()) {
                    slot.get_or_insert(t);
                }
            }
        }
        Self { team_of }
    }

    fn get(&self, id: PersonId) -> Option<usize> {
        self.team_of.get(id.index()).copied().flatten()
    }

    fn teams(&self, pair: &Pair<PersonId>) -> (Option<usize>, Option<usize>) {
        let (a, b) = pair.get();
        (self.get(a), self.get(b))
    }
}

/// Checks partitions against the relations of a frozen registry.
#[derive(Debug, Clone, Copy)]
pub struct ConstraintChecker<'r> {
    snapshot: Snapshot<'r>,
}

impl<'r> ConstraintChecker<'r> {
    /// Create a new constraint checker.
    pub fn new(snapshot: Snapshot<'r>) -> Self {
        Self { snapshot }
    }

    /// The snapshot being checked against.
    pub fn snapshot(&self) -> Snapshot<'r> {
        self.snapshot
    }

    /// Check one team against every relation.
    pub fn is_team_valid(&self, team: &Team) -> bool {
        is_team_valid(team, self.snapshot.required, self.snapshot.forbidden)
    }

    /// Check that every team of the partition passes `is_team_valid`.
    pub fn all_teams_valid(&self, partition: &Partition) -> bool {
        partition.iter().all(|team| self.is_team_valid(team))
    }

    /// Check a whole partition.
    ///
    /// Both ends of every relation are looked up in a person-to-team table
    /// and compared. A required pair with an end in no team counts as split.
    pub fn is_partition_valid(&self, partition: &Partition) -> bool {
        let assignment = Assignment::new(partition, self.snapshot.roster_size);

        let required_ok = self
            .snapshot
            .required
            .iter()
            .all(|pair| matches!(assignment.teams(pair), (Some(x), Some(y)) if x == y));

        required_ok
            && self
                .snapshot
                .forbidden
                .iter()
                .all(|pair| !matches!(assignment.teams(pair), (Some(x), Some(y)) if x == y))
    }

    /// List everything wrong with a partition: coverage first, then relations.
    pub fn check(&self, partition: &Partition) -> Violations {
        let mut violations = self.check_coverage(partition);
        violations.merge(self.check_relations(partition));
        violations
    }

    /// Check that the partition covers the roster exactly once.
    pub fn check_coverage(&self, partition: &Partition) -> Violations {
        let mut violations = Violations::new();
        let mut first_team: Vec<Option<usize>> = vec![None; self.snapshot.roster_size];

        for (t, team) in partition.iter().enumerate() {
            for person in team.iter() {
                match first_team.get_mut(person.index()) {
                    None => violations.push(Violation::OutOfRange { person, team: t }),
                    Some(Some(earlier)) => violations.push(Violation::Duplicated {
                        person,
                        teams: (*earlier, t),
                    }),
                    Some(slot) => *slot = Some(t),
                }
            }
        }

        for (index, slot) in first_team.iter().enumerate() {
            if slot.is_none() {
                violations.push(Violation::Uncovered {
                    person: PersonId::from_index(index),
                });
            }
        }

        violations
    }

    /// Check every relation against the partition.
    pub fn check_relations(&self, partition: &Partition) -> Violations {
        let mut violations = Violations::new();
        let assignment = Assignment::new(partition, self.snapshot.roster_size);

        for pair in self.snapshot.required {
            let teams = assignment.teams(pair);
            if !matches!(teams, (Some(x), Some(y)) if x == y) {
                violations.push(Violation::RequiredSplit {
                    pair: pair.clone(),
                    teams,
                });
            }
        }

        for pair in self.snapshot.forbidden {
            if let (Some(x), Some(y)) = assignment.teams(pair) {
                if x == y {
                    violations.push(Violation::ForbiddenTogether {
                        pair: pair.clone(),
                        team: x,
                    });
                }
            }
        }

        violations
    }
}
