//! Enumeration of valid partitions.

use teamify_constraint::ConstraintChecker;
use teamify_core::{Partition, Team};
use teamify_registry::{Registry, Snapshot};
use tracing::debug;

use crate::error::{PartitionError, PartitionResult};
use crate::generator::{generate_candidates, Strategy};

/// Enumerates the valid partitions of a frozen registry.
///
/// Holds nothing but a borrowed snapshot, so the same enumerator always
/// returns the same partitions in the same order.
#[derive(Debug, Clone, Copy)]
pub struct Enumerator<'r> {
    checker: ConstraintChecker<'r>,
    strategy: Strategy,
}

impl<'r> Enumerator<'r> {
    /// Create an enumerator over a frozen registry.
    ///
    /// Fails with a phase error if the registry is still a draft.
    pub fn new(registry: &'r Registry) -> PartitionResult<Self> {
        Ok(Self::from_snapshot(registry.snapshot()?))
    }

    /// Create an enumerator over an explicit snapshot.
    pub fn from_snapshot(snapshot: Snapshot<'r>) -> Self {
        Self {
            checker: ConstraintChecker::new(snapshot),
            strategy: Strategy::default(),
        }
    }

    /// Use a different split strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// The split strategy in use.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Number of people being split.
    pub fn roster_size(&self) -> usize {
        self.checker.snapshot().roster_size
    }

    /// Every candidate partition, valid or not, in generation order.
    pub fn generate_candidates(&self, teams: usize) -> PartitionResult<Vec<Partition>> {
        generate_candidates(self.roster_size(), teams, self.strategy)
    }

    /// Check one team against the relations.
    pub fn is_team_valid(&self, team: &Team) -> bool {
        self.checker.is_team_valid(team)
    }

    /// Check a whole partition against the relations.
    pub fn is_partition_valid(&self, partition: &Partition) -> bool {
        self.checker.is_partition_valid(partition)
    }

    /// Every valid partition into `teams` teams, in generation order.
    ///
    /// Fails with `NoSolution` instead of returning an empty list.
    pub fn enumerate(&self, teams: usize) -> PartitionResult<Vec<Partition>> {
        let candidates = self.generate_candidates(teams)?;
        let total = candidates.len();

        let valid: Vec<Partition> = candidates
            .into_iter()
            .filter(|candidate| self.is_partition_valid(candidate))
            .collect();

        debug!(
            target: "teamify::partition",
            teams,
            strategy = ?self.strategy,
            candidates = total,
            valid = valid.len(),
            "Enumeration finished"
        );

        if valid.is_empty() {
            return Err(PartitionError::no_solution(teams, total));
        }
        Ok(valid)
    }
}

/// Enumerate the valid partitions of a frozen registry with the default
/// strategy.
pub fn enumerate(registry: &Registry, teams: usize) -> PartitionResult<Vec<Partition>> {
    Enumerator::new(registry)?.enumerate(teams)
}
