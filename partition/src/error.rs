//! Partition error types.

use teamify_core::ErrorKind;
use teamify_registry::RegistryError;
use thiserror::Error;

/// Result type for partition operations.
pub type PartitionResult<T> = Result<T, PartitionError>;

/// Errors that can occur while enumerating partitions.
#[derive(Debug, Error)]
pub enum PartitionError {
    #[error("Cannot split {roster_size} people into {teams} teams: need between 2 and {roster_size} teams")]
    InvalidTeamCount { teams: usize, roster_size: usize },

    #[error("No valid way to split the roster into {teams} teams ({candidates} candidates checked)")]
    NoSolution { teams: usize, candidates: usize },

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

impl PartitionError {
    pub fn invalid_team_count(teams: usize, roster_size: usize) -> Self {
        Self::InvalidTeamCount { teams, roster_size }
    }

    pub fn no_solution(teams: usize, candidates: usize) -> Self {
        Self::NoSolution { teams, candidates }
    }

    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidTeamCount { .. } => ErrorKind::InvalidArgument,
            Self::NoSolution { .. } => ErrorKind::NoSolution,
            Self::Registry(e) => e.kind(),
        }
    }
}
