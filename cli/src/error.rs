//! Command-line error types.

use teamify_partition::PartitionError;
use teamify_registry::RegistryError;
use thiserror::Error;

/// Result type for command-line operations.
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur while rendering a table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("Nothing to render: no options")]
    Empty,

    #[error("Option {index} has {found} teams, expected {expected}")]
    TeamCountMismatch {
        index: usize,
        expected: usize,
        found: usize,
    },
}

/// Errors surfaced by the `teamify` binary.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),

    #[error("Splitting {people} people into {teams} teams needs {count} candidates, over the limit of {limit}")]
    TooManyCandidates {
        people: usize,
        teams: usize,
        count: u64,
        limit: u64,
    },

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Partition(#[from] PartitionError),

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage(message.into())
    }
}
