//! Registry error types.

use teamify_core::ErrorKind;
use thiserror::Error;

use crate::{Phase, RelationKind};

/// Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Errors that can occur while editing or querying a registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Person not found: {name}")]
    PersonNotFound { name: String },

    #[error("No {kind} pair {pair}")]
    RelationNotFound { kind: RelationKind, pair: String },

    #[error("The {kind} pair {pair} already exists")]
    DuplicateRelation { kind: RelationKind, pair: String },

    #[error("Cannot add {requested} pair {pair}: it is already a {existing} pair")]
    ConflictingRelation {
        pair: String,
        existing: RelationKind,
        requested: RelationKind,
    },

    #[error("{operation} requires a {expected} registry, but it is {actual}")]
    Phase {
        operation: &'static str,
        expected: Phase,
        actual: Phase,
    },
}

impl RegistryError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn person_not_found(name: impl Into<String>) -> Self {
        Self::PersonNotFound { name: name.into() }
    }

    pub fn relation_not_found(kind: RelationKind, pair: impl ToString) -> Self {
        Self::RelationNotFound {
            kind,
            pair: pair.to_string(),
        }
    }

    pub fn duplicate_relation(kind: RelationKind, pair: impl ToString) -> Self {
        Self::DuplicateRelation {
            kind,
            pair: pair.to_string(),
        }
    }

    pub fn conflicting_relation(
        pair: impl ToString,
        existing: RelationKind,
        requested: RelationKind,
    ) -> Self {
        Self::ConflictingRelation {
            pair: pair.to_string(),
            existing,
            requested,
        }
    }

    pub fn phase(operation: &'static str, expected: Phase, actual: Phase) -> Self {
        Self::Phase {
            operation,
            expected,
            actual,
        }
    }

    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            Self::PersonNotFound { .. } | Self::RelationNotFound { .. } => ErrorKind::NotFound,
            Self::DuplicateRelation { .. } | Self::ConflictingRelation { .. } => {
                ErrorKind::Conflict
            }
            Self::Phase { .. } => ErrorKind::Phase,
        }
    }
}
