//! Error taxonomy shared by all Teamify crates.

use std::fmt;

/// Coarse classification of a failure.
///
/// Every crate-level error type maps onto one of these kinds, so callers can
/// branch on what went wrong without matching each crate's variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed input or out-of-range scalar.
    InvalidArgument,
    /// Reference to a person or relation that does not exist.
    NotFound,
    /// A relation that already exists or contradicts an existing one.
    Conflict,
    /// Operation invoked in the wrong draft/frozen phase.
    Phase,
    /// Enumeration finished without a single valid partition.
    NoSolution,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::InvalidArgument => "invalid argument",
            ErrorKind::NotFound => "not found",
            ErrorKind::Conflict => "conflict",
            ErrorKind::Phase => "phase",
            ErrorKind::NoSolution => "no solution",
        };
        f.write_str(name)
    }
}
