//! Teamify Constraint
//!
//! Validate teams and partitions against the relations of a frozen registry.
//!
//! Responsibilities:
//! - Check a single team against required and forbidden pairs
//! - Check a whole partition through a person-to-team assignment
//! - Produce violation reports for diagnostics

mod checker;
mod violation;

pub use checker::{is_team_valid, ConstraintChecker};
pub use violation::{Violation, Violations};
