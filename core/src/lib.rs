//! Teamify Core Types
//!
//! This crate provides the foundational types used throughout Teamify:
//! - Identity types (PersonId)
//! - Unordered pair keys (Pair)
//! - Team and Partition structures
//! - The shared error taxonomy (ErrorKind)

mod error;
mod id;
mod pair;
mod team;

pub use error::*;
pub use id::*;
pub use pair::*;
pub use team::*;
