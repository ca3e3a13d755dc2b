//! Teamify Registry
//!
//! Roster of people and the relations between them. Single source of truth
//! for names, indices, required pairs and forbidden pairs.
//!
//! A registry starts in the draft phase, where people and relations can be
//! added and removed. `commit` freezes it: names receive stable indices and
//! only lookups and snapshots are allowed from then on.

mod error;
mod registry;
mod types;

pub use error::{RegistryError, RegistryResult};
pub use registry::Registry;
pub use types::*;
