//! Teamify Partition
//!
//! Enumerate every way to split a frozen roster into teams that respects its
//! relations.
//!
//! Responsibilities:
//! - Generate candidate partitions of fixed team sizes
//! - Filter candidates through the constraint checker
//! - Pick one valid partition at random

mod enumerator;
mod error;
mod generator;
mod pick;

pub use enumerator::{enumerate, Enumerator};
pub use error::{PartitionError, PartitionResult};
pub use generator::{candidate_count, generate_candidates, Strategy};
pub use pick::pick_random;
