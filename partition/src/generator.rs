//! Candidate generation.
//!
//! Candidates are produced in a fixed order: the first team runs through the
//! size-`k` combinations of the people still unplaced, in lexicographic
//! order, and every later team does the same within what is left.

use itertools::Itertools;
use teamify_core::{Partition, PersonId, Team};

use crate::error::{PartitionError, PartitionResult};

/// How the roster is split into teams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    /// Recursive n-way split. With `k` teams left to fill from `m` people,
    /// the next team takes `m / k` of them and the rest is split into
    /// `k - 1` teams. The last team takes whoever remains.
    ///
    /// Teams are ordered, so the candidate count grows factorially with the
    /// team count: 11 people into 11 teams is 11! candidates. Check
    /// [`candidate_count`] before generating for large team counts.
    #[default]
    Balanced,
    /// Two-way split whatever the team count: every subset of
    /// `roster_size / n` people against everyone else.
    Binary,
}

fn validate_team_count(roster_size: usize, teams: usize) -> PartitionResult<()> {
    if teams < 2 || teams > roster_size {
        return Err(PartitionError::invalid_team_count(teams, roster_size));
    }
    Ok(())
}

/// Generate every candidate partition of `0..roster_size` into `teams` teams.
///
/// Fails if `teams < 2` or `teams > roster_size`. The whole list is built in
/// memory; see [`candidate_count`] for its length.
pub fn generate_candidates(
    roster_size: usize,
    teams: usize,
    strategy: Strategy,
) -> PartitionResult<Vec<Partition>> {
    validate_team_count(roster_size, teams)?;

    let universe: Vec<PersonId> = (0..roster_size).map(PersonId::from_index).collect();
    let mut candidates = Vec::new();

    match strategy {
        Strategy::Balanced => {
            let mut prefix = Vec::with_capacity(teams);
            split(&universe, teams, &mut prefix, &mut candidates);
        }
        Strategy::Binary => {
            for chosen in universe.iter().copied().combinations(roster_size / teams) {
                let rest = complement(&universe, &chosen);
                candidates.push(Partition::new(vec![Team::new(chosen), Team::new(rest)]));
            }
        }
    }

    Ok(candidates)
}

fn split(
    remaining: &[PersonId],
    teams_left: usize,
    prefix: &mut Vec<Team>,
    candidates: &mut Vec<Partition>,
) {
    if teams_left == 1 {
        let mut teams = prefix.clone();
        teams.push(Team::new(remaining.iter().copied()));
        candidates.push(Partition::new(teams));
        return;
    }

    let size = remaining.len() / teams_left;
    for chosen in remaining.iter().copied().combinations(size) {
        let rest = complement(remaining, &chosen);
        prefix.push(Team::new(chosen));
        split(&rest, teams_left - 1, prefix, candidates);
        prefix.pop();
    }
}

/// People of `universe` not in `chosen`. Both slices are ascending.
fn complement(universe: &[PersonId], chosen: &[PersonId]) -> Vec<PersonId> {
    universe
        .iter()
        .copied()
        .filter(|id| chosen.binary_search(id).is_err())
        .collect()
}

fn binomial(n: usize, k: usize) -> u64 {
    let k = k.min(n - k);
    let mut acc: u128 = 1;
    for i in 0..k {
        acc = acc * (n - i) as u128 / (i + 1) as u128;
        if acc > u64::MAX as u128 {
            return u64::MAX;
        }
    }
    acc as u64
}

/// Number of candidates [`generate_candidates`] would produce.
///
/// Returns 0 for an invalid team count and saturates at `u64::MAX`.
pub fn candidate_count(roster_size: usize, teams: usize, strategy: Strategy) -> u64 {
    if validate_team_count(roster_size, teams).is_err() {
        return 0;
    }

    match strategy {
        Strategy::Binary => binomial(roster_size, roster_size / teams),
        Strategy::Balanced => {
            let mut remaining = roster_size;
            let mut count: u64 = 1;
            for teams_left in (2..=teams).rev() {
                let size = remaining / teams_left;
                count = count.saturating_mul(binomial(remaining, size));
                remaining -= size;
            }
            count
        }
    }
}
