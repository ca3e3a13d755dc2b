//! End-to-end run of the command line.

use std::io::Write;

use rand::rngs::StdRng;
use rand::SeedableRng;
use teamify_partition::{candidate_count, pick_random, Enumerator};
use tracing::info;

use crate::config::Config;
use crate::error::{CliError, CliResult};
use crate::format::render_options;

/// Enumerate the configured roster and write every option plus one random
/// pick to `out`.
pub fn run<W: Write>(config: &Config, out: &mut W) -> CliResult<()> {
    let registry = config.build_registry()?;
    info!(
        target: "teamify::cli",
        people = registry.len(),
        teams = config.teams,
        sample = config.uses_sample(),
        "Roster ready"
    );

    let count = candidate_count(registry.len(), config.teams, config.strategy);
    if count > config.max_candidates {
        return Err(CliError::TooManyCandidates {
            people: registry.len(),
            teams: config.teams,
            count,
            limit: config.max_candidates,
        });
    }

    let options = Enumerator::new(&registry)?
        .with_strategy(config.strategy)
        .enumerate(config.teams)?;
    let resolved = options
        .iter()
        .map(|option| registry.resolve_partition(option))
        .collect::<Result<Vec<_>, _>>()?;
    info!(target: "teamify::cli", options = resolved.len(), "Enumeration complete");

    writeln!(out, "Options for {} teams:", config.teams)?;
    writeln!(out, "{}", render_options(&resolved)?)?;
    writeln!(out)?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    if let Some(choice) = pick_random(&resolved, &mut rng) {
        writeln!(out, "Random option:")?;
        writeln!(out, "{}", render_options(std::slice::from_ref(choice))?)?;
    }

    Ok(())
}
