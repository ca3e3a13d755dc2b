//! Seeded random rosters for property tests.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use teamify_registry::{Registry, RelationKind};

use crate::error::ExampleResult;
use crate::scenario::Scenario;

/// A roster of generated names with random, non-contradictory relations.
#[derive(Debug, Clone)]
pub struct RandomRoster {
    seed: u64,
    people: Vec<String>,
    relations: Vec<(RelationKind, String, String)>,
}

impl RandomRoster {
    /// Generate `people` names and up to `relations` relations from `seed`.
    ///
    /// Each unordered pair receives at most one relation, so applying them in
    /// order never conflicts.
    pub fn generate(seed: u64, people: usize, relations: usize) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let names: Vec<String> = (0..people).map(|i| format!("P{}", i)).collect();

        let mut pairs: Vec<(usize, usize)> = (0..people)
            .flat_map(|a| (a + 1..people).map(move |b| (a, b)))
            .collect();
        pairs.shuffle(&mut rng);

        let relations = pairs
            .into_iter()
            .take(relations)
            .map(|(a, b)| {
                let kind = if rng.gen_bool(0.4) {
                    RelationKind::Required
                } else {
                    RelationKind::Forbidden
                };
                // Either order; the registry stores pairs unordered.
                if rng.gen_bool(0.5) {
                    (kind, names[a].clone(), names[b].clone())
                } else {
                    (kind, names[b].clone(), names[a].clone())
                }
            })
            .collect();

        Self {
            seed,
            people: names,
            relations,
        }
    }

    pub fn people(&self) -> &[String] {
        &self.people
    }

    pub fn relations(&self) -> &[(RelationKind, String, String)] {
        &self.relations
    }

    /// Build a draft registry holding this roster.
    pub fn draft(&self) -> ExampleResult<Registry> {
        let mut registry = Registry::with_people(self.people.iter().cloned());
        for (kind, a, b) in &self.relations {
            registry.add_relation(*kind, a, b)?;
        }
        Ok(registry)
    }

    /// Build and commit a registry holding this roster.
    pub fn frozen(&self) -> ExampleResult<Registry> {
        let mut registry = self.draft()?;
        registry.commit()?;
        Ok(registry)
    }

    /// A scenario that enumerates this roster into `teams` teams.
    pub fn scenario(&self, teams: usize) -> Scenario {
        let scenario = Scenario::new(format!("random_{}_{}", self.seed, teams))
            .people(self.people.iter().cloned())
            .teams(teams);
        self.relations
            .iter()
            .fold(scenario, |scenario, (kind, a, b)| match kind {
                RelationKind::Required => scenario.require(a.as_str(), b.as_str()),
                RelationKind::Forbidden => scenario.forbid(a.as_str(), b.as_str()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_roster() {
        // GIVEN two rosters from one seed
        let a = RandomRoster::generate(7, 6, 5);
        let b = RandomRoster::generate(7, 6, 5);

        // THEN they are identical
        assert_eq!(a.people(), b.people());
        assert_eq!(a.relations(), b.relations());
    }

    #[test]
    fn test_relations_capped_by_pair_count() {
        // GIVEN 3 people (3 pairs) and a request for 10 relations
        let roster = RandomRoster::generate(1, 3, 10);

        // THEN only 3 relations exist
        assert_eq!(roster.relations().len(), 3);
    }

    #[test]
    fn test_relations_apply_without_conflict() {
        for seed in 0..20 {
            // GIVEN a random roster
            let roster = RandomRoster::generate(seed, 8, 12);

            // WHEN it is committed
            let registry = roster.frozen().unwrap();

            // THEN every relation is present
            assert_eq!(registry.relations().len(), roster.relations().len());
        }
    }
}
