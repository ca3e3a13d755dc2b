//! Scenario runner.

use teamify_core::Partition;
use teamify_partition::{Enumerator, PartitionResult};
use teamify_registry::Registry;

use crate::error::{ExampleError, ExampleResult};
use crate::scenario::{Scenario, Step};

/// Runs a scenario against Teamify.
pub struct Runner<'s> {
    scenario: &'s Scenario,
}

impl<'s> Runner<'s> {
    /// Create a new runner for a scenario.
    pub fn new(scenario: &'s Scenario) -> Self {
        Self { scenario }
    }

    /// Run the scenario.
    pub fn run(&self) -> ExampleResult<()> {
        // 1. Build the draft roster
        let mut registry = Registry::with_people(self.scenario.initial_people().iter().cloned());

        // 2. Apply each edit and check its outcome
        for (index, step) in self.scenario.steps().iter().enumerate() {
            self.apply_step(&mut registry, index, step)?;
        }

        // 3. Freeze and enumerate twice
        registry.commit()?;
        let enumerator =
            Enumerator::new(&registry)?.with_strategy(self.scenario.split_strategy());
        let teams = self.scenario.team_count();
        let result = enumerator.enumerate(teams);
        let again = enumerator.enumerate(teams);
        self.check_repeatable(&result, &again)?;

        // 4. Verify expectations
        self.scenario
            .assertion()
            .verify(self.scenario.name(), &registry, &result)
    }

    fn apply_step(&self, registry: &mut Registry, index: usize, step: &Step) -> ExampleResult<()> {
        let label = format!("{}#{} ({})", self.scenario.name(), index, step.edit);

        match (step.edit.apply(registry), step.expected_error) {
            (Ok(()), None) => Ok(()),
            (Ok(()), Some(expected)) => Err(ExampleError::unexpected_success(label, expected)),
            (Err(e), None) => Err(ExampleError::step_failed(label, e.to_string())),
            (Err(e), Some(expected)) if e.kind() == expected => Ok(()),
            (Err(e), Some(expected)) => Err(ExampleError::wrong_error_kind(
                label,
                expected,
                e.kind(),
                e.to_string(),
            )),
        }
    }

    fn check_repeatable(
        &self,
        first: &PartitionResult<Vec<Partition>>,
        second: &PartitionResult<Vec<Partition>>,
    ) -> ExampleResult<()> {
        let same = match (first, second) {
            (Ok(a), Ok(b)) => a == b,
            (Err(a), Err(b)) => a.kind() == b.kind() && a.to_string() == b.to_string(),
            _ => false,
        };

        if same {
            Ok(())
        } else {
            Err(ExampleError::assertion_failed(
                self.scenario.name(),
                "enumerating twice gave different results",
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use teamify_core::ErrorKind;

    use crate::error::ExampleError;
    use crate::scenario::Scenario;

    #[test]
    fn test_unexpected_success_is_reported() {
        let err = Scenario::new("oops")
            .people(["A", "B"])
            .require("A", "B")
            .fails_with(ErrorKind::Conflict)
            .run()
            .unwrap_err();

        assert!(matches!(err, ExampleError::UnexpectedSuccess { .. }));
    }

    #[test]
    fn test_wrong_error_kind_is_reported() {
        let err = Scenario::new("oops")
            .people(["A", "B"])
            .require("A", "Z")
            .fails_with(ErrorKind::Conflict)
            .run()
            .unwrap_err();

        assert!(matches!(
            err,
            ExampleError::WrongErrorKind {
                found: ErrorKind::NotFound,
                ..
            }
        ));
    }
}
