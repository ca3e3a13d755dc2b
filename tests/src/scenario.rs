//! Scenario definition and builder.

use std::fmt;

use teamify_core::ErrorKind;
use teamify_partition::Strategy;
use teamify_registry::{Registry, RegistryResult};

use crate::assertion::{Assertion, AssertionBuilder};
use crate::error::ExampleResult;
use crate::runner::Runner;

/// One draft-phase edit of the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    AddPerson(String),
    RemovePerson(String),
    Require(String, String),
    Forbid(String, String),
    Unrequire(String, String),
    Unforbid(String, String),
}

impl Edit {
    /// Apply the edit to a registry.
    pub fn apply(&self, registry: &mut Registry) -> RegistryResult<()> {
        match self {
            Edit::AddPerson(name) => registry.add_person(name.as_str()),
            Edit::RemovePerson(name) => registry.remove_person(name),
            Edit::Require(a, b) => registry.add_required_pair(a, b),
            Edit::Forbid(a, b) => registry.add_forbidden_pair(a, b),
            Edit::Unrequire(a, b) => registry.remove_required_pair(a, b),
            Edit::Unforbid(a, b) => registry.remove_forbidden_pair(a, b),
        }
    }
}

impl fmt::Display for Edit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Edit::AddPerson(name) => write!(f, "add {}", name),
            Edit::RemovePerson(name) => write!(f, "remove {}", name),
            Edit::Require(a, b) => write!(f, "require {}+{}", a, b),
            Edit::Forbid(a, b) => write!(f, "forbid {}+{}", a, b),
            Edit::Unrequire(a, b) => write!(f, "unrequire {}+{}", a, b),
            Edit::Unforbid(a, b) => write!(f, "unforbid {}+{}", a, b),
        }
    }
}

/// An edit with its expected outcome.
#[derive(Debug, Clone)]
pub struct Step {
    /// The edit to apply.
    pub edit: Edit,
    /// `None` if the edit must succeed.
    pub expected_error: Option<ErrorKind>,
}

/// A complete test scenario.
pub struct Scenario {
    /// Scenario name (for reporting).
    name: String,
    /// Initial roster.
    people: Vec<String>,
    /// Edits applied in order before commit.
    steps: Vec<Step>,
    /// Number of teams to enumerate.
    teams: usize,
    /// Split strategy.
    strategy: Strategy,
    /// Expectations on the enumeration.
    assertion: Assertion,
}

impl Scenario {
    /// Create a new scenario with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            people: Vec::new(),
            steps: Vec::new(),
            teams: 2,
            strategy: Strategy::default(),
            assertion: Assertion::new(),
        }
    }

    /// Seed the roster.
    pub fn people<I, S>(mut self, people: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.people.extend(people.into_iter().map(Into::into));
        self
    }

    fn edit(mut self, edit: Edit) -> Self {
        self.steps.push(Step {
            edit,
            expected_error: None,
        });
        self
    }

    /// Add a person.
    pub fn add(self, name: impl Into<String>) -> Self {
        self.edit(Edit::AddPerson(name.into()))
    }

    /// Remove a person.
    pub fn remove(self, name: impl Into<String>) -> Self {
        self.edit(Edit::RemovePerson(name.into()))
    }

    /// Add a required pair.
    pub fn require(self, a: impl Into<String>, b: impl Into<String>) -> Self {
        self.edit(Edit::Require(a.into(), b.into()))
    }

    /// Add a forbidden pair.
    pub fn forbid(self, a: impl Into<String>, b: impl Into<String>) -> Self {
        self.edit(Edit::Forbid(a.into(), b.into()))
    }

    /// Remove a required pair.
    pub fn unrequire(self, a: impl Into<String>, b: impl Into<String>) -> Self {
        self.edit(Edit::Unrequire(a.into(), b.into()))
    }

    /// Remove a forbidden pair.
    pub fn unforbid(self, a: impl Into<String>, b: impl Into<String>) -> Self {
        self.edit(Edit::Unforbid(a.into(), b.into()))
    }

    /// Expect the previous edit to fail with the given kind.
    pub fn fails_with(mut self, kind: ErrorKind) -> Self {
        if let Some(step) = self.steps.last_mut() {
            step.expected_error = Some(kind);
        }
        self
    }

    /// Set the number of teams.
    pub fn teams(mut self, teams: usize) -> Self {
        self.teams = teams;
        self
    }

    /// Set the split strategy.
    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Set the expectations on the enumeration.
    pub fn expect<F>(mut self, assertion_fn: F) -> Self
    where
        F: FnOnce(AssertionBuilder) -> AssertionBuilder,
    {
        self.assertion = assertion_fn(AssertionBuilder::new()).build();
        self
    }

    /// Run the scenario and return the result.
    pub fn run(&self) -> ExampleResult<()> {
        Runner::new(self).run()
    }

    /// Get the scenario name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the initial roster.
    pub fn initial_people(&self) -> &[String] {
        &self.people
    }

    /// Get the steps.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Get the team count.
    pub fn team_count(&self) -> usize {
        self.teams
    }

    /// Get the split strategy.
    pub fn split_strategy(&self) -> Strategy {
        self.strategy
    }

    /// Get the assertion.
    pub fn assertion(&self) -> &Assertion {
        &self.assertion
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_records_steps() {
        // GIVEN/WHEN
        let scenario = Scenario::new("builder")
            .people(["A", "B"])
            .add("C")
            .require("A", "B")
            .forbid("A", "Z")
            .fails_with(ErrorKind::NotFound)
            .teams(3);

        // THEN
        assert_eq!(scenario.name(), "builder");
        assert_eq!(scenario.initial_people(), &["A".to_string(), "B".to_string()]);
        assert_eq!(scenario.steps().len(), 3);
        assert_eq!(scenario.steps()[0].expected_error, None);
        assert_eq!(scenario.steps()[2].expected_error, Some(ErrorKind::NotFound));
        assert_eq!(scenario.team_count(), 3);
    }

    #[test]
    fn test_edit_display() {
        assert_eq!(Edit::Require("A".into(), "B".into()).to_string(), "require A+B");
        assert_eq!(Edit::RemovePerson("C".into()).to_string(), "remove C");
    }
}
