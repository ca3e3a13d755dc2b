//! The Registry - roster and relations, draft then frozen.

use std::collections::BTreeMap;

use indexmap::IndexSet;
use teamify_core::{Pair, Partition, PersonId, Team};
use tracing::{debug, trace};

use crate::error::{RegistryError, RegistryResult};
use crate::{Phase, RelationKind, Snapshot};

/// Editable state before commit.
#[derive(Debug, Default)]
struct Draft {
    /// Roster in insertion order.
    people: IndexSet<String>,
    /// Relation kind per unordered name pair.
    relations: BTreeMap<Pair<String>, RelationKind>,
}

impl Draft {
    fn require_person(&self, name: &str) -> RegistryResult<()> {
        if self.people.contains(name) {
            Ok(())
        } else {
            Err(RegistryError::person_not_found(name))
        }
    }

    /// Build the relation key for two existing, distinct people.
    fn key(&self, a: &str, b: &str) -> RegistryResult<Pair<String>> {
        self.require_person(a)?;
        self.require_person(b)?;
        Pair::new(a.to_string(), b.to_string()).ok_or_else(|| {
            RegistryError::invalid_argument(format!("cannot relate {} to themselves", a))
        })
    }
}

/// Fixed state after commit.
#[derive(Debug)]
struct Frozen {
    /// Roster; the position of a name is its index.
    people: IndexSet<String>,
    /// Relation kind per unordered index pair.
    relations: BTreeMap<Pair<PersonId>, RelationKind>,
    /// Required pairs, ascending.
    required: Vec<Pair<PersonId>>,
    /// Forbidden pairs, ascending.
    forbidden: Vec<Pair<PersonId>>,
}

impl Frozen {
    /// Rewrite the draft from name space into index space.
    fn from_draft(draft: &Draft) -> RegistryResult<Self> {
        let people = draft.people.clone();
        let index_of = |name: &String| {
            people
                .get_index_of(name.as_str())
                .map(PersonId::from_index)
                .ok_or_else(|| RegistryError::person_not_found(name.as_str()))
        };

        let mut relations = BTreeMap::new();
        for (pair, &kind) in &draft.relations {
            let (a, b) = pair.as_tuple();
            let key = Pair::new(index_of(a)?, index_of(b)?).ok_or_else(|| {
                RegistryError::invalid_argument(format!("{} maps to a single person", pair))
            })?;
            relations.insert(key, kind);
        }

        let of_kind = |wanted: RelationKind| -> Vec<Pair<PersonId>> {
            relations
                .iter()
                .filter(|(_, kind)| **kind == wanted)
                .map(|(pair, _)| pair.clone())
                .collect()
        };
        let required = of_kind(RelationKind::Required);
        let forbidden = of_kind(RelationKind::Forbidden);

        Ok(Self {
            people,
            relations,
            required,
            forbidden,
        })
    }

    fn name(&self, id: PersonId) -> RegistryResult<&str> {
        self.people
            .get_index(id.index())
            .map(String::as_str)
            .ok_or_else(|| {
                RegistryError::invalid_argument(format!(
                    "person index {} is out of range for a roster of {}",
                    id.raw(),
                    self.people.len()
                ))
            })
    }
}

#[derive(Debug)]
enum State {
    Draft(Draft),
    Frozen(Frozen),
}

/// The Registry owns the roster and the relations between people.
///
/// Mutations are only accepted while the registry is a draft; index lookups
/// and snapshots only once it is frozen. Each call checks the phase of its
/// own registry, so independent registries never interfere.
#[derive(Debug)]
pub struct Registry {
    state: State,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// Create an empty draft registry.
    pub fn new() -> Self {
        Self {
            state: State::Draft(Draft::default()),
        }
    }

    /// Create a draft registry seeded with people. Duplicate names collapse.
    pub fn with_people<I, S>(people: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            state: State::Draft(Draft {
                people: people.into_iter().map(Into::into).collect(),
                relations: BTreeMap::new(),
            }),
        }
    }

    // ==================== Phase ====================

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        match self.state {
            State::Draft(_) => Phase::Draft,
            State::Frozen(_) => Phase::Frozen,
        }
    }

    /// Check whether `commit` has been called.
    pub fn is_frozen(&self) -> bool {
        self.phase() == Phase::Frozen
    }

    fn draft_mut(&mut self, operation: &'static str) -> RegistryResult<&mut Draft> {
        match &mut self.state {
            State::Draft(draft) => Ok(draft),
            State::Frozen(_) => Err(RegistryError::phase(
                operation,
                Phase::Draft,
                Phase::Frozen,
            )),
        }
    }

    fn frozen(&self, operation: &'static str) -> RegistryResult<&Frozen> {
        match &self.state {
            State::Frozen(frozen) => Ok(frozen),
            State::Draft(_) => Err(RegistryError::phase(
                operation,
                Phase::Frozen,
                Phase::Draft,
            )),
        }
    }

    // ==================== Read-only, any phase ====================

    fn roster(&self) -> &IndexSet<String> {
        match &self.state {
            State::Draft(draft) => &draft.people,
            State::Frozen(frozen) => &frozen.people,
        }
    }

    /// Number of people.
    pub fn len(&self) -> usize {
        self.roster().len()
    }

    /// Check if the roster is empty.
    pub fn is_empty(&self) -> bool {
        self.roster().is_empty()
    }

    /// Check whether a person is on the roster.
    pub fn contains(&self, name: &str) -> bool {
        self.roster().contains(name)
    }

    /// Names in roster order. After commit, the position is the index.
    pub fn people(&self) -> impl Iterator<Item = &str> {
        self.roster().iter().map(String::as_str)
    }

    /// Get the relation between two people, if any.
    pub fn relation(&self, a: &str, b: &str) -> Option<RelationKind> {
        match &self.state {
            State::Draft(draft) => {
                let key = Pair::new(a.to_string(), b.to_string())?;
                draft.relations.get(&key).copied()
            }
            State::Frozen(frozen) => {
                let a = frozen.people.get_index_of(a)?;
                let b = frozen.people.get_index_of(b)?;
                let key = Pair::new(PersonId::from_index(a), PersonId::from_index(b))?;
                frozen.relations.get(&key).copied()
            }
        }
    }

    /// All relations as name pairs.
    pub fn relations(&self) -> Vec<(Pair<&str>, RelationKind)> {
        match &self.state {
            State::Draft(draft) => draft
                .relations
                .iter()
                .filter_map(|(pair, &kind)| {
                    let (a, b) = pair.as_tuple();
                    Some((Pair::new(a.as_str(), b.as_str())?, kind))
                })
                .collect(),
            State::Frozen(frozen) => frozen
                .relations
                .iter()
                .filter_map(|(pair, &kind)| {
                    let (a, b) = pair.get();
                    let a = frozen.people.get_index(a.index())?;
                    let b = frozen.people.get_index(b.index())?;
                    Some((Pair::new(a.as_str(), b.as_str())?, kind))
                })
                .collect(),
        }
    }

    // ==================== Draft operations ====================

    /// Add a person. Adding an existing name is a no-op.
    pub fn add_person(&mut self, name: impl Into<String>) -> RegistryResult<()> {
        let draft = self.draft_mut("add_person")?;
        let name = name.into();
        if !draft.people.contains(&name) {
            trace!(target: "teamify::registry", person = %name, "Person added");
            draft.people.insert(name);
        }
        Ok(())
    }

    /// Remove a person and every relation that mentions them.
    pub fn remove_person(&mut self, name: &str) -> RegistryResult<()> {
        let draft = self.draft_mut("remove_person")?;
        if !draft.people.shift_remove(name) {
            return Err(RegistryError::person_not_found(name));
        }

        let before = draft.relations.len();
        draft
            .relations
            .retain(|pair, _| pair.first().as_str() != name && pair.second().as_str() != name);
        trace!(
            target: "teamify::registry",
            person = name,
            dropped_relations = before - draft.relations.len(),
            "Person removed"
        );
        Ok(())
    }

    /// Require two people to be on the same team.
    pub fn add_required_pair(&mut self, a: &str, b: &str) -> RegistryResult<()> {
        self.add_relation(RelationKind::Required, a, b)
    }

    /// Forbid two people from being on the same team.
    pub fn add_forbidden_pair(&mut self, a: &str, b: &str) -> RegistryResult<()> {
        self.add_relation(RelationKind::Forbidden, a, b)
    }

    /// Drop a required pair.
    pub fn remove_required_pair(&mut self, a: &str, b: &str) -> RegistryResult<()> {
        self.remove_relation(RelationKind::Required, a, b)
    }

    /// Drop a forbidden pair.
    pub fn remove_forbidden_pair(&mut self, a: &str, b: &str) -> RegistryResult<()> {
        self.remove_relation(RelationKind::Forbidden, a, b)
    }

    /// Add a relation of the given kind.
    ///
    /// Fails if either person is unknown, if both names are the same, or if
    /// the pair already carries a relation of either kind.
    pub fn add_relation(&mut self, kind: RelationKind, a: &str, b: &str) -> RegistryResult<()> {
        let draft = self.draft_mut(kind.add_operation())?;
        let pair = draft.key(a, b)?;

        let existing = draft.relations.get(&pair).copied();
        match existing {
            Some(existing) if existing == kind => {
                Err(RegistryError::duplicate_relation(kind, &pair))
            }
            Some(existing) => Err(RegistryError::conflicting_relation(&pair, existing, kind)),
            None => {
                trace!(target: "teamify::registry", %pair, %kind, "Relation added");
                draft.relations.insert(pair, kind);
                Ok(())
            }
        }
    }

    /// Remove a relation of the given kind.
    pub fn remove_relation(
        &mut self,
        kind: RelationKind,
        a: &str,
        b: &str,
    ) -> RegistryResult<()> {
        let draft = self.draft_mut(kind.remove_operation())?;
        draft.require_person(a)?;
        draft.require_person(b)?;

        let pair = Pair::new(a.to_string(), b.to_string()).ok_or_else(|| {
            RegistryError::relation_not_found(kind, format!("{{{}, {}}}", a, b))
        })?;

        if draft.relations.get(&pair) != Some(&kind) {
            return Err(RegistryError::relation_not_found(kind, &pair));
        }
        draft.relations.remove(&pair);
        Ok(())
    }

    /// Freeze the registry.
    ///
    /// Names are indexed by their roster position and relations are
    /// rewritten to index pairs. There is no way back to draft.
    pub fn commit(&mut self) -> RegistryResult<()> {
        let frozen = match &self.state {
            State::Draft(draft) => Frozen::from_draft(draft)?,
            State::Frozen(_) => {
                return Err(RegistryError::phase("commit", Phase::Draft, Phase::Frozen))
            }
        };

        debug!(
            target: "teamify::registry",
            people = frozen.people.len(),
            required = frozen.required.len(),
            forbidden = frozen.forbidden.len(),
            "Registry committed"
        );
        self.state = State::Frozen(frozen);
        Ok(())
    }

    // ==================== Frozen operations ====================

    /// Get the index assigned to a name.
    pub fn id_of(&self, name: &str) -> RegistryResult<PersonId> {
        self.frozen("id_of")?
            .people
            .get_index_of(name)
            .map(PersonId::from_index)
            .ok_or_else(|| RegistryError::person_not_found(name))
    }

    /// Get the name behind an index.
    pub fn resolve(&self, id: PersonId) -> RegistryResult<&str> {
        self.frozen("resolve")?.name(id)
    }

    /// Get the names behind a sequence of indices, in the same order.
    pub fn resolve_many(&self, ids: &[PersonId]) -> RegistryResult<Vec<&str>> {
        let frozen = self.frozen("resolve_many")?;
        ids.iter().map(|&id| frozen.name(id)).collect()
    }

    /// Get the names behind an index pair, smaller index first.
    pub fn resolve_pair(&self, pair: &Pair<PersonId>) -> RegistryResult<(&str, &str)> {
        let frozen = self.frozen("resolve_pair")?;
        let (a, b) = pair.get();
        Ok((frozen.name(a)?, frozen.name(b)?))
    }

    /// Get the names of a team's members.
    pub fn resolve_team(&self, team: &Team) -> RegistryResult<Vec<&str>> {
        self.resolve_many(team.members())
    }

    /// Get the names of every team in a partition.
    pub fn resolve_partition(&self, partition: &Partition) -> RegistryResult<Vec<Vec<&str>>> {
        partition.iter().map(|team| self.resolve_team(team)).collect()
    }

    /// Borrow the index-space view consumed by the enumerator.
    pub fn snapshot(&self) -> RegistryResult<Snapshot<'_>> {
        let frozen = self.frozen("snapshot")?;
        Ok(Snapshot::new(
            frozen.people.len(),
            &frozen.required,
            &frozen.forbidden,
        ))
    }
}
