//! Team and Partition structures.
//!
//! A team is a set of person indices, kept sorted. A partition is an ordered
//! list of teams; the position of a team in the list is its team number.

use crate::PersonId;

/// A set of people assigned to the same team.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Team {
    members: Vec<PersonId>,
}

impl Team {
    /// Create a team from members in any order. Repeated members collapse.
    pub fn new(members: impl IntoIterator<Item = PersonId>) -> Self {
        let mut members: Vec<PersonId> = members.into_iter().collect();
        members.sort_unstable();
        members.dedup();
        Self { members }
    }

    /// Members in ascending index order.
    pub fn members(&self) -> &[PersonId] {
        &self.members
    }

    /// Check membership.
    pub fn contains(&self, id: PersonId) -> bool {
        self.members.binary_search(&id).is_ok()
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Check if the team has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Iterate over members in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = PersonId> + '_ {
        self.members.iter().copied()
    }
}

impl FromIterator<PersonId> for Team {
    fn from_iter<I: IntoIterator<Item = PersonId>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// An ordered tuple of teams.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Partition {
    teams: Vec<Team>,
}

impl Partition {
    /// Create a partition from teams, keeping their order.
    pub fn new(teams: Vec<Team>) -> Self {
        Self { teams }
    }

    /// All teams in order.
    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    /// Number of teams.
    pub fn team_count(&self) -> usize {
        self.teams.len()
    }

    /// Sizes of the teams, in order.
    pub fn team_sizes(&self) -> Vec<usize> {
        self.teams.iter().map(Team::len).collect()
    }

    /// Position of the first team containing `id`.
    pub fn team_of(&self, id: PersonId) -> Option<usize> {
        self.teams.iter().position(|team| team.contains(id))
    }

    /// Total number of memberships across all teams.
    pub fn person_count(&self) -> usize {
        self.teams.iter().map(Team::len).sum()
    }

    /// Check that the teams are pairwise disjoint and their union is
    /// exactly `0..roster_size`.
    pub fn is_exact_cover(&self, roster_size: usize) -> bool {
        let mut seen = vec![false; roster_size];
        for id in self.teams.iter().flat_map(Team::iter) {
            match seen.get_mut(id.index()) {
                Some(slot) if !*slot => *slot = true,
                _ => return false,
            }
        }
        seen.into_iter().all(|s| s)
    }

    /// Iterate over teams in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Team> {
        self.teams.iter()
    }
}

impl From<Vec<Team>> for Partition {
    fn from(teams: Vec<Team>) -> Self {
        Self::new(teams)
    }
}

impl IntoIterator for Partition {
    type Item = Team;
    type IntoIter = std::vec::IntoIter<Team>;

    fn into_iter(self) -> Self::IntoIter {
        self.teams.into_iter()
    }
}

impl<'a> IntoIterator for &'a Partition {
    type Item = &'a Team;
    type IntoIter = std::slice::Iter<'a, Team>;

    fn into_iter(self) -> Self::IntoIter {
        self.teams.iter()
    }
}
