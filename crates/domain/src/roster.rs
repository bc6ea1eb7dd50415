// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Versioned roster model.
//!
//! Team membership changes over time. Rather than duplicating literal
//! membership tables per date threshold, the roster is a single ordered
//! list of `{effective_from, snapshot}` entries; the active snapshot for a
//! query date is the last one whose cutover date is at or before it.

use crate::error::DomainError;
use crate::types::{Member, Team};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use time::Date;

/// One dated version of team membership.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterSnapshot {
    /// The cutover date this snapshot is valid from (inclusive).
    pub effective_from: Date,
    /// Members per team, in declaration order.
    pub teams: BTreeMap<Team, Vec<Member>>,
}

impl RosterSnapshot {
    /// Creates a new `RosterSnapshot`.
    #[must_use]
    pub const fn new(effective_from: Date, teams: BTreeMap<Team, Vec<Member>>) -> Self {
        Self {
            effective_from,
            teams,
        }
    }

    /// Returns the teams present in this snapshot, in canonical order.
    pub fn teams(&self) -> impl Iterator<Item = Team> + '_ {
        self.teams.keys().copied()
    }

    /// Returns the members of `team`, in declaration order.
    #[must_use]
    pub fn members_of(&self, team: Team) -> &[Member] {
        self.teams.get(&team).map_or(&[], Vec::as_slice)
    }

    /// Looks up a member by name across all teams.
    #[must_use]
    pub fn member(&self, name: &str) -> Option<(Team, &Member)> {
        for (team, members) in &self.teams {
            if let Some(member) = members.iter().find(|m| m.name == name) {
                return Some((*team, member));
            }
        }
        None
    }

    /// Iterates all members with their team, in stable snapshot order
    /// (canonical team order, then declaration order within the team).
    pub fn iter_members(&self) -> impl Iterator<Item = (Team, &Member)> {
        self.teams
            .iter()
            .flat_map(|(team, members)| members.iter().map(|m| (*team, m)))
    }

    /// Validates that member names are unique across all teams.
    fn validate_unique_names(&self) -> Result<(), DomainError> {
        let mut seen: HashSet<&str> = HashSet::new();
        for (_, member) in self.iter_members() {
            if !seen.insert(member.name.as_str()) {
                return Err(DomainError::DuplicateMember {
                    name: member.name.clone(),
                    effective_from: self.effective_from,
                });
            }
        }
        Ok(())
    }
}

/// The full versioned roster: an ordered list of snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    /// Snapshots in strictly ascending cutover order.
    snapshots: Vec<RosterSnapshot>,
}

impl Roster {
    /// Creates a roster from dated snapshots.
    ///
    /// # Arguments
    ///
    /// * `snapshots` - Snapshots in strictly ascending cutover order
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `snapshots` is empty
    /// - cutover dates are not strictly ascending
    /// - a member name is duplicated within one snapshot
    pub fn new(snapshots: Vec<RosterSnapshot>) -> Result<Self, DomainError> {
        if snapshots.is_empty() {
            return Err(DomainError::EmptyRoster);
        }
        for pair in snapshots.windows(2) {
            if pair[1].effective_from <= pair[0].effective_from {
                return Err(DomainError::UnorderedSnapshots {
                    effective_from: pair[1].effective_from,
                });
            }
        }
        for snapshot in &snapshots {
            snapshot.validate_unique_names()?;
        }
        Ok(Self { snapshots })
    }

    /// Selects the active snapshot for `date`: the last snapshot whose
    /// cutover date is at or before `date`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::RosterNotFound` if every snapshot cuts over
    /// after `date`. With at least one snapshot cutting over in the past
    /// this is unreachable and indicates a configuration error.
    pub fn snapshot_for(&self, date: Date) -> Result<&RosterSnapshot, DomainError> {
        self.snapshots
            .iter()
            .rev()
            .find(|s| s.effective_from <= date)
            .ok_or(DomainError::RosterNotFound { date })
    }

    /// Returns all snapshots, in ascending cutover order.
    #[must_use]
    pub fn snapshots(&self) -> &[RosterSnapshot] {
        &self.snapshots
    }
}
