// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shift calendar computation.
//!
//! Each team works a fixed 8-day repeating cycle, anchored at a reference
//! date and shifted by a per-team phase offset. A team's shift state on any
//! date is a pure function of the date and that offset.
//!
//! ## Invariants
//!
//! - `shift_on(date, team)` is total for every registered team and any
//!   calendar date, past or future
//! - `shift_on(date, team) == shift_on(date + 8, team)` (8-day periodicity)
//! - `shift_on(reference_date, team) == SHIFT_CYCLE[offset(team)]`
//! - No I/O and no clock reads; results depend only on the inputs

use crate::error::DomainError;
use crate::roster::RosterSnapshot;
use crate::types::{Member, MemberRole, Team};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use time::{Date, macros::date};

/// A team's shift state on a given date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftState {
    /// Full rest day.
    BigRest,
    /// Early shift.
    Early,
    /// Mid shift.
    Mid,
    /// Partial rest day.
    SmallRest,
    /// Night shift.
    Night,
}

impl ShiftState {
    /// Returns the string representation of this shift state.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BigRest => "big-rest",
            Self::Early => "early",
            Self::Mid => "mid",
            Self::SmallRest => "small-rest",
            Self::Night => "night",
        }
    }

    /// Returns whether this state is a rest day (big or small).
    #[must_use]
    pub const fn is_rest(&self) -> bool {
        matches!(self, Self::BigRest | Self::SmallRest)
    }
}

impl std::fmt::Display for ShiftState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The fixed 8-day repeating shift sequence.
pub const SHIFT_CYCLE: [ShiftState; 8] = [
    ShiftState::BigRest,
    ShiftState::Early,
    ShiftState::Early,
    ShiftState::Mid,
    ShiftState::Mid,
    ShiftState::SmallRest,
    ShiftState::Night,
    ShiftState::Night,
];

/// The anchor date for cycle position zero.
pub const REFERENCE_DATE: Date = date!(2025 - 04 - 01);

/// Length of the shift cycle in days.
const CYCLE_LEN: i64 = 8;

/// Deterministic calendar mapping (date, team) to a shift state.
///
/// The calendar holds a phase offset per team. A team with no registered
/// offset fails shift lookups with [`DomainError::InvalidTeam`] rather than
/// falling back to a default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftCalendar {
    /// The date at which a team with offset 0 is at cycle position 0.
    reference_date: Date,
    /// Phase offset per team, each in `[0, 8)`.
    offsets: BTreeMap<Team, u8>,
}

impl ShiftCalendar {
    /// Creates a calendar with explicit phase offsets.
    ///
    /// # Arguments
    ///
    /// * `reference_date` - The anchor date for cycle position zero
    /// * `offsets` - Phase offset per team, each in `[0, 8)`
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidShiftOffset` if any offset is 8 or more.
    pub fn new(reference_date: Date, offsets: BTreeMap<Team, u8>) -> Result<Self, DomainError> {
        for (team, offset) in &offsets {
            if i64::from(*offset) >= CYCLE_LEN {
                return Err(DomainError::InvalidShiftOffset {
                    team: team.as_str().to_string(),
                    offset: *offset,
                });
            }
        }
        Ok(Self {
            reference_date,
            offsets,
        })
    }

    /// Returns the reference date of this calendar.
    #[must_use]
    pub const fn reference_date(&self) -> Date {
        self.reference_date
    }

    /// Computes the shift state of `team` on `date`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTeam` if the team has no registered
    /// phase offset.
    pub fn shift_on(&self, date: Date, team: Team) -> Result<ShiftState, DomainError> {
        let offset: u8 = *self
            .offsets
            .get(&team)
            .ok_or_else(|| DomainError::InvalidTeam(team.as_str().to_string()))?;

        let delta_days: i64 = (date - self.reference_date).whole_days();
        // rem_euclid wraps negative deltas for dates before the reference
        let cycle_pos: i64 = (i64::from(offset) + delta_days).rem_euclid(CYCLE_LEN);
        let index: usize = usize::try_from(cycle_pos).unwrap_or_default();
        Ok(SHIFT_CYCLE[index])
    }

    /// Returns whether `team` is on its full rest day on `date`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTeam` if the team has no registered
    /// phase offset.
    pub fn is_big_rest_on(&self, date: Date, team: Team) -> Result<bool, DomainError> {
        Ok(self.shift_on(date, team)? == ShiftState::BigRest)
    }

    /// Returns all registered teams whose shift state on `date` is `state`.
    ///
    /// # Errors
    ///
    /// Does not fail for registered teams; the `Result` carries errors from
    /// shift computation for consistency with the other queries.
    pub fn teams_on(&self, date: Date, state: ShiftState) -> Result<Vec<Team>, DomainError> {
        let mut teams: Vec<Team> = Vec::new();
        for team in self.offsets.keys() {
            if self.shift_on(date, *team)? == state {
                teams.push(*team);
            }
        }
        Ok(teams)
    }

    /// Returns the rest team for `date`: the team on big-rest if any,
    /// otherwise the team on small-rest, otherwise `None`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTeam` only if shift computation fails.
    pub fn rest_team(&self, date: Date) -> Result<Option<(Team, ShiftState)>, DomainError> {
        if let Some(team) = self.teams_on(date, ShiftState::BigRest)?.first() {
            return Ok(Some((*team, ShiftState::BigRest)));
        }
        if let Some(team) = self.teams_on(date, ShiftState::SmallRest)?.first() {
            return Ok(Some((*team, ShiftState::SmallRest)));
        }
        Ok(None)
    }
}

impl Default for ShiftCalendar {
    /// The production calendar: reference 2025-04-01 with phase offsets
    /// A=0, B=2, C=4, D=6.
    fn default() -> Self {
        let offsets: BTreeMap<Team, u8> =
            [(Team::A, 0), (Team::B, 2), (Team::C, 4), (Team::D, 6)]
                .into_iter()
                .collect();
        Self {
            reference_date: REFERENCE_DATE,
            offsets,
        }
    }
}

/// Finds all roster members whose team is on big-rest on `date`, optionally
/// restricted to one role and excluding one team.
///
/// # Arguments
///
/// * `date` - The query date
/// * `snapshot` - The active roster snapshot
/// * `calendar` - The shift calendar
/// * `role` - When set, only members with this role are returned
/// * `exclude_team` - When set, this team's members are skipped
///
/// # Errors
///
/// Returns `DomainError::InvalidTeam` if a roster team has no registered
/// phase offset.
pub fn members_on_big_rest<'a>(
    date: Date,
    snapshot: &'a RosterSnapshot,
    calendar: &ShiftCalendar,
    role: Option<MemberRole>,
    exclude_team: Option<Team>,
) -> Result<Vec<(Team, &'a Member)>, DomainError> {
    let mut found: Vec<(Team, &Member)> = Vec::new();
    for team in snapshot.teams() {
        if exclude_team == Some(team) {
            continue;
        }
        if !calendar.is_big_rest_on(date, team)? {
            continue;
        }
        for member in snapshot.members_of(team) {
            if role.is_none_or(|r| member.role == r) {
                found.push((team, member));
            }
        }
    }
    Ok(found)
}
