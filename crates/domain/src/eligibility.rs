// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Overtime-eligibility engine.
//!
//! Given a leave event, this module decides which roster members should be
//! offered the resulting overtime opportunity. Reasons follow a fixed
//! precedence: rest-day members first, then team leads, then on-duty
//! members.
//!
//! ## Invariants
//!
//! - The requester is never eligible
//! - Members of the requester's team are never eligible
//! - Output order is stable snapshot order, so repeated computation with
//!   identical inputs yields an identical list
//! - Every shift state maps to a reason; under the current 8-state cycle
//!   every cross-team member is eligible under some reason. Whether that
//!   breadth is intended product behavior is pending product-owner
//!   confirmation; the precedence is implemented as written rather than
//!   narrowed here.
//!
//! The Tuesday/big-rest suppression in [`broadcast_suppressed`] applies
//! only to the opportunity-broadcast path (whether a suggested team may be
//! offered the opportunity at all). It is deliberately not folded into the
//! per-member rule above; the two paths have different intent.

use crate::error::DomainError;
use crate::roster::RosterSnapshot;
use crate::shift_calendar::{ShiftCalendar, ShiftState};
use crate::types::{MemberRole, Team};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use time::{Date, Weekday};

/// Why a member is eligible for an overtime offer.
///
/// Variants are ordered by precedence; the first matching reason wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum EligibilityReason {
    /// The member's team is on its full rest day.
    FullRest,
    /// The member's team is on its partial rest day.
    PartialRest,
    /// The member is a team lead, eligible regardless of shift.
    TeamLead,
    /// The member's team is on duty on the given shift.
    OnShift(ShiftState),
}

impl std::fmt::Display for EligibilityReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FullRest => write!(f, "team on full rest day, available to help"),
            Self::PartialRest => write!(f, "team on partial rest day, available to help"),
            Self::TeamLead => write!(f, "team lead, available to help regardless of shift"),
            Self::OnShift(shift) => {
                write!(f, "team on shift {shift}, available to help")
            }
        }
    }
}

/// One member eligible to be offered an overtime opportunity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibleMember {
    /// The member's roster name.
    pub name: String,
    /// The member's team.
    pub team: Team,
    /// The member's role.
    pub role: MemberRole,
    /// Why the member is eligible.
    pub reason: EligibilityReason,
}

/// Computes the roster members eligible to cover an overtime opportunity.
///
/// Evaluated per member of the active snapshot, in stable snapshot order:
///
/// 1. The requester is never eligible.
/// 2. Members of the requester's team are never eligible.
/// 3. Otherwise the first matching reason wins: team on big-rest, team on
///    small-rest, member is a lead, team on duty (early/mid/night).
///
/// # Arguments
///
/// * `date` - The date of the leave
/// * `requester_name` - The requester's roster name
/// * `requester_team` - The requester's team
/// * `snapshot` - The roster snapshot active on `date`
/// * `calendar` - The shift calendar
///
/// # Errors
///
/// Returns `DomainError::InvalidTeam` if a roster team has no registered
/// phase offset.
pub fn eligible_members(
    date: Date,
    requester_name: &str,
    requester_team: Team,
    snapshot: &RosterSnapshot,
    calendar: &ShiftCalendar,
) -> Result<Vec<EligibleMember>, DomainError> {
    // One shift lookup per team, not per member
    let mut team_shifts: BTreeMap<Team, ShiftState> = BTreeMap::new();
    for team in snapshot.teams() {
        if team == requester_team {
            continue;
        }
        team_shifts.insert(team, calendar.shift_on(date, team)?);
    }

    let mut eligible: Vec<EligibleMember> = Vec::new();
    for (team, member) in snapshot.iter_members() {
        if member.name == requester_name || team == requester_team {
            continue;
        }
        let Some(shift) = team_shifts.get(&team).copied() else {
            continue;
        };
        let reason: EligibilityReason = match shift {
            ShiftState::BigRest => EligibilityReason::FullRest,
            ShiftState::SmallRest => EligibilityReason::PartialRest,
            _ if member.role == MemberRole::Lead => EligibilityReason::TeamLead,
            on_duty => EligibilityReason::OnShift(on_duty),
        };
        eligible.push(EligibleMember {
            name: member.name.clone(),
            team,
            role: member.role,
            reason,
        });
    }
    Ok(eligible)
}

/// Decides whether an opportunity broadcast to `suggested_team` must be
/// suppressed entirely.
///
/// When the event date falls on a Tuesday and the suggested team is on its
/// full rest day, nobody is notified. This rule applies to the broadcast
/// path only, never to per-member eligibility.
///
/// # Errors
///
/// Returns `DomainError::InvalidTeam` if the team has no registered phase
/// offset.
pub fn broadcast_suppressed(
    date: Date,
    suggested_team: Team,
    calendar: &ShiftCalendar,
) -> Result<bool, DomainError> {
    Ok(date.weekday() == Weekday::Tuesday && calendar.is_big_rest_on(date, suggested_team)?)
}
