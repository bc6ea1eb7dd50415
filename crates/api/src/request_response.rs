// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request and response DTOs.
//!
//! These are distinct from domain types and represent the API contract;
//! string fields carry unparsed wire input (ISO dates, team letters).

use shift_relief_domain::{EligibleMember, MemberRole, ShiftState, Team};
use time::Date;

/// The leave period as supplied on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodRequest {
    /// The leave covers the whole day.
    FullDay,
    /// The leave covers a window within the day.
    Partial {
        /// Window start, ISO 8601 time (e.g., "09:00:00").
        start: String,
        /// Window end, ISO 8601 time.
        end: String,
    },
}

/// API request to create a leave and broadcast the resulting overtime
/// opportunity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateLeaveRequest {
    /// The leave date, ISO 8601 (e.g., "2025-07-06").
    pub date: String,
    /// The requester's roster name.
    pub requester_name: String,
    /// The requester's team letter.
    pub requester_team: String,
    /// The leave period.
    pub period: PeriodRequest,
    /// The team suggested to cover the opportunity, if the requester named
    /// one.
    pub suggested_team: Option<String>,
}

/// API request for an eligibility dry run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EligibilityOverviewRequest {
    /// The leave date, ISO 8601.
    pub date: String,
    /// The requester's roster name.
    pub requester_name: String,
    /// The requester's team letter.
    pub requester_team: String,
}

/// API response for an eligibility dry run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EligibilityOverviewResponse {
    /// The parsed leave date.
    pub date: Date,
    /// The requester's team.
    pub requester_team: Team,
    /// Eligible members in stable roster order, with reasons.
    pub members: Vec<EligibleMember>,
}

/// The broadcast target of an overtime opportunity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BroadcastTarget {
    /// The team the opportunity is offered to.
    pub team: Team,
    /// That team's shift state on the event date.
    pub team_shift: ShiftState,
    /// The target team's member names, requester excluded.
    pub member_names: Vec<String>,
}

/// The plan for one opportunity broadcast.
///
/// `suppressed` reflects the Tuesday/big-rest rule: when set, nobody is
/// notified even though per-member eligibility would have matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpportunityPlan {
    /// The event date.
    pub date: Date,
    /// The requester's roster name.
    pub requester_name: String,
    /// The requester's team.
    pub requester_team: Team,
    /// Whether the whole opportunity is suppressed.
    pub suppressed: bool,
    /// The broadcast target; `None` when suppressed or when no team is
    /// available to offer the opportunity to.
    pub broadcast: Option<BroadcastTarget>,
}

/// API response for a single shift lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftLookupResponse {
    /// The parsed query date.
    pub date: Date,
    /// The queried team.
    pub team: Team,
    /// The team's shift state on the date.
    pub shift: ShiftState,
    /// Whether the state is a rest day.
    pub is_rest: bool,
}

/// One member listed in a rest overview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestMemberInfo {
    /// The member's team.
    pub team: Team,
    /// The member's roster name.
    pub name: String,
    /// The member's role.
    pub role: MemberRole,
}

/// API response for the rest overview of a date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestOverviewResponse {
    /// The parsed query date.
    pub date: Date,
    /// The rest team for the date, if any.
    pub rest_team: Option<(Team, ShiftState)>,
    /// All members whose team is on big-rest on the date.
    pub big_rest_members: Vec<RestMemberInfo>,
}
