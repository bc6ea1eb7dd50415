// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Orchestration handlers.
//!
//! Handlers are pure over their inputs: the server does the locking, the
//! store I/O, and the actual dispatch. Every shift/eligibility decision in
//! the system flows through the domain crate via these functions; nothing
//! reimplements the cycle or the precedence rules inline.

use crate::error::{ApiError, translate_domain_error};
use crate::request_response::{
    BroadcastTarget, CreateLeaveRequest, EligibilityOverviewRequest, EligibilityOverviewResponse,
    OpportunityPlan, PeriodRequest, RestMemberInfo, RestOverviewResponse, ShiftLookupResponse,
};
use shift_relief_domain::{
    Candidate, CancellationSelection, LeaveEvent, OvertimeRequest, Period, Roster, ShiftCalendar,
    ShiftState, Team, broadcast_suppressed, eligible_members, members_on_big_rest,
    merge_candidate_pool, parse_iso_date, select_for_cancellation,
};
use std::str::FromStr;
use time::{Date, Time, format_description::well_known::Iso8601};
use tracing::info;

/// Parses an ISO 8601 time-of-day string.
fn parse_iso_time(s: &str) -> Result<Time, ApiError> {
    Time::parse(s, &Iso8601::DEFAULT).map_err(|e| ApiError::InvalidInput {
        field: String::from("period"),
        message: format!("Failed to parse time '{s}': {e}"),
    })
}

/// Parses a team letter.
fn parse_team(s: &str) -> Result<Team, ApiError> {
    Team::from_str(s).map_err(translate_domain_error)
}

/// Parses a `CreateLeaveRequest` into a domain `LeaveEvent`.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` if the date, team, period, or
/// suggested team cannot be parsed.
pub fn parse_leave_event(request: &CreateLeaveRequest) -> Result<LeaveEvent, ApiError> {
    let date: Date = parse_iso_date(&request.date).map_err(translate_domain_error)?;
    let requester_team: Team = parse_team(&request.requester_team)?;

    let period: Period = match &request.period {
        PeriodRequest::FullDay => Period::FullDay,
        PeriodRequest::Partial { start, end } => {
            let start: Time = parse_iso_time(start)?;
            let end: Time = parse_iso_time(end)?;
            Period::partial(start, end).map_err(translate_domain_error)?
        }
    };

    let overtime: Option<OvertimeRequest> = match &request.suggested_team {
        Some(team) => Some(OvertimeRequest {
            suggested_team: Some(parse_team(team)?),
        }),
        None => None,
    };

    Ok(LeaveEvent {
        date,
        requester_name: request.requester_name.clone(),
        requester_team,
        period,
        overtime,
    })
}

/// Plans the opportunity broadcast for a leave event.
///
/// The suggested team is the event's explicit suggestion when present,
/// otherwise the calendar's rest team for the date. The Tuesday/big-rest
/// suppression applies here, on the broadcast path only.
///
/// # Errors
///
/// Returns an error if no roster snapshot covers the date or a roster team
/// has no registered phase offset.
pub fn plan_opportunity(
    event: &LeaveEvent,
    roster: &Roster,
    calendar: &ShiftCalendar,
) -> Result<OpportunityPlan, ApiError> {
    let snapshot = roster
        .snapshot_for(event.date)
        .map_err(translate_domain_error)?;

    let suggested: Option<Team> = match event.overtime.as_ref().and_then(|o| o.suggested_team) {
        Some(team) => Some(team),
        None => calendar
            .rest_team(event.date)
            .map_err(translate_domain_error)?
            .map(|(team, _)| team),
    };

    let Some(team) = suggested else {
        info!(date = %event.date, "No team available to offer the opportunity to");
        return Ok(OpportunityPlan {
            date: event.date,
            requester_name: event.requester_name.clone(),
            requester_team: event.requester_team,
            suppressed: false,
            broadcast: None,
        });
    };

    let team_shift: ShiftState = calendar
        .shift_on(event.date, team)
        .map_err(translate_domain_error)?;

    if broadcast_suppressed(event.date, team, calendar).map_err(translate_domain_error)? {
        info!(
            date = %event.date,
            team = %team,
            "Opportunity suppressed: Tuesday big-rest"
        );
        return Ok(OpportunityPlan {
            date: event.date,
            requester_name: event.requester_name.clone(),
            requester_team: event.requester_team,
            suppressed: true,
            broadcast: None,
        });
    }

    let member_names: Vec<String> = snapshot
        .members_of(team)
        .iter()
        .filter(|m| m.name != event.requester_name)
        .map(|m| m.name.clone())
        .collect();

    info!(
        date = %event.date,
        team = %team,
        shift = %team_shift,
        members = member_names.len(),
        "Planned opportunity broadcast"
    );

    Ok(OpportunityPlan {
        date: event.date,
        requester_name: event.requester_name.clone(),
        requester_team: event.requester_team,
        suppressed: false,
        broadcast: Some(BroadcastTarget {
            team,
            team_shift,
            member_names,
        }),
    })
}

/// Computes the eligibility overview for a leave event: every roster
/// member eligible to be offered the opportunity, with reasons.
///
/// # Errors
///
/// Returns an error if the date or team cannot be parsed, no roster
/// snapshot covers the date, or a roster team has no registered phase
/// offset.
pub fn eligibility_overview(
    request: &EligibilityOverviewRequest,
    roster: &Roster,
    calendar: &ShiftCalendar,
) -> Result<EligibilityOverviewResponse, ApiError> {
    let date: Date = parse_iso_date(&request.date).map_err(translate_domain_error)?;
    let requester_team: Team = parse_team(&request.requester_team)?;

    let snapshot = roster.snapshot_for(date).map_err(translate_domain_error)?;
    let members = eligible_members(
        date,
        &request.requester_name,
        requester_team,
        snapshot,
        calendar,
    )
    .map_err(translate_domain_error)?;

    info!(
        date = %date,
        requester = %request.requester_name,
        eligible = members.len(),
        "Computed eligibility overview"
    );

    Ok(EligibilityOverviewResponse {
        date,
        requester_team,
        members,
    })
}

/// Plans a cancellation notice: merges the profile-sourced and
/// provisional-sourced candidate pools, then applies the exclusion set.
#[must_use]
pub fn plan_cancellation(
    profile: Vec<Candidate>,
    provisional: Vec<Candidate>,
    exclude_names: &[String],
) -> CancellationSelection {
    let pool: Vec<Candidate> = merge_candidate_pool(profile, provisional);
    let selection: CancellationSelection = select_for_cancellation(pool, exclude_names);

    info!(
        total = selection.total_candidates,
        excluded = selection.excluded_count,
        eligible = selection.eligible_count,
        "Planned cancellation notice"
    );
    selection
}

/// Looks up one team's shift state on a date.
///
/// # Errors
///
/// Returns an error if the date or team cannot be parsed or the team has
/// no registered phase offset.
pub fn shift_lookup(
    date: &str,
    team: &str,
    calendar: &ShiftCalendar,
) -> Result<ShiftLookupResponse, ApiError> {
    let date: Date = parse_iso_date(date).map_err(translate_domain_error)?;
    let team: Team = parse_team(team)?;
    let shift: ShiftState = calendar
        .shift_on(date, team)
        .map_err(translate_domain_error)?;

    Ok(ShiftLookupResponse {
        date,
        team,
        shift,
        is_rest: shift.is_rest(),
    })
}

/// Computes the rest overview for a date: the rest team plus every member
/// whose team is on big-rest.
///
/// # Errors
///
/// Returns an error if the date cannot be parsed, no roster snapshot
/// covers it, or a roster team has no registered phase offset.
pub fn rest_overview(
    date: &str,
    roster: &Roster,
    calendar: &ShiftCalendar,
) -> Result<RestOverviewResponse, ApiError> {
    let date: Date = parse_iso_date(date).map_err(translate_domain_error)?;
    let snapshot = roster.snapshot_for(date).map_err(translate_domain_error)?;

    let rest_team = calendar.rest_team(date).map_err(translate_domain_error)?;
    let big_rest_members: Vec<RestMemberInfo> =
        members_on_big_rest(date, snapshot, calendar, None, None)
            .map_err(translate_domain_error)?
            .into_iter()
            .map(|(team, member)| RestMemberInfo {
                team,
                name: member.name.clone(),
                role: member.role,
            })
            .collect();

    Ok(RestOverviewResponse {
        date,
        rest_team,
        big_rest_members,
    })
}
