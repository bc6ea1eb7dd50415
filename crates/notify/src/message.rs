// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Notification message formatting.
//!
//! The wording is a presentation concern; the core only decides who and
//! whether. Every opportunity notice embeds the event date, the requester
//! name and team, and a deep link to the event's detail page keyed by
//! date.

use shift_relief_domain::{ShiftState, Team};
use time::Date;

/// Formats an overtime-opportunity notice.
///
/// # Arguments
///
/// * `date` - The event date
/// * `requester_name` - The member taking leave
/// * `requester_team` - The requester's team
/// * `suggested_team` - The team the opportunity is offered to
/// * `team_shift` - The suggested team's shift state on the date
/// * `link_base` - Base URL for the detail-page deep link
#[must_use]
pub fn opportunity_text(
    date: Date,
    requester_name: &str,
    requester_team: Team,
    suggested_team: Team,
    team_shift: ShiftState,
    link_base: &str,
) -> String {
    format!(
        "Overtime opportunity on {date}: {requester_name} (team {requester_team}) is on leave. \
         Team {suggested_team} ({team_shift}) is asked to cover. \
         Details: {link_base}/leaves?date={date}"
    )
}

/// Formats a cancellation notice for an opportunity that was cancelled or
/// fulfilled.
#[must_use]
pub fn cancellation_text(date: Date, requester_name: &str, requester_team: Team) -> String {
    format!(
        "Overtime opportunity on {date} for {requester_name} (team {requester_team}) \
         has been cancelled. No further action is needed."
    )
}
