// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod eligibility;
mod error;
mod roster;
mod selection;
mod shift_calendar;
mod types;

#[cfg(test)]
mod tests;

// Re-export public types
pub use eligibility::{EligibilityReason, EligibleMember, broadcast_suppressed, eligible_members};
pub use error::DomainError;
pub use roster::{Roster, RosterSnapshot};
pub use selection::{
    Candidate, CandidateSource, CancellationSelection, merge_candidate_pool,
    select_for_cancellation,
};
pub use shift_calendar::{
    REFERENCE_DATE, SHIFT_CYCLE, ShiftCalendar, ShiftState, members_on_big_rest,
};
pub use types::{LeaveEvent, Member, MemberRole, OvertimeRequest, Period, Team, parse_iso_date};
