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
    clippy::all
)]

mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use error::{ApiError, translate_domain_error};
pub use handlers::{
    eligibility_overview, parse_leave_event, plan_cancellation, plan_opportunity, rest_overview,
    shift_lookup,
};
pub use request_response::{
    BroadcastTarget, CreateLeaveRequest, EligibilityOverviewRequest, EligibilityOverviewResponse,
    OpportunityPlan, PeriodRequest, RestMemberInfo, RestOverviewResponse, ShiftLookupResponse,
};
