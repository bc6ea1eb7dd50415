// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for the eligibility overview.

use shift_relief_domain::{EligibilityReason, ShiftState, Team};
use time::macros::date;

use crate::{ApiError, EligibilityOverviewRequest, eligibility_overview};

use super::helpers::{create_test_calendar, create_test_roster};

fn request(date: &str, requester_name: &str, requester_team: &str) -> EligibilityOverviewRequest {
    EligibilityOverviewRequest {
        date: String::from(date),
        requester_name: String::from(requester_name),
        requester_team: String::from(requester_team),
    }
}

#[test]
fn test_overview_reports_each_reason() {
    let roster = create_test_roster();
    let calendar = create_test_calendar();
    // 2025-07-06: A big-rest, B early, C mid, D night. Requester 李二 is on
    // team A, so 張一 is excluded with the rest of team A.
    let overview = eligibility_overview(&request("2025-07-06", "李二", "A"), &roster, &calendar)
        .expect("Failed to compute overview");

    assert_eq!(overview.date, date!(2025 - 07 - 06));
    assert_eq!(overview.requester_team, Team::A);

    let summary: Vec<(&str, &EligibilityReason)> = overview
        .members
        .iter()
        .map(|m| (m.name.as_str(), &m.reason))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("瑋", &EligibilityReason::OnShift(ShiftState::Early)),
            ("王五", &EligibilityReason::OnShift(ShiftState::Early)),
            ("陳六", &EligibilityReason::TeamLead),
            ("趙七", &EligibilityReason::OnShift(ShiftState::Mid)),
            ("錢八", &EligibilityReason::OnShift(ShiftState::Night)),
        ]
    );
}

#[test]
fn test_overview_excludes_requester_team_entirely() {
    let roster = create_test_roster();
    let calendar = create_test_calendar();

    let overview = eligibility_overview(&request("2025-07-06", "趙七", "C"), &roster, &calendar)
        .expect("Failed to compute overview");

    assert!(overview.members.iter().all(|m| m.team != Team::C));
    assert!(overview.members.iter().all(|m| m.name != "趙七"));
}

#[test]
fn test_overview_full_rest_beats_lead() {
    let roster = create_test_roster();
    let calendar = create_test_calendar();
    // Team A is on big-rest on 2025-07-06, so its lead 張一 is reported as
    // full-rest, not as lead.
    let overview = eligibility_overview(&request("2025-07-06", "趙七", "C"), &roster, &calendar)
        .expect("Failed to compute overview");

    let lead = overview
        .members
        .iter()
        .find(|m| m.name == "張一")
        .expect("Expected 張一 in the overview");
    assert_eq!(lead.reason, EligibilityReason::FullRest);
}

#[test]
fn test_overview_rejects_invalid_date() {
    let roster = create_test_roster();
    let calendar = create_test_calendar();

    let result = eligibility_overview(&request("07/06/2025", "李二", "A"), &roster, &calendar);

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "date"
    ));
}

#[test]
fn test_overview_rejects_unknown_team() {
    let roster = create_test_roster();
    let calendar = create_test_calendar();

    let result = eligibility_overview(&request("2025-07-06", "李二", "X"), &roster, &calendar);

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "team"
    ));
}

#[test]
fn test_overview_fails_before_first_roster_cutover() {
    let roster = create_test_roster();
    let calendar = create_test_calendar();

    let result = eligibility_overview(&request("2024-06-01", "李二", "A"), &roster, &calendar);

    assert!(matches!(result, Err(ApiError::ResourceNotFound { .. })));
}
