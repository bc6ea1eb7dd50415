// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for shift lookup and the rest overview.

use shift_relief_domain::{MemberRole, ShiftState, Team};
use time::macros::date;

use crate::{ApiError, rest_overview, shift_lookup};

use super::helpers::{create_test_calendar, create_test_roster};

#[test]
fn test_shift_lookup_big_rest() {
    let calendar = create_test_calendar();

    let response = shift_lookup("2025-07-06", "A", &calendar).expect("Failed to look up shift");

    assert_eq!(response.date, date!(2025 - 07 - 06));
    assert_eq!(response.team, Team::A);
    assert_eq!(response.shift, ShiftState::BigRest);
    assert!(response.is_rest);
}

#[test]
fn test_shift_lookup_working_shift() {
    let calendar = create_test_calendar();

    let response = shift_lookup("2025-07-06", "C", &calendar).expect("Failed to look up shift");

    assert_eq!(response.shift, ShiftState::Mid);
    assert!(!response.is_rest);
}

#[test]
fn test_shift_lookup_rejects_bad_inputs() {
    let calendar = create_test_calendar();

    assert!(matches!(
        shift_lookup("yesterday", "A", &calendar),
        Err(ApiError::InvalidInput { ref field, .. }) if field == "date"
    ));
    assert!(matches!(
        shift_lookup("2025-07-06", "Z", &calendar),
        Err(ApiError::InvalidInput { ref field, .. }) if field == "team"
    ));
}

#[test]
fn test_rest_overview_on_big_rest_day() {
    let roster = create_test_roster();
    let calendar = create_test_calendar();

    let response =
        rest_overview("2025-07-06", &roster, &calendar).expect("Failed to compute rest overview");

    assert_eq!(response.rest_team, Some((Team::A, ShiftState::BigRest)));
    let members: Vec<(&str, MemberRole)> = response
        .big_rest_members
        .iter()
        .map(|m| (m.name.as_str(), m.role))
        .collect();
    assert_eq!(
        members,
        vec![("張一", MemberRole::Lead), ("李二", MemberRole::Regular)]
    );
}

#[test]
fn test_rest_overview_on_small_rest_day() {
    let roster = create_test_roster();
    let calendar = create_test_calendar();
    // 2025-04-02: C is on small-rest and nobody is on big-rest.
    let response =
        rest_overview("2025-04-02", &roster, &calendar).expect("Failed to compute rest overview");

    assert_eq!(response.rest_team, Some((Team::C, ShiftState::SmallRest)));
    assert!(response.big_rest_members.is_empty());
}
