// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use shift_relief_domain::{
    Candidate, CandidateSource, Member, MemberRole, Roster, RosterSnapshot, ShiftCalendar, Team,
};
use std::collections::BTreeMap;
use time::macros::date;

use crate::{CreateLeaveRequest, PeriodRequest};

fn member(name: &str, role: MemberRole) -> Member {
    Member::new(String::from(name), role)
}

/// A seven-member roster across all four teams, effective well before every
/// test date.
pub fn create_test_roster() -> Roster {
    let mut teams: BTreeMap<Team, Vec<Member>> = BTreeMap::new();
    teams.insert(
        Team::A,
        vec![
            member("張一", MemberRole::Lead),
            member("李二", MemberRole::Regular),
        ],
    );
    teams.insert(
        Team::B,
        vec![
            member("瑋", MemberRole::Regular),
            member("王五", MemberRole::Regular),
        ],
    );
    teams.insert(
        Team::C,
        vec![
            member("陳六", MemberRole::Lead),
            member("趙七", MemberRole::Regular),
        ],
    );
    teams.insert(Team::D, vec![member("錢八", MemberRole::Regular)]);

    Roster::new(vec![RosterSnapshot::new(date!(2025 - 01 - 01), teams)])
        .expect("Failed to build test roster")
}

/// The production shift calendar: reference date 2025-04-01, offsets
/// A=0, B=2, C=4, D=6.
pub fn create_test_calendar() -> ShiftCalendar {
    ShiftCalendar::default()
}

pub fn create_valid_leave_request() -> CreateLeaveRequest {
    CreateLeaveRequest {
        date: String::from("2025-07-06"),
        requester_name: String::from("趙七"),
        requester_team: String::from("C"),
        period: PeriodRequest::FullDay,
        suggested_team: None,
    }
}

pub fn profile_candidate(name: &str, identity: &str) -> Candidate {
    Candidate::new(
        String::from(name),
        String::from(identity),
        CandidateSource::Profile,
    )
}

pub fn provisional_candidate(name: &str, identity: &str) -> Candidate {
    Candidate::new(
        String::from(name),
        String::from(identity),
        CandidateSource::Provisional,
    )
}
