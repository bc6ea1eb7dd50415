// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::roster::{Roster, RosterSnapshot};
use crate::types::{Member, MemberRole, Team};
use std::collections::BTreeMap;
use time::macros::date;

fn snapshot(effective_from: time::Date, b_member: &str) -> RosterSnapshot {
    let teams: BTreeMap<Team, Vec<Member>> = [
        (
            Team::A,
            vec![Member::new(String::from("張一"), MemberRole::Lead)],
        ),
        (
            Team::B,
            vec![Member::new(String::from(b_member), MemberRole::Regular)],
        ),
    ]
    .into_iter()
    .collect();
    RosterSnapshot::new(effective_from, teams)
}

#[test]
fn test_snapshot_for_picks_latest_at_or_before_date() {
    let roster = Roster::new(vec![
        snapshot(date!(2025 - 01 - 01), "王五"),
        snapshot(date!(2025 - 06 - 01), "瑋"),
    ])
    .unwrap();

    let early = roster.snapshot_for(date!(2025 - 03 - 15)).unwrap();
    assert!(early.member("王五").is_some());
    assert!(early.member("瑋").is_none());

    // Cutover date itself activates the new snapshot
    let cutover = roster.snapshot_for(date!(2025 - 06 - 01)).unwrap();
    assert!(cutover.member("瑋").is_some());

    let late = roster.snapshot_for(date!(2026 - 01 - 01)).unwrap();
    assert!(late.member("瑋").is_some());
}

#[test]
fn test_date_before_first_cutover_fails() {
    let roster = Roster::new(vec![snapshot(date!(2025 - 01 - 01), "王五")]).unwrap();
    let err = roster.snapshot_for(date!(2024 - 12 - 31)).unwrap_err();
    assert_eq!(
        err,
        DomainError::RosterNotFound {
            date: date!(2024 - 12 - 31)
        }
    );
}

#[test]
fn test_empty_roster_rejected() {
    assert_eq!(Roster::new(vec![]).unwrap_err(), DomainError::EmptyRoster);
}

#[test]
fn test_unordered_snapshots_rejected() {
    let err = Roster::new(vec![
        snapshot(date!(2025 - 06 - 01), "王五"),
        snapshot(date!(2025 - 01 - 01), "瑋"),
    ])
    .unwrap_err();
    assert_eq!(
        err,
        DomainError::UnorderedSnapshots {
            effective_from: date!(2025 - 01 - 01)
        }
    );
}

#[test]
fn test_duplicate_name_across_teams_rejected() {
    let teams: BTreeMap<Team, Vec<Member>> = [
        (
            Team::A,
            vec![Member::new(String::from("瑋"), MemberRole::Lead)],
        ),
        (
            Team::B,
            vec![Member::new(String::from("瑋"), MemberRole::Regular)],
        ),
    ]
    .into_iter()
    .collect();
    let err = Roster::new(vec![RosterSnapshot::new(date!(2025 - 01 - 01), teams)]).unwrap_err();
    assert_eq!(
        err,
        DomainError::DuplicateMember {
            name: String::from("瑋"),
            effective_from: date!(2025 - 01 - 01)
        }
    );
}

#[test]
fn test_member_lookup_reports_team() {
    let roster = Roster::new(vec![snapshot(date!(2025 - 01 - 01), "瑋")]).unwrap();
    let snapshot = roster.snapshot_for(date!(2025 - 07 - 06)).unwrap();
    let (team, member) = snapshot.member("瑋").unwrap();
    assert_eq!(team, Team::B);
    assert_eq!(member.role, MemberRole::Regular);
}

#[test]
fn test_iter_members_is_stable_team_order() {
    let roster = Roster::new(vec![snapshot(date!(2025 - 01 - 01), "瑋")]).unwrap();
    let snapshot = roster.snapshot_for(date!(2025 - 07 - 06)).unwrap();
    let teams: Vec<Team> = snapshot.iter_members().map(|(team, _)| team).collect();
    assert_eq!(teams, vec![Team::A, Team::B]);
}
