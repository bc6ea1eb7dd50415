// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::{Date, Time, format_description::well_known::Iso8601};

/// One of the four rotating-shift teams.
///
/// Teams are fixed domain constants. Each team has a phase offset into the
/// shift cycle, registered with the [`crate::ShiftCalendar`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Team {
    /// Team A.
    A,
    /// Team B.
    B,
    /// Team C.
    C,
    /// Team D.
    D,
}

impl Team {
    /// All teams, in canonical order.
    pub const ALL: [Self; 4] = [Self::A, Self::B, Self::C, Self::D];

    /// Returns the string representation of this team.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
        }
    }
}

impl FromStr for Team {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(Self::A),
            "B" => Ok(Self::B),
            "C" => Ok(Self::C),
            "D" => Ok(Self::D),
            _ => Err(DomainError::InvalidTeam(s.to_string())),
        }
    }
}

impl std::fmt::Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Role of a member within a team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberRole {
    /// Team lead. Leads are eligible for overtime offers regardless of
    /// their team's shift state.
    Lead,
    /// Regular member.
    Regular,
}

impl MemberRole {
    /// Returns the string representation of this role.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Lead => "lead",
            Self::Regular => "regular",
        }
    }
}

impl std::fmt::Display for MemberRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A roster member.
///
/// A member belongs to exactly one team within a roster snapshot. The name
/// is the member's identifier and must be unique across all teams within
/// one snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// The member's name (unique within a roster snapshot).
    pub name: String,
    /// The member's role.
    pub role: MemberRole,
}

impl Member {
    /// Creates a new `Member`.
    #[must_use]
    pub const fn new(name: String, role: MemberRole) -> Self {
        Self { name, role }
    }
}

/// The period a leave covers.
///
/// This is a closed tagged variant: a leave is either a full day or a
/// partial window within the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Period {
    /// The leave covers the whole day.
    FullDay,
    /// The leave covers a window within the day.
    Partial {
        /// Start of the window.
        start: Time,
        /// End of the window (exclusive, must be after `start`).
        end: Time,
    },
}

impl Period {
    /// Creates a partial-day period.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPeriod` if `start` is not before `end`.
    pub fn partial(start: Time, end: Time) -> Result<Self, DomainError> {
        if start >= end {
            return Err(DomainError::InvalidPeriod {
                reason: format!("start {start} must be before end {end}"),
            });
        }
        Ok(Self::Partial { start, end })
    }
}

/// Overtime annotation on a leave event.
///
/// Records that the leave creates an overtime opportunity, optionally
/// naming the team suggested to cover it. When no team is suggested the
/// broadcast path falls back to the calendar's rest team for the date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeRequest {
    /// The team suggested to cover the opportunity, if any.
    pub suggested_team: Option<Team>,
}

/// A leave event as supplied by the leave-event source.
///
/// The eligibility engine treats this as an immutable input record for one
/// computation. Business-field validation beyond type presence is the
/// request handler's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveEvent {
    /// The date of the leave.
    pub date: Date,
    /// The requester's roster name.
    pub requester_name: String,
    /// The requester's team.
    pub requester_team: Team,
    /// The period the leave covers.
    pub period: Period,
    /// Optional overtime annotation.
    pub overtime: Option<OvertimeRequest>,
}

/// Parses an ISO 8601 date string (e.g., "2025-04-01").
///
/// # Errors
///
/// Returns `DomainError::DateParse` if the string is not a valid ISO date.
pub fn parse_iso_date(s: &str) -> Result<Date, DomainError> {
    Date::parse(s, &Iso8601::DEFAULT).map_err(|e| DomainError::DateParse {
        date_string: s.to_string(),
        error: e.to_string(),
    })
}
