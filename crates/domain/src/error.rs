// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::Date;

/// Errors that can occur during domain validation and shift computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Team identifier is unknown or has no registered phase offset.
    InvalidTeam(String),
    /// A phase offset falls outside the shift cycle.
    InvalidShiftOffset {
        /// The team with the invalid offset.
        team: String,
        /// The offending offset value.
        offset: u8,
    },
    /// No roster snapshot has a cutover date at or before the query date.
    RosterNotFound {
        /// The query date.
        date: Date,
    },
    /// A roster was constructed with no snapshots.
    EmptyRoster,
    /// Roster snapshots are not in strictly ascending cutover order.
    UnorderedSnapshots {
        /// The cutover date that is out of order.
        effective_from: Date,
    },
    /// A member name appears more than once within one roster snapshot.
    DuplicateMember {
        /// The duplicated member name.
        name: String,
        /// The cutover date of the snapshot containing the duplicate.
        effective_from: Date,
    },
    /// A partial leave period has a start at or after its end.
    InvalidPeriod {
        /// Description of the validation error.
        reason: String,
    },
    /// Failed to parse a date from a string.
    DateParse {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTeam(team) => write!(f, "Invalid team: '{team}'"),
            Self::InvalidShiftOffset { team, offset } => {
                write!(
                    f,
                    "Invalid phase offset {offset} for team {team}: must be less than 8"
                )
            }
            Self::RosterNotFound { date } => {
                write!(f, "No roster snapshot is effective on {date}")
            }
            Self::EmptyRoster => write!(f, "Roster must contain at least one snapshot"),
            Self::UnorderedSnapshots { effective_from } => {
                write!(
                    f,
                    "Roster snapshot effective {effective_from} is not in ascending cutover order"
                )
            }
            Self::DuplicateMember {
                name,
                effective_from,
            } => {
                write!(
                    f,
                    "Member '{name}' appears more than once in the roster snapshot effective {effective_from}"
                )
            }
            Self::InvalidPeriod { reason } => write!(f, "Invalid leave period: {reason}"),
            Self::DateParse { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
