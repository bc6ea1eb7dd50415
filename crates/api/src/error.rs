// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use shift_relief_domain::DomainError;
use shift_relief_store::StoreError;

/// API-level errors.
///
/// These are distinct from domain/store errors and represent the API
/// contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked
/// directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidTeam(team) => ApiError::InvalidInput {
            field: String::from("team"),
            message: format!("Unknown team or unregistered phase offset: '{team}'"),
        },
        DomainError::InvalidShiftOffset { team, offset } => ApiError::InvalidInput {
            field: String::from("phase_offset"),
            message: format!("Invalid phase offset {offset} for team {team}: must be less than 8"),
        },
        DomainError::RosterNotFound { date } => ApiError::ResourceNotFound {
            resource_type: String::from("Roster snapshot"),
            message: format!("No roster snapshot is effective on {date}"),
        },
        DomainError::EmptyRoster => ApiError::InvalidInput {
            field: String::from("roster"),
            message: String::from("Roster must contain at least one snapshot"),
        },
        DomainError::UnorderedSnapshots { effective_from } => ApiError::InvalidInput {
            field: String::from("roster"),
            message: format!(
                "Roster snapshot effective {effective_from} is not in ascending cutover order"
            ),
        },
        DomainError::DuplicateMember {
            name,
            effective_from,
        } => ApiError::DomainRuleViolation {
            rule: String::from("unique_member_name"),
            message: format!(
                "Member '{name}' appears more than once in the roster snapshot effective {effective_from}"
            ),
        },
        DomainError::InvalidPeriod { reason } => ApiError::InvalidInput {
            field: String::from("period"),
            message: reason,
        },
        DomainError::DateParse { date_string, error } => ApiError::InvalidInput {
            field: String::from("date"),
            message: format!("Failed to parse date '{date_string}': {error}"),
        },
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::LeaveNotFound(id) => Self::ResourceNotFound {
                resource_type: String::from("Leave record"),
                message: format!("Leave record {id} does not exist"),
            },
            StoreError::AlreadyCancelled(id) => Self::DomainRuleViolation {
                rule: String::from("leave_not_cancelled"),
                message: format!("Leave record {id} is already cancelled"),
            },
        }
    }
}
