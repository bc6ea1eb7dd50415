// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::StoreError;
use serde::{Deserialize, Serialize};
use shift_relief_domain::LeaveEvent;
use time::Date;

/// Lifecycle status of a leave record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveStatus {
    /// The leave is active.
    Active,
    /// The leave (and its overtime opportunity) was cancelled.
    Cancelled,
}

/// A persisted leave record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRecord {
    /// Store-assigned record identifier.
    pub leave_id: i64,
    /// The leave event.
    pub event: LeaveEvent,
    /// Current status.
    pub status: LeaveStatus,
}

/// In-memory leave record store.
#[derive(Debug, Default)]
pub struct LeaveStore {
    next_id: i64,
    records: Vec<LeaveRecord>,
}

impl LeaveStore {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            next_id: 1,
            records: Vec::new(),
        }
    }

    /// Inserts a leave event, assigning it a record identifier.
    pub fn insert(&mut self, event: LeaveEvent) -> LeaveRecord {
        let record = LeaveRecord {
            leave_id: self.next_id,
            event,
            status: LeaveStatus::Active,
        };
        self.next_id += 1;
        self.records.push(record.clone());
        record
    }

    /// Looks up a leave record by identifier.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::LeaveNotFound` if no record has this id.
    pub fn get(&self, leave_id: i64) -> Result<&LeaveRecord, StoreError> {
        self.records
            .iter()
            .find(|r| r.leave_id == leave_id)
            .ok_or(StoreError::LeaveNotFound(leave_id))
    }

    /// Returns all leave records for a date, in insertion order.
    #[must_use]
    pub fn find_by_date(&self, date: Date) -> Vec<&LeaveRecord> {
        self.records.iter().filter(|r| r.event.date == date).collect()
    }

    /// Marks a leave record cancelled.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::LeaveNotFound` if no record has this id, or
    /// `StoreError::AlreadyCancelled` if it was cancelled before.
    pub fn cancel(&mut self, leave_id: i64) -> Result<LeaveRecord, StoreError> {
        let record = self
            .records
            .iter_mut()
            .find(|r| r.leave_id == leave_id)
            .ok_or(StoreError::LeaveNotFound(leave_id))?;
        if record.status == LeaveStatus::Cancelled {
            return Err(StoreError::AlreadyCancelled(leave_id));
        }
        record.status = LeaveStatus::Cancelled;
        Ok(record.clone())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use shift_relief_domain::{Period, Team};
    use time::macros::date;

    fn event(day: Date, name: &str) -> LeaveEvent {
        LeaveEvent {
            date: day,
            requester_name: String::from(name),
            requester_team: Team::B,
            period: Period::FullDay,
            overtime: None,
        }
    }

    #[test]
    fn test_insert_assigns_sequential_ids() {
        let mut store = LeaveStore::new();
        let first = store.insert(event(date!(2025 - 07 - 06), "瑋"));
        let second = store.insert(event(date!(2025 - 07 - 06), "王五"));
        assert_eq!(first.leave_id, 1);
        assert_eq!(second.leave_id, 2);
        assert_eq!(first.status, LeaveStatus::Active);
    }

    #[test]
    fn test_find_by_date_filters() {
        let mut store = LeaveStore::new();
        store.insert(event(date!(2025 - 07 - 06), "瑋"));
        store.insert(event(date!(2025 - 07 - 07), "王五"));
        let found = store.find_by_date(date!(2025 - 07 - 06));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].event.requester_name, "瑋");
    }

    #[test]
    fn test_cancel_transitions_once() {
        let mut store = LeaveStore::new();
        let record = store.insert(event(date!(2025 - 07 - 06), "瑋"));

        let cancelled = store.cancel(record.leave_id).unwrap();
        assert_eq!(cancelled.status, LeaveStatus::Cancelled);

        let err = store.cancel(record.leave_id).unwrap_err();
        assert_eq!(err, StoreError::AlreadyCancelled(record.leave_id));
    }

    #[test]
    fn test_missing_record_reported() {
        let store = LeaveStore::new();
        assert_eq!(store.get(42).unwrap_err(), StoreError::LeaveNotFound(42));
    }
}
