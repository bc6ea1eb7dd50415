// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use time::Date;

/// A provisional selection: a member recorded against an event date while
/// an overtime opportunity is being worked, before any profile binding is
/// consulted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvisionalSelection {
    /// The event date this selection applies to.
    pub date: Date,
    /// The member's roster name.
    pub member_name: String,
    /// The chat identity recorded with the selection.
    pub channel_identity: String,
}

/// In-memory provisional-selection-state store.
#[derive(Debug, Default)]
pub struct ProvisionalStore {
    entries: Vec<ProvisionalSelection>,
}

impl ProvisionalStore {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Records a provisional selection for an event date.
    pub fn record(&mut self, date: Date, member_name: String, channel_identity: String) {
        self.entries.push(ProvisionalSelection {
            date,
            member_name,
            channel_identity,
        });
    }

    /// Returns all provisional selections for a date, in insertion order.
    #[must_use]
    pub fn list_for(&self, date: Date) -> Vec<&ProvisionalSelection> {
        self.entries.iter().filter(|e| e.date == date).collect()
    }

    /// Removes all provisional selections for a date.
    pub fn clear_for(&mut self, date: Date) {
        self.entries.retain(|e| e.date != date);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_record_and_list_by_date() {
        let mut store = ProvisionalStore::new();
        store.record(
            date!(2025 - 07 - 06),
            String::from("趙七"),
            String::from("U001"),
        );
        store.record(
            date!(2025 - 07 - 07),
            String::from("錢八"),
            String::from("U002"),
        );

        let found = store.list_for(date!(2025 - 07 - 06));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].member_name, "趙七");
    }

    #[test]
    fn test_clear_for_removes_only_that_date() {
        let mut store = ProvisionalStore::new();
        store.record(
            date!(2025 - 07 - 06),
            String::from("趙七"),
            String::from("U001"),
        );
        store.record(
            date!(2025 - 07 - 07),
            String::from("錢八"),
            String::from("U002"),
        );

        store.clear_for(date!(2025 - 07 - 06));
        assert!(store.list_for(date!(2025 - 07 - 06)).is_empty());
        assert_eq!(store.list_for(date!(2025 - 07 - 07)).len(), 1);
    }
}
