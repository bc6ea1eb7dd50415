// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during store operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The requested leave record was not found.
    LeaveNotFound(i64),
    /// The leave record is already cancelled.
    AlreadyCancelled(i64),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LeaveNotFound(id) => write!(f, "Leave record {id} not found"),
            Self::AlreadyCancelled(id) => write!(f, "Leave record {id} is already cancelled"),
        }
    }
}

impl std::error::Error for StoreError {}
