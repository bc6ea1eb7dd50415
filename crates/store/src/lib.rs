// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! In-memory collaborator stores.
//!
//! The production document store is an external collaborator; this crate
//! implements its narrow find/insert/update contracts in memory so the
//! core and server are testable and runnable standalone. The server wraps
//! each store in `Arc<tokio::sync::Mutex<_>>` for shared access.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod bindings;
mod error;
mod leaves;
mod provisional;

// Re-export public types
pub use bindings::{Binding, BindingStore};
pub use error::StoreError;
pub use leaves::{LeaveRecord, LeaveStatus, LeaveStore};
pub use provisional::{ProvisionalSelection, ProvisionalStore};
