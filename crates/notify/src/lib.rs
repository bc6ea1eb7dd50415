// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Notification dispatch.
//!
//! The core decides *who* and *whether*; this crate carries the messages
//! out. Sends fan out per recipient: each send is independent, failures
//! are counted rather than raised, and nothing is retried here (retry
//! policy belongs to the transport collaborator).

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

mod dispatch;
mod error;
mod message;
mod transport;

// Re-export public types
pub use dispatch::{DispatchSummary, Recipient, dispatch};
pub use error::TransportError;
pub use message::{cancellation_text, opportunity_text};
pub use transport::{HttpPushTransport, PushTransport};
