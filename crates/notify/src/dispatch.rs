// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::transport::PushTransport;
use futures::future::join_all;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// One notification recipient.
///
/// A recipient without a channel identity has no usable binding; they are
/// counted as unreachable, never as failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipient {
    /// The member's roster name.
    pub member_name: String,
    /// The chat identity to deliver to, if bound.
    pub channel_identity: Option<String>,
}

impl Recipient {
    /// Creates a deliverable recipient.
    #[must_use]
    pub const fn new(member_name: String, channel_identity: String) -> Self {
        Self {
            member_name,
            channel_identity: Some(channel_identity),
        }
    }

    /// Creates a recipient with no binding.
    #[must_use]
    pub const fn unreachable(member_name: String) -> Self {
        Self {
            member_name,
            channel_identity: None,
        }
    }
}

/// Aggregate outcome of one dispatch.
///
/// Partial success is the expected common case, so dispatch reports counts
/// instead of raising errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DispatchSummary {
    /// Recipients whose send succeeded.
    pub notified: usize,
    /// Recipients whose send failed.
    pub failed: usize,
    /// Recipients with no notification identity bound.
    pub unreachable: usize,
    /// Candidates removed by an exclusion set before dispatch.
    pub excluded: usize,
    /// Whether the whole opportunity was suppressed (nobody contacted).
    pub skipped: bool,
}

impl DispatchSummary {
    /// A summary for a suppressed opportunity: nobody is contacted.
    #[must_use]
    pub const fn suppressed() -> Self {
        Self {
            notified: 0,
            failed: 0,
            unreachable: 0,
            excluded: 0,
            skipped: true,
        }
    }

    /// Sets the excluded-candidate count.
    #[must_use]
    pub const fn with_excluded(mut self, excluded: usize) -> Self {
        self.excluded = excluded;
        self
    }
}

/// Sends `text` to every recipient, concurrently.
///
/// Each send is independent: one recipient's transport failure never
/// aborts sibling sends. Recipients without a channel identity are counted
/// as unreachable and skipped.
pub async fn dispatch<T>(transport: &T, recipients: &[Recipient], text: &str) -> DispatchSummary
where
    T: PushTransport + Sync,
{
    let mut summary = DispatchSummary::default();

    for recipient in recipients {
        if recipient.channel_identity.is_none() {
            debug!(member = %recipient.member_name, "No binding, recipient unreachable");
            summary.unreachable += 1;
        }
    }

    let sends = recipients.iter().filter_map(|recipient| {
        let identity: &str = recipient.channel_identity.as_deref()?;
        Some(async move {
            (
                recipient.member_name.as_str(),
                transport.push(identity, text).await,
            )
        })
    });

    for (member_name, result) in join_all(sends).await {
        match result {
            Ok(()) => summary.notified += 1,
            Err(error) => {
                warn!(member = %member_name, %error, "Push failed");
                summary.failed += 1;
            }
        }
    }
    summary
}
