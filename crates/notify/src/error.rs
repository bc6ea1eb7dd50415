// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use thiserror::Error;

/// Errors from the push transport.
///
/// A transport failure affects only the recipient it occurred for; the
/// dispatcher counts it and continues with sibling sends.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The push request could not be sent.
    #[error("push request failed: {0}")]
    Request(String),
    /// The push endpoint rejected the request.
    #[error("push rejected with status {code}")]
    Status {
        /// The HTTP status code returned by the endpoint.
        code: u16,
    },
}
