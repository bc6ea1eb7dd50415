// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::TransportError;
use std::future::Future;

/// Outbound push-message transport.
///
/// One call delivers one text message to one chat identity, fire and
/// forget. Implementations must not retry; the dispatcher treats each
/// result as final.
pub trait PushTransport {
    /// Sends `text` to `channel_identity`.
    ///
    /// # Errors
    ///
    /// Returns a `TransportError` if the message could not be delivered.
    fn push(
        &self,
        channel_identity: &str,
        text: &str,
    ) -> impl Future<Output = Result<(), TransportError>> + Send;
}

/// HTTP push transport with bearer-token authentication.
///
/// Posts a JSON body `{"to": ..., "messages": [{"type": "text", "text":
/// ...}]}` to the configured endpoint, the shape the chat-bot messaging
/// API expects.
#[derive(Debug, Clone)]
pub struct HttpPushTransport {
    client: reqwest::Client,
    endpoint: String,
    token: String,
}

impl HttpPushTransport {
    /// Creates a new transport.
    ///
    /// # Arguments
    ///
    /// * `endpoint` - The push-message endpoint URL
    /// * `token` - The bearer token for the messaging API
    #[must_use]
    pub fn new(endpoint: String, token: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
            token,
        }
    }
}

impl PushTransport for HttpPushTransport {
    async fn push(&self, channel_identity: &str, text: &str) -> Result<(), TransportError> {
        let body = serde_json::json!({
            "to": channel_identity,
            "messages": [{ "type": "text", "text": text }],
        });

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        if !response.status().is_success() {
            return Err(TransportError::Status {
                code: response.status().as_u16(),
            });
        }
        Ok(())
    }
}
