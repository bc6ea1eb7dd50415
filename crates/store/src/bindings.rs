// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// A chat-identity binding for one roster member.
///
/// Owned by the identity-binding collaborator; the core only reads it to
/// resolve a member list into deliverable identities. A member without a
/// binding is unreachable, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Binding {
    /// The roster member name this binding belongs to.
    pub member_name: String,
    /// The chat identity notifications are delivered to.
    pub channel_identity: String,
    /// Whether the member has notifications enabled.
    pub notification_enabled: bool,
}

impl Binding {
    /// Creates a new enabled `Binding`.
    #[must_use]
    pub const fn new(member_name: String, channel_identity: String) -> Self {
        Self {
            member_name,
            channel_identity,
            notification_enabled: true,
        }
    }
}

/// In-memory chat-identity binding store.
#[derive(Debug, Default)]
pub struct BindingStore {
    bindings: Vec<Binding>,
}

impl BindingStore {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            bindings: Vec::new(),
        }
    }

    /// Inserts or replaces the binding for a member name.
    pub fn upsert(&mut self, binding: Binding) {
        if let Some(existing) = self
            .bindings
            .iter_mut()
            .find(|b| b.member_name == binding.member_name)
        {
            *existing = binding;
        } else {
            self.bindings.push(binding);
        }
    }

    /// Looks up the binding for a member name.
    #[must_use]
    pub fn find(&self, member_name: &str) -> Option<&Binding> {
        self.bindings.iter().find(|b| b.member_name == member_name)
    }

    /// Resolves member names to their enabled bindings, preserving the
    /// order of `names`. Names without an enabled binding are skipped.
    #[must_use]
    pub fn find_enabled(&self, names: &[String]) -> Vec<&Binding> {
        names
            .iter()
            .filter_map(|name| self.find(name))
            .filter(|b| b.notification_enabled)
            .collect()
    }
}
