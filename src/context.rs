//! Recommendation context: the per-call snapshot of session state.

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Input to a recommendation pass.
///
/// Absent collections and flags mean "nothing" and are not errors; a field of
/// the wrong type, an unknown role, or an unknown field name is rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RecommendationContext {
    /// Chronological conversation; only the tail is consulted
    #[serde(default)]
    pub messages: Vec<Message>,

    /// Currently authorized service identifiers
    #[serde(default)]
    pub connected_services: Vec<String>,

    /// Recently invoked command ids, most recent first
    #[serde(default)]
    pub recent_actions: Vec<String>,

    /// Active screen identifier
    #[serde(default)]
    pub current_view: String,

    #[serde(default)]
    pub has_workflows: bool,

    #[serde(default, alias = "hasVaultFiles")]
    pub has_saved_files: bool,

    #[serde(default)]
    pub has_purchases: bool,
}

impl RecommendationContext {
    /// Parse and validate a context from its JSON wire form.
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn is_connected(&self, service: &str) -> bool {
        self.connected_services.iter().any(|s| s == service)
    }

    /// The most recent action, if any.
    pub fn last_action(&self) -> Option<&str> {
        self.recent_actions.first().map(String::as_str)
    }

    pub fn recently_did(&self, command_id: &str) -> bool {
        self.recent_actions.iter().any(|a| a == command_id)
    }

    pub fn with_message(mut self, message: Message) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_view(mut self, view: &str) -> Self {
        self.current_view = view.to_string();
        self
    }

    pub fn with_services(mut self, services: &[&str]) -> Self {
        self.connected_services = services.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_recent_actions(mut self, actions: &[&str]) -> Self {
        self.recent_actions = actions.iter().map(|s| s.to_string()).collect();
        self
    }
}
