//! Outbound recommendation type.

use crate::catalog::{ActionKind, Category, CommandEntry};
use crate::confidence::ConfidenceTier;
use serde::{Deserialize, Serialize};

/// One ranked command, as handed to the UI layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub id: String,
    pub label: String,
    pub description: String,
    /// Always within the configured window (45..=97 by default)
    pub confidence: u8,
    /// Invocation text
    pub command: String,
    pub category: Category,
    pub icon: String,
    pub action: ActionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_payload: Option<String>,
}

impl Recommendation {
    pub fn from_entry(entry: &CommandEntry, confidence: u8) -> Self {
        Self {
            id: entry.id.clone(),
            label: entry.label.clone(),
            description: entry.description.clone(),
            confidence,
            command: entry.invocation.clone(),
            category: entry.category,
            icon: entry.icon.clone(),
            action: entry.action,
            action_payload: entry.action_payload.clone(),
        }
    }

    pub fn tier(&self) -> ConfidenceTier {
        ConfidenceTier::of(self.confidence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wire_format() {
        let entry = CommandEntry::builder("store_browse", Category::Store)
            .label("Browse Store")
            .description("Explore the marketplace")
            .invocation("/store browse")
            .icon("ShoppingBag")
            .navigate("store")
            .build();
        let rec = Recommendation::from_entry(&entry, 55);

        assert_eq!(
            serde_json::to_value(&rec).unwrap(),
            json!({
                "id": "store_browse",
                "label": "Browse Store",
                "description": "Explore the marketplace",
                "confidence": 55,
                "command": "/store browse",
                "category": "store",
                "icon": "ShoppingBag",
                "action": "navigate",
                "actionPayload": "store"
            })
        );
    }

    #[test]
    fn test_payload_omitted_for_chat_commands() {
        let entry = CommandEntry::builder("help", Category::General).invocation("/help").build();
        let value = serde_json::to_value(Recommendation::from_entry(&entry, 80)).unwrap();
        assert!(value.get("actionPayload").is_none());
        assert_eq!(value["action"], "chat_command");
        assert_eq!(Recommendation::from_entry(&entry, 80).tier(), ConfidenceTier::High);
    }
}
