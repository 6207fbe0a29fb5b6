//! Builds the scoring corpus from the tail of the conversation.

use crate::context::{Message, Role};
use crate::tokenizer::tokenize;

/// How many trailing messages are consulted.
pub const MESSAGE_WINDOW: usize = 5;

/// The text a command's keywords are matched against.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    /// Lowercased, space-joined user text, for phrase checks
    pub raw: String,
    /// Tokenized form of `raw`, for whole-word and partial checks
    pub tokens: Vec<String>,
}

impl Query {
    /// Assemble the corpus from the last [`MESSAGE_WINDOW`] messages.
    ///
    /// Assistant messages are skipped. The most recent user message in the
    /// window appears twice, which doubles its lexical weight.
    pub fn from_messages(messages: &[Message]) -> Self {
        let start = messages.len().saturating_sub(MESSAGE_WINDOW);
        let window = &messages[start..];

        let last_user = window.iter().rposition(|m| m.role == Role::User);

        let mut parts: Vec<&str> = Vec::with_capacity(window.len() + 1);
        for (idx, msg) in window.iter().enumerate() {
            if msg.role != Role::User {
                continue;
            }
            parts.push(&msg.content);
            if Some(idx) == last_user {
                parts.push(&msg.content);
            }
        }

        let raw = parts.join(" ").to_lowercase();
        let tokens = tokenize(&raw);
        Self { raw, tokens }
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn has_token(&self, word: &str) -> bool {
        self.tokens.iter().any(|t| t == word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_user_message_doubled() {
        let q = Query::from_messages(&[Message::user("vault"), Message::user("import keys")]);
        assert_eq!(q.raw, "vault import keys import keys");
        assert_eq!(q.tokens.iter().filter(|t| *t == "import").count(), 2);
        assert_eq!(q.tokens.iter().filter(|t| *t == "vault").count(), 1);
    }

    #[test]
    fn test_assistant_messages_skipped() {
        let q = Query::from_messages(&[
            Message::user("Create a workflow"),
            Message::assistant("Here is your vault"),
        ]);
        assert_eq!(q.raw, "create a workflow create a workflow");
        assert!(!q.has_token("vault"));
    }

    #[test]
    fn test_window_is_last_five() {
        let messages: Vec<Message> = (0..7).map(|i| Message::user(format!("m{}", i))).collect();
        let q = Query::from_messages(&messages);
        assert!(!q.has_token("m0"));
        assert!(!q.has_token("m1"));
        assert!(q.has_token("m2"));
        assert_eq!(q.raw, "m2 m3 m4 m5 m6 m6");
    }

    #[test]
    fn test_user_message_outside_window_not_doubled() {
        let mut messages = vec![Message::user("deed")];
        messages.extend((0..5).map(|_| Message::assistant("ok")));
        let q = Query::from_messages(&messages);
        assert!(q.is_empty());
        assert_eq!(q.raw, "");
    }

    #[test]
    fn test_empty_conversation() {
        assert_eq!(Query::from_messages(&[]), Query::default());
    }
}
