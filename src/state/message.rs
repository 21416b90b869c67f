//! Chat history entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Type of chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    /// Regular chat message.
    #[default]
    Chat,
    /// Emote, shown by the HUD in its own style.
    Action,
    /// System message.
    System,
}

/// A chat history entry shown by the HUD.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    /// Sender's display name (empty for system messages).
    #[serde(default)]
    pub sender_name: String,
    /// Message type.
    #[serde(default)]
    pub message_type: MessageType,
    /// Message content.
    pub content: String,
    /// Timestamp when the message was received.
    #[serde(default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    /// Create a new chat message.
    pub fn new(sender_name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            sender_name: sender_name.into(),
            message_type: MessageType::Chat,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }

    /// Create a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            message_type: MessageType::System,
            ..Self::new(String::new(), content)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_message_new() {
        let msg = ChatMessage::new("Alice", "Hello!");
        assert_eq!(msg.sender_name, "Alice");
        assert_eq!(msg.message_type, MessageType::Chat);
        assert_eq!(msg.content, "Hello!");
    }

    #[test]
    fn test_chat_message_system() {
        let msg = ChatMessage::system("Server restarting");
        assert_eq!(msg.sender_name, "");
        assert_eq!(msg.message_type, MessageType::System);
    }

    #[test]
    fn test_chat_message_json_field_names() {
        let msg = ChatMessage::new("Bob", "jumps");
        let value = serde_json::to_value(&msg).unwrap();
        assert_eq!(value["senderName"], "Bob");
        assert_eq!(value["messageType"], "chat");
        assert_eq!(value["content"], "jumps");
    }

    #[test]
    fn test_message_type_wire_names() {
        for (kind, name) in [
            (MessageType::Chat, "chat"),
            (MessageType::Action, "action"),
            (MessageType::System, "system"),
        ] {
            assert_eq!(serde_json::to_value(kind).unwrap(), name);
            let parsed: MessageType = serde_json::from_value(name.into()).unwrap();
            assert_eq!(parsed, kind);
        }
    }

    #[test]
    fn test_chat_message_from_minimal_json() {
        let msg: ChatMessage = serde_json::from_str(r#"{"content":"hi"}"#).unwrap();
        assert_eq!(msg.content, "hi");
        assert_eq!(msg.message_type, MessageType::Chat);
        assert!(msg.sender_name.is_empty());
    }
}
