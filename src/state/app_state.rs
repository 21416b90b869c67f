//! The chat state record shared with the HUD.

use serde::Serialize;
use serde_json::Value;

use super::coerce::{coerce_text, is_truthy};
use super::message::ChatMessage;
use super::queue::SendQueue;
use crate::{HudChatError, Result};

/// Chat state shared between the game and the HUD.
///
/// Field names serialize in camelCase (`chatActive`, `chatSendQueue`, ...)
/// to match the keys the HUD reads.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    /// Whether the chat input is focused.
    pub chat_active: bool,
    /// Current text in the chat input box.
    pub chat_input_text: String,
    /// Chat history, owned by the HUD apart from resets.
    pub chat_messages: Vec<ChatMessage>,
    /// Pending outgoing messages.
    pub chat_send_queue: SendQueue,
    /// Legacy send request flag. Cleared together with `chat_send_text`.
    pub chat_send_requested: bool,
    /// Legacy send text. Cleared together with `chat_send_requested`.
    pub chat_send_text: String,
}

impl AppState {
    /// Create an empty state record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serialize the record to a JSON object.
    pub fn to_json(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Merge a JSON object written by the HUD into this record.
    ///
    /// Only keys present in `value` are updated; unknown keys are ignored.
    /// Scalars are coerced the way the HUD coerces them, and a
    /// `chatSendQueue` that is not an array becomes an empty queue. Nothing
    /// is changed if `value` is not an object, if `chatMessages` is not an
    /// array or if any of its entries fails to parse.
    pub fn merge_json(&mut self, value: &Value) -> Result<()> {
        let Value::Object(fields) = value else {
            return Err(HudChatError::Validation(
                "app state must be a JSON object".to_string(),
            ));
        };

        let messages = match fields.get("chatMessages") {
            Some(Value::Array(entries)) => Some(
                entries
                    .iter()
                    .map(|entry| serde_json::from_value(entry.clone()))
                    .collect::<std::result::Result<Vec<ChatMessage>, _>>()?,
            ),
            Some(_) => {
                return Err(HudChatError::Validation(
                    "chatMessages must be an array".to_string(),
                ))
            }
            None => None,
        };

        if let Some(messages) = messages {
            self.chat_messages = messages;
        }
        if let Some(active) = fields.get("chatActive") {
            self.chat_active = is_truthy(active);
        }
        if let Some(text) = fields.get("chatInputText") {
            self.chat_input_text = coerce_text(text);
        }
        if let Some(queue) = fields.get("chatSendQueue") {
            self.chat_send_queue = SendQueue::from_loose(queue);
        }
        if let Some(requested) = fields.get("chatSendRequested") {
            self.chat_send_requested = is_truthy(requested);
        }
        if let Some(text) = fields.get("chatSendText") {
            self.chat_send_text = coerce_text(text);
        }

        Ok(())
    }

    /// Read a field as text, keyed by its HUD name.
    ///
    /// Unknown keys read as the empty string.
    pub fn text_field(&self, key: &str) -> String {
        match key {
            "chatActive" => self.chat_active.to_string(),
            "chatInputText" => self.chat_input_text.clone(),
            "chatSendRequested" => self.chat_send_requested.to_string(),
            "chatSendText" => self.chat_send_text.clone(),
            _ => String::new(),
        }
    }
}
