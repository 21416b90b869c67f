//! Bounded queue of outgoing chat messages.

use std::collections::VecDeque;

use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use super::coerce::coerce_text;
use crate::error::EnqueueError;

/// Maximum number of pending outgoing chat messages.
pub const CHAT_QUEUE_MAX: usize = 128;

/// FIFO of outgoing chat messages awaiting an external sender.
///
/// The length never exceeds [`CHAT_QUEUE_MAX`]; pushing onto a full queue
/// is rejected and leaves the queue untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SendQueue {
    items: VecDeque<String>,
}

impl SendQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a queue from a loose value received from the UI side.
    ///
    /// Anything other than an array yields an empty queue. Entries past the
    /// capacity are dropped.
    pub fn from_loose(value: &Value) -> Self {
        let Value::Array(entries) = value else {
            warn!(kind = value_kind(value), "chat send queue is not an array, resetting");
            return Self::new();
        };

        if entries.len() > CHAT_QUEUE_MAX {
            warn!(
                len = entries.len(),
                max = CHAT_QUEUE_MAX,
                "chat send queue over capacity, truncating"
            );
        }

        Self {
            items: entries.iter().take(CHAT_QUEUE_MAX).map(coerce_text).collect(),
        }
    }

    /// Number of pending messages.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if no messages are pending.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Check if the queue is at capacity.
    pub fn is_full(&self) -> bool {
        self.items.len() >= CHAT_QUEUE_MAX
    }

    /// Append a message to the tail.
    ///
    /// Returns the new length, or [`EnqueueError::QueueFull`] when at capacity.
    pub fn push(&mut self, text: String) -> Result<usize, EnqueueError> {
        if self.is_full() {
            return Err(EnqueueError::QueueFull(CHAT_QUEUE_MAX));
        }
        self.items.push_back(text);
        Ok(self.items.len())
    }

    /// Remove the oldest message.
    pub fn pop(&mut self) -> Option<String> {
        self.items.pop_front()
    }

    /// Remove all messages.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Take all pending messages in arrival order.
    pub fn drain(&mut self) -> Vec<String> {
        self.items.drain(..).collect()
    }

    /// Iterate over pending messages, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
