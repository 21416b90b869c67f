//! Commands the game side issues to the HUD.

use serde_json::Value;

use super::entry::EntryPoint;

/// A chat command sent from the game to the HUD.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HudCommand {
    /// Reset all chat state.
    ResetChatState,
    /// Activate or deactivate the chat box.
    SetChatActive(bool),
    /// Clear the chat input box.
    ClearChatInput,
    /// Queue an outgoing message.
    EnqueueChat(String),
    /// Empty the send queue.
    ClearChatQueue,
    /// Clear the legacy send slot.
    ClearLegacyChatSend,
}

impl HudCommand {
    /// Entry point that handles this command when registered.
    ///
    /// `ClearChatInput` has no entry point and always uses the inline path.
    pub fn entry_point(&self) -> Option<EntryPoint> {
        match self {
            HudCommand::ResetChatState => Some(EntryPoint::ResetChat),
            HudCommand::SetChatActive(_) => Some(EntryPoint::SetChatActive),
            HudCommand::ClearChatInput => None,
            HudCommand::EnqueueChat(_) => Some(EntryPoint::EnqueueChat),
            HudCommand::ClearChatQueue => Some(EntryPoint::ClearChatQueue),
            HudCommand::ClearLegacyChatSend => Some(EntryPoint::ClearLegacyChatSend),
        }
    }

    /// Argument passed to the entry point.
    pub fn argument(&self) -> Value {
        match self {
            HudCommand::SetChatActive(active) => Value::Bool(*active),
            HudCommand::EnqueueChat(text) => Value::String(text.clone()),
            _ => Value::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_points() {
        assert_eq!(
            HudCommand::ResetChatState.entry_point(),
            Some(EntryPoint::ResetChat)
        );
        assert_eq!(
            HudCommand::EnqueueChat("x".to_string()).entry_point(),
            Some(EntryPoint::EnqueueChat)
        );
        assert_eq!(HudCommand::ClearChatInput.entry_point(), None);
    }

    #[test]
    fn test_arguments() {
        assert_eq!(HudCommand::SetChatActive(true).argument(), Value::Bool(true));
        assert_eq!(
            HudCommand::EnqueueChat("hi".to_string()).argument(),
            Value::String("hi".to_string())
        );
        assert_eq!(HudCommand::ClearChatQueue.argument(), Value::Null);
    }
}
