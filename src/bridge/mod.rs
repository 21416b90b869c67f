//! Bridge between the game and the chat HUD.
//!
//! [`ChatBridge`] owns the shared chat state, the optional HUD hooks and the
//! table of named entry points. Every operation runs to completion on the
//! caller's thread; the bridge is an owned context passed by `&mut`.

mod command;
mod entry;
mod script;

pub use command::HudCommand;
pub use entry::{EntryPoint, EntryPoints};
pub use script::{escape_js_string_literal, ScriptBuffer};

use serde_json::Value;
use tracing::{debug, info};

use crate::error::EnqueueError;
use crate::hooks::{ChatHooks, HookKind};
use crate::hud::UiLayer;
use crate::state::{coerce_text, is_truthy, trim_text, AppState};
use crate::{HudChatError, Result};

/// Owner of the chat state shared with the HUD.
#[derive(Debug, Default)]
pub struct ChatBridge {
    /// Created on first access.
    state: Option<AppState>,
    hooks: ChatHooks,
    entry_points: EntryPoints,
}

impl ChatBridge {
    /// Create a bridge with no state, no hooks and nothing registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a bridge with the given hooks installed.
    pub fn with_hooks(hooks: ChatHooks) -> Self {
        Self {
            hooks,
            ..Self::default()
        }
    }

    fn ensure_state(&mut self) -> &mut AppState {
        self.state.get_or_insert_with(|| {
            debug!("initializing chat app state");
            AppState::new()
        })
    }

    /// Check whether the state record has been created yet.
    pub fn is_initialized(&self) -> bool {
        self.state.is_some()
    }

    /// The state record, if it has been created.
    pub fn state(&self) -> Option<&AppState> {
        self.state.as_ref()
    }

    /// The state record, created on first access.
    pub fn state_mut(&mut self) -> &mut AppState {
        self.ensure_state()
    }

    /// The HUD hook table.
    pub fn hooks(&self) -> &ChatHooks {
        &self.hooks
    }

    /// Mutable access to the HUD hook table.
    pub fn hooks_mut(&mut self) -> &mut ChatHooks {
        &mut self.hooks
    }

    /// Store the chat active flag without calling any hook.
    pub fn set_chat_active_state(&mut self, active: bool) {
        self.ensure_state().chat_active = active;
    }

    /// Store the chat input text. `None` stores the empty string.
    pub fn set_chat_input_text(&mut self, text: Option<&str>) {
        self.ensure_state().chat_input_text = text.unwrap_or_default().to_string();
    }

    /// Empty the outgoing send queue.
    pub fn clear_chat_queue(&mut self) {
        self.ensure_state().chat_send_queue.clear();
    }

    /// Clear the legacy send request flag and text together.
    pub fn clear_legacy_chat_send(&mut self) {
        let state = self.ensure_state();
        state.chat_send_requested = false;
        state.chat_send_text.clear();
    }

    /// Reset every chat field, then notify the HUD.
    ///
    /// Calls the deactivate hook if installed, otherwise the clear-input
    /// hook if installed. At most one hook runs.
    pub fn reset_chat_state(&mut self) {
        self.ensure_state().chat_messages.clear();
        self.clear_legacy_chat_send();
        self.clear_chat_queue();
        self.set_chat_active_state(false);
        self.set_chat_input_text(Some(""));

        if !self.hooks.fire(HookKind::Deactivate) {
            self.hooks.fire(HookKind::ClearInput);
        }
    }

    /// Set the chat active flag and call the matching hook if installed.
    pub fn set_chat_active(&mut self, active: bool) {
        self.set_chat_active_state(active);

        let hook = if active {
            HookKind::Activate
        } else {
            HookKind::Deactivate
        };
        self.hooks.fire(hook);
    }

    /// Queue an outgoing message.
    ///
    /// Returns false when the trimmed text is empty or the queue is full;
    /// the state is left untouched in both cases.
    pub fn enqueue_chat_send(&mut self, text: Option<&str>) -> bool {
        self.try_enqueue_chat_send(text).is_ok()
    }

    /// Queue an outgoing message, reporting why it was rejected.
    ///
    /// On success returns the new queue length.
    pub fn try_enqueue_chat_send(
        &mut self,
        text: Option<&str>,
    ) -> std::result::Result<usize, EnqueueError> {
        let state = self.ensure_state();
        let payload = trim_text(text.unwrap_or_default());
        if payload.is_empty() {
            debug!("rejecting empty chat message");
            return Err(EnqueueError::Empty);
        }

        let result = state.chat_send_queue.push(payload.to_string());
        match &result {
            Ok(len) => debug!(len, "queued chat message"),
            Err(e) => debug!(error = %e, "dropping chat message"),
        }
        result
    }

    /// Take all pending outgoing messages in arrival order.
    pub fn take_send_queue(&mut self) -> Vec<String> {
        self.state
            .as_mut()
            .map(|state| state.chat_send_queue.drain())
            .unwrap_or_default()
    }

    /// Register the five HUD entry points. Re-registering is harmless.
    pub fn register_hud_bridge(&mut self) {
        self.entry_points.bind_all();
        info!("HUD chat bridge registered");
    }

    /// Remove the five HUD entry points. Safe to call when not registered.
    pub fn unregister_hud_bridge(&mut self) {
        self.entry_points.unbind_all();
        info!("HUD chat bridge unregistered");
    }

    /// The entry point table.
    pub fn entry_points(&self) -> &EntryPoints {
        &self.entry_points
    }

    /// Call a registered entry point by global name with a loose argument.
    ///
    /// `__NW_HUD_SET_CHAT_ACTIVE__` uses the argument's truthiness and
    /// `__NW_HUD_ENQUEUE_CHAT__` its text form (`null` is empty). The enqueue
    /// entry point returns a boolean; the others return `null`.
    pub fn invoke(&mut self, name: &str, arg: &Value) -> Result<Value> {
        let entry = self
            .entry_points
            .lookup(name)
            .ok_or_else(|| HudChatError::EntryPointNotRegistered(name.to_string()))?;
        Ok(self.dispatch(entry, arg))
    }

    fn dispatch(&mut self, entry: EntryPoint, arg: &Value) -> Value {
        match entry {
            EntryPoint::ResetChat => {
                self.reset_chat_state();
                Value::Null
            }
            EntryPoint::SetChatActive => {
                self.set_chat_active(is_truthy(arg));
                Value::Null
            }
            EntryPoint::EnqueueChat => {
                let text = coerce_text(arg);
                Value::Bool(self.enqueue_chat_send(Some(&text)))
            }
            EntryPoint::ClearChatQueue => {
                self.clear_chat_queue();
                Value::Null
            }
            EntryPoint::ClearLegacyChatSend => {
                self.clear_legacy_chat_send();
                Value::Null
            }
        }
    }

    /// Run a command from the game side.
    ///
    /// Uses the registered entry point when there is one, otherwise applies
    /// the command directly to the state.
    pub fn execute(&mut self, command: &HudCommand) {
        if let Some(entry) = command.entry_point() {
            if self.entry_points.contains(entry) {
                self.dispatch(entry, &command.argument());
                return;
            }
        }
        self.apply_inline(command);
    }

    fn apply_inline(&mut self, command: &HudCommand) {
        debug!(?command, "applying chat command without entry point");
        match command {
            HudCommand::ResetChatState => {
                let state = self.ensure_state();
                state.chat_messages.clear();
                state.chat_send_requested = false;
                state.chat_send_text.clear();
                state.chat_send_queue.clear();
                state.chat_active = false;
                state.chat_input_text.clear();
                self.hooks.fire(HookKind::Deactivate);
            }
            HudCommand::SetChatActive(active) => self.set_chat_active(*active),
            HudCommand::ClearChatInput => {
                if !self.hooks.fire(HookKind::ClearInput) {
                    if let Some(state) = self.state.as_mut() {
                        state.chat_input_text.clear();
                    }
                }
            }
            HudCommand::EnqueueChat(text) => {
                if let Err(e) = self.ensure_state().chat_send_queue.push(text.clone()) {
                    debug!(error = %e, "dropping chat message");
                }
            }
            HudCommand::ClearChatQueue => self.clear_chat_queue(),
            HudCommand::ClearLegacyChatSend => self.clear_legacy_chat_send(),
        }
    }

    /// Serialize the state record, creating it if needed.
    pub fn snapshot(&mut self) -> Result<Value> {
        self.ensure_state().to_json()
    }

    /// Merge a JSON object written by the HUD into the state record.
    pub fn merge_state(&mut self, value: &Value) -> Result<()> {
        self.ensure_state().merge_json(value)
    }
}

impl UiLayer for ChatBridge {
    fn execute(&mut self, command: &HudCommand) {
        ChatBridge::execute(self, command);
    }

    fn app_state_text(&self, key: &str) -> String {
        self.state
            .as_ref()
            .map(|state| state.text_field(key))
            .unwrap_or_default()
    }
}
