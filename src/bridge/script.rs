//! Script rendering for web-view based HUDs.
//!
//! A HUD hosted in a web view receives each [`HudCommand`] as a script that
//! calls the registered global entry point when it exists and otherwise
//! updates `window.vueAppState` inline.

use serde_json::{Map, Value};

use super::command::HudCommand;
use super::entry::EntryPoint;
use crate::hooks::HookKind;
use crate::hud::UiLayer;
use crate::state::coerce_text;

const ENSURE_STATE: &str = "window.vueAppState = window.vueAppState || {};";

/// Quote text as a JavaScript string literal.
///
/// Backslashes, double quotes, `\n` and `\r` are escaped.
pub fn escape_js_string_literal(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len() + 8);
    escaped.push('"');
    for c in text.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            _ => escaped.push(c),
        }
    }
    escaped.push('"');
    escaped
}

/// Call an entry point if the HUD registered it, else run `fallback`.
fn call_or_else(entry: EntryPoint, args: &str, fallback: &str) -> String {
    let name = entry.global_name();
    format!("if (window.{name}) window.{name}({args});else {{{fallback}}}")
}

fn call_hook(kind: HookKind) -> String {
    let name = kind.global_name();
    format!("if (window.{name}) window.{name}();")
}

impl HudCommand {
    /// Render this command as a script for a web-view HUD.
    pub fn to_script(&self) -> String {
        match self {
            HudCommand::ResetChatState => call_or_else(
                EntryPoint::ResetChat,
                "",
                &format!(
                    "{ENSURE_STATE}\
                     window.vueAppState.chatMessages = [];\
                     window.vueAppState.chatSendRequested = false;\
                     window.vueAppState.chatSendText = '';\
                     window.vueAppState.chatSendQueue = [];\
                     window.vueAppState.chatActive = false;\
                     window.vueAppState.chatInputText = '';\
                     {}",
                    call_hook(HookKind::Deactivate)
                ),
            ),
            HudCommand::SetChatActive(active) => {
                let hook = if *active {
                    HookKind::Activate
                } else {
                    HookKind::Deactivate
                };
                call_or_else(
                    EntryPoint::SetChatActive,
                    &active.to_string(),
                    &format!(
                        "{ENSURE_STATE}window.vueAppState.chatActive = {active};{}",
                        call_hook(hook)
                    ),
                )
            }
            HudCommand::ClearChatInput => {
                let name = HookKind::ClearInput.global_name();
                format!(
                    "if (window.{name}) window.{name}();\
                     else if (window.vueAppState) window.vueAppState.chatInputText = '';"
                )
            }
            HudCommand::EnqueueChat(text) => {
                let literal = escape_js_string_literal(text);
                call_or_else(
                    EntryPoint::EnqueueChat,
                    &literal,
                    &format!(
                        "{ENSURE_STATE}\
                         if (!Array.isArray(window.vueAppState.chatSendQueue))\
                         window.vueAppState.chatSendQueue = [];\
                         window.vueAppState.chatSendQueue.push({literal});"
                    ),
                )
            }
            HudCommand::ClearChatQueue => call_or_else(
                EntryPoint::ClearChatQueue,
                "",
                &format!("{ENSURE_STATE}window.vueAppState.chatSendQueue = [];"),
            ),
            HudCommand::ClearLegacyChatSend => call_or_else(
                EntryPoint::ClearLegacyChatSend,
                "",
                &format!(
                    "{ENSURE_STATE}\
                     window.vueAppState.chatSendRequested = false;\
                     window.vueAppState.chatSendText = '';"
                ),
            ),
        }
    }
}

/// A [`UiLayer`] that records rendered scripts for a web view to execute.
///
/// App-state reads are served from a JSON map the host keeps in sync with
/// the web view.
#[derive(Debug, Default)]
pub struct ScriptBuffer {
    scripts: Vec<String>,
    app_state: Map<String, Value>,
    visible: bool,
}

impl ScriptBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts recorded so far.
    pub fn scripts(&self) -> &[String] {
        &self.scripts
    }

    /// Take all recorded scripts, leaving the buffer empty.
    pub fn take_scripts(&mut self) -> Vec<String> {
        std::mem::take(&mut self.scripts)
    }

    /// Update a cached app-state value read back from the web view.
    pub fn set_app_value(&mut self, key: impl Into<String>, value: Value) {
        self.app_state.insert(key.into(), value);
    }

    /// Whether the UI layer was last made visible.
    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

impl UiLayer for ScriptBuffer {
    fn execute(&mut self, command: &HudCommand) {
        self.scripts.push(command.to_script());
    }

    fn app_state_text(&self, key: &str) -> String {
        self.app_state.get(key).map(coerce_text).unwrap_or_default()
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn navigate(&mut self, route: &str) {
        self.scripts.push(format!(
            "window.location.hash = {};",
            escape_js_string_literal(route)
        ));
    }
}
