//! HUD chat bridge.
//!
//! Connects a game client to its chat HUD: chat activation, the bounded
//! outgoing message queue, chat resets and the optional HUD callbacks.

pub mod bridge;
pub mod config;
pub mod error;
pub mod hooks;
pub mod hud;
pub mod logging;
pub mod state;

pub use bridge::{escape_js_string_literal, ChatBridge, EntryPoint, HudCommand, ScriptBuffer};
pub use config::Config;
pub use error::{EnqueueError, HudChatError, Result};
pub use hooks::{ChatHooks, HookKind};
pub use hud::{ChatHud, FrameInput, InputControl, UiLayer};
pub use state::{AppState, ChatMessage, MessageType, SendQueue, CHAT_QUEUE_MAX};
