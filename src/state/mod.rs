//! Shared chat state for the HUD.
//!
//! This module provides the state record the HUD and the game share:
//! - Chat activation flag and current input text
//! - Chat history
//! - Bounded outgoing send queue
//! - Legacy single-slot send request

mod app_state;
mod coerce;
mod message;
mod queue;

pub use app_state::AppState;
pub use coerce::{coerce_text, is_truthy, trim_text};
pub use message::{ChatMessage, MessageType};
pub use queue::{SendQueue, CHAT_QUEUE_MAX};
