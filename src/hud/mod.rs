//! Chat HUD controller.
//!
//! [`ChatHud`] runs on the game side. Each frame it opens the chat box when
//! enter is pressed, submits the typed text on enter and closes on escape,
//! issuing [`HudCommand`]s to the UI layer.

mod ui;

pub use ui::{InputControl, UiLayer};

use tracing::debug;

use crate::bridge::HudCommand;
use crate::config::HudConfig;

/// Route the UI shows while the chat HUD is active.
pub const GAMEPLAY_ROUTE: &str = "#/gameplay";

/// Keys pressed during one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    /// Enter was pressed this frame.
    pub enter_pressed: bool,
    /// Escape was pressed this frame.
    pub escape_pressed: bool,
}

impl FrameInput {
    /// A frame with enter pressed.
    pub fn enter() -> Self {
        Self {
            enter_pressed: true,
            ..Self::default()
        }
    }

    /// A frame with escape pressed.
    pub fn escape() -> Self {
        Self {
            escape_pressed: true,
            ..Self::default()
        }
    }
}

/// Game-side controller for the chat box.
pub struct ChatHud<U: UiLayer> {
    ui: Option<U>,
    input: Option<Box<dyn InputControl + Send>>,
    activation_delay_frames: u32,
    chat_active: bool,
    frames_in_hud: u32,
    skip_exit_this_frame: bool,
}

impl<U: UiLayer> ChatHud<U> {
    /// Create a controller driving the given UI layer.
    pub fn new(ui: U) -> Self {
        Self::from_parts(Some(ui), HudConfig::default().activation_delay_frames)
    }

    /// Create a controller with no UI layer attached.
    ///
    /// Activation still tracks state and toggles input, but no commands are
    /// issued.
    pub fn headless() -> Self {
        Self::from_parts(None, HudConfig::default().activation_delay_frames)
    }

    /// Create a controller using the HUD settings from the configuration.
    pub fn from_config(ui: U, config: &HudConfig) -> Self {
        Self::from_parts(Some(ui), config.activation_delay_frames)
    }

    fn from_parts(ui: Option<U>, activation_delay_frames: u32) -> Self {
        Self {
            ui,
            input: None,
            activation_delay_frames,
            chat_active: false,
            frames_in_hud: 0,
            skip_exit_this_frame: false,
        }
    }

    /// Attach game input controls.
    pub fn with_input(mut self, input: impl InputControl + Send + 'static) -> Self {
        self.input = Some(Box::new(input));
        self
    }

    /// The UI layer, if attached.
    pub fn ui(&self) -> Option<&U> {
        self.ui.as_ref()
    }

    /// Mutable access to the UI layer, if attached.
    pub fn ui_mut(&mut self) -> Option<&mut U> {
        self.ui.as_mut()
    }

    /// Whether the chat box is open.
    pub fn is_chat_active(&self) -> bool {
        self.chat_active
    }

    /// Called when the HUD becomes active.
    pub fn on_enter(&mut self) {
        self.chat_active = false;
        self.skip_exit_this_frame = false;
        self.frames_in_hud = 0;

        let Some(ui) = self.ui.as_mut() else {
            return;
        };
        ui.navigate(GAMEPLAY_ROUTE);
        ui.set_visible(true);
        ui.execute(&HudCommand::ResetChatState);
    }

    /// Advance one frame.
    pub fn update(&mut self, input: FrameInput) {
        self.frames_in_hud = self.frames_in_hud.saturating_add(1);

        if self.chat_active {
            self.poll_chat_ui(input);
        } else if self.frames_in_hud > self.activation_delay_frames && input.enter_pressed {
            self.activate_chat();
        }
    }

    /// Called when the HUD is being left.
    pub fn on_exit(&mut self) {
        if self.chat_active {
            self.deactivate_chat();
        }
    }

    /// Whether gameplay input should be ignored.
    pub fn blocks_gameplay_input(&self) -> bool {
        self.chat_active
    }

    /// Whether the cursor should be shown.
    pub fn wants_cursor_visible(&self) -> bool {
        self.chat_active
    }

    /// Returns true once after escape closed the chat box.
    ///
    /// The host uses this to avoid treating the same escape press as a
    /// request to leave the screen.
    pub fn consume_exit_suppress_request(&mut self) -> bool {
        std::mem::take(&mut self.skip_exit_this_frame)
    }

    fn activate_chat(&mut self) {
        if self.chat_active {
            return;
        }

        debug!("activating chat");
        self.chat_active = true;
        if let Some(input) = self.input.as_mut() {
            input.set_gameplay_input_enabled(false);
            input.set_cursor_visible(true);
        }

        if let Some(ui) = self.ui.as_mut() {
            ui.set_visible(true);
            ui.execute(&HudCommand::SetChatActive(true));
        }
    }

    fn deactivate_chat(&mut self) {
        if !self.chat_active {
            return;
        }

        debug!("deactivating chat");
        self.chat_active = false;
        if let Some(input) = self.input.as_mut() {
            input.set_gameplay_input_enabled(true);
            input.set_cursor_visible(false);
        }

        if let Some(ui) = self.ui.as_mut() {
            ui.execute(&HudCommand::SetChatActive(false));
        }
    }

    fn poll_chat_ui(&mut self, input: FrameInput) {
        if input.escape_pressed {
            self.skip_exit_this_frame = true;
            self.deactivate_chat();
            return;
        }

        if !input.enter_pressed {
            return;
        }
        let Some(ui) = self.ui.as_mut() else {
            return;
        };

        let text = ui.app_state_text("chatInputText");
        ui.execute(&HudCommand::ClearChatInput);

        if text.is_empty() {
            return;
        }
        ui.execute(&HudCommand::EnqueueChat(text));
    }
}
