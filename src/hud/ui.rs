//! Seams between the chat HUD controller and its host.

use crate::bridge::HudCommand;

/// The UI layer hosting the HUD.
pub trait UiLayer {
    /// Run a chat command in the UI.
    fn execute(&mut self, command: &HudCommand);

    /// Read an app-state field as text. Missing fields read as empty.
    fn app_state_text(&self, key: &str) -> String;

    /// Show or hide the UI layer.
    fn set_visible(&mut self, _visible: bool) {}

    /// Navigate the UI to a route.
    fn navigate(&mut self, _route: &str) {}
}

/// Game-side input controls the HUD toggles while chat is open.
pub trait InputControl {
    /// Enable or disable gameplay input.
    fn set_gameplay_input_enabled(&mut self, enabled: bool);

    /// Show or hide the mouse cursor.
    fn set_cursor_visible(&mut self, visible: bool);
}
