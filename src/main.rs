use std::collections::VecDeque;
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info};

use hudchat::{ChatBridge, ChatHooks, ChatHud, Config, FrameInput, HookKind};

/// Turn the next pending stdin line into this frame's key presses.
///
/// A line opens the chat box if it is closed, otherwise it is typed into
/// the input box and submitted. An empty line closes the chat box.
fn next_frame_input(hud: &mut ChatHud<ChatBridge>, pending: &mut VecDeque<String>) -> FrameInput {
    let Some(line) = pending.front() else {
        return FrameInput::default();
    };

    if !hud.is_chat_active() {
        if line.is_empty() {
            pending.pop_front();
            return FrameInput::default();
        }
        return FrameInput::enter();
    }

    let line = pending.pop_front().unwrap_or_default();
    if line.is_empty() {
        return FrameInput::escape();
    }
    if let Some(bridge) = hud.ui_mut() {
        bridge.set_chat_input_text(Some(&line));
    }
    FrameInput::enter()
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Load configuration
    let config = match Config::load_with_env("hudchat.toml") {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load hudchat.toml: {e}");
            eprintln!("Using default configuration.");
            Config::default()
        }
    };
    let config = match config.validate() {
        Ok(()) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {e}");
            eprintln!("Using default configuration.");
            Config::default()
        }
    };

    // Initialize logging
    if let Err(e) = hudchat::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        hudchat::logging::init_console_only(&config.logging.level);
    }

    let mut hooks = ChatHooks::new();
    hooks.install(HookKind::Activate, || info!("chat box opened"));
    hooks.install(HookKind::Deactivate, || info!("chat box closed"));

    let mut bridge = ChatBridge::with_hooks(hooks);
    if config.hud.register_bridge {
        bridge.register_hud_bridge();
    }

    let mut hud = ChatHud::from_config(bridge, &config.hud);
    hud.on_enter();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut frames = tokio::time::interval(Duration::from_millis(config.hud.frame_interval_ms));
    let mut pending = VecDeque::new();
    let mut stdin_open = true;

    loop {
        tokio::select! {
            line = lines.next_line(), if stdin_open => match line {
                Ok(Some(line)) => pending.push_back(line),
                Ok(None) => stdin_open = false,
                Err(e) => {
                    error!("Failed to read input: {e}");
                    stdin_open = false;
                }
            },
            _ = frames.tick() => {
                let input = next_frame_input(&mut hud, &mut pending);
                hud.update(input);

                if let Some(bridge) = hud.ui_mut() {
                    for message in bridge.take_send_queue() {
                        info!(%message, "sending chat message");
                    }
                }

                if !stdin_open && pending.is_empty() {
                    break;
                }
            }
        }
    }

    hud.on_exit();
    info!("HUD chat bridge stopped");
}
