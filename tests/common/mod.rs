//! Test helpers for integration tests.
//!
//! Provides a hook recorder for observing which HUD callbacks ran.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use hudchat::{ChatBridge, HookKind};

/// Records the global names of hooks as they are called.
#[derive(Clone, Default)]
pub struct HookRecorder {
    calls: Arc<Mutex<Vec<&'static str>>>,
}

impl HookRecorder {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Install recording hooks of the given kinds on the bridge.
    pub fn install(&self, bridge: &mut ChatBridge, kinds: &[HookKind]) {
        for &kind in kinds {
            let calls = Arc::clone(&self.calls);
            bridge.hooks_mut().install(kind, move || {
                calls.lock().unwrap().push(kind.global_name());
            });
        }
    }

    /// Names of the hooks called so far, in order.
    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    /// Forget recorded calls.
    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }
}

/// Pending outgoing messages, without draining them.
pub fn queued(bridge: &ChatBridge) -> Vec<String> {
    bridge
        .state()
        .map(|state| state.chat_send_queue.iter().map(str::to_string).collect())
        .unwrap_or_default()
}
