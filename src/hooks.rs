//! Optional callbacks supplied by the HUD.
//!
//! The HUD may install an "activate", a "deactivate" and a "clear input"
//! callback. The bridge only ever calls them if present; a missing hook is
//! never an error.

use std::fmt;

use tracing::debug;

/// A zero-argument callback installed by the HUD.
pub type Hook = Box<dyn FnMut() + Send>;

/// The hook slots the bridge knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookKind {
    /// Called when chat becomes active.
    Activate,
    /// Called when chat becomes inactive, and preferred during reset.
    Deactivate,
    /// Called during reset only when no deactivate hook is installed.
    ClearInput,
}

impl HookKind {
    /// All hook kinds.
    pub const ALL: [HookKind; 3] = [HookKind::Activate, HookKind::Deactivate, HookKind::ClearInput];

    /// Global name the HUD installs this hook under.
    pub fn global_name(&self) -> &'static str {
        match self {
            HookKind::Activate => "__NW_CHAT_ACTIVATE__",
            HookKind::Deactivate => "__NW_CHAT_DEACTIVATE__",
            HookKind::ClearInput => "__NW_CHAT_CLEAR_INPUT__",
        }
    }

    /// Look up a hook kind by its global name.
    pub fn from_global_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.global_name() == name)
    }
}

impl fmt::Display for HookKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.global_name())
    }
}

/// Table of optional HUD callbacks.
#[derive(Default)]
pub struct ChatHooks {
    activate: Option<Hook>,
    deactivate: Option<Hook>,
    clear_input: Option<Hook>,
}

impl ChatHooks {
    /// Create an empty hook table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a hook, replacing any previous one of the same kind.
    pub fn install<F>(&mut self, kind: HookKind, hook: F)
    where
        F: FnMut() + Send + 'static,
    {
        *self.slot_mut(kind) = Some(Box::new(hook));
    }

    /// Remove a hook.
    ///
    /// Returns true if a hook was installed.
    pub fn remove(&mut self, kind: HookKind) -> bool {
        self.slot_mut(kind).take().is_some()
    }

    /// Check whether a hook is installed.
    pub fn is_installed(&self, kind: HookKind) -> bool {
        match kind {
            HookKind::Activate => self.activate.is_some(),
            HookKind::Deactivate => self.deactivate.is_some(),
            HookKind::ClearInput => self.clear_input.is_some(),
        }
    }

    /// Call a hook if it is installed.
    ///
    /// Returns true if the hook ran.
    pub fn fire(&mut self, kind: HookKind) -> bool {
        match self.slot_mut(kind) {
            Some(hook) => {
                debug!(hook = %kind, "calling chat hook");
                hook();
                true
            }
            None => false,
        }
    }

    fn slot_mut(&mut self, kind: HookKind) -> &mut Option<Hook> {
        match kind {
            HookKind::Activate => &mut self.activate,
            HookKind::Deactivate => &mut self.deactivate,
            HookKind::ClearInput => &mut self.clear_input,
        }
    }
}

impl fmt::Debug for ChatHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let installed: Vec<&str> = HookKind::ALL
            .into_iter()
            .filter(|kind| self.is_installed(*kind))
            .map(|kind| kind.global_name())
            .collect();
        f.debug_struct("ChatHooks")
            .field("installed", &installed)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_global_names() {
        assert_eq!(HookKind::Activate.global_name(), "__NW_CHAT_ACTIVATE__");
        assert_eq!(HookKind::Deactivate.global_name(), "__NW_CHAT_DEACTIVATE__");
        assert_eq!(HookKind::ClearInput.global_name(), "__NW_CHAT_CLEAR_INPUT__");
    }

    #[test]
    fn test_from_global_name() {
        for kind in HookKind::ALL {
            assert_eq!(HookKind::from_global_name(kind.global_name()), Some(kind));
        }
        assert_eq!(HookKind::from_global_name("__NW_OTHER__"), None);
    }

    #[test]
    fn test_fire_missing_hook() {
        let mut hooks = ChatHooks::new();
        assert!(!hooks.fire(HookKind::Activate));
    }

    #[test]
    fn test_install_and_fire() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);

        let mut hooks = ChatHooks::new();
        hooks.install(HookKind::Deactivate, move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        assert!(hooks.is_installed(HookKind::Deactivate));
        assert!(!hooks.is_installed(HookKind::Activate));
        assert!(hooks.fire(HookKind::Deactivate));
        assert!(hooks.fire(HookKind::Deactivate));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_install_replaces() {
        let calls = Arc::new(AtomicUsize::new(0));
        let first = Arc::clone(&calls);
        let second = Arc::clone(&calls);

        let mut hooks = ChatHooks::new();
        hooks.install(HookKind::Activate, move || {
            first.fetch_add(1, Ordering::SeqCst);
        });
        hooks.install(HookKind::Activate, move || {
            second.fetch_add(10, Ordering::SeqCst);
        });
        hooks.fire(HookKind::Activate);

        assert_eq!(calls.load(Ordering::SeqCst), 10);
    }

    #[test]
    fn test_remove() {
        let mut hooks = ChatHooks::new();
        hooks.install(HookKind::ClearInput, || {});

        assert!(hooks.remove(HookKind::ClearInput));
        assert!(!hooks.remove(HookKind::ClearInput));
        assert!(!hooks.fire(HookKind::ClearInput));
    }

    #[test]
    fn test_debug_lists_installed() {
        let mut hooks = ChatHooks::new();
        hooks.install(HookKind::Activate, || {});
        let debug = format!("{hooks:?}");
        assert!(debug.contains("__NW_CHAT_ACTIVATE__"));
        assert!(!debug.contains("__NW_CHAT_DEACTIVATE__"));
    }
}
