//! Named entry points exposed by the bridge.

use std::collections::BTreeSet;
use std::fmt;

/// An operation the bridge can expose under a global name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EntryPoint {
    /// Reset all chat state.
    ResetChat,
    /// Activate or deactivate chat (one boolean-like argument).
    SetChatActive,
    /// Queue an outgoing message (one string-like argument, returns a boolean).
    EnqueueChat,
    /// Empty the send queue.
    ClearChatQueue,
    /// Clear the legacy send slot.
    ClearLegacyChatSend,
}

impl EntryPoint {
    /// All entry points, in registration order.
    pub const ALL: [EntryPoint; 5] = [
        EntryPoint::ResetChat,
        EntryPoint::SetChatActive,
        EntryPoint::EnqueueChat,
        EntryPoint::ClearChatQueue,
        EntryPoint::ClearLegacyChatSend,
    ];

    /// Global name of the entry point.
    pub fn global_name(&self) -> &'static str {
        match self {
            EntryPoint::ResetChat => "__NW_HUD_RESET_CHAT__",
            EntryPoint::SetChatActive => "__NW_HUD_SET_CHAT_ACTIVE__",
            EntryPoint::EnqueueChat => "__NW_HUD_ENQUEUE_CHAT__",
            EntryPoint::ClearChatQueue => "__NW_HUD_CLEAR_CHAT_QUEUE__",
            EntryPoint::ClearLegacyChatSend => "__NW_HUD_CLEAR_LEGACY_CHAT_SEND__",
        }
    }

    /// Look up an entry point by its global name.
    pub fn from_global_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|entry| entry.global_name() == name)
    }
}

impl fmt::Display for EntryPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.global_name())
    }
}

/// The set of currently registered entry points.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryPoints {
    bound: BTreeSet<EntryPoint>,
}

impl EntryPoints {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind every entry point. Rebinding is a no-op.
    pub fn bind_all(&mut self) {
        self.bound.extend(EntryPoint::ALL);
    }

    /// Unbind every entry point. Safe to call when nothing is bound.
    pub fn unbind_all(&mut self) {
        self.bound.clear();
    }

    /// Check whether an entry point is bound.
    pub fn contains(&self, entry: EntryPoint) -> bool {
        self.bound.contains(&entry)
    }

    /// Resolve a global name to a bound entry point.
    pub fn lookup(&self, name: &str) -> Option<EntryPoint> {
        EntryPoint::from_global_name(name).filter(|entry| self.contains(*entry))
    }

    /// Global names of all bound entry points.
    pub fn names(&self) -> Vec<&'static str> {
        self.bound.iter().map(EntryPoint::global_name).collect()
    }

    /// Check whether nothing is bound.
    pub fn is_empty(&self) -> bool {
        self.bound.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_names_roundtrip() {
        for entry in EntryPoint::ALL {
            assert_eq!(EntryPoint::from_global_name(entry.global_name()), Some(entry));
        }
        assert_eq!(EntryPoint::from_global_name("__NW_UNKNOWN__"), None);
    }

    #[test]
    fn test_bind_all_is_idempotent() {
        let mut table = EntryPoints::new();
        table.bind_all();
        table.bind_all();
        assert_eq!(table.names().len(), 5);
    }

    #[test]
    fn test_lookup_requires_binding() {
        let mut table = EntryPoints::new();
        assert_eq!(table.lookup("__NW_HUD_ENQUEUE_CHAT__"), None);

        table.bind_all();
        assert_eq!(
            table.lookup("__NW_HUD_ENQUEUE_CHAT__"),
            Some(EntryPoint::EnqueueChat)
        );
    }

    #[test]
    fn test_unbind_all() {
        let mut table = EntryPoints::new();
        table.unbind_all();
        assert!(table.is_empty());

        table.bind_all();
        table.unbind_all();
        assert!(table.is_empty());
        assert!(!table.contains(EntryPoint::ResetChat));
    }
}
