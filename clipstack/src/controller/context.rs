//! src/controller/context.rs
//! ============================================================================
//! # AppContext: Everything the Event Handlers Mutate
//!
//! One explicit owner for the history store and the clipboard. Handlers
//! receive it by `&mut`, so there is never a second path to either.

use chrono::{DateTime, Local};
use cliphist::HistoryStore;

use crate::config::Config;
use crate::error::AppError;
use crate::platform::clipboard::ClipboardProvider;

/// Behaviour switches taken from configuration at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PastePolicy {
    /// Stamp new entries with the local time (horizontal layout only)
    pub capture_timestamps: bool,

    /// Collapse the view after a paste
    pub minimize_after_paste: bool,
}

impl PastePolicy {
    pub fn from_config(config: &Config) -> Self {
        Self {
            capture_timestamps: config.ui.layout.captures_timestamps(),
            minimize_after_paste: config.ui.minimize_after_paste,
        }
    }
}

pub struct AppContext {
    pub store: HistoryStore,
    pub clipboard: Box<dyn ClipboardProvider>,
    pub policy: PastePolicy,
}

impl AppContext {
    pub fn new(
        store: HistoryStore,
        clipboard: Box<dyn ClipboardProvider>,
        policy: PastePolicy,
    ) -> Self {
        Self {
            store,
            clipboard,
            policy,
        }
    }

    /// Build the store from a validated configuration.
    pub fn from_config(
        config: &Config,
        clipboard: Box<dyn ClipboardProvider>,
    ) -> Result<Self, AppError> {
        let store = HistoryStore::with_config(&config.history)?;
        Ok(Self::new(store, clipboard, PastePolicy::from_config(config)))
    }

    /// Creation time for a new entry, if the policy records one.
    pub fn timestamp(&self) -> Option<DateTime<Local>> {
        self.policy.capture_timestamps.then(Local::now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Layout;
    use crate::platform::clipboard::MemoryClipboard;

    #[test]
    fn test_policy_follows_layout() {
        let mut config = Config::default();
        assert!(!PastePolicy::from_config(&config).capture_timestamps);

        config.ui.layout = Layout::Horizontal;
        config.ui.minimize_after_paste = false;
        let policy = PastePolicy::from_config(&config);
        assert!(policy.capture_timestamps);
        assert!(!policy.minimize_after_paste);
    }

    #[test]
    fn test_timestamp_only_when_captured() {
        let mut config = Config::default();
        let ctx = AppContext::from_config(&config, Box::new(MemoryClipboard::new())).unwrap();
        assert!(ctx.timestamp().is_none());

        config.ui.layout = Layout::Horizontal;
        let ctx = AppContext::from_config(&config, Box::new(MemoryClipboard::new())).unwrap();
        assert!(ctx.timestamp().is_some());
    }

    #[test]
    fn test_invalid_capacity_never_builds_a_store() {
        let mut config = Config::default();
        config.history.capacity = 0;
        let result = AppContext::from_config(&config, Box::new(MemoryClipboard::new()));
        assert!(result.is_err_and(|err| err.is_fatal()));
    }
}
