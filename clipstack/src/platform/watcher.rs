//! src/platform/watcher.rs
//! ============================================================================
//! # Ownership-Change Watcher
//!
//! `arboard` offers no change notification, so the event loop samples the
//! clipboard on an interval and this watcher reports a change whenever the
//! observed text differs from the previous sample. Writes made by this
//! program are reported like any other; the history tolerates them.
//!
//! Limitation: copying the exact text that is already on the clipboard is
//! invisible to a sampler.

use tracing::trace;

use crate::platform::clipboard::ClipboardProvider;

#[derive(Debug, Default)]
pub struct OwnerChangeWatcher {
    last_seen: Option<String>,
    changes: u64,
}

impl OwnerChangeWatcher {
    /// A fresh watcher reports whatever is on the clipboard at the first
    /// poll, so text copied before startup enters the history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sample the clipboard once. Returns `true` when its contents changed
    /// since the previous sample, including a change to empty.
    pub fn poll(&mut self, clipboard: &mut dyn ClipboardProvider) -> bool {
        let current = clipboard.get_current_text();
        if current == self.last_seen {
            return false;
        }

        self.changes += 1;
        trace!(
            "Clipboard owner change #{} ({} bytes)",
            self.changes,
            current.as_ref().map_or(0, String::len)
        );
        self.last_seen = current;
        true
    }

    /// Number of changes reported so far.
    pub fn changes(&self) -> u64 {
        self.changes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::clipboard::MemoryClipboard;

    #[test]
    fn test_first_poll_reports_existing_text() {
        let outside = MemoryClipboard::new();
        outside.copy("before startup");
        let mut clipboard = outside.clone();

        let mut watcher = OwnerChangeWatcher::new();
        assert!(watcher.poll(&mut clipboard));
        assert!(!watcher.poll(&mut clipboard));
    }

    #[test]
    fn test_empty_clipboard_at_start_is_quiet() {
        let mut clipboard = MemoryClipboard::new();
        let mut watcher = OwnerChangeWatcher::new();
        assert!(!watcher.poll(&mut clipboard));
        assert_eq!(watcher.changes(), 0);
    }

    #[test]
    fn test_reports_each_distinct_change() {
        let outside = MemoryClipboard::new();
        let mut clipboard = outside.clone();
        let mut watcher = OwnerChangeWatcher::new();

        outside.copy("a");
        assert!(watcher.poll(&mut clipboard));
        outside.copy("b");
        assert!(watcher.poll(&mut clipboard));
        outside.copy("b");
        assert!(!watcher.poll(&mut clipboard));
        outside.empty();
        assert!(watcher.poll(&mut clipboard));
        assert_eq!(watcher.changes(), 3);
    }

    #[test]
    fn test_recopy_of_current_text_is_not_reported() {
        let outside = MemoryClipboard::new();
        let mut clipboard = outside.clone();
        let mut watcher = OwnerChangeWatcher::new();

        outside.copy("b");
        assert!(watcher.poll(&mut clipboard));

        // same text copied again, e.g. after its entry was deleted
        outside.copy("b");
        assert!(!watcher.poll(&mut clipboard));

        // changes that come back to the same text between samples
        outside.copy("c");
        outside.copy("b");
        assert!(!watcher.poll(&mut clipboard));
        assert_eq!(watcher.changes(), 1);
    }

    #[test]
    fn test_own_writes_are_reported() {
        let mut clipboard = MemoryClipboard::new();
        let mut watcher = OwnerChangeWatcher::new();

        clipboard.set_text("pasted by us").unwrap();
        assert!(watcher.poll(&mut clipboard));
    }
}
