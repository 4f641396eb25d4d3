//! src/view/snapshots.rs
//! ============================================================
//! Immutable rows harvested from the history store after each
//! mutation and handed to the view. Rows own their data so the
//! view holds no borrow of the store between events.

use cliphist::{EntryHandle, HistoryStore};
use compact_str::CompactString;

/// One history entry as the view sees it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryRow {
    /// Identity used for deletion requests
    pub handle: EntryHandle,

    /// Verbatim content, pasted back on selection
    pub content: CompactString,

    /// Formatted creation time, only when timestamps are captured
    pub timestamp: Option<CompactString>,
}

/// Project the whole store, most recent first.
pub fn project(store: &HistoryStore) -> Vec<EntryRow> {
    store
        .iter()
        .map(|(handle, entry)| EntryRow {
            handle,
            content: CompactString::from(entry.content()),
            timestamp: entry.display_timestamp(),
        })
        .collect()
}
