//! # cliphist - Bounded Clipboard History Store
//!
//! Keeps the most recent distinct clipboard texts, newest first.
//!
//! ## Key Features
//! - Fixed capacity in `[2, 1024]`, tail eviction when full
//! - Content-equality deduplication
//! - Two insertion paths: `add_if_absent` keeps a known entry where it is,
//!   `promote_or_insert` moves it to the head
//! - O(1) removal by [`EntryHandle`] with stale-handle detection
//!
//! The store is plain single-owner data: it holds no locks and expects every
//! call to come from the same event-loop thread.

pub mod config;
pub mod entry;
pub mod error;
pub mod store;

// Re-export main types for easy use
pub use config::{HISTORY_DEFAULT, HISTORY_MAX, HISTORY_MIN, HistoryConfig};
pub use entry::{HistoryEntry, TIMESTAMP_FORMAT, preview};
pub use error::{HistoryError, HistoryResult};
pub use store::{Change, EntryHandle, HistoryStats, HistoryStore, Iter};
