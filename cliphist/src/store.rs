//! Recency-ordered, bounded and deduplicated history store.
//!
//! Entries live in a [`Slab`] arena and are chained through explicit
//! `prev`/`next` slot indices, so head insertion, tail eviction and removal
//! of an arbitrary entry are all O(1). Lookup by content is a linear scan,
//! bounded by the capacity (at most 1024).
//!
//! Invariants, checked at every operation boundary:
//! - `len() <= capacity()`
//! - no two entries share the same content
//! - the head is the most recently inserted or promoted entry and nothing
//!   else reorders the list

use std::fmt;

use chrono::{DateTime, Local};
use compact_str::CompactString;
use slab::Slab;

use crate::config::HistoryConfig;
use crate::entry::HistoryEntry;
use crate::error::{HistoryError, HistoryResult};

/// Identity of one stored entry.
///
/// The generation makes handles of removed entries detectably stale even
/// after the arena hands their slot to a newer entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryHandle {
    slot: usize,
    generation: u64,
}

impl fmt::Display for EntryHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}.{}", self.slot, self.generation)
    }
}

/// Outcome of a store operation, used to decide whether the view must resync
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    Inserted {
        handle: EntryHandle,
        evicted: Option<HistoryEntry>,
    },
    Promoted {
        handle: EntryHandle,
    },
    Removed {
        entry: HistoryEntry,
    },
    Unchanged,
}

impl Change {
    #[inline]
    pub fn is_mutation(&self) -> bool {
        !matches!(self, Change::Unchanged)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HistoryStats {
    pub inserted: u64,
    pub evicted: u64,
    pub promoted: u64,
    pub removed: u64,
    pub duplicates_ignored: u64,
    pub promote_misses: u64,
}

#[derive(Debug)]
struct Node {
    entry: HistoryEntry,
    generation: u64,
    prev: Option<usize>,
    next: Option<usize>,
}

#[derive(Debug)]
pub struct HistoryStore {
    nodes: Slab<Node>,
    head: Option<usize>,
    tail: Option<usize>,
    capacity: usize,
    next_generation: u64,
    stats: HistoryStats,
}

impl HistoryStore {
    /// Create an empty store. `capacity` must lie within
    /// [`HISTORY_MIN`](crate::HISTORY_MIN)..=[`HISTORY_MAX`](crate::HISTORY_MAX).
    pub fn new(capacity: usize) -> HistoryResult<Self> {
        HistoryConfig::with_capacity(capacity)?;

        Ok(Self {
            nodes: Slab::with_capacity(capacity),
            head: None,
            tail: None,
            capacity,
            next_generation: 0,
            stats: HistoryStats::default(),
        })
    }

    pub fn with_config(config: &HistoryConfig) -> HistoryResult<Self> {
        Self::new(config.capacity)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.len() == self.capacity
    }

    pub fn stats(&self) -> HistoryStats {
        self.stats
    }

    /// First entry whose content equals `content` byte for byte
    pub fn find(&self, content: &str) -> Option<EntryHandle> {
        self.iter()
            .find(|(_, entry)| entry.matches(content))
            .map(|(handle, _)| handle)
    }

    pub fn contains(&self, handle: EntryHandle) -> bool {
        self.nodes
            .get(handle.slot)
            .is_some_and(|node| node.generation == handle.generation)
    }

    pub fn get(&self, handle: EntryHandle) -> Option<&HistoryEntry> {
        self.nodes
            .get(handle.slot)
            .filter(|node| node.generation == handle.generation)
            .map(|node| &node.entry)
    }

    /// Most recent entry
    pub fn head(&self) -> Option<(EntryHandle, &HistoryEntry)> {
        self.head.map(|slot| self.resolve(slot))
    }

    /// Least recent entry, the next eviction victim
    pub fn tail(&self) -> Option<(EntryHandle, &HistoryEntry)> {
        self.tail.map(|slot| self.resolve(slot))
    }

    /// Entries from head (most recent) to tail
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            store: self,
            cursor: self.head,
            remaining: self.len(),
        }
    }

    /// Contents from head to tail
    pub fn contents(&self) -> Vec<&str> {
        self.iter().map(|(_, entry)| entry.content()).collect()
    }

    /// Place a new entry at the head, evicting the tail first when full.
    ///
    /// The caller is expected to have checked [`find`](Self::find): this never
    /// deduplicates or promotes, it refuses content that is already stored.
    pub fn insert(
        &mut self,
        content: impl Into<CompactString>,
        created_at: Option<DateTime<Local>>,
    ) -> HistoryResult<EntryHandle> {
        let content = content.into();
        if content.is_empty() {
            return Err(HistoryError::EmptyContent);
        }
        if self.find(&content).is_some() {
            return Err(HistoryError::duplicate_entry(&content));
        }

        let (handle, _) = self.push_front(HistoryEntry::new(content, created_at));
        self.stats.inserted += 1;
        Ok(handle)
    }

    /// Remove one entry by identity. Other entries keep their relative order.
    ///
    /// A stale handle is reported as [`HistoryError::NotFound`] and leaves the
    /// store untouched.
    pub fn remove(&mut self, handle: EntryHandle) -> HistoryResult<HistoryEntry> {
        if !self.contains(handle) {
            return Err(HistoryError::NotFound(handle));
        }

        let entry = self.unlink(handle.slot);
        self.stats.removed += 1;
        Ok(entry)
    }

    /// Clipboard-change path: store `content` unless it is already retained.
    /// A known content keeps its current position.
    pub fn add_if_absent(
        &mut self,
        content: impl Into<CompactString>,
        created_at: Option<DateTime<Local>>,
    ) -> HistoryResult<Change> {
        let content = content.into();
        if content.is_empty() {
            return Err(HistoryError::EmptyContent);
        }

        if self.find(&content).is_some() {
            self.stats.duplicates_ignored += 1;
            return Ok(Change::Unchanged);
        }

        let (handle, evicted) = self.push_front(HistoryEntry::new(content, created_at));
        self.stats.inserted += 1;
        Ok(Change::Inserted { handle, evicted })
    }

    /// Reselect path: move a retained `content` to the head with a fresh
    /// timestamp. Unknown content is a no-op.
    pub fn promote_or_insert(
        &mut self,
        content: &str,
        created_at: Option<DateTime<Local>>,
    ) -> Change {
        let Some(found) = self.find(content) else {
            self.stats.promote_misses += 1;
            return Change::Unchanged;
        };

        let old = self.unlink(found.slot);
        let (handle, evicted) = self.push_front(HistoryEntry::new(old.into_content(), created_at));
        debug_assert!(evicted.is_none(), "promotion never evicts");

        self.stats.promoted += 1;
        Change::Promoted { handle }
    }

    fn resolve(&self, slot: usize) -> (EntryHandle, &HistoryEntry) {
        let node = &self.nodes[slot];
        (
            EntryHandle {
                slot,
                generation: node.generation,
            },
            &node.entry,
        )
    }

    fn push_front(&mut self, entry: HistoryEntry) -> (EntryHandle, Option<HistoryEntry>) {
        let mut evicted = None;
        if self.is_full()
            && let Some(tail) = self.tail
        {
            self.stats.evicted += 1;
            evicted = Some(self.unlink(tail));
        }

        let generation = self.next_generation;
        self.next_generation += 1;

        let slot = self.nodes.insert(Node {
            entry,
            generation,
            prev: None,
            next: self.head,
        });

        match self.head {
            Some(old_head) => self.nodes[old_head].prev = Some(slot),
            None => self.tail = Some(slot),
        }
        self.head = Some(slot);

        debug_assert!(self.len() <= self.capacity);
        (EntryHandle { slot, generation }, evicted)
    }

    fn unlink(&mut self, slot: usize) -> HistoryEntry {
        let node = self.nodes.remove(slot);

        match node.prev {
            Some(prev) => self.nodes[prev].next = node.next,
            None => self.head = node.next,
        }
        match node.next {
            Some(next) => self.nodes[next].prev = node.prev,
            None => self.tail = node.prev,
        }

        node.entry
    }
}

/// Head-to-tail iterator over a [`HistoryStore`]
pub struct Iter<'a> {
    store: &'a HistoryStore,
    cursor: Option<usize>,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (EntryHandle, &'a HistoryEntry);

    fn next(&mut self) -> Option<Self::Item> {
        let slot = self.cursor?;
        let store: &'a HistoryStore = self.store;
        self.cursor = store.nodes[slot].next;
        self.remaining = self.remaining.saturating_sub(1);
        Some(store.resolve(slot))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a HistoryStore {
    type Item = (EntryHandle, &'a HistoryEntry);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
