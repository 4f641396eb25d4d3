//! src/view/traits.rs
//! ============================================================================
//! # History View Interface
//!
//! What the orchestration layer needs from whatever displays the history.
//! The view receives read-only projections and never touches the store;
//! selections and deletions come back as actions.

use crate::view::snapshots::EntryRow;

pub trait HistoryView {
    /// Resynchronize with the store. Called after every store mutation with
    /// all entries, most recent first.
    fn render(&mut self, rows: &[EntryRow]);

    /// Collapse or hide the view after a paste.
    fn minimize(&mut self);
}

/// View that records what it was asked to do.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingView {
    pub renders: Vec<Vec<EntryRow>>,
    pub minimized: usize,
}

#[cfg(test)]
impl RecordingView {
    pub fn last_contents(&self) -> Vec<String> {
        self.renders
            .last()
            .map(|rows| rows.iter().map(|row| row.content.to_string()).collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
impl HistoryView for RecordingView {
    fn render(&mut self, rows: &[EntryRow]) {
        self.renders.push(rows.to_vec());
    }

    fn minimize(&mut self) {
        self.minimized += 1;
    }
}
