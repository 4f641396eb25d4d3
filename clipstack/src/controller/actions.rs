//! src/controller/actions.rs
//! ============================================================================
//! # Actions: Typed Application Events
//!
//! Every input the program reacts to, whether it comes from the keyboard,
//! the clipboard watcher or a signal, is turned into one `Action` and
//! dispatched to completion before the next one is taken.

use cliphist::EntryHandle;
use compact_str::CompactString;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// The clipboard owner changed; read it and record the text.
    ClipboardChanged,

    /// The user picked this entry's content to paste.
    Paste(CompactString),

    /// The user asked to drop this entry from the history.
    Delete(EntryHandle),

    MoveSelectionUp,

    MoveSelectionDown,

    SelectFirst,

    SelectLast,

    /// Collapse the view to its one-line bar.
    Minimize,

    /// Expand the view again.
    Restore,

    /// Ask "Exit program ?" before leaving.
    RequestQuit,

    ConfirmQuit,

    CancelQuit,

    Resize(u16, u16),

    /// Leave immediately (Ctrl-C, SIGTERM).
    Quit,
}

impl Action {
    /// Actions that touch the history store.
    pub fn mutates_history(&self) -> bool {
        matches!(
            self,
            Action::ClipboardChanged | Action::Paste(_) | Action::Delete(_)
        )
    }
}
