//! src/controller/selection.rs
//! ============================================================================
//! # Selection Handler
//!
//! Reacts to the user's choices in the view. A paste writes the content back
//! to the clipboard and promotes it; a deletion goes straight to the store
//! and never touches the clipboard.

use cliphist::{Change, EntryHandle, HistoryError};
use tracing::{debug, info, warn};

use crate::controller::context::AppContext;
use crate::view::snapshots::project;
use crate::view::traits::HistoryView;

pub struct SelectionHandler;

impl SelectionHandler {
    /// Paste `content` and move its entry to the head.
    pub fn on_select(ctx: &mut AppContext, view: &mut dyn HistoryView, content: &str) -> Change {
        let pasted = match ctx.clipboard.set_text(content) {
            Ok(()) => true,
            Err(err) => {
                warn!("Failed to write selection to clipboard: {err}");
                false
            }
        };

        let created_at = ctx.timestamp();
        let change = ctx.store.promote_or_insert(content, created_at);
        match &change {
            Change::Promoted { handle } => debug!("Promoted selection to head as {handle}"),
            _ => warn!("Selected content is not in history, nothing promoted"),
        }

        view.render(&project(&ctx.store));

        if pasted && ctx.policy.minimize_after_paste {
            info!("Minimizing after paste");
            view.minimize();
        }
        change
    }

    /// Drop one entry. A stale handle means the view was out of sync; the
    /// store is left as it is.
    pub fn on_delete(
        ctx: &mut AppContext,
        view: &mut dyn HistoryView,
        handle: EntryHandle,
    ) -> Change {
        let change = match ctx.store.remove(handle) {
            Ok(entry) => {
                debug!(
                    "Deleted {handle} ({} bytes), {} entries left",
                    entry.content().len(),
                    ctx.store.len()
                );
                Change::Removed { entry }
            }
            Err(err @ HistoryError::NotFound(_)) => {
                warn!("Delete request ignored: {err}");
                Change::Unchanged
            }
            Err(err) => {
                warn!("Delete failed: {err}");
                Change::Unchanged
            }
        };

        view.render(&project(&ctx.store));
        change
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::context::PastePolicy;
    use crate::platform::clipboard::MemoryClipboard;
    use crate::view::traits::RecordingView;
    use cliphist::HistoryStore;

    fn seeded(texts: &[&str], minimize_after_paste: bool) -> (AppContext, MemoryClipboard) {
        let clipboard = MemoryClipboard::new();
        let mut store = HistoryStore::new(3).unwrap();
        for text in texts {
            store.add_if_absent(*text, None).unwrap();
        }
        let ctx = AppContext::new(
            store,
            Box::new(clipboard.clone()),
            PastePolicy {
                capture_timestamps: false,
                minimize_after_paste,
            },
        );
        (ctx, clipboard)
    }

    #[test]
    fn test_select_pastes_and_promotes() {
        let (mut ctx, clipboard) = seeded(&["a", "b", "c"], true);
        let mut view = RecordingView::default();

        let change = SelectionHandler::on_select(&mut ctx, &mut view, "a");

        assert!(matches!(change, Change::Promoted { .. }));
        assert_eq!(clipboard.peek().as_deref(), Some("a"));
        assert_eq!(view.last_contents(), ["a", "c", "b"]);
        assert_eq!(view.minimized, 1);
    }

    #[test]
    fn test_select_respects_minimize_policy() {
        let (mut ctx, _clipboard) = seeded(&["a", "b"], false);
        let mut view = RecordingView::default();

        SelectionHandler::on_select(&mut ctx, &mut view, "a");
        assert_eq!(view.minimized, 0);
        assert_eq!(view.renders.len(), 1);
    }

    #[test]
    fn test_select_unknown_content_is_noop_on_store() {
        let (mut ctx, _clipboard) = seeded(&["a", "b", "c"], true);
        let mut view = RecordingView::default();

        let change = SelectionHandler::on_select(&mut ctx, &mut view, "z");

        assert_eq!(change, Change::Unchanged);
        assert_eq!(ctx.store.contents(), ["c", "b", "a"]);
    }

    #[test]
    fn test_failed_paste_still_promotes_but_stays_open() {
        let (mut ctx, clipboard) = seeded(&["a", "b"], true);
        clipboard.reject_writes(true);
        let mut view = RecordingView::default();

        SelectionHandler::on_select(&mut ctx, &mut view, "a");

        assert_eq!(ctx.store.contents(), ["a", "b"]);
        assert_eq!(clipboard.peek(), None);
        assert_eq!(view.minimized, 0);
    }

    #[test]
    fn test_delete_then_copy_reinserts_at_head() {
        let (mut ctx, clipboard) = seeded(&["a", "b", "c"], true);
        let mut view = RecordingView::default();
        let handle = ctx.store.find("b").unwrap();

        let change = SelectionHandler::on_delete(&mut ctx, &mut view, handle);
        assert!(matches!(change, Change::Removed { .. }));
        assert_eq!(view.last_contents(), ["c", "a"]);
        assert_eq!(clipboard.peek(), None);

        clipboard.copy("b");
        crate::controller::monitor::ClipboardMonitor::on_owner_change(&mut ctx, &mut view);
        assert_eq!(view.last_contents(), ["b", "c", "a"]);
    }

    #[test]
    fn test_stale_delete_leaves_store_intact() {
        let (mut ctx, _clipboard) = seeded(&["a", "b", "c"], true);
        let mut view = RecordingView::default();
        let handle = ctx.store.find("b").unwrap();

        SelectionHandler::on_delete(&mut ctx, &mut view, handle);
        let change = SelectionHandler::on_delete(&mut ctx, &mut view, handle);

        assert_eq!(change, Change::Unchanged);
        assert_eq!(ctx.store.contents(), ["c", "a"]);
    }
}
