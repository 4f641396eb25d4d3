//! src/controller/monitor.rs
//! ============================================================================
//! # Clipboard Monitor
//!
//! Reacts to one ownership change: reads the clipboard and records the text
//! unless it is already retained. It only ever reads the clipboard.

use cliphist::Change;
use tracing::{debug, trace, warn};

use crate::controller::context::AppContext;
use crate::error::AppError;
use crate::view::snapshots::project;
use crate::view::traits::HistoryView;

pub struct ClipboardMonitor;

impl ClipboardMonitor {
    pub fn on_owner_change(ctx: &mut AppContext, view: &mut dyn HistoryView) -> Change {
        let text = match Self::read_text(ctx) {
            Ok(text) => text,
            Err(err) => {
                trace!("Owner change ignored: {err}");
                return Change::Unchanged;
            }
        };

        let created_at = ctx.timestamp();
        let change = match ctx.store.add_if_absent(text, created_at) {
            Ok(change) => change,
            Err(err) => {
                warn!("Clipboard text rejected by history: {err}");
                return Change::Unchanged;
            }
        };

        match &change {
            Change::Inserted { handle, evicted } => {
                debug!(
                    "Recorded clipboard text as {handle} ({}/{} entries)",
                    ctx.store.len(),
                    ctx.store.capacity()
                );
                if let Some(evicted) = evicted {
                    debug!("Evicted oldest entry ({} bytes)", evicted.content().len());
                }
            }
            _ => trace!("Clipboard text already in history"),
        }

        if change.is_mutation() {
            view.render(&project(&ctx.store));
        }
        change
    }

    fn read_text(ctx: &mut AppContext) -> Result<String, AppError> {
        ctx.clipboard
            .get_current_text()
            .filter(|text| !text.is_empty())
            .ok_or(AppError::EmptyClipboard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::context::PastePolicy;
    use crate::platform::clipboard::MemoryClipboard;
    use crate::view::traits::RecordingView;
    use cliphist::HistoryStore;

    fn context(capacity: usize, timestamps: bool) -> (AppContext, MemoryClipboard) {
        let clipboard = MemoryClipboard::new();
        let ctx = AppContext::new(
            HistoryStore::new(capacity).unwrap(),
            Box::new(clipboard.clone()),
            PastePolicy {
                capture_timestamps: timestamps,
                minimize_after_paste: true,
            },
        );
        (ctx, clipboard)
    }

    fn copy_all(
        ctx: &mut AppContext,
        view: &mut RecordingView,
        clipboard: &MemoryClipboard,
        texts: &[&str],
    ) {
        for text in texts {
            clipboard.copy(*text);
            ClipboardMonitor::on_owner_change(ctx, view);
        }
    }

    #[test]
    fn test_records_new_text_and_renders() {
        let (mut ctx, clipboard) = context(4, false);
        let mut view = RecordingView::default();

        clipboard.copy("hello");
        let change = ClipboardMonitor::on_owner_change(&mut ctx, &mut view);

        assert!(matches!(change, Change::Inserted { evicted: None, .. }));
        assert_eq!(view.renders.len(), 1);
        assert_eq!(view.last_contents(), ["hello"]);
        assert!(view.renders[0][0].timestamp.is_none());
    }

    #[test]
    fn test_empty_clipboard_never_changes_store() {
        let (mut ctx, clipboard) = context(3, false);
        let mut view = RecordingView::default();
        copy_all(&mut ctx, &mut view, &clipboard, &["a", "b", "c"]);
        let before: Vec<String> = ctx.store.contents().into_iter().map(String::from).collect();
        let renders = view.renders.len();

        clipboard.empty();
        for _ in 0..3 {
            assert_eq!(
                ClipboardMonitor::on_owner_change(&mut ctx, &mut view),
                Change::Unchanged
            );
        }
        clipboard.copy("");
        assert_eq!(
            ClipboardMonitor::on_owner_change(&mut ctx, &mut view),
            Change::Unchanged
        );

        assert_eq!(ctx.store.contents(), before);
        assert_eq!(view.renders.len(), renders);
    }

    #[test]
    fn test_unreadable_clipboard_is_silent() {
        let (mut ctx, clipboard) = context(2, false);
        assert!(ClipboardMonitor::read_text(&mut ctx).is_err_and(|err| err.is_silent()));

        clipboard.copy("");
        assert!(matches!(
            ClipboardMonitor::read_text(&mut ctx),
            Err(AppError::EmptyClipboard)
        ));
    }

    #[test]
    fn test_known_text_keeps_position_without_render() {
        let (mut ctx, clipboard) = context(3, false);
        let mut view = RecordingView::default();
        copy_all(&mut ctx, &mut view, &clipboard, &["a", "b", "c"]);

        clipboard.copy("a");
        assert_eq!(
            ClipboardMonitor::on_owner_change(&mut ctx, &mut view),
            Change::Unchanged
        );
        assert_eq!(ctx.store.contents(), ["c", "b", "a"]);
        assert_eq!(view.renders.len(), 3);
    }

    #[test]
    fn test_saturation_evicts_tail() {
        let (mut ctx, clipboard) = context(3, false);
        let mut view = RecordingView::default();
        copy_all(&mut ctx, &mut view, &clipboard, &["a", "b", "c", "d"]);

        assert_eq!(view.last_contents(), ["d", "c", "b"]);
        assert_eq!(ctx.store.stats().evicted, 1);
    }

    #[test]
    fn test_horizontal_layout_stamps_entries() {
        let (mut ctx, clipboard) = context(2, true);
        let mut view = RecordingView::default();
        copy_all(&mut ctx, &mut view, &clipboard, &["stamped"]);

        assert!(view.renders[0][0].timestamp.is_some());
    }

    #[test]
    fn test_monitor_never_writes_clipboard() {
        let (mut ctx, clipboard) = context(2, false);
        let mut view = RecordingView::default();
        clipboard.reject_writes(true);
        copy_all(&mut ctx, &mut view, &clipboard, &["read only"]);

        assert_eq!(clipboard.peek().as_deref(), Some("read only"));
        assert_eq!(ctx.store.len(), 1);
    }
}
