//! src/controller/dispatcher.rs
//! ============================================================================
//! # Dispatcher: Route One Action to Completion
//!
//! History mutations go through [`ClipboardMonitor`] or [`SelectionHandler`];
//! everything else only moves view state. Returns `false` when the program
//! should stop.

use tracing::{debug, info, trace};

use crate::controller::{
    actions::Action, context::AppContext, monitor::ClipboardMonitor,
    selection::SelectionHandler,
};
use crate::model::ui_state::UIState;
use crate::view::traits::HistoryView;

#[derive(Debug, Default, Clone, Copy)]
pub struct DispatcherStats {
    pub total_actions: u64,
    pub history_actions: u64,
}

#[derive(Debug, Default)]
pub struct Dispatcher {
    stats: DispatcherStats,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stats(&self) -> DispatcherStats {
        self.stats
    }

    pub fn handle(&mut self, action: Action, ctx: &mut AppContext, ui: &mut UIState) -> bool {
        trace!("Dispatching action: {:?}", action);
        self.stats.total_actions += 1;
        if action.mutates_history() {
            self.stats.history_actions += 1;
        }

        match action {
            Action::ClipboardChanged => {
                ClipboardMonitor::on_owner_change(ctx, ui);
            }
            Action::Paste(content) => {
                SelectionHandler::on_select(ctx, ui, &content);
            }
            Action::Delete(handle) => {
                SelectionHandler::on_delete(ctx, ui, handle);
            }

            Action::MoveSelectionUp => ui.move_selection_up(),
            Action::MoveSelectionDown => ui.move_selection_down(),
            Action::SelectFirst => ui.select_first(),
            Action::SelectLast => ui.select_last(),

            Action::Minimize => ui.minimize(),
            Action::Restore => ui.restore(),

            Action::RequestQuit => ui.request_quit(),
            Action::CancelQuit => ui.cancel_quit(),
            Action::ConfirmQuit => {
                info!("Exit confirmed");
                return false;
            }
            Action::Quit => {
                info!("Quit requested");
                return false;
            }

            Action::Resize(width, height) => {
                debug!("Terminal resized to {width}x{height}");
                ui.request_redraw();
            }
        }

        true
    }
}
