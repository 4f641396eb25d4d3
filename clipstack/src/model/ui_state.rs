//! src/model/ui_state.rs
//! ============================================================================
//! # UIState: Terminal View State
//!
//! Holds the last projection of the history, the cursor and the current
//! mode. It is the terminal implementation of [`HistoryView`]: the
//! orchestration layer pushes rows in, key presses come back out as
//! [`Action`]s.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::trace;

use crate::config::Layout;
use crate::controller::actions::Action;
use crate::view::snapshots::EntryRow;
use crate::view::traits::HistoryView;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UIMode {
    #[default]
    Browse,

    /// "Exit program ?" is showing
    ConfirmQuit,

    /// Collapsed to a one-line bar
    Minimized,
}

#[derive(Debug)]
pub struct UIState {
    pub mode: UIMode,
    pub layout: Layout,
    rows: Vec<EntryRow>,
    selected: usize,
    redraw: bool,
}

impl UIState {
    pub fn new(layout: Layout) -> Self {
        Self {
            mode: UIMode::Browse,
            layout,
            rows: Vec::new(),
            selected: 0,
            redraw: true,
        }
    }

    pub fn rows(&self) -> &[EntryRow] {
        &self.rows
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_row(&self) -> Option<&EntryRow> {
        self.rows.get(self.selected)
    }

    #[inline]
    pub fn request_redraw(&mut self) {
        self.redraw = true;
    }

    #[inline]
    pub fn needs_redraw(&self) -> bool {
        self.redraw
    }

    #[inline]
    pub fn clear_redraw(&mut self) {
        self.redraw = false;
    }

    pub fn move_selection_up(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
            self.request_redraw();
        }
    }

    pub fn move_selection_down(&mut self) {
        if self.selected + 1 < self.rows.len() {
            self.selected += 1;
            self.request_redraw();
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
        self.request_redraw();
    }

    pub fn select_last(&mut self) {
        self.selected = self.rows.len().saturating_sub(1);
        self.request_redraw();
    }

    pub fn restore(&mut self) {
        self.set_mode(UIMode::Browse);
    }

    pub fn request_quit(&mut self) {
        self.set_mode(UIMode::ConfirmQuit);
    }

    pub fn cancel_quit(&mut self) {
        if self.mode == UIMode::ConfirmQuit {
            self.set_mode(UIMode::Browse);
        }
    }

    fn set_mode(&mut self, mode: UIMode) {
        if self.mode != mode {
            trace!("UI mode {:?} -> {:?}", self.mode, mode);
            self.mode = mode;
        }
        self.request_redraw();
    }

    /// Translate one terminal event for the current mode.
    pub fn action_for_event(&self, event: &Event) -> Option<Action> {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => self.action_for_key(key),
            Event::Resize(width, height) => Some(Action::Resize(*width, *height)),
            _ => None,
        }
    }

    pub fn action_for_key(&self, key: &KeyEvent) -> Option<Action> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => Some(Action::Quit),
                _ => None,
            };
        }

        match self.mode {
            UIMode::ConfirmQuit => match key.code {
                KeyCode::Char('y' | 'Y') | KeyCode::Enter => Some(Action::ConfirmQuit),
                KeyCode::Char('n' | 'N' | 'q') | KeyCode::Esc => Some(Action::CancelQuit),
                _ => None,
            },

            UIMode::Minimized => match key.code {
                KeyCode::Enter | KeyCode::Char(' ' | 'm' | 'r') => Some(Action::Restore),
                KeyCode::Char('q') | KeyCode::Esc => Some(Action::RequestQuit),
                _ => None,
            },

            UIMode::Browse => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => self
                    .selected_row()
                    .map(|row| Action::Paste(row.content.clone())),
                KeyCode::Char('d') | KeyCode::Delete => {
                    self.selected_row().map(|row| Action::Delete(row.handle))
                }
                KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveSelectionUp),
                KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveSelectionDown),
                KeyCode::Home | KeyCode::Char('g') => Some(Action::SelectFirst),
                KeyCode::End | KeyCode::Char('G') => Some(Action::SelectLast),
                KeyCode::Char('m') => Some(Action::Minimize),
                KeyCode::Char('q') | KeyCode::Esc => Some(Action::RequestQuit),
                _ => None,
            },
        }
    }
}

impl HistoryView for UIState {
    /// Replace the rows. The cursor follows the entry it was on when that
    /// content is still present, otherwise it stays at the same index.
    fn render(&mut self, rows: &[EntryRow]) {
        let followed = self
            .selected_row()
            .and_then(|current| rows.iter().position(|row| row.content == current.content));

        self.rows = rows.to_vec();
        self.selected = followed
            .unwrap_or(self.selected)
            .min(self.rows.len().saturating_sub(1));
        self.request_redraw();
    }

    fn minimize(&mut self) {
        self.set_mode(UIMode::Minimized);
    }
}
