//! src/view/components/status_bar.rs
//!
//! Bottom line: entry count against capacity on the left, key hints on the
//! right. In minimized mode it is the only thing drawn.

use ratatui::{
    prelude::*,
    widgets::{Paragraph, Widget},
};

use crate::model::ui_state::{UIMode, UIState};
use crate::view::theme::Theme;

const BROWSE_HINTS: &str = "⏎ paste  d delete  m minimize  q quit";
const MINIMIZED_HINTS: &str = "⏎ restore  q quit";

pub struct StatusBar<'a> {
    theme: &'a Theme,
    capacity: usize,
}

impl<'a> StatusBar<'a> {
    pub fn new(theme: &'a Theme, capacity: usize) -> Self {
        Self { theme, capacity }
    }

    pub fn render(&self, frame: &mut Frame<'_>, ui: &UIState, area: Rect) {
        let left_text = match ui.mode {
            UIMode::Minimized => format!(
                "clipstack | {} entries | {}",
                ui.rows().len(),
                ui.selected_row()
                    .map(|row| cliphist::preview(&row.content, 32))
                    .unwrap_or_default()
            ),
            _ => format!("{}/{} entries", ui.rows().len(), self.capacity),
        };
        let right_text = match ui.mode {
            UIMode::Minimized => MINIMIZED_HINTS,
            _ => BROWSE_HINTS,
        };

        let layout = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        Paragraph::new(left_text)
            .style(self.theme.base())
            .alignment(Alignment::Left)
            .render(layout[0], frame.buffer_mut());

        Paragraph::new(right_text)
            .style(self.theme.muted())
            .alignment(Alignment::Right)
            .render(layout[1], frame.buffer_mut());
    }
}
