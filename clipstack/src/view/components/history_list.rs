//! src/view/components/history_list.rs
//! ============================================================================
//! # History List
//!
//! Vertical layout: one row per entry, newest on top.
//! Horizontal layout: side-by-side cards, each titled with its copy date.

use cliphist::preview;
use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

use crate::model::ui_state::UIState;
use crate::view::{snapshots::EntryRow, theme::Theme};

/// Narrowest card before fewer cards are shown per page
const CARD_MIN_WIDTH: u16 = 18;

pub struct HistoryList<'a> {
    theme: &'a Theme,
}

impl<'a> HistoryList<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    pub fn render_vertical(&self, frame: &mut Frame<'_>, ui: &UIState, area: Rect) {
        let block = self.frame_block(ui.rows().len());
        let inner_width = block.inner(area).width.saturating_sub(4) as usize;

        if ui.rows().is_empty() {
            self.render_empty(frame, block, area);
            return;
        }

        let items: Vec<ListItem> = ui
            .rows()
            .iter()
            .enumerate()
            .map(|(index, row)| {
                let number = Span::styled(format!("{:>3} ", index + 1), self.theme.muted());
                let text = Span::raw(preview(&row.content, inner_width.saturating_sub(4)));
                ListItem::new(Line::from(vec![number, text]))
            })
            .collect();

        let mut state = ListState::default().with_selected(Some(ui.selected()));
        let list = List::new(items)
            .block(block)
            .style(self.theme.base())
            .highlight_style(self.theme.highlight())
            .highlight_symbol("▶ ");
        frame.render_stateful_widget(list, area, &mut state);
    }

    pub fn render_horizontal(&self, frame: &mut Frame<'_>, ui: &UIState, area: Rect) {
        let block = self.frame_block(ui.rows().len());

        if ui.rows().is_empty() {
            self.render_empty(frame, block, area);
            return;
        }

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let per_page = usize::from((inner.width / CARD_MIN_WIDTH).max(1));
        let first = (ui.selected() / per_page) * per_page;
        let visible: Vec<(usize, &EntryRow)> = ui
            .rows()
            .iter()
            .enumerate()
            .skip(first)
            .take(per_page)
            .collect();

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![
                Constraint::Ratio(1, visible.len() as u32);
                visible.len()
            ])
            .split(inner);

        for ((index, row), column) in visible.into_iter().zip(columns.iter()) {
            self.render_card(frame, row, index == ui.selected(), *column);
        }
    }

    fn render_card(&self, frame: &mut Frame<'_>, row: &EntryRow, selected: bool, area: Rect) {
        let title = row.timestamp.as_deref().unwrap_or("");
        let (style, border) = if selected {
            (self.theme.highlight(), self.theme.highlight())
        } else {
            (self.theme.base(), self.theme.border())
        };

        let card = Paragraph::new(row.content.as_str())
            .wrap(Wrap { trim: false })
            .style(style)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(format!(" {title} "))
                    .border_style(border),
            );
        frame.render_widget(card, area);
    }

    fn frame_block(&self, count: usize) -> Block<'static> {
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(format!(" Clipboard history ({count}) "))
            .title_alignment(Alignment::Left)
            .style(self.theme.base())
            .border_style(self.theme.border())
    }

    fn render_empty(&self, frame: &mut Frame<'_>, block: Block<'_>, area: Rect) {
        let message = Paragraph::new("Copy some text and it will show up here.")
            .alignment(Alignment::Center)
            .style(self.theme.muted())
            .block(block);
        frame.render_widget(message, area);
    }
}
