//! src/view/components/confirm_overlay.rs
//!
//! The "Exit program ?" question, centered over the history.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::view::theme::Theme;

pub const QUESTION: &str = "Exit program ?";

pub struct ConfirmOverlay<'a> {
    theme: &'a Theme,
}

impl<'a> ConfirmOverlay<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    pub fn render(&self, frame: &mut Frame<'_>, area: Rect) {
        let popup = centered(area, 32, 5);
        frame.render_widget(Clear, popup);

        let text = vec![
            Line::from(QUESTION).bold(),
            Line::from(""),
            Line::from("[y] yes    [n] no"),
        ];
        let dialog = Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(self.theme.base())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(self.theme.warning()),
            );
        frame.render_widget(dialog, popup);
    }
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_fits_inside() {
        let area = Rect::new(0, 0, 80, 24);
        let popup = centered(area, 32, 5);
        assert_eq!(popup, Rect::new(24, 9, 32, 5));

        let tiny = Rect::new(0, 0, 10, 3);
        assert_eq!(centered(tiny, 32, 5), tiny);
    }
}
