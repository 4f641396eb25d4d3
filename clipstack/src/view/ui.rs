//! src/view/ui.rs
//! ============================================================
//! Frame renderer. Draws the whole screen from the current
//! `UIState`; the history store itself is never touched here.

use std::time::{Duration, Instant};

use ratatui::{prelude::*, widgets::Block};
use tracing::{instrument, warn};

use crate::config::Layout as HistoryLayout;
use crate::model::ui_state::{UIMode, UIState};
use crate::view::{
    components::{
        confirm_overlay::ConfirmOverlay, history_list::HistoryList, status_bar::StatusBar,
    },
    theme::Theme,
};

#[derive(Debug, Default, Clone, Copy)]
pub struct RenderStats {
    pub frames: u64,
    pub slow: u64,
    pub total: Duration,
}

pub struct UIRenderer {
    theme: Theme,
    capacity: usize,
    stats: RenderStats,
}

impl UIRenderer {
    pub fn new(theme: Theme, capacity: usize) -> Self {
        Self {
            theme,
            capacity,
            stats: RenderStats::default(),
        }
    }

    pub fn stats(&self) -> RenderStats {
        self.stats
    }

    #[instrument(level = "trace", skip_all)]
    pub fn render(&mut self, f: &mut Frame<'_>, ui: &UIState) {
        let start = Instant::now();
        let screen = f.area();

        f.render_widget(Block::default().style(self.theme.base()), screen);

        if ui.mode == UIMode::Minimized {
            let bar = Rect {
                height: screen.height.min(1),
                ..screen
            };
            StatusBar::new(&self.theme, self.capacity).render(f, ui, bar);
        } else {
            let [main, status] = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(3), Constraint::Length(1)])
                .areas(screen);

            let list = HistoryList::new(&self.theme);
            match ui.layout {
                HistoryLayout::Vertical => list.render_vertical(f, ui, main),
                HistoryLayout::Horizontal => list.render_horizontal(f, ui, main),
            }
            StatusBar::new(&self.theme, self.capacity).render(f, ui, status);

            if ui.mode == UIMode::ConfirmQuit {
                ConfirmOverlay::new(&self.theme).render(f, screen);
            }
        }

        let elapsed = start.elapsed();
        self.stats.frames += 1;
        self.stats.total += elapsed;
        if elapsed.as_millis() > 16 {
            self.stats.slow += 1;
            warn!("Slow render: {}ms (target: <16ms)", elapsed.as_millis());
        }
    }
}
