//! src/view/theme.rs
//! ============================================================================
//! # Colour Theme
//!
//! The background comes from configuration (`#rrggbb` or a colour name); all
//! other colours are derived from it so text stays readable on any choice.

use std::str::FromStr;

use ratatui::style::{Color, Modifier, Style};
use tracing::debug;

use crate::error::AppError;

pub const ACCENT: Color = Color::Rgb(100, 149, 237); // cornflower
pub const DANGER: Color = Color::Rgb(243, 139, 168);
pub const MUTED_DARK: Color = Color::Rgb(88, 91, 112);
pub const MUTED_LIGHT: Color = Color::Rgb(186, 194, 222);

/// Parse a configured colour string.
pub fn parse_color(text: &str) -> Result<Color, AppError> {
    Color::from_str(text.trim()).map_err(|_| {
        AppError::invalid_configuration("ui.background", format!("unknown colour `{text}'"))
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,
}

impl Theme {
    pub fn new(background: Color) -> Self {
        let dark = is_dark(background);
        let theme = Self {
            background,
            foreground: if dark { Color::White } else { Color::Black },
            muted: if dark { MUTED_LIGHT } else { MUTED_DARK },
        };
        debug!("Theme: {:?}", theme);
        theme
    }

    pub fn from_config(background: &str) -> Result<Self, AppError> {
        parse_color(background).map(Self::new)
    }

    pub fn base(&self) -> Style {
        Style::default().bg(self.background).fg(self.foreground)
    }

    pub fn muted(&self) -> Style {
        self.base().fg(self.muted)
    }

    pub fn highlight(&self) -> Style {
        Style::default()
            .bg(ACCENT)
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border(&self) -> Style {
        self.base().fg(ACCENT)
    }

    pub fn warning(&self) -> Style {
        Style::default()
            .bg(DANGER)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(Color::Rgb(0xed, 0xbb, 0x99))
    }
}

fn is_dark(color: Color) -> bool {
    match color {
        // Rec. 601 luma
        Color::Rgb(r, g, b) => {
            (299 * u32::from(r) + 587 * u32::from(g) + 114 * u32::from(b)) / 1000 < 128
        }
        Color::Black
        | Color::Red
        | Color::Green
        | Color::Blue
        | Color::Magenta
        | Color::DarkGray
        | Color::Reset => true,
        Color::Indexed(i) => i < 7,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_and_names() {
        assert_eq!(parse_color("#edbb99").unwrap(), Color::Rgb(0xed, 0xbb, 0x99));
        assert_eq!(parse_color("blue").unwrap(), Color::Blue);
        assert_eq!(parse_color(" white ").unwrap(), Color::White);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = parse_color("not-a-colour").unwrap_err();
        assert!(err.is_fatal());
        assert!(err.to_string().contains("not-a-colour"));
    }

    #[test]
    fn test_foreground_contrasts_background() {
        assert_eq!(Theme::default().foreground, Color::Black);
        assert_eq!(Theme::new(Color::Rgb(10, 10, 30)).foreground, Color::White);
        assert_eq!(Theme::new(Color::Black).foreground, Color::White);
        assert_eq!(Theme::new(Color::White).foreground, Color::Black);
    }
}
