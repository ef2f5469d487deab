//! Colour palette for the demo
//!
//! A fixed palette; only the panel background comes from user settings.

use std::str::FromStr;

use ratatui::style::Color;
use tracing::warn;

/// Colours used by the harness
#[derive(Debug, Clone)]
pub struct Theme {
    /// Scrim laid over the screen while a popover is open
    pub scrim_color: Color,
    /// Panel background, also the arrow tint
    pub panel_bg_color: Color,
    pub panel_text_color: Color,
    pub selected_color: Color,
    pub anchor_bg_color: Color,
    pub anchor_text_color: Color,
    pub text_color: Color,
    pub dim_color: Color,
    pub status_bar_bg_color: Color,
}

impl Theme {
    /// Build the palette around a panel background token
    pub fn with_background(background: &str) -> Self {
        let panel_bg_color = Color::from_str(background).unwrap_or_else(|_| {
            warn!(background = %background, "Unknown background colour, using white");
            Color::White
        });
        Self {
            panel_bg_color,
            ..Self::default()
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            scrim_color: Color::Rgb(136, 136, 136),
            panel_bg_color: Color::White,
            panel_text_color: Color::Black,
            selected_color: Color::Rgb(102, 102, 102),
            anchor_bg_color: Color::Gray,
            anchor_text_color: Color::Black,
            text_color: Color::Reset,
            dim_color: Color::DarkGray,
            status_bar_bg_color: Color::Rgb(40, 40, 40),
        }
    }
}
