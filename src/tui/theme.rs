//! Centralized theme module for TUI color constants and styles

use ratatui::prelude::*;
use serde::{Deserialize, Serialize};

/// Theme selection from config. `Auto` asks the terminal for its background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Auto,
    Dark,
    Light,
}

/// Complete color palette for the TUI
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Points colors (leader / middle / trailing)
    pub points_high: Color,
    pub points_mid: Color,
    pub points_low: Color,

    // Scorecard
    pub current_hole_bg: Color,
    pub unplayed: Color,
    pub row_alt_bg: Color,
    pub index_color: Color,

    // Styles
    pub header_style: Style,
    pub input_focused: Style,
    pub input_idle: Style,

    // General colors
    pub muted: Color,
    pub title_color: Color,

    // Status bar colors
    pub status_bar_bg: Color,
    pub status_key_color: Color,
    pub flash_success: Color,
    pub flash_error: Color,

    // Popup overlay colors
    pub popup_border: Color,
    pub popup_title: Style,
    pub popup_bg: Color,
}

impl ThemeColors {
    pub fn dark() -> Self {
        Self {
            points_high: Color::Green,
            points_mid: Color::Yellow,
            points_low: Color::Red,
            current_hole_bg: Color::Indexed(238),
            unplayed: Color::DarkGray,
            row_alt_bg: Color::Indexed(235),
            index_color: Color::DarkGray,
            header_style: Style::new().bold(),
            input_focused: Style::new().fg(Color::Cyan).bold(),
            input_idle: Style::new().fg(Color::Gray),
            muted: Color::Gray,
            title_color: Color::Cyan,
            status_bar_bg: Color::Indexed(236),
            status_key_color: Color::Cyan,
            flash_success: Color::Green,
            flash_error: Color::Red,
            popup_border: Color::Cyan,
            popup_title: Style::new().fg(Color::Cyan).bold(),
            popup_bg: Color::Indexed(234),
        }
    }

    pub fn light() -> Self {
        Self {
            points_high: Color::Rgb(0, 120, 0),
            points_mid: Color::Rgb(160, 110, 0),
            points_low: Color::Rgb(180, 0, 0),
            current_hole_bg: Color::Indexed(252),
            unplayed: Color::Indexed(246),
            row_alt_bg: Color::Indexed(254),
            index_color: Color::Indexed(244),
            header_style: Style::new().bold(),
            input_focused: Style::new().fg(Color::Blue).bold(),
            input_idle: Style::new().fg(Color::Indexed(240)),
            muted: Color::Indexed(242),
            title_color: Color::Blue,
            status_bar_bg: Color::Indexed(253),
            status_key_color: Color::Blue,
            flash_success: Color::Rgb(0, 120, 0),
            flash_error: Color::Rgb(180, 0, 0),
            popup_border: Color::Blue,
            popup_title: Style::new().fg(Color::Blue).bold(),
            popup_bg: Color::Indexed(255),
        }
    }

    /// Color for a point total relative to the current leader's total
    pub fn points_color(&self, points: u32, max_points: u32) -> Color {
        if max_points == 0 {
            return self.muted;
        }
        let percentage = points * 100 / max_points;
        if percentage >= 100 {
            self.points_high
        } else if percentage >= 60 {
            self.points_mid
        } else {
            self.points_low
        }
    }
}

/// Pick the palette for a theme setting. `Auto` falls back to dark when the
/// terminal does not report its background.
pub fn resolve_theme(theme: Theme) -> ThemeColors {
    match theme {
        Theme::Dark => ThemeColors::dark(),
        Theme::Light => ThemeColors::light(),
        Theme::Auto => match terminal_light::luma() {
            Ok(luma) if luma > 0.6 => ThemeColors::light(),
            _ => ThemeColors::dark(),
        },
    }
}
