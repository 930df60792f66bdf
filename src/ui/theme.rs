//! Color themes for the UI.

use crate::app::Theme;
use crate::function::Rgba;
use crate::render::Palette;
use ratatui::style::Color;

/// Theme color palette.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    /// Background color.
    pub bg: Color,
    /// Primary text color.
    pub text: Color,
    /// Label text color.
    pub label: Color,
    /// Border color.
    pub border: Color,
    /// Cursor foreground color.
    pub cursor_fg: Color,
    /// Cursor background color.
    pub cursor_bg: Color,
    /// Status bar foreground color.
    pub status_fg: Color,
    /// Status bar background color.
    pub status_bg: Color,
    /// Error color.
    pub error: Color,
    /// Colors handed to the plot renderer.
    pub plot: Palette,
}

impl ThemeColors {
    /// Create color palette from theme.
    pub fn from_theme(theme: &Theme) -> Self {
        match theme {
            Theme::GruvboxDark => Self {
                bg: Color::Rgb(40, 40, 40),
                text: Color::Rgb(235, 219, 178),
                label: Color::Rgb(184, 187, 38),
                border: Color::Rgb(102, 92, 84),
                cursor_fg: Color::Rgb(40, 40, 40),
                cursor_bg: Color::Rgb(251, 184, 108),
                status_fg: Color::Rgb(235, 219, 178),
                status_bg: Color::Rgb(60, 56, 54),
                error: Color::Rgb(251, 73, 52),
                plot: Palette {
                    grid: Rgba::rgb(60, 56, 54),
                    axes: Rgba::rgb(168, 153, 132),
                    histogram: Rgba::rgba(177, 98, 134, 150),
                    zeros: Rgba::rgb(251, 73, 52),
                    maxima: Rgba::rgb(131, 165, 152),
                    minima: Rgba::rgb(184, 187, 38),
                    selection: Rgba::rgb(30, 144, 255),
                },
            },
            Theme::GruvboxLight => Self {
                bg: Color::Rgb(251, 245, 234),
                text: Color::Rgb(60, 56, 54),
                label: Color::Rgb(121, 116, 14),
                border: Color::Rgb(213, 196, 161),
                cursor_fg: Color::Rgb(251, 245, 234),
                cursor_bg: Color::Rgb(175, 58, 3),
                status_fg: Color::Rgb(60, 56, 54),
                status_bg: Color::Rgb(235, 219, 178),
                error: Color::Rgb(157, 0, 6),
                plot: Palette::default(),
            },
        }
    }
}
