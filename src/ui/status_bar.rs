//! Status bar UI component.

use crate::prompt::PromptState;
use crate::ui::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Draw the status bar, or the path prompt while it is open.
pub(super) fn draw_status(
    f: &mut Frame<'_>,
    area: Rect,
    status: &str,
    error: Option<&str>,
    prompt: &PromptState,
    colors: &ThemeColors,
) {
    let style = Style::default().fg(colors.status_fg).bg(colors.status_bg);
    let paragraph = if prompt.is_active() {
        Paragraph::new(format!("Load file: {}_", prompt.buffer())).style(style)
    } else if let Some(error) = error {
        Paragraph::new(error.to_string()).style(style.fg(colors.error))
    } else {
        Paragraph::new(status.to_string()).style(style)
    };

    f.render_widget(paragraph, area);
}
