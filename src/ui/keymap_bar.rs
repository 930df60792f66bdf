//! Keymap help bar UI component.

use crate::ui::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Draw the keymap help bar.
pub(super) fn draw_keymap(
    f: &mut Frame<'_>,
    area: Rect,
    prompt_active: bool,
    colors: &ThemeColors,
) {
    let keymap_text = if prompt_active {
        "Enter:load | Esc:cancel | Type a path"
    } else {
        "q:quit | ←→↑↓:pan | +-:zoom | drag:box zoom | Esc:reset | jk:select | Space:toggle | Enter:run | a:apply | g:grid | z:zeros | e:extrema | H:histogram | o:load | y:copy | T:theme"
    };

    let paragraph =
        Paragraph::new(keymap_text).style(Style::default().fg(colors.text).bg(colors.bg));

    f.render_widget(paragraph, area);
}
