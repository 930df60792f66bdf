//! Control panel - pure rendering layer.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::{ControlsState, RowKind};
use crate::ui::ThemeColors;

/// Draw the control panel.
pub fn draw_controls(
    f: &mut Frame<'_>,
    area: Rect,
    controls: &ControlsState,
    has_series: bool,
    colors: &ThemeColors,
) {
    let block = Block::default()
        .title(" Controls ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .style(Style::default().bg(colors.bg));
    let label_width = usize::from(block.inner(area).width).saturating_sub(6);

    let items: Vec<ListItem<'_>> = controls
        .rows()
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let selected = i == controls.cursor();
            let disabled = row.kind == RowKind::Data && !has_series;

            let base = if selected {
                Style::default().fg(colors.cursor_fg).bg(colors.cursor_bg)
            } else if disabled {
                Style::default().fg(colors.border)
            } else if row.is_checkbox() {
                Style::default().fg(colors.text)
            } else {
                Style::default().fg(colors.label)
            };

            let marker = if !row.is_checkbox() {
                " > ".to_string()
            } else if row.checked {
                "[x]".to_string()
            } else {
                "[ ]".to_string()
            };
            let swatch = match controls.row_color(row) {
                Some(c) if !selected => {
                    Span::styled("■ ", Style::default().fg(Color::Rgb(c.r, c.g, c.b)))
                },
                Some(_) => Span::styled("■ ", base),
                None => Span::styled("  ", base),
            };

            ListItem::new(Line::from(vec![
                Span::styled(format!("{marker} "), base.add_modifier(Modifier::BOLD)),
                swatch,
                Span::styled(truncate_to_width(&row.label, label_width), base),
            ]))
        })
        .collect();

    f.render_widget(List::new(items).block(block), area);
}

/// Cut `text` to at most `max` display columns, marking the cut with `…`.
fn truncate_to_width(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max - 1 {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}
