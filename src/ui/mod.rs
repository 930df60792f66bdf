//! User interface rendering.

mod keymap_bar;
mod status_bar;
mod theme;

use crate::app::App;
use crate::controls::ui::draw_controls;
use crate::plot::ui::{draw_plot, plot_inner};
use crate::util::format_value;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

pub use theme::ThemeColors;

/// Width of the control panel in cells.
const CONTROLS_WIDTH: u16 = 30;

/// Draw the UI.
pub fn draw(f: &mut Frame<'_>, app: &mut App) {
    let colors = ThemeColors::from_theme(&app.theme);

    // Main layout with status bar and key map bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1), Constraint::Length(1)])
        .split(f.area());

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(CONTROLS_WIDTH), Constraint::Min(10)])
        .split(chunks[0]);

    draw_controls(
        f,
        panes[0],
        &app.controls,
        app.plot.series().is_some(),
        &colors,
    );

    // The surface must match the canvas before the scene is built
    app.set_plot_area(plot_inner(panes[1]));
    let commands = app.plot.render();
    let e = app.plot.viewport.extent();
    let title = format!(
        "x [{}, {}]  y [{}, {}]",
        format_value(e.x_min),
        format_value(e.x_max),
        format_value(e.y_min),
        format_value(e.y_max)
    );
    draw_plot(f, panes[1], &commands, &title, &colors);

    status_bar::draw_status(
        f,
        chunks[1],
        &app.status,
        app.error_message.as_deref(),
        &app.prompt,
        &colors,
    );
    keymap_bar::draw_keymap(f, chunks[2], app.prompt.is_active(), &colors);
}
