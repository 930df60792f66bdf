//! Control panel - function selection, options and actions.
//!
//! The panel is a flat list of rows navigated with a cursor. Checkbox rows
//! only record a selection; nothing reaches the plot until [`Command::Apply`]
//! rebuilds the function set wholesale. The grid checkbox is the exception
//! and applies immediately.

pub mod ui;

use crate::function::{catalog, PlotFunction, Rgba, SERIES_COLOR, SERIES_FUNCTION_NAME};

/// An action the application carries out against the plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Replace the active functions with the checked entries.
    Apply,
    /// Show or hide grid lines.
    SetGrid(bool),
    /// Restore the default extent.
    ResetView,
    /// Open the data file prompt.
    Load,
    /// Recompute zero crossings.
    Zeros,
    /// Recompute extrema.
    Extrema,
    /// Show or hide the histogram.
    Histogram,
}

/// What a row does when activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    /// A catalog function checkbox, by catalog index.
    Function(usize),
    /// The loaded data series checkbox.
    Data,
    /// The grid checkbox.
    Grid,
    /// A button.
    Action(Command),
}

/// One panel row.
#[derive(Debug, Clone)]
pub struct Row {
    /// Display label.
    pub label: String,
    /// Behavior.
    pub kind: RowKind,
    /// Checkbox state; unused for buttons.
    pub checked: bool,
}

impl Row {
    fn checkbox(label: impl Into<String>, kind: RowKind, checked: bool) -> Self {
        Self {
            label: label.into(),
            kind,
            checked,
        }
    }

    fn button(label: &str, command: Command) -> Self {
        Self::checkbox(label, RowKind::Action(command), false)
    }

    /// Whether the row is a checkbox.
    pub fn is_checkbox(&self) -> bool {
        !matches!(self.kind, RowKind::Action(_))
    }
}

/// Control panel state.
#[derive(Debug)]
pub struct ControlsState {
    catalog: Vec<PlotFunction>,
    rows: Vec<Row>,
    cursor: usize,
}

impl ControlsState {
    /// Create the panel with the first catalog function and the grid checked.
    pub fn new() -> Self {
        let catalog = catalog();
        let mut rows: Vec<Row> = catalog
            .iter()
            .enumerate()
            .map(|(i, f)| Row::checkbox(f.name.clone(), RowKind::Function(i), i == 0))
            .collect();
        rows.push(Row::checkbox(SERIES_FUNCTION_NAME, RowKind::Data, false));
        rows.push(Row::checkbox("Grid", RowKind::Grid, true));
        rows.extend([
            Row::button("Apply selection", Command::Apply),
            Row::button("Reset view", Command::ResetView),
            Row::button("Load data file", Command::Load),
            Row::button("Highlight zeros", Command::Zeros),
            Row::button("Find extrema", Command::Extrema),
            Row::button("Toggle histogram", Command::Histogram),
        ]);
        Self {
            catalog,
            rows,
            cursor: 0,
        }
    }

    /// All rows in display order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Index of the highlighted row.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Move the cursor up, wrapping.
    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.checked_sub(1).unwrap_or(self.rows.len() - 1);
    }

    /// Move the cursor down, wrapping.
    pub fn cursor_down(&mut self) {
        self.cursor = (self.cursor + 1) % self.rows.len();
    }

    /// Activate the highlighted row.
    ///
    /// Checkboxes flip; the grid checkbox and buttons yield a command.
    pub fn activate(&mut self) -> Option<Command> {
        let row = self.rows.get_mut(self.cursor)?;
        match row.kind {
            RowKind::Action(command) => Some(command),
            RowKind::Grid => {
                row.checked = !row.checked;
                Some(Command::SetGrid(row.checked))
            },
            RowKind::Function(_) | RowKind::Data => {
                row.checked = !row.checked;
                None
            },
        }
    }

    /// Set the data checkbox, e.g. after a successful load.
    pub fn set_data_checked(&mut self, checked: bool) {
        self.set_checked(RowKind::Data, checked);
    }

    /// Set the grid checkbox without issuing a command.
    pub fn set_grid_checked(&mut self, checked: bool) {
        self.set_checked(RowKind::Grid, checked);
    }

    fn set_checked(&mut self, kind: RowKind, checked: bool) {
        if let Some(row) = self.rows.iter_mut().find(|r| r.kind == kind) {
            row.checked = checked;
        }
    }

    /// Whether the data checkbox is set.
    pub fn data_checked(&self) -> bool {
        self.rows
            .iter()
            .any(|r| r.kind == RowKind::Data && r.checked)
    }

    /// Curve color shown next to a function row.
    pub fn row_color(&self, row: &Row) -> Option<Rgba> {
        match row.kind {
            RowKind::Function(i) => self.catalog.get(i).map(|f| f.color),
            RowKind::Data => Some(SERIES_COLOR),
            _ => None,
        }
    }

    /// The checked catalog functions, in catalog order.
    pub fn selected_functions(&self) -> Vec<PlotFunction> {
        self.rows
            .iter()
            .filter(|r| r.checked)
            .filter_map(|r| match r.kind {
                RowKind::Function(i) => self.catalog.get(i).cloned(),
                _ => None,
            })
            .collect()
    }
}

impl Default for ControlsState {
    fn default() -> Self {
        Self::new()
    }
}
