//! Application state and logic.

use std::path::{Path, PathBuf};

use ratatui::layout::Rect;

use crate::controls::{Command, ControlsState};
use crate::data::{LoadedData, PendingLoad};
use crate::error::Result;
use crate::function::PlotFunction;
use crate::interaction::{self, InputEvent, NavKey, Outcome};
use crate::plot::ui::{cell_to_pixel, surface_size};
use crate::plot::PlotState;
use crate::prompt::PromptState;
use crate::ui::ThemeColors;
use crate::util::{copy_analysis_report, PlotConfig};
use crate::viewport::Pixel;

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Gruvbox dark theme.
    GruvboxDark,
    /// Gruvbox light theme.
    GruvboxLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::GruvboxDark => Theme::GruvboxLight,
            Theme::GruvboxLight => Theme::GruvboxDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// Application state.
#[derive(Debug)]
pub struct App {
    /// Plot state.
    pub plot: PlotState,
    /// Control panel state.
    pub controls: ControlsState,
    /// Data file prompt.
    pub prompt: PromptState,
    /// Data file being read in the background.
    pub pending_load: Option<PendingLoad>,
    /// Status message.
    pub status: String,
    /// Error message, shown instead of the status until cleared.
    pub error_message: Option<String>,
    /// Current theme.
    pub theme: Theme,
    plot_area: Rect,
}

impl App {
    /// Create a new application instance with the default selection applied.
    pub fn new(config: PlotConfig) -> Result<Self> {
        let theme = Theme::GruvboxDark;
        let mut plot = PlotState::new(config)?;
        plot.palette = ThemeColors::from_theme(&theme).plot;

        let mut app = Self {
            plot,
            controls: ControlsState::new(),
            prompt: PromptState::new(),
            pending_load: None,
            status: "Ready".to_string(),
            error_message: None,
            theme,
            plot_area: Rect::default(),
        };
        app.apply_selection();
        app.status = "Ready".to_string();
        Ok(app)
    }

    /// Cell area of the plot canvas from the last draw.
    pub fn plot_area(&self) -> Rect {
        self.plot_area
    }

    /// Record the canvas area and resize the drawing surface to match.
    pub fn set_plot_area(&mut self, area: Rect) {
        if area != self.plot_area {
            let (width, height) = surface_size(area);
            tracing::debug!("Plot surface resized to {}x{}", width, height);
            self.plot.set_surface(width, height);
        }
        self.plot_area = area;
    }

    /// Map a terminal cell to a surface pixel.
    ///
    /// With `clamp` set, cells outside the canvas snap to its nearest edge
    /// so a drag that leaves the plot still ends cleanly.
    pub fn pointer_at(&self, column: u16, row: u16, clamp: bool) -> Option<Pixel> {
        let area = self.plot_area;
        if area.width == 0 || area.height == 0 {
            return None;
        }
        let (column, row) = if clamp {
            let right = area.x.saturating_add(area.width - 1);
            let bottom = area.y.saturating_add(area.height - 1);
            (column.clamp(area.x, right), row.clamp(area.y, bottom))
        } else {
            (column, row)
        };
        cell_to_pixel(area, column, row)
    }

    /// Replace the active functions with the control panel selection.
    pub fn apply_selection(&mut self) {
        self.plot.clear_functions();
        for function in self.controls.selected_functions() {
            self.plot.add_function(function);
        }
        if self.controls.data_checked() {
            if let Some(series) = self.plot.series() {
                let series = PlotFunction::from_series(series.clone());
                self.plot.add_function(series);
            }
        }
        self.error_message = None;
        self.status = format!("Plotting {} function(s)", self.plot.functions().len());
    }

    /// Activate the highlighted control panel row.
    pub fn activate_control(&mut self) {
        match self.controls.activate() {
            Some(command) => self.run_command(command),
            None => self.status = "Selection changed, apply to plot".to_string(),
        }
    }

    /// Carry out a control panel command.
    pub fn run_command(&mut self, command: Command) {
        match command {
            Command::Apply => self.apply_selection(),
            Command::SetGrid(show) => {
                self.plot.set_show_grid(show);
                self.status = if show { "Grid: ON" } else { "Grid: OFF" }.to_string();
            },
            Command::ResetView => self.handle_input(InputEvent::Key(NavKey::Reset)),
            Command::Load => self.prompt.start(),
            Command::Zeros => self.highlight_zeros(),
            Command::Extrema => self.find_extrema(),
            Command::Histogram => self.toggle_histogram(),
        }
    }

    /// Apply a pointer or navigation event to the plot.
    pub fn handle_input(&mut self, event: InputEvent) {
        match interaction::handle(&mut self.plot, event) {
            Outcome::ViewChanged => {
                self.error_message = None;
                if event == InputEvent::Key(NavKey::Reset) {
                    self.status = "View reset".to_string();
                }
            },
            Outcome::Rejected(e) => {
                tracing::warn!("View change rejected: {}", e);
                self.error_message = Some(format!("View unchanged: {}", e));
            },
            Outcome::Redraw | Outcome::Ignored => {},
        }
    }

    /// Zoom around the center of the view.
    pub fn zoom_center(&mut self, zoom_in: bool) {
        let cfg = self.plot.config.interaction;
        let factor = if zoom_in {
            cfg.wheel_zoom_in
        } else {
            cfg.wheel_zoom_out
        };
        let vp = &self.plot.viewport;
        let cx = (vp.x_min() + vp.x_max()) / 2.0;
        let cy = (vp.y_min() + vp.y_max()) / 2.0;
        match self.plot.viewport.zoom_around(cx, cy, factor) {
            Ok(()) => self.error_message = None,
            Err(e) => {
                tracing::warn!("Zoom rejected: {}", e);
                self.error_message = Some(format!("View unchanged: {}", e));
            },
        }
    }

    /// Toggle grid lines and keep the control panel in sync.
    pub fn toggle_grid(&mut self) {
        let show = !self.plot.show_grid;
        self.controls.set_grid_checked(show);
        self.run_command(Command::SetGrid(show));
    }

    /// Recompute zero crossings.
    pub fn highlight_zeros(&mut self) {
        let n = self.plot.highlight_zeros();
        self.status = format!("{} zero crossing(s)", n);
    }

    /// Recompute extrema.
    pub fn find_extrema(&mut self) {
        let n = self.plot.find_extrema();
        self.status = format!("{} extrem{}", n, if n == 1 { "um" } else { "a" });
    }

    /// Show or hide the histogram.
    pub fn toggle_histogram(&mut self) {
        if self.plot.histogram.values.is_empty() {
            self.status = "No data loaded for histogram".to_string();
            return;
        }
        self.plot.toggle_histogram();
        self.status = if self.plot.histogram.visible {
            "Histogram: ON"
        } else {
            "Histogram: OFF"
        }
        .to_string();
    }

    /// Start reading a data file in the background.
    pub fn start_load(&mut self, path: PathBuf) {
        if let Some(pending) = &self.pending_load {
            self.status = format!("Still loading {}", display_name(pending.path()));
            return;
        }
        self.status = format!("Loading {}...", display_name(&path));
        tracing::info!("Loading {}", path.display());
        self.pending_load = Some(PendingLoad::spawn(path));
    }

    /// Install a finished background load, if any. Returns whether one finished.
    pub fn poll_load(&mut self) -> bool {
        let Some(pending) = &self.pending_load else {
            return false;
        };
        let Some(result) = pending.try_take() else {
            return false;
        };
        let name = display_name(pending.path());
        self.pending_load = None;

        match result {
            Ok(data) => {
                let points = data.series.len();
                self.install_data(data);
                self.status = format!("Loaded {} points from {}", points, name);
            },
            Err(e) => {
                tracing::warn!("Error loading {}: {}", name, e);
                self.error_message = Some(format!("Failed to load {}: {}", name, e));
                self.status = "Load failed".to_string();
            },
        }
        true
    }

    /// Replace the loaded series and check its control panel entry.
    pub fn install_data(&mut self, data: LoadedData) {
        self.plot.load_data(data);
        self.controls.set_data_checked(true);
        self.error_message = None;
    }

    /// Copy the analysis report to the clipboard.
    pub fn copy_report(&mut self) {
        match copy_analysis_report(&self.plot) {
            Ok(()) => self.status = "Analysis copied!".to_string(),
            Err(e) => self.status = format!("Copy failed: {}", e),
        }
    }

    /// Cycle theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.plot.palette = ThemeColors::from_theme(&self.theme).plot;
        self.status = format!("Theme: {}", self.theme.name());
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "file".to_string())
}
