//! Plot feature - the explicit state object driven by the UI.
//!
//! [`PlotState`] owns the viewport, the active functions, the loaded series,
//! the last analysis results and the histogram. The methods here are the
//! command surface the control panel uses; [`crate::interaction`] drives the
//! viewport from pointer and keyboard events.
//!
//! Zero and extremum results are snapshots: they are recomputed only when
//! requested and stay as they are when the function set or viewport changes.

pub mod ui;

use std::sync::Arc;

use crate::analysis::{self, ExtremumPoint, ZeroPoint};
use crate::data::{DataSeries, LoadedData};
use crate::error::Result;
use crate::function::{FunctionSet, PlotFunction};
use crate::histogram::HistogramState;
use crate::interaction::DragSelection;
use crate::render::{self, DrawCommand, Palette, Scene};
use crate::sampler::{self, SampleBuffer};
use crate::util::PlotConfig;
use crate::viewport::Viewport;

/// All state a render pass or interaction reads or mutates.
#[derive(Debug, Clone)]
pub struct PlotState {
    /// Visible extent and surface size.
    pub viewport: Viewport,
    /// Whether grid lines are drawn.
    pub show_grid: bool,
    /// Last zero-crossing results.
    pub zeros: Vec<ZeroPoint>,
    /// Last extremum results.
    pub extrema: Vec<ExtremumPoint>,
    /// Histogram values and visibility.
    pub histogram: HistogramState,
    /// Box selection in progress.
    pub drag: Option<DragSelection>,
    /// Tunables.
    pub config: PlotConfig,
    /// Colors handed to the renderer.
    pub palette: Palette,
    functions: FunctionSet,
    series: Option<Arc<DataSeries>>,
}

impl PlotState {
    /// Create an empty plot showing the configured default extent.
    pub fn new(config: PlotConfig) -> Result<Self> {
        Ok(Self {
            viewport: Viewport::new(config.default_extent)?,
            show_grid: true,
            zeros: Vec::new(),
            extrema: Vec::new(),
            histogram: HistogramState::new(config.bins),
            drag: None,
            palette: Palette::default(),
            functions: FunctionSet::new(),
            series: None,
            config,
        })
    }

    /// Resize the drawing surface.
    pub fn set_surface(&mut self, pixel_width: u32, pixel_height: u32) {
        self.viewport.set_surface(pixel_width, pixel_height);
    }

    /// The active functions.
    pub fn functions(&self) -> &FunctionSet {
        &self.functions
    }

    /// Remove every active function.
    pub fn clear_functions(&mut self) {
        self.functions.clear();
    }

    /// Add a function to the active set.
    pub fn add_function(&mut self, function: PlotFunction) {
        tracing::debug!("Adding function {}", function.name);
        self.functions.add(function);
    }

    /// The loaded series, if any.
    pub fn series(&self) -> Option<&Arc<DataSeries>> {
        self.series.as_ref()
    }

    /// Install a freshly loaded data file.
    ///
    /// Replaces the previous series and its curve, and hands the raw values
    /// to the histogram (hidden until toggled).
    pub fn load_data(&mut self, data: LoadedData) {
        let series = Arc::new(data.series);
        tracing::info!(
            "Loaded series with {} points, {} histogram values",
            series.len(),
            data.values.len()
        );
        self.functions.remove_series();
        self.functions
            .add(PlotFunction::from_series(Arc::clone(&series)));
        self.series = Some(series);
        self.set_histogram_data(data.values);
    }

    /// Restore the default extent.
    pub fn reset_view(&mut self) {
        self.viewport.reset();
        tracing::info!("View reset");
    }

    /// Show or hide grid lines.
    pub fn set_show_grid(&mut self, show: bool) {
        self.show_grid = show;
    }

    /// Replace the extent. Invalid extents are rejected and the view kept.
    pub fn set_viewport(&mut self, x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Result<()> {
        self.viewport.set_extent(x_min, x_max, y_min, y_max)
    }

    /// Sample every active function across the current viewport.
    pub fn sample_buffers(&self) -> Vec<SampleBuffer> {
        sampler::sample_all(self.functions.iter(), &self.viewport, self.config.samples)
    }

    /// Recompute zero crossings for the current functions and viewport.
    pub fn highlight_zeros(&mut self) -> usize {
        self.zeros = analysis::find_zeros(&self.sample_buffers());
        self.zeros.len()
    }

    /// Recompute local extrema for the current functions and viewport.
    pub fn find_extrema(&mut self) -> usize {
        self.extrema = analysis::find_extrema(&self.sample_buffers());
        self.extrema.len()
    }

    /// Show or hide the histogram overlay.
    pub fn toggle_histogram(&mut self) {
        self.histogram.toggle();
    }

    /// Replace the histogram values.
    pub fn set_histogram_data(&mut self, values: Vec<f64>) {
        self.histogram.set_values(values);
    }

    /// Produce the draw commands for the current state.
    pub fn render(&self) -> Vec<DrawCommand> {
        let samples = self.sample_buffers();
        render::render(&Scene {
            viewport: &self.viewport,
            show_grid: self.show_grid,
            functions: &self.functions,
            samples: &samples,
            zeros: &self.zeros,
            extrema: &self.extrema,
            histogram: &self.histogram,
            selection: self.drag.map(|d| d.rect()),
            config: &self.config.render,
            palette: &self.palette,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::ExtremumKind;
    use crate::data::loader;
    use crate::function::catalog;
    use crate::render::Layer;

    fn state() -> PlotState {
        let mut s = PlotState::new(PlotConfig::default()).unwrap();
        s.set_surface(400, 240);
        s
    }

    #[test]
    fn zeros_of_sine_over_default_view() {
        let mut s = state();
        s.add_function(catalog().remove(0));
        assert_eq!(s.highlight_zeros(), 7);
        assert!(s.zeros.iter().all(|z| z.x.abs() <= 10.0));
    }

    #[test]
    fn analysis_results_persist_until_requested_again() {
        let mut s = state();
        s.add_function(catalog().remove(0));
        s.highlight_zeros();
        s.find_extrema();
        let zeros = s.zeros.clone();

        s.clear_functions();
        s.set_viewport(0.0, 1.0, -1.0, 1.0).unwrap();
        assert_eq!(s.zeros, zeros);
        assert!(!s.extrema.is_empty());

        assert_eq!(s.highlight_zeros(), 0);
        assert_eq!(s.find_extrema(), 0);
    }

    #[test]
    fn extrema_of_sine() {
        let mut s = state();
        s.add_function(catalog().remove(0));
        s.find_extrema();
        let maxima = s.extrema.iter().filter(|p| p.kind == ExtremumKind::Max).count();
        let minima = s.extrema.iter().filter(|p| p.kind == ExtremumKind::Min).count();
        // peaks at -3pi/2, pi/2, 5pi/2; troughs at -5pi/2, -pi/2, 3pi/2
        assert_eq!(maxima, 3);
        assert_eq!(minima, 3);
    }

    #[test]
    fn loading_replaces_previous_series() {
        let mut s = state();
        s.add_function(catalog().remove(0));
        s.load_data(loader::parse("1\n2\n3\n").unwrap());
        s.load_data(loader::parse("0 5\n1 7\n").unwrap());

        assert_eq!(s.functions().len(), 2);
        assert_eq!(s.functions().iter().filter(|f| f.is_series()).count(), 1);
        let series = s.series().unwrap();
        assert_eq!(series.points(), &[(0.0, 5.0), (1.0, 7.0)]);
        assert_eq!(s.histogram.values, vec![5.0, 7.0]);
        assert!(!s.histogram.visible);
    }

    #[test]
    fn failed_parse_leaves_state_untouched() {
        let mut s = state();
        s.load_data(loader::parse("1\n2\n3\n").unwrap());
        let before = s.series().cloned();

        if let Ok(data) = loader::parse("abc\n") {
            s.load_data(data);
        }
        assert_eq!(s.series().cloned(), before);
        assert_eq!(s.histogram.values, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn histogram_toggle_adds_bars() {
        let mut s = state();
        s.load_data(loader::parse("1\n2\n2\n3\n5\n").unwrap());
        let hidden = s.render();
        assert!(!hidden.iter().any(|c| c.layer == Layer::Histogram));

        s.toggle_histogram();
        let shown = s.render();
        assert!(shown.iter().any(|c| c.layer == Layer::Histogram));
    }

    #[test]
    fn render_does_not_mutate_state() {
        let mut s = state();
        for f in catalog() {
            s.add_function(f);
        }
        s.highlight_zeros();
        let before = (s.viewport, s.zeros.clone(), s.extrema.clone());
        let _ = s.render();
        assert_eq!((s.viewport, s.zeros.clone(), s.extrema.clone()), before);
    }

    #[test]
    fn grid_toggle() {
        let mut s = state();
        s.set_show_grid(false);
        assert!(!s.render().iter().any(|c| c.layer == Layer::Grid));
        s.set_show_grid(true);
        assert!(s.render().iter().any(|c| c.layer == Layer::Grid));
    }
}
