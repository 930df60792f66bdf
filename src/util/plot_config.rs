//! Tunable constants for sampling, analysis, histogram and interaction.

use crate::histogram::DEFAULT_BINS;
use crate::sampler::DEFAULT_SAMPLES;

/// Visible data-space rectangle used on startup and on reset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    /// Left bound.
    pub x_min: f64,
    /// Right bound.
    pub x_max: f64,
    /// Bottom bound.
    pub y_min: f64,
    /// Top bound.
    pub y_max: f64,
}

impl Extent {
    /// Create an extent from its four bounds.
    pub const fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }
}

impl Default for Extent {
    fn default() -> Self {
        Self::new(-10.0, 10.0, -6.0, 6.0)
    }
}

/// Configuration for interactive viewport manipulation.
#[derive(Debug, Clone, Copy)]
pub struct InteractionConfig {
    /// Zoom factor for a wheel step up or the `+` key.
    pub wheel_zoom_in: f64,
    /// Zoom factor for a wheel step down or the `-` key.
    pub wheel_zoom_out: f64,
    /// Fraction of the axis range moved per arrow key press.
    pub pan_fraction: f64,
    /// A drag box must exceed this size (pixels) on both axes to zoom.
    pub box_zoom_threshold: i32,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            wheel_zoom_in: 0.9,
            wheel_zoom_out: 1.1,
            pan_fraction: 0.1,
            box_zoom_threshold: 5,
        }
    }
}

/// Configuration for draw command generation.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Desired number of grid divisions along x.
    pub x_divisions: f64,
    /// Desired number of grid divisions along y.
    pub y_divisions: f64,
    /// Radius of zero-crossing markers in pixels.
    pub marker_radius: i32,
    /// Half size of extremum triangles in pixels.
    pub triangle_half_size: i32,
    /// Tallest histogram bar as a fraction of the viewport height.
    pub histogram_height_fraction: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            x_divisions: 10.0,
            y_divisions: 8.0,
            marker_radius: 4,
            triangle_half_size: 5,
            histogram_height_fraction: 0.8,
        }
    }
}

/// Combined configuration for the plotting core.
#[derive(Debug, Clone)]
pub struct PlotConfig {
    /// Samples taken per function on every pass.
    pub samples: usize,
    /// Histogram bin count.
    pub bins: usize,
    /// Extent restored by reset.
    pub default_extent: Extent,
    /// Interaction tuning.
    pub interaction: InteractionConfig,
    /// Rendering tuning.
    pub render: RenderConfig,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            samples: DEFAULT_SAMPLES,
            bins: DEFAULT_BINS,
            default_extent: Extent::default(),
            interaction: InteractionConfig::default(),
            render: RenderConfig::default(),
        }
    }
}
