//! Deterministic draw command generation.
//!
//! [`render`] turns a [`Scene`] into an ordered list of [`DrawCommand`]s in
//! surface pixel coordinates, back to front: grid, axes, histogram, curves,
//! zero markers, maxima, minima, selection box. It reads its inputs only.

pub mod grid;

use crate::analysis::{ExtremumKind, ExtremumPoint, ZeroPoint};
use crate::function::{FunctionSet, Rgba};
use crate::histogram::HistogramState;
use crate::sampler::SampleBuffer;
use crate::util::RenderConfig;
use crate::viewport::{Pixel, PixelRect, Viewport};

pub use grid::{grid_positions, nice_step};

/// Line styling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    /// Line color.
    pub color: Rgba,
    /// Nominal width in pixels.
    pub width: f32,
    /// Dash pattern as (on, off) pixel lengths; solid when `None`.
    pub dash: Option<(i32, i32)>,
}

impl Stroke {
    /// A solid stroke.
    pub const fn solid(color: Rgba, width: f32) -> Self {
        Self {
            color,
            width,
            dash: None,
        }
    }
}

/// Which pass produced a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Layer {
    /// Background grid.
    Grid,
    /// Coordinate axes.
    Axes,
    /// Histogram bars.
    Histogram,
    /// Function curves.
    Curves,
    /// Zero-crossing markers.
    Zeros,
    /// Local maximum markers.
    Maxima,
    /// Local minimum markers.
    Minima,
    /// Rubber-band selection.
    Selection,
}

/// A primitive to draw.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// A straight line.
    Line {
        /// Start point.
        from: Pixel,
        /// End point.
        to: Pixel,
        /// Styling.
        stroke: Stroke,
    },
    /// Connected line segments.
    Polyline {
        /// Vertices in order, at least two.
        points: Vec<Pixel>,
        /// Styling.
        stroke: Stroke,
    },
    /// A filled rectangle.
    FillRect {
        /// Area.
        rect: PixelRect,
        /// Fill color.
        color: Rgba,
    },
    /// A rectangle outline.
    StrokeRect {
        /// Outline.
        rect: PixelRect,
        /// Styling.
        stroke: Stroke,
    },
    /// A filled circle.
    FillCircle {
        /// Center.
        center: Pixel,
        /// Radius in pixels.
        radius: i32,
        /// Fill color.
        color: Rgba,
    },
    /// A filled triangle.
    FillTriangle {
        /// Corners.
        vertices: [Pixel; 3],
        /// Fill color.
        color: Rgba,
    },
}

/// A shape tagged with the pass that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCommand {
    /// Producing pass.
    pub layer: Layer,
    /// What to draw.
    pub shape: Shape,
}

/// Colors used by the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    /// Grid lines.
    pub grid: Rgba,
    /// Axis lines.
    pub axes: Rgba,
    /// Histogram bars.
    pub histogram: Rgba,
    /// Zero markers.
    pub zeros: Rgba,
    /// Maximum markers.
    pub maxima: Rgba,
    /// Minimum markers.
    pub minima: Rgba,
    /// Selection box outline; the fill uses the same color, translucent.
    pub selection: Rgba,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            grid: Rgba::rgb(230, 230, 230),
            axes: Rgba::rgb(80, 80, 80),
            histogram: Rgba::rgba(128, 0, 128, 150),
            zeros: Rgba::rgb(255, 0, 0),
            maxima: Rgba::rgb(0, 0, 255),
            minima: Rgba::rgb(0, 178, 0),
            selection: Rgba::rgb(30, 144, 255),
        }
    }
}

/// Everything a render pass reads.
#[derive(Debug, Clone, Copy)]
pub struct Scene<'a> {
    /// Extent and surface.
    pub viewport: &'a Viewport,
    /// Whether grid lines are drawn.
    pub show_grid: bool,
    /// Active functions, parallel to `samples`.
    pub functions: &'a FunctionSet,
    /// One sample buffer per function.
    pub samples: &'a [SampleBuffer],
    /// Highlighted zero crossings.
    pub zeros: &'a [ZeroPoint],
    /// Highlighted extrema.
    pub extrema: &'a [ExtremumPoint],
    /// Histogram values and visibility.
    pub histogram: &'a HistogramState,
    /// Rubber-band rectangle of a drag in progress.
    pub selection: Option<PixelRect>,
    /// Sizes and proportions.
    pub config: &'a RenderConfig,
    /// Colors.
    pub palette: &'a Palette,
}

/// Produce the draw commands for a scene.
pub fn render(scene: &Scene<'_>) -> Vec<DrawCommand> {
    let vp = scene.viewport;
    if !vp.has_surface() {
        return Vec::new();
    }

    let mut out = Vec::new();
    if scene.show_grid {
        push_grid(&mut out, scene);
    }
    push_axes(&mut out, scene);
    if scene.histogram.visible {
        push_histogram(&mut out, scene);
    }
    push_curves(&mut out, scene);
    push_markers(&mut out, scene);
    if let Some(rect) = scene.selection {
        push_selection(&mut out, rect, scene.palette.selection);
    }
    out
}

fn push(out: &mut Vec<DrawCommand>, layer: Layer, shape: Shape) {
    out.push(DrawCommand { layer, shape });
}

fn push_grid(out: &mut Vec<DrawCommand>, scene: &Scene<'_>) {
    let vp = scene.viewport;
    let stroke = Stroke::solid(scene.palette.grid, 1.0);
    let (w, h) = (vp.pixel_width() as i32, vp.pixel_height() as i32);

    for x in grid_positions(vp.x_min(), vp.x_max(), scene.config.x_divisions) {
        let sx = vp.data_to_screen_x(x);
        let shape = Shape::Line {
            from: Pixel::new(sx, 0),
            to: Pixel::new(sx, h),
            stroke,
        };
        push(out, Layer::Grid, shape);
    }
    for y in grid_positions(vp.y_min(), vp.y_max(), scene.config.y_divisions) {
        let sy = vp.data_to_screen_y(y);
        let shape = Shape::Line {
            from: Pixel::new(0, sy),
            to: Pixel::new(w, sy),
            stroke,
        };
        push(out, Layer::Grid, shape);
    }
}

fn push_axes(out: &mut Vec<DrawCommand>, scene: &Scene<'_>) {
    let vp = scene.viewport;
    let stroke = Stroke::solid(scene.palette.axes, 1.5);
    let (w, h) = (vp.pixel_width() as i32, vp.pixel_height() as i32);
    let origin = vp.data_to_screen(0.0, 0.0);

    push(
        out,
        Layer::Axes,
        Shape::Line {
            from: Pixel::new(0, origin.y),
            to: Pixel::new(w, origin.y),
            stroke,
        },
    );
    push(
        out,
        Layer::Axes,
        Shape::Line {
            from: Pixel::new(origin.x, 0),
            to: Pixel::new(origin.x, h),
            stroke,
        },
    );
}

fn push_histogram(out: &mut Vec<DrawCommand>, scene: &Scene<'_>) {
    let Some(bins) = scene.histogram.bins() else {
        return;
    };
    let bars = bins.bars(scene.viewport, scene.config.histogram_height_fraction);
    for bar in bars.into_iter().filter(|b| b.rect.height > 0) {
        push(
            out,
            Layer::Histogram,
            Shape::FillRect {
                rect: bar.rect,
                color: scene.palette.histogram,
            },
        );
    }
}

fn push_curves(out: &mut Vec<DrawCommand>, scene: &Scene<'_>) {
    let vp = scene.viewport;
    for (function, buffer) in scene.functions.iter().zip(scene.samples) {
        let stroke = Stroke::solid(function.color, 2.0);
        let mut run: Vec<Pixel> = Vec::new();

        for (x, y) in buffer.points() {
            if x.is_finite() && y.is_finite() {
                run.push(vp.data_to_screen(x, y));
            } else {
                flush_run(out, &mut run, stroke);
            }
        }
        flush_run(out, &mut run, stroke);
    }
}

fn flush_run(out: &mut Vec<DrawCommand>, run: &mut Vec<Pixel>, stroke: Stroke) {
    let points = std::mem::take(run);
    if points.len() >= 2 {
        push(out, Layer::Curves, Shape::Polyline { points, stroke });
    }
}

fn push_markers(out: &mut Vec<DrawCommand>, scene: &Scene<'_>) {
    let vp = scene.viewport;
    let r = scene.config.marker_radius;
    let t = scene.config.triangle_half_size;

    for zero in scene.zeros {
        push(
            out,
            Layer::Zeros,
            Shape::FillCircle {
                center: vp.data_to_screen(zero.x, 0.0),
                radius: r,
                color: scene.palette.zeros,
            },
        );
    }

    for kind in [ExtremumKind::Max, ExtremumKind::Min] {
        for p in scene.extrema.iter().filter(|p| p.kind == kind) {
            let c = vp.data_to_screen(p.x, p.y);
            let (layer, vertices, color) = match kind {
                ExtremumKind::Max => (
                    Layer::Maxima,
                    [
                        Pixel::new(c.x.saturating_sub(t), c.y.saturating_add(t)),
                        Pixel::new(c.x.saturating_add(t), c.y.saturating_add(t)),
                        Pixel::new(c.x, c.y.saturating_sub(t)),
                    ],
                    scene.palette.maxima,
                ),
                ExtremumKind::Min => (
                    Layer::Minima,
                    [
                        Pixel::new(c.x.saturating_sub(t), c.y.saturating_sub(t)),
                        Pixel::new(c.x.saturating_add(t), c.y.saturating_sub(t)),
                        Pixel::new(c.x, c.y.saturating_add(t)),
                    ],
                    scene.palette.minima,
                ),
            };
            push(out, layer, Shape::FillTriangle { vertices, color });
        }
    }
}

fn push_selection(out: &mut Vec<DrawCommand>, rect: PixelRect, color: Rgba) {
    push(
        out,
        Layer::Selection,
        Shape::FillRect {
            rect,
            color: color.with_alpha(50),
        },
    );
    push(
        out,
        Layer::Selection,
        Shape::StrokeRect {
            rect,
            stroke: Stroke {
                color,
                width: 1.5,
                dash: Some((6, 6)),
            },
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{find_extrema, find_zeros};
    use crate::function::{catalog, PlotFunction};
    use crate::sampler::sample_all;

    struct Fixture {
        viewport: Viewport,
        functions: FunctionSet,
        histogram: HistogramState,
        config: RenderConfig,
        palette: Palette,
    }

    impl Fixture {
        fn new() -> Self {
            let mut viewport = Viewport::default();
            viewport.set_surface(400, 240);
            let mut functions = FunctionSet::new();
            for f in catalog() {
                functions.add(f);
            }
            let mut histogram = HistogramState::default();
            histogram.set_values((0..50).map(f64::from).collect());
            histogram.toggle();
            Self {
                viewport,
                functions,
                histogram,
                config: RenderConfig::default(),
                palette: Palette::default(),
            }
        }

        fn render(&self, samples: &[SampleBuffer], selection: Option<PixelRect>) -> Vec<DrawCommand> {
            let zeros = find_zeros(samples);
            let extrema = find_extrema(samples);
            render(&Scene {
                viewport: &self.viewport,
                show_grid: true,
                functions: &self.functions,
                samples,
                zeros: &zeros,
                extrema: &extrema,
                histogram: &self.histogram,
                selection,
                config: &self.config,
                palette: &self.palette,
            })
        }
    }

    #[test]
    fn layers_are_drawn_back_to_front() {
        let fx = Fixture::new();
        let samples = sample_all(fx.functions.iter(), &fx.viewport, 400);
        let selection = Some(PixelRect::from_corners(Pixel::new(5, 5), Pixel::new(50, 60)));
        let commands = fx.render(&samples, selection);

        let layers: Vec<Layer> = commands.iter().map(|c| c.layer).collect();
        assert!(layers.windows(2).all(|w| w[0] <= w[1]));
        for layer in [
            Layer::Grid,
            Layer::Axes,
            Layer::Histogram,
            Layer::Curves,
            Layer::Zeros,
            Layer::Maxima,
            Layer::Minima,
            Layer::Selection,
        ] {
            assert!(layers.contains(&layer), "missing {layer:?}");
        }
    }

    #[test]
    fn rendering_is_deterministic() {
        let fx = Fixture::new();
        let samples = sample_all(fx.functions.iter(), &fx.viewport, 300);
        assert_eq!(fx.render(&samples, None), fx.render(&samples, None));
    }

    #[test]
    fn axes_cross_at_origin() {
        let fx = Fixture::new();
        let commands = fx.render(&[], None);
        let axes: Vec<&Shape> = commands
            .iter()
            .filter(|c| c.layer == Layer::Axes)
            .map(|c| &c.shape)
            .collect();
        assert_eq!(axes.len(), 2);
        assert!(matches!(axes[0], Shape::Line { from, .. } if from.y == 120));
        assert!(matches!(axes[1], Shape::Line { from, .. } if from.x == 200));
    }

    #[test]
    fn nan_samples_split_curves() {
        let mut fx = Fixture::new();
        fx.functions = FunctionSet::new();
        fx.functions.add(PlotFunction::closed("f", Rgba::rgb(1, 2, 3), |x| x));
        let samples = [SampleBuffer::from_vecs(
            vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
            vec![0.0, 1.0, f64::NAN, 3.0, f64::NAN, 5.0, 6.0],
        )];
        let polylines: Vec<usize> = fx
            .render(&samples, None)
            .iter()
            .filter_map(|c| match &c.shape {
                Shape::Polyline { points, .. } => Some(points.len()),
                _ => None,
            })
            .collect();
        assert_eq!(polylines, vec![2, 2]);
    }

    #[test]
    fn hidden_grid_and_histogram_are_skipped() {
        let mut fx = Fixture::new();
        fx.histogram.toggle();
        let commands = render(&Scene {
            viewport: &fx.viewport,
            show_grid: false,
            functions: &fx.functions,
            samples: &[],
            zeros: &[],
            extrema: &[],
            histogram: &fx.histogram,
            selection: None,
            config: &fx.config,
            palette: &fx.palette,
        });
        assert!(commands.iter().all(|c| c.layer == Layer::Axes));
    }

    #[test]
    fn empty_surface_draws_nothing() {
        let mut fx = Fixture::new();
        fx.viewport.set_surface(0, 0);
        assert!(fx.render(&[], None).is_empty());
    }

    #[test]
    fn markers_use_configured_geometry() {
        let fx = Fixture::new();
        let samples = [SampleBuffer::from_vecs(vec![-1.0, 0.0, 1.0], vec![-1.0, 1.0, -1.0])];
        let commands = fx.render(&samples, None);

        let circle = commands.iter().find_map(|c| match c.shape {
            Shape::FillCircle { radius, .. } => Some(radius),
            _ => None,
        });
        assert_eq!(circle, Some(4));

        let peak = commands
            .iter()
            .find(|c| c.layer == Layer::Maxima)
            .map(|c| c.shape.clone());
        // (0, 1) maps to (200, 100); apex points up
        assert_eq!(
            peak,
            Some(Shape::FillTriangle {
                vertices: [Pixel::new(195, 105), Pixel::new(205, 105), Pixel::new(200, 95)],
                color: Palette::default().maxima,
            })
        );
    }
}
