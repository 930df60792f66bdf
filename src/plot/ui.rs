//! Plot surface - pure rendering layer.
//!
//! Draw commands are rasterized onto a Braille canvas, which gives each
//! terminal cell a 2x4 grid of dots. Surface pixel (0, 0) is the top-left
//! dot; the canvas counts y upwards, so rows are flipped on the way out.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols::Marker,
    widgets::{
        canvas::{Canvas, Line as CanvasLine, Points},
        Block, Borders,
    },
    Frame,
};

use crate::function::Rgba;
use crate::render::{DrawCommand, Shape, Stroke};
use crate::ui::ThemeColors;
use crate::viewport::{Pixel, PixelRect};

/// Horizontal dots per cell.
const DOTS_X: u32 = 2;
/// Vertical dots per cell.
const DOTS_Y: u32 = 4;

/// Pixel size of the drawing surface for a cell area.
pub fn surface_size(area: Rect) -> (u32, u32) {
    (
        u32::from(area.width) * DOTS_X,
        u32::from(area.height) * DOTS_Y,
    )
}

/// Map a terminal cell to the surface pixel at its top-left dot.
///
/// Returns `None` for cells outside `area`.
pub fn cell_to_pixel(area: Rect, column: u16, row: u16) -> Option<Pixel> {
    let inside = column >= area.x
        && row >= area.y
        && column < area.x.saturating_add(area.width)
        && row < area.y.saturating_add(area.height);
    if !inside {
        return None;
    }
    Some(Pixel::new(
        i32::from(column - area.x) * DOTS_X as i32,
        i32::from(row - area.y) * DOTS_Y as i32,
    ))
}

/// Inner area of the bordered plot block.
pub fn plot_inner(area: Rect) -> Rect {
    Block::default().borders(Borders::ALL).inner(area)
}

/// Draw the plot block and rasterize `commands` inside it.
pub fn draw_plot(
    f: &mut Frame<'_>,
    area: Rect,
    commands: &[DrawCommand],
    title: &str,
    colors: &ThemeColors,
) {
    let block = Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .style(Style::default().bg(colors.bg));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let (width, height) = surface_size(inner);
    if width == 0 || height == 0 {
        return;
    }
    let surface = Surface {
        width: width as i32,
        height: height as i32,
    };
    let strokes = rasterize(commands, surface);

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .background_color(colors.bg)
        .x_bounds([0.0, f64::from(width - 1)])
        .y_bounds([0.0, f64::from(height - 1)])
        .paint(move |ctx| {
            for stroke in &strokes {
                match stroke {
                    Raster::Segment { from, to, color } => ctx.draw(&CanvasLine {
                        x1: from.0,
                        y1: from.1,
                        x2: to.0,
                        y2: to.1,
                        color: *color,
                    }),
                    Raster::Dots { coords, color } => ctx.draw(&Points {
                        coords,
                        color: *color,
                    }),
                }
            }
        });
    f.render_widget(canvas, inner);
}

/// Surface bounds in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Surface {
    width: i32,
    height: i32,
}

impl Surface {
    /// Canvas coordinates of a surface pixel.
    fn to_canvas(self, x: f64, y: f64) -> (f64, f64) {
        (x, f64::from(self.height - 1) - y)
    }
}

/// A canvas-space primitive ready to paint.
#[derive(Debug, Clone, PartialEq)]
enum Raster {
    Segment {
        from: (f64, f64),
        to: (f64, f64),
        color: Color,
    },
    Dots {
        coords: Vec<(f64, f64)>,
        color: Color,
    },
}

/// One horizontal run of filled pixels, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Span {
    y: i32,
    x0: i32,
    x1: i32,
}

fn to_color(c: Rgba) -> Color {
    Color::Rgb(c.r, c.g, c.b)
}

fn rasterize(commands: &[DrawCommand], surface: Surface) -> Vec<Raster> {
    let mut out = Vec::new();
    for command in commands {
        match &command.shape {
            Shape::Line { from, to, stroke } => push_line(&mut out, *from, *to, *stroke, surface),
            Shape::Polyline { points, stroke } => {
                for pair in points.windows(2) {
                    push_line(&mut out, pair[0], pair[1], *stroke, surface);
                }
            },
            Shape::FillRect { rect, color } => {
                push_fill(&mut out, rect_spans(*rect), *color, surface);
            },
            Shape::StrokeRect { rect, stroke } => {
                for (from, to) in rect_edges(*rect) {
                    push_line(&mut out, from, to, *stroke, surface);
                }
            },
            Shape::FillCircle {
                center,
                radius,
                color,
            } => push_fill(&mut out, circle_spans(*center, *radius), *color, surface),
            Shape::FillTriangle { vertices, color } => {
                push_fill(&mut out, triangle_spans(*vertices), *color, surface);
            },
        }
    }
    out
}

fn push_line(out: &mut Vec<Raster>, from: Pixel, to: Pixel, stroke: Stroke, surface: Surface) {
    let color = to_color(stroke.color);
    let pieces = match stroke.dash {
        Some((on, off)) => dash_segments(from, to, on, off),
        None => vec![(
            (f64::from(from.x), f64::from(from.y)),
            (f64::from(to.x), f64::from(to.y)),
        )],
    };
    for (a, b) in pieces {
        if let Some((a, b)) = clip_line(a, b, surface) {
            out.push(Raster::Segment {
                from: surface.to_canvas(a.0, a.1),
                to: surface.to_canvas(b.0, b.1),
                color,
            });
        }
    }
}

fn push_fill(out: &mut Vec<Raster>, spans: Vec<Span>, color: Rgba, surface: Surface) {
    let stipple = color.is_translucent();
    let coords: Vec<(f64, f64)> = spans
        .into_iter()
        .filter_map(|s| clamp_span(s, surface))
        .flat_map(|s| (s.x0..=s.x1).map(move |x| (x, s.y)))
        .filter(|(x, y)| !stipple || (x + y).rem_euclid(2) == 0)
        .map(|(x, y)| surface.to_canvas(f64::from(x), f64::from(y)))
        .collect();
    if !coords.is_empty() {
        out.push(Raster::Dots {
            coords,
            color: to_color(color),
        });
    }
}

fn rect_edges(rect: PixelRect) -> [(Pixel, Pixel); 4] {
    let left = rect.x;
    let top = rect.y;
    let right = rect.x.saturating_add(rect.width);
    let bottom = rect.y.saturating_add(rect.height);
    [
        (Pixel::new(left, top), Pixel::new(right, top)),
        (Pixel::new(right, top), Pixel::new(right, bottom)),
        (Pixel::new(right, bottom), Pixel::new(left, bottom)),
        (Pixel::new(left, bottom), Pixel::new(left, top)),
    ]
}

fn rect_spans(rect: PixelRect) -> Vec<Span> {
    if rect.width <= 0 || rect.height <= 0 {
        return Vec::new();
    }
    let x1 = rect.x.saturating_add(rect.width - 1);
    let bottom = rect.y.saturating_add(rect.height - 1);
    (rect.y..=bottom)
        .map(|y| Span { y, x0: rect.x, x1 })
        .collect()
}

fn circle_spans(center: Pixel, radius: i32) -> Vec<Span> {
    if radius < 0 {
        return Vec::new();
    }
    let r = f64::from(radius);
    (-radius..=radius)
        .map(|dy| {
            let half = (r * r - f64::from(dy) * f64::from(dy)).sqrt().floor() as i32;
            Span {
                y: center.y.saturating_add(dy),
                x0: center.x.saturating_sub(half),
                x1: center.x.saturating_add(half),
            }
        })
        .collect()
}

/// Scanline fill of a triangle, sampling each row at its pixel center.
fn triangle_spans(vertices: [Pixel; 3]) -> Vec<Span> {
    let mut v = vertices;
    v.sort_by_key(|p| p.y);
    let [a, b, c] = v;
    if a.y == c.y {
        let x0 = a.x.min(b.x).min(c.x);
        let x1 = a.x.max(b.x).max(c.x);
        return vec![Span { y: a.y, x0, x1 }];
    }

    let edge_x = |p: Pixel, q: Pixel, y: f64| -> f64 {
        if p.y == q.y {
            f64::from(p.x)
        } else {
            let t = (y - f64::from(p.y)) / f64::from(q.y - p.y);
            f64::from(p.x) + t * f64::from(q.x - p.x)
        }
    };

    (a.y..=c.y)
        .map(|y| {
            let fy = f64::from(y);
            let long = edge_x(a, c, fy);
            let short = if y < b.y { edge_x(a, b, fy) } else { edge_x(b, c, fy) };
            let (lo, hi) = if long <= short { (long, short) } else { (short, long) };
            Span {
                y,
                x0: lo.round() as i32,
                x1: hi.round() as i32,
            }
        })
        .collect()
}

fn clamp_span(span: Span, surface: Surface) -> Option<Span> {
    if span.y < 0 || span.y >= surface.height || span.x1 < 0 || span.x0 >= surface.width {
        return None;
    }
    Some(Span {
        y: span.y,
        x0: span.x0.max(0),
        x1: span.x1.min(surface.width - 1),
    })
}

type Segment = ((f64, f64), (f64, f64));

/// Split a line into `on`-length dashes separated by `off`-length gaps.
fn dash_segments(from: Pixel, to: Pixel, on: i32, off: i32) -> Vec<Segment> {
    let (x0, y0) = (f64::from(from.x), f64::from(from.y));
    let (dx, dy) = (f64::from(to.x) - x0, f64::from(to.y) - y0);
    let length = dx.hypot(dy);
    if on <= 0 || length == 0.0 {
        return vec![((x0, y0), (x0 + dx, y0 + dy))];
    }

    let period = f64::from(on) + f64::from(off.max(0));
    let mut out = Vec::new();
    let mut start = 0.0;
    while start < length {
        let end = (start + f64::from(on)).min(length);
        let point = |d: f64| (x0 + dx * d / length, y0 + dy * d / length);
        out.push((point(start), point(end)));
        start += period;
    }
    out
}

/// Liang-Barsky clip of a segment to the surface.
fn clip_line(a: (f64, f64), b: (f64, f64), surface: Surface) -> Option<Segment> {
    let max_x = f64::from(surface.width - 1);
    let max_y = f64::from(surface.height - 1);
    let (dx, dy) = (b.0 - a.0, b.1 - a.1);
    let mut t0: f64 = 0.0;
    let mut t1: f64 = 1.0;

    for (p, q) in [
        (-dx, a.0),
        (dx, max_x - a.0),
        (-dy, a.1),
        (dy, max_y - a.1),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            t0 = t0.max(r);
        } else {
            t1 = t1.min(r);
        }
        if t0 > t1 {
            return None;
        }
    }

    Some((
        (a.0 + t0 * dx, a.1 + t0 * dy),
        (a.0 + t1 * dx, a.1 + t1 * dy),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Layer;

    const SURFACE: Surface = Surface {
        width: 100,
        height: 40,
    };

    #[test]
    fn surface_is_two_by_four_dots_per_cell() {
        assert_eq!(surface_size(Rect::new(3, 2, 50, 10)), (100, 40));
        assert_eq!(surface_size(Rect::new(0, 0, 0, 5)), (0, 20));
    }

    #[test]
    fn cells_map_relative_to_area() {
        let area = Rect::new(10, 5, 20, 8);
        assert_eq!(cell_to_pixel(area, 10, 5), Some(Pixel::new(0, 0)));
        assert_eq!(cell_to_pixel(area, 13, 7), Some(Pixel::new(6, 8)));
        assert_eq!(cell_to_pixel(area, 9, 5), None);
        assert_eq!(cell_to_pixel(area, 30, 5), None);
        assert_eq!(cell_to_pixel(area, 10, 13), None);
    }

    #[test]
    fn rows_flip_onto_canvas() {
        assert_eq!(SURFACE.to_canvas(0.0, 0.0), (0.0, 39.0));
        assert_eq!(SURFACE.to_canvas(5.0, 39.0), (5.0, 0.0));
    }

    #[test]
    fn circle_spans_are_symmetric() {
        let spans = circle_spans(Pixel::new(10, 10), 4);
        assert_eq!(spans.len(), 9);
        assert_eq!(spans[4], Span { y: 10, x0: 6, x1: 14 });
        assert_eq!(spans[0], Span { y: 6, x0: 10, x1: 10 });
        assert_eq!(spans[0].x1 - spans[0].x0, spans[8].x1 - spans[8].x0);
    }

    #[test]
    fn triangle_covers_apex_to_base() {
        let spans = triangle_spans([Pixel::new(10, 5), Pixel::new(5, 15), Pixel::new(15, 15)]);
        assert_eq!(spans.first(), Some(&Span { y: 5, x0: 10, x1: 10 }));
        assert_eq!(spans.last(), Some(&Span { y: 15, x0: 5, x1: 15 }));
        assert_eq!(spans.len(), 11);
        assert!(spans.windows(2).all(|w| w[1].x1 - w[1].x0 >= w[0].x1 - w[0].x0));
    }

    #[test]
    fn flat_triangle_is_one_row() {
        let spans = triangle_spans([Pixel::new(3, 2), Pixel::new(9, 2), Pixel::new(6, 2)]);
        assert_eq!(spans, vec![Span { y: 2, x0: 3, x1: 9 }]);
    }

    #[test]
    fn spans_clamp_to_surface() {
        assert_eq!(
            clamp_span(Span { y: 3, x0: -5, x1: 500 }, SURFACE),
            Some(Span { y: 3, x0: 0, x1: 99 })
        );
        assert_eq!(clamp_span(Span { y: -1, x0: 0, x1: 5 }, SURFACE), None);
        assert_eq!(clamp_span(Span { y: 40, x0: 0, x1: 5 }, SURFACE), None);
        assert_eq!(clamp_span(Span { y: 0, x0: 100, x1: 120 }, SURFACE), None);
    }

    #[test]
    fn dashes_alternate_on_and_off() {
        let dashes = dash_segments(Pixel::new(0, 0), Pixel::new(30, 0), 6, 6);
        let starts: Vec<f64> = dashes.iter().map(|(a, _)| a.0).collect();
        assert_eq!(starts, vec![0.0, 12.0, 24.0]);
        assert_eq!(dashes[0].1, (6.0, 0.0));
        assert_eq!(dashes[2].1, (30.0, 0.0));
    }

    #[test]
    fn zero_length_dash_is_a_dot() {
        let dashes = dash_segments(Pixel::new(4, 4), Pixel::new(4, 4), 6, 6);
        assert_eq!(dashes, vec![((4.0, 4.0), (4.0, 4.0))]);
    }

    #[test]
    fn lines_clip_to_surface() {
        let (a, b) = clip_line((-50.0, 20.0), (150.0, 20.0), SURFACE).unwrap();
        assert!(a.0.abs() < 1e-9 && (b.0 - 99.0).abs() < 1e-9);
        assert_eq!((a.1, b.1), (20.0, 20.0));
        assert_eq!(clip_line((-5.0, -5.0), (-1.0, -9.0), SURFACE), None);
        let inside = ((1.0, 1.0), (10.0, 10.0));
        assert_eq!(clip_line(inside.0, inside.1, SURFACE), Some(inside));
    }

    #[test]
    fn translucent_fills_are_stippled() {
        let rect = PixelRect {
            x: 0,
            y: 0,
            width: 4,
            height: 2,
        };
        let solid = rasterize(
            &[DrawCommand {
                layer: Layer::Histogram,
                shape: Shape::FillRect {
                    rect,
                    color: Rgba::rgb(1, 2, 3),
                },
            }],
            SURFACE,
        );
        let faint = rasterize(
            &[DrawCommand {
                layer: Layer::Selection,
                shape: Shape::FillRect {
                    rect,
                    color: Rgba::rgba(1, 2, 3, 50),
                },
            }],
            SURFACE,
        );
        let count = |r: &[Raster]| match r.first() {
            Some(Raster::Dots { coords, .. }) => coords.len(),
            _ => 0,
        };
        assert_eq!(count(&solid), 8);
        assert_eq!(count(&faint), 4);
    }

    #[test]
    fn offscreen_shapes_produce_nothing() {
        let commands = [DrawCommand {
            layer: Layer::Zeros,
            shape: Shape::FillCircle {
                center: Pixel::new(-100, -100),
                radius: 4,
                color: Rgba::rgb(255, 0, 0),
            },
        }];
        assert!(rasterize(&commands, SURFACE).is_empty());
    }
}
