//! Data-space extent and its mapping onto a pixel surface.
//!
//! Pixel `y` grows downwards while data `y` grows upwards. Every mutation
//! validates the new extent first and leaves the viewport untouched when
//! it would be empty, inverted or non-finite.

use crate::error::{PlotError, Result};
use crate::util::Extent;

/// Smallest span an axis may shrink to.
const MIN_SPAN: f64 = 1e-12;

/// A point on the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pixel {
    /// Column, growing to the right.
    pub x: i32,
    /// Row, growing downwards.
    pub y: i32,
}

impl Pixel {
    /// Create a pixel coordinate.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned pixel rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PixelRect {
    /// Left column.
    pub x: i32,
    /// Top row.
    pub y: i32,
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
}

impl PixelRect {
    /// Normalized rectangle spanned by two corners.
    pub fn from_corners(a: Pixel, b: Pixel) -> Self {
        Self {
            x: a.x.min(b.x),
            y: a.y.min(b.y),
            width: (a.x - b.x).abs(),
            height: (a.y - b.y).abs(),
        }
    }
}

/// The visible data rectangle and the surface it is drawn on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    extent: Extent,
    default_extent: Extent,
    pixel_width: u32,
    pixel_height: u32,
}

impl Viewport {
    /// Create a viewport showing `default_extent` on an empty surface.
    pub fn new(default_extent: Extent) -> Result<Self> {
        validate(&default_extent)?;
        Ok(Self {
            extent: default_extent,
            default_extent,
            pixel_width: 0,
            pixel_height: 0,
        })
    }

    /// Current extent.
    pub fn extent(&self) -> Extent {
        self.extent
    }

    /// Left bound.
    pub fn x_min(&self) -> f64 {
        self.extent.x_min
    }

    /// Right bound.
    pub fn x_max(&self) -> f64 {
        self.extent.x_max
    }

    /// Bottom bound.
    pub fn y_min(&self) -> f64 {
        self.extent.y_min
    }

    /// Top bound.
    pub fn y_max(&self) -> f64 {
        self.extent.y_max
    }

    /// Width of the visible x range.
    pub fn x_span(&self) -> f64 {
        self.extent.x_max - self.extent.x_min
    }

    /// Height of the visible y range.
    pub fn y_span(&self) -> f64 {
        self.extent.y_max - self.extent.y_min
    }

    /// Surface width in pixels.
    pub fn pixel_width(&self) -> u32 {
        self.pixel_width
    }

    /// Surface height in pixels.
    pub fn pixel_height(&self) -> u32 {
        self.pixel_height
    }

    /// Whether the surface has a drawable area.
    pub fn has_surface(&self) -> bool {
        self.pixel_width > 0 && self.pixel_height > 0
    }

    /// Resize the drawing surface.
    pub fn set_surface(&mut self, pixel_width: u32, pixel_height: u32) {
        self.pixel_width = pixel_width;
        self.pixel_height = pixel_height;
    }

    /// Map a data x to a surface column.
    pub fn data_to_screen_x(&self, x: f64) -> i32 {
        ((x - self.extent.x_min) / self.x_span() * f64::from(self.pixel_width)).round() as i32
    }

    /// Map a data y to a surface row.
    pub fn data_to_screen_y(&self, y: f64) -> i32 {
        ((1.0 - (y - self.extent.y_min) / self.y_span()) * f64::from(self.pixel_height)).round()
            as i32
    }

    /// Map a data point to a surface pixel.
    pub fn data_to_screen(&self, x: f64, y: f64) -> Pixel {
        Pixel::new(self.data_to_screen_x(x), self.data_to_screen_y(y))
    }

    /// Map a surface column back to data x.
    pub fn screen_to_x(&self, sx: i32) -> f64 {
        self.extent.x_min + self.x_span() * f64::from(sx) / f64::from(self.pixel_width)
    }

    /// Map a surface row back to data y.
    pub fn screen_to_y(&self, sy: i32) -> f64 {
        self.extent.y_min + self.y_span() * (1.0 - f64::from(sy) / f64::from(self.pixel_height))
    }

    /// Restore the default extent.
    pub fn reset(&mut self) {
        self.extent = self.default_extent;
        tracing::debug!("Viewport reset to {:?}", self.extent);
    }

    /// Replace the extent. Rejected extents leave the viewport unchanged.
    pub fn set_extent(&mut self, x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Result<()> {
        let extent = Extent::new(x_min, x_max, y_min, y_max);
        if let Err(e) = validate(&extent) {
            tracing::warn!("Rejected viewport: {}", e);
            return Err(e);
        }
        self.extent = extent;
        Ok(())
    }

    /// Scale every bound's distance from `(cx, cy)` by `factor`.
    ///
    /// Factors below one zoom in, above one zoom out; the anchor stays put.
    pub fn zoom_around(&mut self, cx: f64, cy: f64, factor: f64) -> Result<()> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(PlotError::InvalidZoom { factor });
        }
        if factor == 1.0 {
            return Ok(());
        }
        let e = self.extent;
        self.set_extent(
            cx + (e.x_min - cx) * factor,
            cx + (e.x_max - cx) * factor,
            cy + (e.y_min - cy) * factor,
            cy + (e.y_max - cy) * factor,
        )
    }

    /// Shift the extent by fractions of the current axis ranges.
    pub fn pan(&mut self, dx_fraction: f64, dy_fraction: f64) -> Result<()> {
        let dx = dx_fraction * self.x_span();
        let dy = dy_fraction * self.y_span();
        let e = self.extent;
        self.set_extent(e.x_min + dx, e.x_max + dx, e.y_min + dy, e.y_max + dy)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        let extent = Extent::default();
        Self {
            extent,
            default_extent: extent,
            pixel_width: 0,
            pixel_height: 0,
        }
    }
}

fn validate(e: &Extent) -> Result<()> {
    let finite = [e.x_min, e.x_max, e.y_min, e.y_max]
        .iter()
        .all(|v| v.is_finite());
    let x_span = e.x_max - e.x_min;
    let y_span = e.y_max - e.y_min;
    if finite && x_span.is_finite() && y_span.is_finite() && x_span > MIN_SPAN && y_span > MIN_SPAN
    {
        Ok(())
    } else {
        Err(PlotError::invalid_viewport(e.x_min, e.x_max, e.y_min, e.y_max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport(w: u32, h: u32) -> Viewport {
        let mut vp = Viewport::default();
        vp.set_surface(w, h);
        vp
    }

    #[test]
    fn maps_corners_and_center() {
        let vp = viewport(800, 600);
        assert_eq!(vp.data_to_screen(-10.0, 6.0), Pixel::new(0, 0));
        assert_eq!(vp.data_to_screen(10.0, -6.0), Pixel::new(800, 600));
        assert_eq!(vp.data_to_screen(0.0, 0.0), Pixel::new(400, 300));
    }

    #[test]
    fn screen_round_trip_within_one_pixel() {
        let mut vp = viewport(733, 419);
        vp.set_extent(-3.7, 12.25, -0.5, 101.0).unwrap();
        let x_px = vp.x_span() / 733.0;
        let y_px = vp.y_span() / 419.0;
        for i in 0..=100 {
            let t = f64::from(i) / 100.0;
            let x = vp.x_min() + t * vp.x_span();
            let y = vp.y_min() + t * vp.y_span();
            assert!((vp.screen_to_x(vp.data_to_screen_x(x)) - x).abs() <= x_px);
            assert!((vp.screen_to_y(vp.data_to_screen_y(y)) - y).abs() <= y_px);
        }
    }

    #[test]
    fn zoom_by_one_is_identity() {
        let mut vp = viewport(100, 100);
        let before = vp;
        vp.zoom_around(0.1, -3.3, 1.0).unwrap();
        assert_eq!(vp, before);
    }

    #[test]
    fn zoom_keeps_anchor_fixed() {
        let mut vp = viewport(100, 100);
        vp.zoom_around(2.0, 1.0, 0.5).unwrap();
        let e = vp.extent();
        assert_eq!(e, Extent::new(-4.0, 6.0, -2.5, 3.5));
    }

    #[test]
    fn rejects_bad_zoom_factor() {
        let mut vp = viewport(100, 100);
        assert!(vp.zoom_around(0.0, 0.0, 0.0).is_err());
        assert!(vp.zoom_around(0.0, 0.0, f64::NAN).is_err());
        assert_eq!(vp.extent(), Extent::default());
    }

    #[test]
    fn collapsing_zoom_is_rejected() {
        let mut vp = viewport(100, 100);
        let err = vp.zoom_around(0.0, 0.0, 1e-15).unwrap_err();
        assert!(matches!(err, PlotError::InvalidViewport { .. }));
        assert_eq!(vp.extent(), Extent::default());
    }

    #[test]
    fn pan_shifts_by_fraction_of_span() {
        let mut vp = viewport(100, 100);
        vp.pan(0.1, -0.1).unwrap();
        let e = vp.extent();
        assert!((e.x_min - -8.0).abs() < 1e-12);
        assert!((e.x_max - 12.0).abs() < 1e-12);
        assert!((e.y_min - -7.2).abs() < 1e-12);
        assert!((e.y_max - 4.8).abs() < 1e-12);
    }

    #[test]
    fn inverted_extent_is_rejected_and_state_kept() {
        let mut vp = viewport(100, 100);
        vp.set_extent(0.0, 1.0, 0.0, 1.0).unwrap();
        assert!(vp.set_extent(5.0, 1.0, 0.0, 1.0).is_err());
        assert!(vp.set_extent(0.0, 1.0, 2.0, 2.0).is_err());
        assert!(vp.set_extent(0.0, f64::INFINITY, 0.0, 1.0).is_err());
        assert_eq!(vp.extent(), Extent::new(0.0, 1.0, 0.0, 1.0));
    }

    #[test]
    fn reset_restores_default() {
        let mut vp = viewport(100, 100);
        vp.set_extent(0.0, 1.0, 0.0, 1.0).unwrap();
        vp.reset();
        assert_eq!(vp.extent(), Extent::new(-10.0, 10.0, -6.0, 6.0));
    }

    #[test]
    fn rect_from_corners_normalizes() {
        let r = PixelRect::from_corners(Pixel::new(12, 30), Pixel::new(10, 10));
        assert_eq!(
            r,
            PixelRect {
                x: 10,
                y: 10,
                width: 2,
                height: 20
            }
        );
    }
}
