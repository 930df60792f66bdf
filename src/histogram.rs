//! Histogram binning of loaded values and bar geometry.

use crate::viewport::{PixelRect, Viewport};

/// Bins used unless configured otherwise.
pub const DEFAULT_BINS: usize = 20;

/// Raw values plus display state for the histogram overlay.
#[derive(Debug, Clone)]
pub struct HistogramState {
    /// Values to bin, in load order.
    pub values: Vec<f64>,
    /// Number of bins.
    pub bin_count: usize,
    /// Whether bars are drawn.
    pub visible: bool,
}

impl HistogramState {
    /// Create an empty, hidden histogram.
    pub fn new(bin_count: usize) -> Self {
        Self {
            values: Vec::new(),
            bin_count,
            visible: false,
        }
    }

    /// Replace the values. The overlay stays hidden until toggled.
    pub fn set_values(&mut self, values: Vec<f64>) {
        self.values = values;
        self.visible = false;
    }

    /// Flip visibility.
    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    /// Bin the current values.
    pub fn bins(&self) -> Option<Bins> {
        Bins::compute(&self.values, self.bin_count)
    }
}

impl Default for HistogramState {
    fn default() -> Self {
        Self::new(DEFAULT_BINS)
    }
}

/// Counts per equal-width bin between the data minimum and maximum.
#[derive(Debug, Clone, PartialEq)]
pub struct Bins {
    /// Smallest value.
    pub min: f64,
    /// Largest value.
    pub max: f64,
    /// Width of each bin in data units.
    pub bin_size: f64,
    /// Count per bin.
    pub counts: Vec<usize>,
}

impl Bins {
    /// Bin `values` into `bin_count` bins.
    ///
    /// Returns `None` when there is nothing to bin: no values, no bins,
    /// or every value identical.
    pub fn compute(values: &[f64], bin_count: usize) -> Option<Self> {
        if bin_count == 0 {
            return None;
        }
        let (min, max) = values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), &v| {
                (min.min(v), max.max(v))
            });
        if !(min.is_finite() && max.is_finite()) || min == max {
            return None;
        }

        let bin_size = (max - min) / bin_count as f64;
        let mut counts = vec![0usize; bin_count];
        for &v in values {
            let idx = ((v - min) / bin_size).floor();
            let idx = if idx < 0.0 {
                0
            } else {
                (idx as usize).min(bin_count - 1)
            };
            counts[idx] += 1;
        }

        Some(Self {
            min,
            max,
            bin_size,
            counts,
        })
    }

    /// Largest bin count.
    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Sum of all bin counts.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Bar rectangles for the current viewport.
    ///
    /// Bars grow from the bottom of the viewport; the fullest bin reaches
    /// `height_fraction` of the visible y range. Bar width is the surface
    /// width divided by the bin count, so bars need not line up with the
    /// data-space bin edges once the x range differs from `[min, max]`.
    pub fn bars(&self, viewport: &Viewport, height_fraction: f64) -> Vec<HistogramBar> {
        let max_count = self.max_count();
        if max_count == 0 || self.counts.is_empty() {
            return Vec::new();
        }
        let bar_width =
            (f64::from(viewport.pixel_width()) / self.counts.len() as f64).round() as i32;
        let base = viewport.y_min();
        let base_px = viewport.data_to_screen_y(base);

        self.counts
            .iter()
            .enumerate()
            .map(|(i, &count)| {
                let x0 = self.min + i as f64 * self.bin_size;
                let height =
                    (count as f64 / max_count as f64) * viewport.y_span() * height_fraction;
                let top = viewport.data_to_screen_y(base + height);
                HistogramBar {
                    count,
                    rect: PixelRect {
                        x: viewport.data_to_screen_x(x0),
                        y: top,
                        width: bar_width,
                        height: base_px.saturating_sub(top),
                    },
                }
            })
            .collect()
    }
}

/// One histogram bar on the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistogramBar {
    /// Values in this bin.
    pub count: usize,
    /// Pixel rectangle of the bar.
    pub rect: PixelRect,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::Extent;

    #[test]
    fn counts_sum_to_value_count() {
        let values: Vec<f64> = (0..137).map(|i| (f64::from(i) * 0.37).sin() * 5.0).collect();
        for bins in [1, 2, 3, 7, 20, 64, 500] {
            let b = Bins::compute(&values, bins).unwrap();
            assert_eq!(b.counts.len(), bins);
            assert_eq!(b.total(), values.len());
        }
    }

    #[test]
    fn max_value_lands_in_last_bin() {
        let b = Bins::compute(&[0.0, 1.0, 2.0, 3.0, 4.0], 4).unwrap();
        assert_eq!(b.counts, vec![1, 1, 1, 2]);
        assert_eq!(b.bin_size, 1.0);
    }

    #[test]
    fn degenerate_inputs_produce_nothing() {
        assert!(Bins::compute(&[], 20).is_none());
        assert!(Bins::compute(&[3.0, 3.0, 3.0], 20).is_none());
        assert!(Bins::compute(&[1.0, 2.0], 0).is_none());
    }

    #[test]
    fn bars_scale_with_viewport_height() {
        let mut vp = Viewport::new(Extent::new(0.0, 4.0, 0.0, 10.0)).unwrap();
        vp.set_surface(400, 100);
        let b = Bins::compute(&[0.0, 1.0, 1.0, 3.0], 2).unwrap();
        assert_eq!(b.counts, vec![3, 1]);

        let bars = b.bars(&vp, 0.8);
        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0].rect, PixelRect { x: 0, y: 20, width: 200, height: 80 });
        assert_eq!(bars[1].rect.x, 150);
        assert_eq!(bars[1].rect.height, 27);

        vp.set_extent(0.0, 4.0, 0.0, 20.0).unwrap();
        let taller = b.bars(&vp, 0.8);
        assert_eq!(taller[0].rect.height, 80);
    }

    #[test]
    fn set_values_hides_overlay() {
        let mut h = HistogramState::default();
        h.toggle();
        assert!(h.visible);
        h.set_values(vec![1.0, 2.0]);
        assert!(!h.visible);
        assert_eq!(h.bin_count, DEFAULT_BINS);
    }
}
