//! Ordered (x, y) series with linear interpolation.

/// A numeric series sorted by x.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataSeries {
    points: Vec<(f64, f64)>,
}

impl DataSeries {
    /// Build a series, stably sorting the points by x.
    pub fn new(mut points: Vec<(f64, f64)>) -> Self {
        points.sort_by(|a, b| a.0.total_cmp(&b.0));
        Self { points }
    }

    /// The points in x order.
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// The y-values in x order.
    pub fn y_values(&self) -> Vec<f64> {
        self.points.iter().map(|&(_, y)| y).collect()
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the series has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Interpolate the series at `x`.
    ///
    /// Uses the segment starting at the rightmost point with `px <= x`.
    /// Past the last point the last value is returned; before the first
    /// point the first segment is extended. An empty series yields NaN.
    pub fn interpolate(&self, x: f64) -> f64 {
        let Some(&(_, last_y)) = self.points.last() else {
            return f64::NAN;
        };

        let at_or_before = self.points.partition_point(|&(px, _)| px <= x);
        let idx = at_or_before.saturating_sub(1);
        if idx + 1 >= self.points.len() {
            return last_y;
        }

        let (x0, y0) = self.points[idx];
        let (x1, y1) = self.points[idx + 1];
        if x1 == x0 {
            return y0;
        }
        let t = (x - x0) / (x1 - x0);
        y0 * (1.0 - t) + y1 * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series() -> DataSeries {
        DataSeries::new(vec![(0.0, 0.0), (1.0, 10.0), (3.0, 30.0)])
    }

    #[test]
    fn interpolates_between_points() {
        let s = series();
        assert_eq!(s.interpolate(0.5), 5.0);
        assert_eq!(s.interpolate(2.0), 20.0);
        assert_eq!(s.interpolate(1.0), 10.0);
    }

    #[test]
    fn holds_last_value_past_the_end() {
        let s = series();
        assert_eq!(s.interpolate(3.0), 30.0);
        assert_eq!(s.interpolate(100.0), 30.0);
    }

    #[test]
    fn extends_first_segment_before_the_start() {
        assert_eq!(series().interpolate(-1.0), -10.0);
    }

    #[test]
    fn empty_series_is_undefined() {
        assert!(DataSeries::default().interpolate(0.0).is_nan());
    }

    #[test]
    fn single_point_is_constant() {
        let s = DataSeries::new(vec![(2.0, 7.0)]);
        assert_eq!(s.interpolate(-5.0), 7.0);
        assert_eq!(s.interpolate(5.0), 7.0);
    }

    #[test]
    fn duplicate_x_uses_left_value() {
        let s = DataSeries::new(vec![(0.0, 1.0), (1.0, 2.0), (1.0, 5.0)]);
        assert_eq!(s.interpolate(0.0), 1.0);
        // rightmost px <= 1.0 is the last point
        assert_eq!(s.interpolate(1.0), 5.0);
    }

    #[test]
    fn sorts_unordered_input() {
        let s = DataSeries::new(vec![(2.0, 4.0), (0.0, 0.0), (1.0, 1.0)]);
        assert_eq!(s.points(), &[(0.0, 0.0), (1.0, 1.0), (2.0, 4.0)]);
        assert_eq!(s.y_values(), vec![0.0, 1.0, 4.0]);
    }
}
