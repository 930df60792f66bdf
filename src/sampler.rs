//! Evenly spaced evaluation of functions across the viewport.

use ndarray::Array1;

use crate::function::PlotFunction;
use crate::viewport::Viewport;

/// Samples taken per function unless configured otherwise.
pub const DEFAULT_SAMPLES: usize = 1200;

/// Evaluated `(x, y)` pairs for one function.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleBuffer {
    /// Sample abscissae, increasing.
    pub xs: Array1<f64>,
    /// Function values; NaN where undefined.
    pub ys: Array1<f64>,
}

impl SampleBuffer {
    /// Build a buffer from parallel x/y vectors.
    ///
    /// The shorter of the two determines the length.
    pub fn from_vecs(mut xs: Vec<f64>, mut ys: Vec<f64>) -> Self {
        let n = xs.len().min(ys.len());
        xs.truncate(n);
        ys.truncate(n);
        Self {
            xs: Array1::from(xs),
            ys: Array1::from(ys),
        }
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Whether the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Iterate over `(x, y)` pairs.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.xs.iter().copied().zip(self.ys.iter().copied())
    }
}

/// Evaluate `function` at `n` points spanning the viewport's x range,
/// both endpoints included.
pub fn sample(function: &PlotFunction, viewport: &Viewport, n: usize) -> SampleBuffer {
    let x_min = viewport.x_min();
    let span = viewport.x_span();
    let xs = match n {
        0 => Array1::zeros(0),
        1 => Array1::from_elem(1, x_min),
        _ => {
            let last = (n - 1) as f64;
            Array1::from_shape_fn(n, |i| x_min + (i as f64 / last) * span)
        },
    };
    let ys = xs.mapv(|x| function.eval(x));
    SampleBuffer { xs, ys }
}

/// Sample every function in order.
pub fn sample_all<'a>(
    functions: impl IntoIterator<Item = &'a PlotFunction>,
    viewport: &Viewport,
    n: usize,
) -> Vec<SampleBuffer> {
    functions
        .into_iter()
        .map(|f| sample(f, viewport, n))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DataSeries;
    use crate::function::Rgba;
    use std::sync::Arc;

    #[test]
    fn covers_both_endpoints() {
        let f = PlotFunction::closed("id", Rgba::rgb(0, 0, 0), |x| x);
        let buf = sample(&f, &Viewport::default(), DEFAULT_SAMPLES);
        assert_eq!(buf.len(), DEFAULT_SAMPLES);
        assert_eq!(buf.xs[0], -10.0);
        assert_eq!(buf.xs[DEFAULT_SAMPLES - 1], 10.0);
        assert_eq!(buf.xs, buf.ys);
    }

    #[test]
    fn spacing_is_even() {
        let f = PlotFunction::closed("zero", Rgba::rgb(0, 0, 0), |_| 0.0);
        let buf = sample(&f, &Viewport::default(), 5);
        assert_eq!(buf.xs.to_vec(), vec![-10.0, -5.0, 0.0, 5.0, 10.0]);
    }

    #[test]
    fn empty_series_samples_as_nan() {
        let f = PlotFunction::from_series(Arc::new(DataSeries::default()));
        let buf = sample(&f, &Viewport::default(), 10);
        assert!(buf.ys.iter().all(|y| y.is_nan()));
    }

    #[test]
    fn degenerate_counts() {
        let f = PlotFunction::closed("one", Rgba::rgb(0, 0, 0), |_| 1.0);
        assert!(sample(&f, &Viewport::default(), 0).is_empty());
        let single = sample(&f, &Viewport::default(), 1);
        assert_eq!(single.points().collect::<Vec<_>>(), vec![(-10.0, 1.0)]);
    }
}
