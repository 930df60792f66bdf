//! Plottable functions and the active function set.

use std::fmt;
use std::sync::Arc;

use crate::data::DataSeries;

/// An RGBA display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel (255 is opaque).
    pub a: u8,
}

impl Rgba {
    /// Create an opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a color with explicit alpha.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with a different alpha.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Whether the color is drawn see-through.
    pub fn is_translucent(self) -> bool {
        self.a < 128
    }
}

/// How a function turns an input into an output.
#[derive(Clone)]
pub enum Evaluator {
    /// A closed-form expression.
    Closed(Arc<dyn Fn(f64) -> f64 + Send + Sync>),
    /// Linear interpolation over a loaded data series.
    Series(Arc<DataSeries>),
}

impl Evaluator {
    /// Wrap a closure as a closed-form evaluator.
    pub fn closed(f: impl Fn(f64) -> f64 + Send + Sync + 'static) -> Self {
        Self::Closed(Arc::new(f))
    }

    /// Evaluate at a single point. Undefined results are NaN.
    pub fn eval(&self, x: f64) -> f64 {
        match self {
            Self::Closed(f) => f(x),
            Self::Series(series) => series.interpolate(x),
        }
    }
}

impl fmt::Debug for Evaluator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Closed(_) => f.write_str("Closed(..)"),
            Self::Series(series) => write!(f, "Series({} points)", series.len()),
        }
    }
}

/// A named, colored function that can be plotted.
#[derive(Debug, Clone)]
pub struct PlotFunction {
    /// Display name.
    pub name: String,
    /// Curve color.
    pub color: Rgba,
    eval: Evaluator,
}

impl PlotFunction {
    /// Create a function from its parts.
    pub fn new(name: impl Into<String>, color: Rgba, eval: Evaluator) -> Self {
        Self {
            name: name.into(),
            color,
            eval,
        }
    }

    /// Create a closed-form function.
    pub fn closed(
        name: impl Into<String>,
        color: Rgba,
        f: impl Fn(f64) -> f64 + Send + Sync + 'static,
    ) -> Self {
        Self::new(name, color, Evaluator::closed(f))
    }

    /// Create the interpolating function for a data series.
    pub fn from_series(series: Arc<DataSeries>) -> Self {
        Self::new(SERIES_FUNCTION_NAME, SERIES_COLOR, Evaluator::Series(series))
    }

    /// Evaluate the function at `x`.
    pub fn eval(&self, x: f64) -> f64 {
        self.eval.eval(x)
    }

    /// Whether this function interpolates loaded data.
    pub fn is_series(&self) -> bool {
        matches!(self.eval, Evaluator::Series(_))
    }
}

/// Name given to the function backed by loaded data.
pub const SERIES_FUNCTION_NAME: &str = "data(series)";

/// Color of the loaded data curve and histogram.
pub const SERIES_COLOR: Rgba = Rgba::rgb(128, 0, 128);

/// The functions currently drawn and analyzed, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct FunctionSet {
    functions: Vec<PlotFunction>,
}

impl FunctionSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove every function.
    pub fn clear(&mut self) {
        self.functions.clear();
    }

    /// Append a function.
    pub fn add(&mut self, function: PlotFunction) {
        self.functions.push(function);
    }

    /// Drop any function backed by loaded data.
    pub fn remove_series(&mut self) {
        self.functions.retain(|f| !f.is_series());
    }

    /// Iterate over the functions.
    pub fn iter(&self) -> impl Iterator<Item = &PlotFunction> {
        self.functions.iter()
    }

    /// Number of functions.
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

/// Closed-form functions offered by the control panel.
pub fn catalog() -> Vec<PlotFunction> {
    vec![
        PlotFunction::closed("sin(x)", Rgba::rgb(220, 20, 60), f64::sin),
        PlotFunction::closed("cos(x)", Rgba::rgb(34, 139, 34), f64::cos),
        PlotFunction::closed("0.1x^2 - 2", Rgba::rgb(30, 144, 255), |x| {
            0.1 * x * x - 2.0
        }),
    ]
}
