//! fnplot - an interactive terminal plotter for functions and data series.
//!
//! fnplot samples mathematical functions and loaded data across a zoomable
//! viewport, finds their zero crossings and local extrema, and bins loaded
//! values into a histogram. The core is terminal-independent: rendering
//! produces an ordered list of draw commands in pixel coordinates, which the
//! TUI rasterizes onto a Braille canvas.
//!
//! # Features
//!
//! - Box zoom by dragging, wheel zoom around the pointer, arrow-key panning
//! - Zero-crossing and extremum detection on the sampled curves
//! - Text data files (`y` or `x y` per line) with linear interpolation
//! - Histogram overlay of loaded values
//! - Gruvbox color themes
//! - Clipboard export of the analysis
//!
//! # Example
//!
//! ```
//! use fnplot::function::catalog;
//! use fnplot::plot::PlotState;
//! use fnplot::util::PlotConfig;
//!
//! let mut plot = PlotState::new(PlotConfig::default())?;
//! plot.add_function(catalog().remove(0));
//! plot.set_surface(800, 480);
//!
//! let zeros = plot.highlight_zeros();
//! assert_eq!(zeros, 7);
//! let commands = plot.render();
//! assert!(!commands.is_empty());
//! # Ok::<(), fnplot::PlotError>(())
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod analysis;
pub mod app;
pub mod controls;
pub mod data;
pub mod error;
pub mod function;
pub mod histogram;
pub mod interaction;
pub mod plot;
pub mod prompt;
pub mod render;
pub mod sampler;
pub mod ui;
pub mod util;
pub mod viewport;

pub use error::{PlotError, Result};
