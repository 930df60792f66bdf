//! Loaded data series.
//!
//! This module handles reading numeric text files and representing them
//! as an interpolating series plus the raw values used for the histogram.

pub mod loader;
mod series;

pub use loader::{LoadedData, PendingLoad};
pub use series::DataSeries;
