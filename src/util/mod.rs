//! Utility functions and configuration.
//!
//! This module provides the tunable plot configuration, number
//! formatting and clipboard helpers.

mod clipboard;
mod formatters;
mod plot_config;

pub use clipboard::{analysis_report, copy_analysis_report};
pub use formatters::format_value;
pub use plot_config::{Extent, InteractionConfig, PlotConfig, RenderConfig};
