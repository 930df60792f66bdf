//! Error types for fnplot.
//!
//! This module provides a unified error handling approach using `thiserror`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for fnplot operations.
pub type Result<T> = std::result::Result<T, PlotError>;

/// Errors that can occur in fnplot.
#[derive(Debug, Error)]
pub enum PlotError {
    /// A data line held a token that is not a finite number.
    #[error("line {line}: '{token}' is not a finite number")]
    Parse {
        /// 1-based line number in the source text.
        line: usize,
        /// The offending token.
        token: String,
    },

    /// A data line held more than two fields.
    #[error("line {line}: expected 'y' or 'x y', found {fields} fields")]
    Format {
        /// 1-based line number in the source text.
        line: usize,
        /// Number of whitespace-separated fields found.
        fields: usize,
    },

    /// Failed to open a file.
    #[error("Failed to open file: {path}")]
    FileOpen {
        /// Path that could not be read.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// A viewport extent that is empty, inverted or not finite.
    #[error("Invalid viewport: x [{x_min}, {x_max}], y [{y_min}, {y_max}]")]
    InvalidViewport {
        /// Requested left bound.
        x_min: f64,
        /// Requested right bound.
        x_max: f64,
        /// Requested bottom bound.
        y_min: f64,
        /// Requested top bound.
        y_max: f64,
    },

    /// A zoom factor that is not a positive finite number.
    #[error("Invalid zoom factor: {factor}")]
    InvalidZoom {
        /// The rejected factor.
        factor: f64,
    },

    /// Failed to access clipboard.
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),

    /// The background loader went away before delivering a result.
    #[error("Data loader stopped unexpectedly")]
    LoaderDisconnected,
}

impl PlotError {
    /// Create a FileOpen error.
    pub fn file_open(path: PathBuf, source: std::io::Error) -> Self {
        Self::FileOpen { path, source }
    }

    /// Create a Parse error.
    pub fn parse(line: usize, token: impl Into<String>) -> Self {
        Self::Parse {
            line,
            token: token.into(),
        }
    }

    /// Create an InvalidViewport error.
    pub fn invalid_viewport(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self::InvalidViewport {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }
}
