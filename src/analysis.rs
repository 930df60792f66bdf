//! Zero-crossing and local extremum detection over sample buffers.
//!
//! Both detectors are discrete and strict: a sample exactly on zero is only
//! part of a crossing when its neighbour has the opposite sign, and plateaus
//! (equal neighbouring samples) never produce an extremum. Non-finite samples
//! never bound a crossing, and NaN never satisfies an extremum comparison.

use crate::sampler::SampleBuffer;

/// A detected x-intercept; y is zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZeroPoint {
    /// Interpolated x where the curve crosses zero.
    pub x: f64,
}

/// Whether an extremum is a peak or a trough.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtremumKind {
    /// Local maximum.
    Max,
    /// Local minimum.
    Min,
}

impl ExtremumKind {
    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Max => "max",
            Self::Min => "min",
        }
    }
}

/// A detected local extremum at a sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtremumPoint {
    /// Sample x.
    pub x: f64,
    /// Sample y.
    pub y: f64,
    /// Peak or trough.
    pub kind: ExtremumKind,
}

/// Find sign changes in one buffer and interpolate their x-intercepts.
pub fn zero_crossings(buffer: &SampleBuffer) -> Vec<ZeroPoint> {
    let xs = &buffer.xs;
    let ys = &buffer.ys;
    let mut zeros = Vec::new();

    for i in 1..buffer.len() {
        let (x0, x1) = (xs[i - 1], xs[i]);
        let (y0, y1) = (ys[i - 1], ys[i]);
        if !(y0.is_finite() && y1.is_finite()) || y0 * y1 >= 0.0 {
            continue;
        }
        let dy = y1 - y0;
        if dy == 0.0 {
            continue;
        }
        zeros.push(ZeroPoint {
            x: x0 - y0 * (x1 - x0) / dy,
        });
    }
    zeros
}

/// Find discrete local maxima and minima in one buffer.
pub fn extrema(buffer: &SampleBuffer) -> Vec<ExtremumPoint> {
    let xs = &buffer.xs;
    let ys = &buffer.ys;
    let mut found = Vec::new();

    for i in 1..buffer.len().saturating_sub(1) {
        let dy1 = ys[i] - ys[i - 1];
        let dy2 = ys[i + 1] - ys[i];
        let kind = if dy1 > 0.0 && dy2 < 0.0 {
            ExtremumKind::Max
        } else if dy1 < 0.0 && dy2 > 0.0 {
            ExtremumKind::Min
        } else {
            continue;
        };
        found.push(ExtremumPoint {
            x: xs[i],
            y: ys[i],
            kind,
        });
    }
    found
}

/// Zero crossings of every buffer, concatenated.
pub fn find_zeros(buffers: &[SampleBuffer]) -> Vec<ZeroPoint> {
    let zeros: Vec<_> = buffers.iter().flat_map(zero_crossings).collect();
    tracing::debug!(
        "Found {} zero crossings across {} functions",
        zeros.len(),
        buffers.len()
    );
    zeros
}

/// Extrema of every buffer, concatenated.
pub fn find_extrema(buffers: &[SampleBuffer]) -> Vec<ExtremumPoint> {
    let found: Vec<_> = buffers.iter().flat_map(extrema).collect();
    tracing::debug!(
        "Found {} extrema across {} functions",
        found.len(),
        buffers.len()
    );
    found
}
