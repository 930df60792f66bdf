//! Grid spacing on base-10 "nice" steps.

/// Snap a raw step to 1, 2, 5 or 10 times a power of ten.
///
/// Returns `None` for steps that are not positive and finite.
pub fn nice_step(raw: f64) -> Option<f64> {
    if !raw.is_finite() || raw <= 0.0 {
        return None;
    }
    let magnitude = 10f64.powf(raw.log10().floor());
    let fraction = raw / magnitude;
    let snapped = if fraction < 1.5 {
        1.0
    } else if fraction < 3.0 {
        2.0
    } else if fraction < 7.0 {
        5.0
    } else {
        10.0
    };
    Some(snapped * magnitude)
}

/// Grid line positions covering `[min, max]` for roughly `divisions` cells.
///
/// The first line sits on the largest step multiple at or below `min`.
pub fn grid_positions(min: f64, max: f64, divisions: f64) -> Vec<f64> {
    let Some(step) = nice_step((max - min) / divisions) else {
        return Vec::new();
    };
    let start = (min / step).floor();
    (0u32..)
        .map(|k| (start + f64::from(k)) * step)
        .take_while(|&v| v <= max)
        .take(MAX_LINES)
        .collect()
}

/// Guard against pathological extents producing unbounded line counts.
const MAX_LINES: usize = 1000;
