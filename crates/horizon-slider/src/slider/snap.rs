//! Snapping a track fraction onto the step grid.

/// Convert a (direction-resolved) track fraction into a value.
///
/// The extremes map straight to `min` and `max`, bypassing step rounding,
/// so both bounds stay reachable when `step` does not divide the range.
/// Everything in between snaps to the nearest `min + k * step` and is
/// clamped to `[min, max]`.
pub fn snap_fraction(fraction: f64, min: f64, max: f64, step: f64) -> f64 {
    if fraction <= 0.0 {
        return min;
    }
    if fraction >= 1.0 {
        return max;
    }

    let exact = min + fraction * (max - min);
    let closest = ((exact - min) / step).round() * step + min;
    closest.clamp(min, max)
}
