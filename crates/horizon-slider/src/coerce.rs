//! Coercion of host-supplied attribute strings.
//!
//! Templates hand the slider raw strings. Numbers that fail to parse or are
//! not finite fall back to a caller-supplied value, which for every slider
//! field is the field's previous valid value.

use horizon_slider_core::logging::targets;

/// Parse `raw` as a finite number, returning `fallback` otherwise.
pub fn coerce_number(raw: &str, fallback: f64) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => {
            tracing::warn!(target: targets::SLIDER, raw, fallback, "ignoring non-numeric input");
            fallback
        }
    }
}

/// Keep `value` if it is finite, otherwise return `fallback`.
pub fn finite_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        tracing::warn!(target: targets::SLIDER, value, fallback, "ignoring non-finite input");
        fallback
    }
}

/// Boolean attribute coercion.
///
/// A present attribute is true unless it is spelled `"false"`, so `""`
/// (a bare attribute) counts as true.
pub fn coerce_bool(raw: &str) -> bool {
    raw.trim() != "false"
}
