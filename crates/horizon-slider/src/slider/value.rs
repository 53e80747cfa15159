//! Value model: range, step, current value and the derived percent.

/// Owns `min`, `max`, `step` and the current value.
///
/// The value starts out unset and reads as `min` until
/// [`ensure_initialized`](Self::ensure_initialized) (or any assignment)
/// materializes it. Percent is always derived from the current fields and
/// never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueModel {
    min: f64,
    max: f64,
    step: f64,
    value: Option<f64>,
    /// Fractional digits of `step`, when `step` is not a whole number.
    decimals: Option<u32>,
}

impl Default for ValueModel {
    fn default() -> Self {
        Self::new(0.0, 100.0, 1.0)
    }
}

impl ValueModel {
    /// Create a model with an unset value.
    pub fn new(min: f64, max: f64, step: f64) -> Self {
        Self {
            min,
            max,
            step,
            value: None,
            decimals: step_decimals(step),
        }
    }

    /// Lower bound.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Step size.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Number of decimal places values are rounded to, if any.
    pub fn decimals(&self) -> Option<u32> {
        self.decimals
    }

    /// Current value; an unset value reads as `min`.
    pub fn value(&self) -> f64 {
        self.value.unwrap_or(self.min)
    }

    /// Whether a value has been assigned yet.
    pub fn is_initialized(&self) -> bool {
        self.value.is_some()
    }

    /// Materialize an unset value as `min`. Returns the current value.
    pub fn ensure_initialized(&mut self) -> f64 {
        if self.value.is_none() {
            self.value = Some(self.min);
        }
        self.value()
    }

    /// Store `value` rounded to the step precision, without clamping.
    ///
    /// Returns `true` if the stored value changed.
    pub fn set_value(&mut self, value: f64) -> bool {
        let rounded = self.round(value);
        self.store(rounded)
    }

    /// Store `value` clamped to `[min, max]`.
    ///
    /// Values at or beyond a bound land exactly on it; everything else is
    /// rounded to the step precision first. NaN is ignored. Returns `true`
    /// if the stored value changed.
    pub fn assign_clamped(&mut self, value: f64) -> bool {
        if value.is_nan() {
            return false;
        }
        let next = if value <= self.min {
            self.min
        } else if value >= self.max {
            self.max
        } else {
            self.round(value).clamp(self.min, self.max)
        };
        self.store(next)
    }

    /// Change the lower bound. Raises `max` if it would fall below `min`.
    ///
    /// An unset value is initialized to the new `min`; a set value is
    /// clamped into the new range.
    pub fn set_min(&mut self, min: f64) -> bool {
        self.min = min;
        if self.max < min {
            self.max = min;
        }
        self.reclamp()
    }

    /// Change the upper bound. Lowers `min` if it would rise above `max`.
    ///
    /// A set value is clamped into the new range; an unset value stays unset.
    pub fn set_max(&mut self, max: f64) -> bool {
        self.max = max;
        if self.min > max {
            self.min = max;
        }
        match self.value {
            Some(value) => self.assign_clamped(value),
            None => false,
        }
    }

    /// Change the step size and the derived rounding precision.
    ///
    /// Non-positive steps are ignored. Returns `true` if the step changed.
    pub fn set_step(&mut self, step: f64) -> bool {
        if !(step > 0.0) || step == self.step {
            return false;
        }
        self.step = step;
        self.decimals = step_decimals(step);
        true
    }

    /// Position of the value along the range, clamped to `[0, 1]`.
    ///
    /// An empty range (`min == max`) reports `0`.
    pub fn percent(&self) -> f64 {
        let span = self.max - self.min;
        if !(span > 0.0) {
            return 0.0;
        }
        ((self.value() - self.min) / span).clamp(0.0, 1.0)
    }

    fn reclamp(&mut self) -> bool {
        match self.value {
            None => self.assign_clamped(self.min),
            Some(value) => self.assign_clamped(value),
        }
    }

    fn round(&self, value: f64) -> f64 {
        match self.decimals {
            Some(decimals) => round_to_decimals(value, decimals),
            None => value,
        }
    }

    fn store(&mut self, value: f64) -> bool {
        if self.value == Some(value) {
            return false;
        }
        self.value = Some(value);
        true
    }
}

/// Count the fractional digits of a step (`0.25` has two).
///
/// Returns `None` for whole-number steps.
pub fn step_decimals(step: f64) -> Option<u32> {
    if !step.is_finite() || step.fract() == 0.0 {
        return None;
    }
    // `Display` for f64 prints the shortest representation that round-trips
    // and never switches to exponent notation.
    let text = step.to_string();
    text.split_once('.').map(|(_, fraction)| fraction.len() as u32)
}

/// Round to a fixed number of decimal places.
///
/// Precision beyond what `f64` can scale returns `value` unchanged.
pub fn round_to_decimals(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals.min(i32::MAX as u32) as i32);
    if !factor.is_finite() {
        return value;
    }
    let rounded = (value * factor).round() / factor;
    if rounded.is_finite() { rounded } else { value }
}
