//! Serializable slider configuration.

use serde::{Deserialize, Serialize};

use super::ticks::TickInterval;
use crate::error::ConfigError;

/// Host-supplied slider settings.
///
/// # Example
///
/// ```
/// use horizon_slider::{SliderConfig, TickInterval};
///
/// let config = SliderConfig::from_toml_str(
///     r#"
///     max = 10
///     step = 0.5
///     vertical = true
///     tick_interval = "auto"
///     "#,
/// )
/// .unwrap();
///
/// assert_eq!(config.min, 0.0);
/// assert_eq!(config.max, 10.0);
/// assert_eq!(config.tick_interval, TickInterval::Auto);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderConfig {
    /// Lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
    /// Step size.
    pub step: f64,
    /// Initial value; `None` leaves the value unset until first read.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    /// Whether the track is vertical.
    pub vertical: bool,
    /// Whether the value axis is reversed.
    pub invert: bool,
    /// Whether interaction is disabled.
    pub disabled: bool,
    /// Whether the thumb shows a value label.
    pub thumb_label: bool,
    /// Tick mark density.
    pub tick_interval: TickInterval,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 100.0,
            step: 1.0,
            value: None,
            vertical: false,
            invert: false,
            disabled: false,
            thumb_label: false,
            tick_interval: TickInterval::None,
        }
    }
}

impl SliderConfig {
    /// Parse a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Render the config as TOML.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }

    /// Check the invariants every slider relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut fields = vec![("min", self.min), ("max", self.max), ("step", self.step)];
        if let Some(value) = self.value {
            fields.push(("value", value));
        }
        if let TickInterval::Steps(steps) = self.tick_interval {
            fields.push(("tick_interval", steps));
        }
        if let Some((field, value)) = fields.into_iter().find(|(_, value)| !value.is_finite()) {
            return Err(ConfigError::NonFinite { field, value });
        }

        if self.min > self.max {
            return Err(ConfigError::InvalidRange {
                min: self.min,
                max: self.max,
            });
        }
        if self.step <= 0.0 {
            return Err(ConfigError::InvalidStep(self.step));
        }
        Ok(())
    }

    /// Builder: set the range.
    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    /// Builder: set the step.
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    /// Builder: set the initial value.
    pub fn with_value(mut self, value: f64) -> Self {
        self.value = Some(value);
        self
    }

    /// Builder: make the track vertical.
    pub fn with_vertical(mut self, vertical: bool) -> Self {
        self.vertical = vertical;
        self
    }

    /// Builder: reverse the value axis.
    pub fn with_invert(mut self, invert: bool) -> Self {
        self.invert = invert;
        self
    }

    /// Builder: set the tick interval.
    pub fn with_tick_interval(mut self, interval: TickInterval) -> Self {
        self.tick_interval = interval;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SliderConfig::default();
        assert_eq!((config.min, config.max, config.step), (0.0, 100.0, 1.0));
        assert_eq!(config.tick_interval, TickInterval::None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(SliderConfig::from_toml_str("").unwrap(), SliderConfig::default());
    }

    #[test]
    fn test_tick_interval_forms() {
        let auto = SliderConfig::from_toml_str("tick_interval = \"auto\"").unwrap();
        assert_eq!(auto.tick_interval, TickInterval::Auto);

        let steps = SliderConfig::from_toml_str("tick_interval = 5").unwrap();
        assert_eq!(steps.tick_interval, TickInterval::Steps(5.0));

        let none = SliderConfig::from_toml_str("tick_interval = 0").unwrap();
        assert_eq!(none.tick_interval, TickInterval::None);

        assert!(matches!(
            SliderConfig::from_toml_str("tick_interval = \"often\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_validation_errors() {
        let inverted = SliderConfig::default().with_range(10.0, 0.0);
        assert!(matches!(inverted.validate(), Err(ConfigError::InvalidRange { .. })));

        let zero_step = SliderConfig::default().with_step(0.0);
        assert!(matches!(zero_step.validate(), Err(ConfigError::InvalidStep(_))));

        let nan_value = SliderConfig::default().with_value(f64::NAN);
        assert!(matches!(
            nan_value.validate(),
            Err(ConfigError::NonFinite { field: "value", .. })
        ));
    }

    #[test]
    fn test_toml_round_trip_keeps_settings() {
        let config = SliderConfig::default()
            .with_range(-5.0, 5.0)
            .with_step(0.25)
            .with_value(1.5)
            .with_vertical(true)
            .with_tick_interval(TickInterval::Auto);

        let text = config.to_toml_string().unwrap();
        assert!(text.contains("tick_interval = \"auto\""));
        assert_eq!(SliderConfig::from_toml_str(&text).unwrap(), config);
    }
}
