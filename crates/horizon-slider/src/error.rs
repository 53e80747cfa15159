//! Error types for the slider crate.
//!
//! Interaction never fails: pointer, touch and keyboard input is coerced,
//! clamped or ignored. Errors only surface where a host hands the slider
//! configuration it cannot interpret.

use thiserror::Error;

/// Errors raised while validating or (de)serializing a [`SliderConfig`](crate::SliderConfig).
#[derive(Error, Debug)]
pub enum ConfigError {
    /// `min` is greater than `max`.
    #[error("invalid range: min {min} is greater than max {max}")]
    InvalidRange { min: f64, max: f64 },

    /// `step` is zero or negative.
    #[error("invalid step {0}: step must be greater than zero")]
    InvalidStep(f64),

    /// A numeric field is NaN or infinite.
    #[error("field `{field}` must be finite, got {value}")]
    NonFinite { field: &'static str, value: f64 },

    /// The TOML document could not be parsed.
    #[error("failed to parse slider config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The config could not be written as TOML.
    #[error("failed to serialize slider config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Errors raised by the slider's host-facing surface.
#[derive(Error, Debug)]
pub enum SliderError {
    /// The host set an attribute the slider does not know.
    #[error("unknown slider attribute `{0}`")]
    UnknownAttribute(String),

    /// A configuration was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result type for slider operations.
pub type SliderResult<T> = Result<T, SliderError>;
