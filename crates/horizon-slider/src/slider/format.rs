//! Thumb label formatting.

use std::fmt;
use std::sync::Arc;

/// Custom formatter for the thumb label.
pub type DisplayFn = Arc<dyn Fn(f64) -> String + Send + Sync>;

/// How the thumb label renders a value.
#[derive(Clone, Default)]
pub struct DisplayFormat {
    formatter: Option<DisplayFn>,
}

impl DisplayFormat {
    /// Use `formatter` for every label.
    pub fn custom<F>(formatter: F) -> Self
    where
        F: Fn(f64) -> String + Send + Sync + 'static,
    {
        Self {
            formatter: Some(Arc::new(formatter)),
        }
    }

    /// Whether a custom formatter is installed.
    pub fn is_custom(&self) -> bool {
        self.formatter.is_some()
    }

    /// Render `value`.
    ///
    /// Without a custom formatter, fractional values are printed with the
    /// step's decimal places and whole values without a fraction.
    pub fn render(&self, value: f64, decimals: Option<u32>) -> String {
        if let Some(formatter) = &self.formatter {
            return formatter(value);
        }
        match decimals {
            Some(decimals) if value.fract() != 0.0 => format!("{value:.*}", decimals as usize),
            _ => format!("{value}"),
        }
    }
}

impl fmt::Debug for DisplayFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DisplayFormat")
            .field("custom", &self.is_custom())
            .finish()
    }
}
