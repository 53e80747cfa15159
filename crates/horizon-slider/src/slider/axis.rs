//! Axis and inversion resolution.
//!
//! Pointer coordinates grow rightwards and downwards. Whether a growing
//! coordinate means a growing value depends on orientation, the `invert`
//! flag and, for horizontal sliders only, the text direction.

use horizon_slider_core::{Orientation, TextDirection};

/// Resolves which way the value axis runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AxisResolver {
    /// Whether the track is vertical.
    pub vertical: bool,
    /// Whether the configured direction is reversed.
    pub invert: bool,
}

impl AxisResolver {
    /// Create a resolver.
    pub fn new(vertical: bool, invert: bool) -> Self {
        Self { vertical, invert }
    }

    /// Orientation of the track.
    pub fn orientation(&self) -> Orientation {
        Orientation::from_vertical(self.vertical)
    }

    /// Whether the value axis runs against the screen axis, ignoring text
    /// direction.
    ///
    /// A vertical slider grows bottom to top, which is already inverted in
    /// screen coordinates.
    pub fn invert_axis(&self) -> bool {
        if self.vertical {
            !self.invert
        } else {
            self.invert
        }
    }

    /// Whether a growing pointer coordinate means a shrinking value.
    ///
    /// Right-to-left text mirrors horizontal sliders only.
    pub fn should_invert_mouse_coordinates(&self, direction: TextDirection) -> bool {
        let invert_axis = self.invert_axis();
        if direction.is_rtl() && !self.vertical {
            !invert_axis
        } else {
            invert_axis
        }
    }

    /// Apply the inversion to a raw track fraction.
    pub fn resolve_fraction(&self, fraction: f64, direction: TextDirection) -> f64 {
        if self.should_invert_mouse_coordinates(direction) {
            1.0 - fraction
        } else {
            fraction
        }
    }
}
