//! Prelude module for Horizon Slider.
//!
//! ```
//! use horizon_slider::prelude::*;
//! ```

// ============================================================================
// Slider
// ============================================================================

pub use crate::slider::{Slider, SliderConfig, SliderEvent, TickInterval, ValueChannel, ValueEvent};

// ============================================================================
// Host Integration
// ============================================================================

pub use crate::host::{DetachedHost, FixedTrackHost, ListenerSet, SliderHost};

// ============================================================================
// Capabilities
// ============================================================================

pub use crate::accessibility::Accessible;
pub use crate::capability::{Disableable, Focusable, ThemePalette, Themed};

// ============================================================================
// Errors
// ============================================================================

pub use crate::error::{ConfigError, SliderError, SliderResult};

// ============================================================================
// Core Types
// ============================================================================

pub use horizon_slider_core::{
    Directionality, Key, KeyPressEvent, KeyReleaseEvent, KeyboardModifiers, MouseButton,
    Orientation, Point, PointerEvent, PointerKind, TextDirection, TrackRect,
};
