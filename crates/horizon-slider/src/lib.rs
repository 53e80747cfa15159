//! Horizon Slider - the value/position engine of an interactive range slider.
//!
//! The crate turns pointer, touch and keyboard input into a step-aligned
//! value and a stream of notifications. It owns no rendering: a host
//! measures the track, forwards input events and paints from the slider's
//! presentation queries.
//!
//! - [`Slider`]: the widget engine
//! - [`SliderHost`]: track measurement, document listeners and focus
//! - [`SliderConfig`]: serializable settings, loadable from TOML
//! - [`SliderEmitter`]: `value`, `input` and `change` channels plus `touched`
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use horizon_slider::prelude::*;
//!
//! let host = Arc::new(FixedTrackHost::new(TrackRect::new(0.0, 0.0, 100.0, 8.0)));
//! let mut slider = Slider::new(host).with_value(50.0).with_step(5.0);
//!
//! slider.key_down(&KeyPressEvent::new(Key::ArrowRight, KeyboardModifiers::NONE));
//! assert_eq!(slider.value(), 55.0);
//! ```

pub mod accessibility;
pub mod capability;
pub mod coerce;
mod error;
pub mod host;
pub mod prelude;
pub mod slider;

pub use accessibility::Accessible;
pub use capability::{Disableable, Focusable, ThemePalette, Themed, effective_tab_index};
pub use error::{ConfigError, SliderError, SliderResult};
pub use host::{DetachedHost, FixedTrackHost, ListenerSet, SliderHost};
pub use slider::{
    DisplayFormat, DragRelease, DragSessionManager, EventLog, KeyAction, Slider, SliderConfig,
    SliderEmitter, SliderEvent, TickInterval, TickLayout, ValueChannel, ValueEvent,
};

pub use horizon_slider_core::{
    ConnectionId, Directionality, Key, KeyPressEvent, KeyReleaseEvent, KeyboardModifiers,
    MouseButton, Orientation, Point, PointerEvent, PointerKind, Signal, TextDirection,
    TrackGeometry, TrackRect,
};
