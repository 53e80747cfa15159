//! Core systems for Horizon Slider.
//!
//! This crate provides the foundational pieces the slider engine is built on:
//!
//! - **Signal/Slot System**: Type-safe notification channels
//! - **Property System**: Change-detecting value cells
//! - **Geometry**: Points, track rectangles and per-axis track geometry
//! - **Directionality**: Text direction with change notification
//! - **Input Events**: Pointer, touch and keyboard events delivered by the host
//!
//! # Signal/Slot Example
//!
//! ```
//! use horizon_slider_core::Signal;
//!
//! let value_changed = Signal::<f64>::new();
//!
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! value_changed.emit(42.0);
//! value_changed.disconnect(conn_id);
//! ```
//!
//! # Directionality Example
//!
//! ```
//! use horizon_slider_core::{Directionality, TextDirection};
//!
//! let dir = Directionality::new(TextDirection::LeftToRight);
//! dir.changed.connect(|d| println!("direction is now {:?}", d));
//! dir.set(TextDirection::RightToLeft);
//! assert!(dir.get().is_rtl());
//! ```

mod direction;
mod error;
pub mod event;
pub mod geometry;
pub mod logging;
pub mod property;
pub mod signal;

pub use direction::{Directionality, TextDirection};
pub use error::{CoreResult, SignalError};
pub use event::{
    EventBase, Key, KeyPressEvent, KeyReleaseEvent, KeyboardModifiers, MouseButton, PointerEvent,
    PointerKind,
};
pub use geometry::{Orientation, Point, TrackGeometry, TrackRect};
pub use property::Property;
pub use signal::{ConnectionId, Signal};
