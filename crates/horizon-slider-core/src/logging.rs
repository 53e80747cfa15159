//! Logging facilities for Horizon Slider.
//!
//! Horizon Slider uses the `tracing` crate for instrumentation and never
//! installs a subscriber itself. To see logs, install one in your application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("horizon_slider::drag=debug")
//!         .init();
//! }
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "horizon_slider_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "horizon_slider_core::signal";
    /// Property system target.
    pub const PROPERTY: &str = "horizon_slider_core::property";
    /// Slider value and configuration target.
    pub const SLIDER: &str = "horizon_slider::slider";
    /// Pointer drag sessions.
    pub const DRAG: &str = "horizon_slider::drag";
    /// Keyboard stepping.
    pub const KEYBOARD: &str = "horizon_slider::keyboard";
}
