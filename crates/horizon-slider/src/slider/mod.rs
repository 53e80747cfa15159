//! Slider widget engine.
//!
//! This module provides [`Slider`], the value/position engine behind a range
//! slider: pointer drags, keyboard stepping and the mapping from track
//! geometry to a step-aligned value. Painting is left to the host, which
//! reads the presentation queries ([`Slider::percent`],
//! [`Slider::tick_layout`], [`Slider::is_sliding`], ...) after every
//! [`Slider::take_update_request`].
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use horizon_slider::{FixedTrackHost, Point, PointerEvent, Slider, TrackRect};
//!
//! let host = Arc::new(FixedTrackHost::new(TrackRect::new(0.0, 0.0, 200.0, 20.0)));
//! let mut slider = Slider::new(host).with_step(10.0);
//!
//! slider.events.on_change(|value| println!("committed {value}"));
//!
//! slider.pointer_down(&PointerEvent::mouse(Point::new(48.0, 10.0)));
//! slider.pointer_up(&PointerEvent::mouse(Point::new(48.0, 10.0)));
//! assert_eq!(slider.value(), 20.0);
//! ```

mod axis;
mod config;
mod drag;
mod emitter;
mod format;
mod keyboard;
mod snap;
mod ticks;
mod value;

pub use axis::AxisResolver;
pub use config::SliderConfig;
pub use drag::{DragRelease, DragSessionManager, ListenerBinding};
pub use emitter::{EventLog, SliderEmitter, ValueChannel, ValueEvent};
pub use format::{DisplayFn, DisplayFormat};
pub use keyboard::{KeyAction, PAGE_STEPS};
pub use snap::snap_fraction;
pub use ticks::{MIN_AUTO_TICK_SEPARATION, TickInterval, TickLayout};
pub use value::{ValueModel, round_to_decimals, step_decimals};

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use horizon_slider_core::logging::targets;
use horizon_slider_core::{
    ConnectionId, Directionality, KeyPressEvent, KeyReleaseEvent, Orientation, Point,
    PointerEvent, TextDirection, TrackRect,
};

use crate::capability::{Disableable, Focusable, ThemePalette, Themed};
use crate::coerce::{coerce_bool, coerce_number, finite_or};
use crate::error::{SliderError, SliderResult};
use crate::host::{DetachedHost, SliderHost};

/// Input delivered to a slider by its host.
#[derive(Debug, Clone, Copy)]
pub enum SliderEvent {
    /// The pointer entered the slider.
    PointerEnter,
    /// A mouse button or touch contact went down on the slider.
    PointerDown(PointerEvent),
    /// Document-level pointer movement during a drag.
    PointerMove(PointerEvent),
    /// Document-level pointer release during a drag.
    PointerUp(PointerEvent),
    /// A touch contact was cancelled during a drag.
    PointerCancel(PointerEvent),
    /// A key was pressed while the slider had focus.
    KeyPress(KeyPressEvent),
    /// A key was released while the slider had focus.
    KeyRelease(KeyReleaseEvent),
    /// The slider gained focus.
    FocusIn,
    /// The slider lost focus.
    FocusOut,
    /// The window lost focus.
    WindowBlur,
}

/// A range slider.
///
/// The value always lies in `[min, max]` and, when `step` is fractional, is
/// rounded to the step's decimal places.
///
/// # Signals
///
/// All value notifications go through [`events`](Self::events):
///
/// - `value` channel: every value mutation, including programmatic ones
/// - `input` channel: a user gesture changed the value
/// - `change` channel: a user gesture committed a value (tap, release after a
///   drag, or a key press)
/// - `touched`: the slider lost focus
pub struct Slider {
    host: Arc<dyn SliderHost>,

    /// Shared text-direction provider.
    directionality: Arc<Directionality>,

    /// Our subscription to `directionality.changed`.
    direction_connection: ConnectionId,

    /// Set whenever presentation state changes.
    needs_update: Arc<AtomicBool>,

    model: ValueModel,
    axis: AxisResolver,
    disabled: bool,
    thumb_label: bool,
    tick_interval: TickInterval,
    tab_index: i32,
    color: ThemePalette,
    format: DisplayFormat,

    /// Track box captured on the last pointer enter, focus or press.
    track: Option<TrackRect>,

    /// Tick spacing derived when the track was captured.
    tick_layout: Option<TickLayout>,

    drag: DragSessionManager,

    /// A handled key is held down.
    keyboard_sliding: bool,

    focused: bool,

    /// Value notifications.
    pub events: SliderEmitter,
}

impl Slider {
    /// Create a slider with the default range `0..=100` and step `1`.
    pub fn new(host: Arc<dyn SliderHost>) -> Self {
        let needs_update = Arc::new(AtomicBool::new(true));
        let directionality = Arc::new(Directionality::default());
        let direction_connection = Self::watch_direction(&directionality, &needs_update);

        Self {
            host,
            directionality,
            direction_connection,
            needs_update,
            model: ValueModel::default(),
            axis: AxisResolver::default(),
            disabled: false,
            thumb_label: false,
            tick_interval: TickInterval::None,
            tab_index: 0,
            color: ThemePalette::default(),
            format: DisplayFormat::default(),
            track: None,
            tick_layout: None,
            drag: DragSessionManager::new(),
            keyboard_sliding: false,
            focused: false,
            events: SliderEmitter::new(),
        }
    }

    /// Create a slider from a validated config.
    pub fn from_config(host: Arc<dyn SliderHost>, config: &SliderConfig) -> SliderResult<Self> {
        let mut slider = Self::new(host);
        slider.apply_config(config)?;
        Ok(slider)
    }

    /// Apply every field of `config` through the regular setters.
    ///
    /// The config is validated first; nothing changes if it is rejected.
    pub fn apply_config(&mut self, config: &SliderConfig) -> SliderResult<()> {
        config.validate()?;

        self.set_step(config.step);
        self.set_min(config.min);
        self.set_max(config.max);
        if let Some(value) = config.value {
            self.set_value(value);
        }
        self.set_vertical(config.vertical);
        self.set_invert(config.invert);
        self.set_disabled(config.disabled);
        self.set_thumb_label(config.thumb_label);
        self.set_tick_interval(config.tick_interval);
        Ok(())
    }

    /// Snapshot the current settings.
    pub fn config(&self) -> SliderConfig {
        SliderConfig {
            min: self.model.min(),
            max: self.model.max(),
            step: self.model.step(),
            value: self.model.is_initialized().then(|| self.model.value()),
            vertical: self.axis.vertical,
            invert: self.axis.invert,
            disabled: self.disabled,
            thumb_label: self.thumb_label,
            tick_interval: self.tick_interval,
        }
    }

    fn watch_direction(
        directionality: &Directionality,
        needs_update: &Arc<AtomicBool>,
    ) -> ConnectionId {
        let flag = needs_update.clone();
        directionality.changed.connect(move |_| {
            flag.store(true, Ordering::SeqCst);
        })
    }

    // =========================================================================
    // Direction
    // =========================================================================

    /// Follow a shared direction provider instead of the slider's own.
    pub fn set_directionality(&mut self, directionality: Arc<Directionality>) {
        self.directionality.changed.disconnect(self.direction_connection);
        self.direction_connection = Self::watch_direction(&directionality, &self.needs_update);
        self.directionality = directionality;
        self.request_update();
    }

    /// Builder: follow a shared direction provider.
    pub fn with_directionality(mut self, directionality: Arc<Directionality>) -> Self {
        self.set_directionality(directionality);
        self
    }

    /// The direction provider in use.
    pub fn directionality(&self) -> &Arc<Directionality> {
        &self.directionality
    }

    /// Current text direction.
    pub fn direction(&self) -> TextDirection {
        self.directionality.get()
    }

    // =========================================================================
    // Value and range
    // =========================================================================

    /// Current value. Reads as `min` until a value is assigned.
    pub fn value(&self) -> f64 {
        self.model.value()
    }

    /// Materialize an unset value as `min` and return it.
    pub fn ensure_initialized(&mut self) -> f64 {
        self.model.ensure_initialized()
    }

    /// Set the value, clamped to the range.
    ///
    /// Non-finite input keeps the current value. Emits on the `value`
    /// channel only.
    pub fn set_value(&mut self, value: f64) {
        let value = finite_or(value, self.model.value());
        self.mutate_model(|model| {
            model.assign_clamped(value);
        });
    }

    /// Builder: set the value.
    pub fn with_value(mut self, value: f64) -> Self {
        self.set_value(value);
        self
    }

    /// Lower bound.
    pub fn min(&self) -> f64 {
        self.model.min()
    }

    /// Set the lower bound, raising `max` if needed and clamping the value.
    pub fn set_min(&mut self, min: f64) {
        let min = finite_or(min, self.model.min());
        self.mutate_model(|model| {
            model.set_min(min);
        });
    }

    /// Upper bound.
    pub fn max(&self) -> f64 {
        self.model.max()
    }

    /// Set the upper bound, lowering `min` if needed and clamping the value.
    pub fn set_max(&mut self, max: f64) {
        let max = finite_or(max, self.model.max());
        self.mutate_model(|model| {
            model.set_max(max);
        });
    }

    /// Set both bounds.
    pub fn set_range(&mut self, min: f64, max: f64) {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        self.set_min(min);
        self.set_max(max);
    }

    /// Builder: set both bounds.
    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.set_range(min, max);
        self
    }

    /// Step size.
    pub fn step(&self) -> f64 {
        self.model.step()
    }

    /// Set the step size. Zero, negative and non-finite steps are ignored.
    pub fn set_step(&mut self, step: f64) {
        if !step.is_finite() || !self.model.set_step(step) {
            return;
        }
        self.request_update();
    }

    /// Builder: set the step size.
    pub fn with_step(mut self, step: f64) -> Self {
        self.set_step(step);
        self
    }

    /// Position of the value along the range, in `[0, 1]`.
    pub fn percent(&self) -> f64 {
        self.model.percent()
    }

    /// Whether the value sits at the start of the track.
    pub fn is_min_value(&self) -> bool {
        self.percent() == 0.0
    }

    fn mutate_model(&mut self, mutate: impl FnOnce(&mut ValueModel)) -> bool {
        let before = self.model.value();
        mutate(&mut self.model);
        self.request_update();

        let after = self.model.value();
        if after == before {
            return false;
        }
        tracing::trace!(target: targets::SLIDER, before, after, "value changed");
        self.events.emit(ValueChannel::Value, after);
        true
    }

    // =========================================================================
    // Axis
    // =========================================================================

    /// Whether the track is vertical.
    pub fn is_vertical(&self) -> bool {
        self.axis.vertical
    }

    /// Make the track vertical or horizontal.
    pub fn set_vertical(&mut self, vertical: bool) {
        if self.axis.vertical != vertical {
            self.axis.vertical = vertical;
            self.request_update();
        }
    }

    /// Builder: make the track vertical.
    pub fn with_vertical(mut self, vertical: bool) -> Self {
        self.set_vertical(vertical);
        self
    }

    /// Track orientation.
    pub fn orientation(&self) -> Orientation {
        self.axis.orientation()
    }

    /// Whether the value axis is reversed.
    pub fn is_inverted(&self) -> bool {
        self.axis.invert
    }

    /// Reverse the value axis.
    pub fn set_invert(&mut self, invert: bool) {
        if self.axis.invert != invert {
            self.axis.invert = invert;
            self.request_update();
        }
    }

    /// Builder: reverse the value axis.
    pub fn with_invert(mut self, invert: bool) -> Self {
        self.set_invert(invert);
        self
    }

    /// Whether the value axis runs against the screen axis.
    pub fn invert_axis(&self) -> bool {
        self.axis.invert_axis()
    }

    /// Whether a growing pointer coordinate means a shrinking value.
    pub fn should_invert_mouse_coordinates(&self) -> bool {
        self.axis.should_invert_mouse_coordinates(self.direction())
    }

    // =========================================================================
    // Labels and ticks
    // =========================================================================

    /// Whether the thumb shows a value label.
    pub fn thumb_label(&self) -> bool {
        self.thumb_label
    }

    /// Show or hide the thumb label.
    pub fn set_thumb_label(&mut self, thumb_label: bool) {
        if self.thumb_label != thumb_label {
            self.thumb_label = thumb_label;
            self.request_update();
        }
    }

    /// Install a custom label formatter.
    pub fn set_display_with<F>(&mut self, formatter: F)
    where
        F: Fn(f64) -> String + Send + Sync + 'static,
    {
        self.format = DisplayFormat::custom(formatter);
        self.request_update();
    }

    /// Builder: install a custom label formatter.
    pub fn with_display_with<F>(mut self, formatter: F) -> Self
    where
        F: Fn(f64) -> String + Send + Sync + 'static,
    {
        self.set_display_with(formatter);
        self
    }

    /// Text shown in the thumb label.
    pub fn display_value(&self) -> String {
        self.format.render(self.value(), self.model.decimals())
    }

    /// Tick density setting.
    pub fn tick_interval(&self) -> TickInterval {
        self.tick_interval
    }

    /// Change the tick density. Takes effect at the next geometry capture.
    pub fn set_tick_interval(&mut self, interval: TickInterval) {
        self.tick_interval = interval;
    }

    /// Builder: set the tick density.
    pub fn with_tick_interval(mut self, interval: TickInterval) -> Self {
        self.set_tick_interval(interval);
        self
    }

    /// Tick spacing computed at the last geometry capture.
    pub fn tick_layout(&self) -> Option<TickLayout> {
        self.tick_layout
    }

    /// Distance between ticks as a fraction of the track, `0` without ticks.
    pub fn tick_interval_percent(&self) -> f64 {
        self.tick_layout.map_or(0.0, |layout| layout.interval_percent)
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    /// Track box captured at the last pointer enter, focus or press.
    pub fn track_rect(&self) -> Option<TrackRect> {
        self.track
    }

    fn capture_geometry(&mut self) {
        self.track = self.host.track_rect();
        self.update_tick_layout();
        self.request_update();
    }

    fn update_tick_layout(&mut self) {
        let size = self
            .track
            .map_or(0.0, |rect| rect.along(self.orientation()).size);
        self.tick_layout = TickLayout::compute(
            self.tick_interval,
            self.model.min(),
            self.model.max(),
            self.model.step(),
            size,
        );
    }

    /// Move the value to the step nearest `position`.
    ///
    /// Uses the geometry captured at the last pointer enter, focus or press.
    /// Without measurable geometry nothing happens. Emits on the `value`
    /// channel and returns `true` if the value changed.
    pub fn update_value_from_position(&mut self, position: Point) -> bool {
        let orientation = self.orientation();
        let Some(raw) = self
            .track
            .and_then(|rect| rect.along(orientation).fraction_of(position.along(orientation)))
        else {
            tracing::trace!(target: targets::SLIDER, "no track geometry, ignoring position");
            return false;
        };

        let fraction = self.axis.resolve_fraction(raw, self.direction());
        let snapped = snap_fraction(fraction, self.model.min(), self.model.max(), self.model.step());
        self.model.ensure_initialized();
        self.mutate_model(|model| {
            model.assign_clamped(snapped);
        })
    }

    // =========================================================================
    // Pointer input
    // =========================================================================

    /// The pointer entered the slider: capture geometry.
    pub fn pointer_enter(&mut self) {
        if self.disabled {
            return;
        }
        self.capture_geometry();
    }

    /// Start a drag.
    ///
    /// The press itself moves the value; if that changes it, `input` and
    /// `change` are emitted at once. Ignored while disabled, while already
    /// sliding, or for non-primary mouse buttons.
    pub fn pointer_down(&mut self, event: &PointerEvent) -> bool {
        if self.disabled {
            tracing::trace!(target: targets::DRAG, "press ignored: disabled");
            return false;
        }
        if !event.kind.is_primary() {
            tracing::trace!(target: targets::DRAG, kind = ?event.kind, "press ignored: secondary button");
            return false;
        }
        if self.is_sliding() {
            tracing::trace!(target: targets::DRAG, "press ignored: already sliding");
            return false;
        }

        let value_at_start = self.model.ensure_initialized();
        self.capture_geometry();
        self.host.focus();
        self.drag
            .begin(self.host.clone(), event.kind, event.position, value_at_start);

        if self.update_value_from_position(event.position) {
            let value = self.value();
            tracing::debug!(target: targets::DRAG, value, "tap commit");
            self.events.commit(value);
        }
        true
    }

    /// Follow the pointer during a drag. Emits `input` when the value changes.
    pub fn pointer_move(&mut self, event: &PointerEvent) -> bool {
        if !self.drag.record_move(event.position) {
            return false;
        }
        if self.update_value_from_position(event.position) {
            self.events.emit(ValueChannel::Input, self.value());
        }
        true
    }

    /// End a drag.
    ///
    /// Emits `change` if the value differs from the value at the press, the
    /// pointer moved, and the slider is enabled.
    pub fn pointer_up(&mut self, event: &PointerEvent) -> bool {
        self.finish_drag(Some(event.position))
    }

    /// A touch contact was cancelled; ends the drag like a release.
    pub fn pointer_cancel(&mut self, event: &PointerEvent) -> bool {
        self.finish_drag(Some(event.position))
    }

    /// The window lost focus: end any drag at the last seen position and
    /// any keyboard slide whose key-up will never arrive.
    pub fn window_blur(&mut self) -> bool {
        let ended_keys = self.end_keyboard_slide();
        self.finish_drag(None) || ended_keys
    }

    fn finish_drag(&mut self, position: Option<Point>) -> bool {
        let Some(release) = self.drag.end(position) else {
            return false;
        };
        self.request_update();

        let value = self.value();
        if value != release.value_at_start && release.pointer_moved() && !self.disabled {
            tracing::debug!(target: targets::DRAG, value, "release commit");
            self.events.emit(ValueChannel::Change, value);
        }
        true
    }

    /// Whether a drag session is in progress.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_active()
    }

    // =========================================================================
    // Keyboard input
    // =========================================================================

    /// Step the value for a key press.
    ///
    /// Returns `true` for handled keys; the host should then prevent the
    /// key's default action. Keys with modifiers are never handled. Keys
    /// are handled during a pointer drag too.
    pub fn key_down(&mut self, event: &KeyPressEvent) -> bool {
        if self.disabled || event.modifiers.any() {
            return false;
        }
        let Some(action) = KeyAction::for_key(event.key, self.direction()) else {
            return false;
        };

        self.keyboard_sliding = true;
        self.request_update();
        self.step_by(action);
        true
    }

    /// A key was released: the keyboard slide is over.
    pub fn key_up(&mut self, _event: &KeyReleaseEvent) -> bool {
        self.end_keyboard_slide()
    }

    /// Apply a key action, committing `input` then `change` if the value
    /// moved. Returns `true` if it did.
    pub(crate) fn step_by(&mut self, action: KeyAction) -> bool {
        let before = self.model.ensure_initialized();
        let next = action.apply(before, self.model.min(), self.model.max(), self.model.step());
        let changed = self.commit_clamped(next);
        if changed {
            tracing::debug!(target: targets::KEYBOARD, ?action, before, value = self.value(), "key step");
        }
        changed
    }

    /// Assign `value` clamped to the range and, if it moved, emit `input`
    /// then `change`. Non-finite input is ignored.
    pub(crate) fn commit_clamped(&mut self, value: f64) -> bool {
        if !value.is_finite() {
            return false;
        }
        self.model.ensure_initialized();
        let changed = self.mutate_model(|model| {
            model.assign_clamped(value);
        });
        if changed {
            self.events.commit(self.value());
        }
        changed
    }

    fn end_keyboard_slide(&mut self) -> bool {
        if !self.keyboard_sliding {
            return false;
        }
        self.keyboard_sliding = false;
        self.request_update();
        true
    }

    // =========================================================================
    // Focus
    // =========================================================================

    /// The slider gained focus: capture geometry.
    pub fn focus_in(&mut self) {
        self.focused = true;
        self.capture_geometry();
    }

    /// The slider lost focus: emit `touched`.
    ///
    /// A held key's release goes to the next focused element, so the
    /// keyboard slide ends here.
    pub fn focus_out(&mut self) {
        self.focused = false;
        self.keyboard_sliding = false;
        self.request_update();
        self.events.touched.emit(());
    }

    /// Whether the slider has focus.
    pub fn has_focus(&self) -> bool {
        self.focused
    }

    // =========================================================================
    // Presentation state
    // =========================================================================

    /// Whether the thumb is being moved by pointer or keyboard.
    pub fn is_sliding(&self) -> bool {
        self.drag.is_active() || self.keyboard_sliding
    }

    /// Whether the thumb is drawn in its active state.
    pub fn is_active(&self) -> bool {
        self.focused || self.is_sliding()
    }

    /// Whether presentation state changed since the last
    /// [`take_update_request`](Self::take_update_request).
    pub fn needs_update(&self) -> bool {
        self.needs_update.load(Ordering::SeqCst)
    }

    /// Clear and return the repaint request.
    pub fn take_update_request(&self) -> bool {
        self.needs_update.swap(false, Ordering::SeqCst)
    }

    fn request_update(&self) {
        self.needs_update.store(true, Ordering::SeqCst);
    }

    // =========================================================================
    // Forms and host attributes
    // =========================================================================

    /// Set the value from a form model.
    ///
    /// Emits on the `value` channel but never `input` or `change`.
    pub fn write_value(&mut self, value: f64) {
        self.set_value(value);
    }

    /// Enable or disable the slider from a form model.
    pub fn set_disabled_state(&mut self, disabled: bool) {
        self.set_disabled(disabled);
    }

    /// Apply a template attribute given as a raw string.
    ///
    /// Numeric attributes that fail to parse keep their previous value.
    pub fn apply_attribute(&mut self, name: &str, raw: &str) -> SliderResult<()> {
        match name {
            "min" => self.set_min(coerce_number(raw, self.min())),
            "max" => self.set_max(coerce_number(raw, self.max())),
            "step" => self.set_step(coerce_number(raw, self.step())),
            "value" => self.set_value(coerce_number(raw, self.value())),
            "vertical" => self.set_vertical(coerce_bool(raw)),
            "invert" => self.set_invert(coerce_bool(raw)),
            "disabled" => self.set_disabled(coerce_bool(raw)),
            "thumbLabel" => self.set_thumb_label(coerce_bool(raw)),
            "tickInterval" => {
                let interval = if raw.trim() == "auto" {
                    TickInterval::Auto
                } else {
                    let previous = match self.tick_interval {
                        TickInterval::Steps(steps) => steps,
                        _ => 0.0,
                    };
                    TickInterval::steps(coerce_number(raw, previous))
                };
                self.set_tick_interval(interval);
            }
            "tabIndex" => {
                let index = coerce_number(raw, f64::from(self.tab_index));
                self.tab_index = index as i32;
            }
            "color" => {
                if let Some(color) = ThemePalette::from_name(raw) {
                    self.set_color(color);
                }
            }
            other => return Err(SliderError::UnknownAttribute(other.to_string())),
        }
        Ok(())
    }

    // =========================================================================
    // Capabilities
    // =========================================================================

    /// Whether interaction is disabled.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Enable or disable interaction.
    ///
    /// A drag already in progress keeps running; its release will not
    /// commit while the slider is disabled.
    pub fn set_disabled(&mut self, disabled: bool) {
        if self.disabled != disabled {
            self.disabled = disabled;
            self.request_update();
        }
    }

    /// Builder: disable interaction.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.set_disabled(disabled);
        self
    }

    /// Current theme palette.
    pub fn color(&self) -> ThemePalette {
        self.color
    }

    /// Change the theme palette.
    pub fn set_color(&mut self, color: ThemePalette) {
        if self.color != color {
            self.color = color;
            self.request_update();
        }
    }

    // =========================================================================
    // Event dispatch
    // =========================================================================

    /// Dispatch an input event.
    ///
    /// Handled events are accepted; handled presses, releases and key
    /// presses also have their default action prevented.
    pub fn event(&mut self, event: &mut SliderEvent) -> bool {
        match event {
            SliderEvent::PointerEnter => {
                self.pointer_enter();
                false
            }
            SliderEvent::PointerDown(e) => {
                let handled = self.pointer_down(e);
                Self::consume(&mut e.base, handled, true)
            }
            SliderEvent::PointerMove(e) => {
                let handled = self.pointer_move(e);
                Self::consume(&mut e.base, handled, false)
            }
            SliderEvent::PointerUp(e) => {
                let handled = self.pointer_up(e);
                Self::consume(&mut e.base, handled, true)
            }
            SliderEvent::PointerCancel(e) => {
                let handled = self.pointer_cancel(e);
                Self::consume(&mut e.base, handled, false)
            }
            SliderEvent::KeyPress(e) => {
                let handled = self.key_down(e);
                Self::consume(&mut e.base, handled, true)
            }
            SliderEvent::KeyRelease(e) => {
                let handled = self.key_up(e);
                Self::consume(&mut e.base, handled, false)
            }
            SliderEvent::FocusIn => {
                self.focus_in();
                false
            }
            SliderEvent::FocusOut => {
                self.focus_out();
                false
            }
            SliderEvent::WindowBlur => self.window_blur(),
        }
    }

    fn consume(
        base: &mut horizon_slider_core::EventBase,
        handled: bool,
        prevent_default: bool,
    ) -> bool {
        if handled {
            base.accept();
            if prevent_default {
                base.prevent_default();
            }
        }
        handled
    }
}

impl Default for Slider {
    fn default() -> Self {
        Self::new(Arc::new(DetachedHost))
    }
}

impl Drop for Slider {
    fn drop(&mut self) {
        self.directionality.changed.disconnect(self.direction_connection);
    }
}

impl std::fmt::Debug for Slider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Slider")
            .field("model", &self.model)
            .field("axis", &self.axis)
            .field("disabled", &self.disabled)
            .field("direction", &self.direction())
            .field("sliding", &self.is_sliding())
            .finish_non_exhaustive()
    }
}

impl Disableable for Slider {
    fn is_disabled(&self) -> bool {
        self.disabled
    }

    fn set_disabled(&mut self, disabled: bool) {
        Slider::set_disabled(self, disabled);
    }
}

impl Focusable for Slider {
    fn tab_index(&self) -> i32 {
        self.tab_index
    }

    fn set_tab_index(&mut self, index: i32) {
        self.tab_index = index;
    }

    fn focus(&self) {
        self.host.focus();
    }

    fn blur(&self) {
        self.host.blur();
    }
}

impl Themed for Slider {
    fn color(&self) -> ThemePalette {
        self.color
    }

    fn set_color(&mut self, color: ThemePalette) {
        Slider::set_color(self, color);
    }
}

// Ensure Slider is Send + Sync
static_assertions::assert_impl_all!(Slider: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::effective_tab_index;
    use crate::host::FixedTrackHost;
    use horizon_slider_core::{Key, KeyboardModifiers, MouseButton, PointerKind};

    fn track() -> TrackRect {
        TrackRect::new(0.0, 0.0, 100.0, 100.0)
    }

    fn slider() -> Slider {
        Slider::new(Arc::new(FixedTrackHost::new(track())))
    }

    fn press(key: Key) -> KeyPressEvent {
        KeyPressEvent::new(key, KeyboardModifiers::NONE)
    }

    #[test]
    fn test_slider_creation() {
        let slider = Slider::default();
        assert_eq!(slider.min(), 0.0);
        assert_eq!(slider.max(), 100.0);
        assert_eq!(slider.step(), 1.0);
        assert_eq!(slider.value(), 0.0);
        assert_eq!(slider.orientation(), Orientation::Horizontal);
        assert_eq!(slider.color(), ThemePalette::Accent);
        assert!(!slider.is_sliding());
        assert!(slider.is_min_value());
    }

    #[test]
    fn test_slider_builder_pattern() {
        let slider = Slider::default()
            .with_range(-10.0, 10.0)
            .with_step(0.5)
            .with_value(2.5)
            .with_vertical(true)
            .with_invert(true)
            .with_tick_interval(TickInterval::Auto);

        assert_eq!(slider.min(), -10.0);
        assert_eq!(slider.max(), 10.0);
        assert_eq!(slider.step(), 0.5);
        assert_eq!(slider.value(), 2.5);
        assert!(slider.is_vertical());
        assert!(slider.is_inverted());
        assert_eq!(slider.tick_interval(), TickInterval::Auto);
    }

    #[test]
    fn test_value_clamping() {
        let mut slider = Slider::default();
        slider.set_value(-10.0);
        assert_eq!(slider.value(), 0.0);
        slider.set_value(150.0);
        assert_eq!(slider.value(), 100.0);
        slider.set_value(f64::NAN);
        assert_eq!(slider.value(), 100.0);
    }

    #[test]
    fn test_value_channel_only_on_change() {
        let mut slider = Slider::default();
        let log = EventLog::attach(&slider.events);

        slider.set_value(42.0);
        slider.set_value(42.0);

        assert_eq!(log.values(ValueChannel::Value), vec![42.0]);
        assert!(log.values(ValueChannel::Input).is_empty());
    }

    #[test]
    fn test_range_change_clamps_value() {
        let mut slider = Slider::default().with_value(80.0);
        slider.set_max(50.0);
        assert_eq!(slider.value(), 50.0);
        assert_eq!(slider.percent(), 1.0);
    }

    #[test]
    fn test_set_max_does_not_initialize_value() {
        let mut slider = Slider::default();
        slider.set_max(50.0);
        assert_eq!(slider.config().value, None);
        assert_eq!(slider.value(), 0.0);

        slider.set_min(10.0);
        assert_eq!(slider.config().value, Some(10.0));
    }

    #[test]
    fn test_tiny_step_keeps_value_in_range() {
        let mut slider = Slider::default().with_range(0.0, 1.0).with_step(1e-310);
        slider.set_value(0.5);
        assert_eq!(slider.value(), 0.5);
        assert!((slider.min()..=slider.max()).contains(&slider.value()));
    }

    #[test]
    fn test_set_range_orders_bounds() {
        let slider = Slider::default().with_range(20.0, 10.0);
        assert_eq!((slider.min(), slider.max()), (10.0, 20.0));
    }

    #[test]
    fn test_fractional_step_rounding() {
        let mut slider = Slider::default().with_range(0.0, 1.0).with_step(0.1);
        slider.set_value(0.1 + 0.2);
        assert_eq!(slider.value(), 0.3);
        assert_eq!(slider.display_value(), "0.3");
    }

    #[test]
    fn test_display_with() {
        let slider = Slider::default()
            .with_value(30.0)
            .with_display_with(|value| format!("{value}%"));
        assert_eq!(slider.display_value(), "30%");
    }

    #[test]
    fn test_tap_commits() {
        let mut slider = slider().with_step(10.0);
        let log = EventLog::attach(&slider.events);

        assert!(slider.pointer_down(&PointerEvent::mouse(Point::new(24.0, 50.0))));
        assert_eq!(slider.value(), 20.0);
        assert!(slider.is_dragging());
        assert_eq!(log.values(ValueChannel::Input), vec![20.0]);
        assert_eq!(log.values(ValueChannel::Change), vec![20.0]);

        assert!(slider.pointer_up(&PointerEvent::mouse(Point::new(24.0, 50.0))));
        assert!(!slider.is_dragging());
        assert_eq!(log.values(ValueChannel::Change), vec![20.0]);
    }

    #[test]
    fn test_secondary_button_ignored() {
        let mut slider = slider();
        let event = PointerEvent::new(PointerKind::Mouse(MouseButton::Right), Point::new(50.0, 0.0));
        assert!(!slider.pointer_down(&event));
        assert!(!slider.is_dragging());
        assert_eq!(slider.value(), 0.0);
    }

    #[test]
    fn test_pointer_enter_captures_ticks() {
        let mut slider = slider().with_tick_interval(TickInterval::Steps(10.0));
        assert_eq!(slider.tick_interval_percent(), 0.0);
        slider.pointer_enter();
        assert_eq!(slider.tick_interval_percent(), 0.1);
        assert_eq!(slider.track_rect(), Some(track()));
    }

    #[test]
    fn test_pointer_enter_ignored_while_disabled() {
        let mut slider = slider().with_disabled(true);
        slider.pointer_enter();
        assert_eq!(slider.track_rect(), None);
    }

    #[test]
    fn test_keyboard_sliding_flag() {
        let mut slider = Slider::default().with_value(50.0);
        assert!(slider.key_down(&press(Key::ArrowUp)));
        assert!(slider.is_sliding());
        assert_eq!(slider.value(), 51.0);
        assert!(slider.key_up(&KeyReleaseEvent::new(Key::ArrowUp)));
        assert!(!slider.is_sliding());
    }

    #[test]
    fn test_focus_out_ends_keyboard_slide() {
        let mut slider = slider().with_value(50.0);
        slider.focus_in();
        assert!(slider.key_down(&press(Key::ArrowUp)));
        slider.focus_out();
        assert!(!slider.is_sliding());

        assert!(slider.pointer_down(&PointerEvent::mouse(Point::new(20.0, 50.0))));
        assert!(slider.is_dragging());
    }

    #[test]
    fn test_window_blur_ends_keyboard_slide() {
        let mut slider = slider().with_value(50.0);
        assert!(slider.key_down(&press(Key::ArrowDown)));
        assert!(slider.window_blur());
        assert!(!slider.is_sliding());
        assert!(!slider.window_blur());

        assert!(slider.pointer_down(&PointerEvent::mouse(Point::new(20.0, 50.0))));
        assert!(slider.is_dragging());
    }

    #[test]
    fn test_keyboard_ignores_modifiers_and_unknown_keys() {
        let mut slider = Slider::default().with_value(50.0);
        assert!(!slider.key_down(&KeyPressEvent::new(Key::ArrowUp, KeyboardModifiers::SHIFT)));
        assert!(!slider.key_down(&press(Key::Other)));
        assert!(!slider.is_sliding());
        assert_eq!(slider.value(), 50.0);
    }

    #[test]
    fn test_key_at_bound_emits_nothing() {
        let mut slider = Slider::default().with_value(100.0);
        let log = EventLog::attach(&slider.events);
        assert!(slider.key_down(&press(Key::End)));
        assert!(log.drain().is_empty());
    }

    #[test]
    fn test_event_dispatch_prevents_default() {
        let mut slider = Slider::default();
        let mut handled = SliderEvent::KeyPress(press(Key::Home));
        assert!(slider.event(&mut handled));
        if let SliderEvent::KeyPress(e) = handled {
            assert!(e.base.is_accepted());
            assert!(e.base.is_default_prevented());
        }

        let mut ignored = SliderEvent::KeyPress(press(Key::Other));
        assert!(!slider.event(&mut ignored));
        if let SliderEvent::KeyPress(e) = ignored {
            assert!(!e.base.is_default_prevented());
        }
    }

    #[test]
    fn test_focus_out_emits_touched() {
        let mut slider = slider();
        let touched = Arc::new(AtomicBool::new(false));
        let flag = touched.clone();
        slider.events.touched.connect(move |_| flag.store(true, Ordering::SeqCst));

        slider.focus_in();
        assert!(slider.has_focus());
        assert!(slider.is_active());
        slider.focus_out();
        assert!(touched.load(Ordering::SeqCst));
        assert!(!slider.is_active());
    }

    #[test]
    fn test_direction_change_requests_update() {
        let direction = Arc::new(Directionality::default());
        let slider = Slider::default().with_directionality(direction.clone());
        slider.take_update_request();

        direction.set(TextDirection::RightToLeft);
        assert!(slider.needs_update());
        assert!(slider.should_invert_mouse_coordinates());
        assert!(slider.take_update_request());
        assert!(!slider.needs_update());
    }

    #[test]
    fn test_drop_unsubscribes_from_direction() {
        let direction = Arc::new(Directionality::default());
        let count_before = direction.changed.connection_count();
        {
            let _slider = Slider::default().with_directionality(direction.clone());
            assert_eq!(direction.changed.connection_count(), count_before + 1);
        }
        assert_eq!(direction.changed.connection_count(), count_before);
    }

    #[test]
    fn test_apply_attribute() {
        let mut slider = Slider::default();
        slider.apply_attribute("max", "50").unwrap();
        slider.apply_attribute("step", "0.5").unwrap();
        slider.apply_attribute("value", "12.5").unwrap();
        slider.apply_attribute("vertical", "").unwrap();
        slider.apply_attribute("tickInterval", "auto").unwrap();
        slider.apply_attribute("color", "warn").unwrap();
        slider.apply_attribute("tabIndex", "3").unwrap();

        assert_eq!(slider.max(), 50.0);
        assert_eq!(slider.value(), 12.5);
        assert!(slider.is_vertical());
        assert_eq!(slider.tick_interval(), TickInterval::Auto);
        assert_eq!(slider.color(), ThemePalette::Warn);
        assert_eq!(effective_tab_index(&slider), 3);

        slider.apply_attribute("max", "lots").unwrap();
        assert_eq!(slider.max(), 50.0);

        assert!(matches!(
            slider.apply_attribute("size", "3"),
            Err(SliderError::UnknownAttribute(name)) if name == "size"
        ));
    }

    #[test]
    fn test_disabled_leaves_tab_order() {
        let mut slider = Slider::default();
        slider.set_disabled_state(true);
        assert_eq!(effective_tab_index(&slider), -1);
    }

    #[test]
    fn test_config_snapshot() {
        let config = SliderConfig::default().with_range(0.0, 10.0).with_value(4.0);
        let slider = Slider::from_config(Arc::new(DetachedHost), &config).unwrap();
        assert_eq!(slider.config(), config);

        let bad = SliderConfig::default().with_step(-1.0);
        assert!(Slider::from_config(Arc::new(DetachedHost), &bad).is_err());
    }
}
