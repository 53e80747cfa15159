//! Keyboard stepping.

use horizon_slider_core::{Key, TextDirection};

/// Number of steps moved by Page Up / Page Down.
pub const PAGE_STEPS: f64 = 10.0;

/// What a key press does to the value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KeyAction {
    /// Move by this many steps (negative moves towards `min`).
    Increment(f64),
    /// Jump to `min`.
    ToMin,
    /// Jump to `max`.
    ToMax,
}

impl KeyAction {
    /// The action bound to `key`, or `None` if the slider ignores it.
    ///
    /// Left and Right follow the reading direction; Up and Down do not.
    pub fn for_key(key: Key, direction: TextDirection) -> Option<Self> {
        let forward = if direction.is_rtl() { -1.0 } else { 1.0 };
        let action = match key {
            Key::PageUp => KeyAction::Increment(PAGE_STEPS),
            Key::PageDown => KeyAction::Increment(-PAGE_STEPS),
            Key::End => KeyAction::ToMax,
            Key::Home => KeyAction::ToMin,
            Key::ArrowLeft => KeyAction::Increment(-forward),
            Key::ArrowRight => KeyAction::Increment(forward),
            Key::ArrowUp => KeyAction::Increment(1.0),
            Key::ArrowDown => KeyAction::Increment(-1.0),
            Key::Other => return None,
        };
        Some(action)
    }

    /// The value after applying this action, clamped to `[min, max]`.
    pub fn apply(self, current: f64, min: f64, max: f64, step: f64) -> f64 {
        match self {
            KeyAction::Increment(steps) => (current + steps * step).clamp(min, max),
            KeyAction::ToMin => min,
            KeyAction::ToMax => max,
        }
    }
}
