//! Input events delivered by the host.
//!
//! The host translates its platform events (DOM, winit, a test harness) into
//! these types and feeds them to the widget. Handlers mark an event accepted
//! when they consume it, and request `prevent_default` when the host should
//! suppress the platform's default action (text selection, page scrolling).

use crate::geometry::Point;

/// Keyboard modifiers that may be held during input events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct KeyboardModifiers {
    /// The Shift key is held.
    pub shift: bool,
    /// The Control key is held.
    pub control: bool,
    /// The Alt key is held (Option on macOS).
    pub alt: bool,
    /// The Meta/Super key is held (Windows key, Cmd on macOS).
    pub meta: bool,
}

impl KeyboardModifiers {
    /// No modifiers pressed.
    pub const NONE: Self = Self {
        shift: false,
        control: false,
        alt: false,
        meta: false,
    };

    /// Shift modifier only.
    pub const SHIFT: Self = Self {
        shift: true,
        control: false,
        alt: false,
        meta: false,
    };

    /// Control modifier only.
    pub const CTRL: Self = Self {
        shift: false,
        control: true,
        alt: false,
        meta: false,
    };

    /// Alt modifier only.
    pub const ALT: Self = Self {
        shift: false,
        control: false,
        alt: true,
        meta: false,
    };

    /// Check if any modifier is pressed.
    pub fn any(&self) -> bool {
        self.shift || self.control || self.alt || self.meta
    }

    /// Check if no modifiers are pressed.
    pub fn none(&self) -> bool {
        !self.any()
    }
}

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MouseButton {
    /// Primary button (usually left).
    Left = 0,
    /// Middle button (scroll wheel click).
    Middle = 1,
    /// Secondary button (usually right).
    Right = 2,
}

/// Common data for all input events.
#[derive(Debug, Clone, Copy, Default)]
pub struct EventBase {
    accepted: bool,
    default_prevented: bool,
}

impl EventBase {
    /// Create a new event base.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the event has been accepted.
    pub fn is_accepted(&self) -> bool {
        self.accepted
    }

    /// Accept the event, preventing further propagation.
    pub fn accept(&mut self) {
        self.accepted = true;
    }

    /// Ignore the event, allowing further propagation.
    pub fn ignore(&mut self) {
        self.accepted = false;
    }

    /// Ask the host to suppress the platform default action.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Whether the default action was suppressed.
    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// The device that produced a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerKind {
    /// A mouse, with the button involved in the event.
    Mouse(MouseButton),
    /// A touch contact. Only the first contact is tracked.
    Touch,
}

impl PointerKind {
    /// Whether this pointer may start a drag.
    ///
    /// Touch contacts always can; mice only with the primary button.
    pub fn is_primary(self) -> bool {
        match self {
            PointerKind::Mouse(button) => button == MouseButton::Left,
            PointerKind::Touch => true,
        }
    }

    /// Whether this is a touch contact.
    pub fn is_touch(self) -> bool {
        matches!(self, PointerKind::Touch)
    }
}

/// A pointer (mouse or touch) event in page coordinates.
#[derive(Debug, Clone, Copy)]
pub struct PointerEvent {
    /// Base event data.
    pub base: EventBase,
    /// Device that produced the event.
    pub kind: PointerKind,
    /// Position in page coordinates.
    pub position: Point,
    /// Keyboard modifiers held during the event.
    pub modifiers: KeyboardModifiers,
}

impl PointerEvent {
    /// Create a new pointer event.
    pub fn new(kind: PointerKind, position: Point) -> Self {
        Self {
            base: EventBase::new(),
            kind,
            position,
            modifiers: KeyboardModifiers::NONE,
        }
    }

    /// A primary-button mouse event at `position`.
    pub fn mouse(position: Point) -> Self {
        Self::new(PointerKind::Mouse(MouseButton::Left), position)
    }

    /// A touch event at `position`.
    pub fn touch(position: Point) -> Self {
        Self::new(PointerKind::Touch, position)
    }

    /// Set the modifiers using builder pattern.
    pub fn with_modifiers(mut self, modifiers: KeyboardModifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

/// Keys the slider reacts to.
///
/// Keys without slider semantics arrive as [`Key::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Up arrow.
    ArrowUp,
    /// Down arrow.
    ArrowDown,
    /// Left arrow.
    ArrowLeft,
    /// Right arrow.
    ArrowRight,
    /// Home.
    Home,
    /// End.
    End,
    /// Page Up.
    PageUp,
    /// Page Down.
    PageDown,
    /// Any other key.
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` name to a key.
    pub fn from_dom_key(name: &str) -> Self {
        match name {
            "ArrowUp" | "Up" => Key::ArrowUp,
            "ArrowDown" | "Down" => Key::ArrowDown,
            "ArrowLeft" | "Left" => Key::ArrowLeft,
            "ArrowRight" | "Right" => Key::ArrowRight,
            "Home" => Key::Home,
            "End" => Key::End,
            "PageUp" => Key::PageUp,
            "PageDown" => Key::PageDown,
            _ => Key::Other,
        }
    }
}

/// Key press event.
#[derive(Debug, Clone, Copy)]
pub struct KeyPressEvent {
    /// Base event data.
    pub base: EventBase,
    /// The key that was pressed.
    pub key: Key,
    /// Keyboard modifiers held during the event.
    pub modifiers: KeyboardModifiers,
}

impl KeyPressEvent {
    /// Create a new key press event.
    pub fn new(key: Key, modifiers: KeyboardModifiers) -> Self {
        Self {
            base: EventBase::new(),
            key,
            modifiers,
        }
    }
}

/// Key release event.
#[derive(Debug, Clone, Copy)]
pub struct KeyReleaseEvent {
    /// Base event data.
    pub base: EventBase,
    /// The key that was released.
    pub key: Key,
}

impl KeyReleaseEvent {
    /// Create a new key release event.
    pub fn new(key: Key) -> Self {
        Self {
            base: EventBase::new(),
            key,
        }
    }
}
