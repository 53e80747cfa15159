//! Text direction and the shared directionality provider.

use serde::{Deserialize, Serialize};

use crate::logging::targets;
use crate::property::Property;
use crate::signal::Signal;

/// Base text direction of the surrounding layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TextDirection {
    /// Left-to-right direction (Latin, Cyrillic, Greek, etc.).
    #[default]
    #[serde(rename = "ltr")]
    LeftToRight,
    /// Right-to-left direction (Arabic, Hebrew, etc.).
    #[serde(rename = "rtl")]
    RightToLeft,
}

impl TextDirection {
    /// Check if this direction is left-to-right.
    pub fn is_ltr(self) -> bool {
        matches!(self, TextDirection::LeftToRight)
    }

    /// Check if this direction is right-to-left.
    pub fn is_rtl(self) -> bool {
        matches!(self, TextDirection::RightToLeft)
    }

    /// Parse the `dir` attribute spelling (`"ltr"` / `"rtl"`).
    ///
    /// Anything other than `"rtl"` resolves to left-to-right.
    pub fn from_attribute(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("rtl") {
            TextDirection::RightToLeft
        } else {
            TextDirection::LeftToRight
        }
    }
}

/// A directionality provider shared between the host and its widgets.
///
/// Hosts usually keep one per layout subtree inside an `Arc` and hand clones
/// to every widget that needs to mirror itself. Widgets subscribe to
/// [`changed`](Self::changed) to refresh derived presentation state.
#[derive(Debug, Default)]
pub struct Directionality {
    value: Property<TextDirection>,
    /// Emitted with the new direction whenever it changes.
    pub changed: Signal<TextDirection>,
}

impl Directionality {
    /// Create a provider with an initial direction.
    pub fn new(direction: TextDirection) -> Self {
        Self {
            value: Property::new(direction),
            changed: Signal::new(),
        }
    }

    /// Current direction.
    pub fn get(&self) -> TextDirection {
        self.value.get()
    }

    /// Change the direction, notifying subscribers if it differs.
    pub fn set(&self, direction: TextDirection) {
        if self.value.set(direction) {
            tracing::debug!(target: targets::CORE, ?direction, "text direction changed");
            self.changed.emit(direction);
        }
    }
}
