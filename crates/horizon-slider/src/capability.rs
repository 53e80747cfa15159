//! Small capability interfaces shared by interactive widgets.
//!
//! Each capability is an independent trait; a widget implements the ones it
//! supports instead of inheriting a fixed stack of behaviors.

use serde::{Deserialize, Serialize};

/// A widget that can be disabled.
pub trait Disableable {
    /// Whether user interaction is currently disabled.
    fn is_disabled(&self) -> bool;

    /// Enable or disable user interaction.
    fn set_disabled(&mut self, disabled: bool);
}

/// A widget that takes part in keyboard focus navigation.
pub trait Focusable {
    /// The tab index configured by the host.
    fn tab_index(&self) -> i32;

    /// Set the tab index.
    fn set_tab_index(&mut self, index: i32);

    /// Move focus to the widget.
    fn focus(&self);

    /// Remove focus from the widget.
    fn blur(&self);
}

/// Tab index to project onto the host element.
///
/// Disabled widgets are removed from the tab order.
pub fn effective_tab_index<W: Disableable + Focusable + ?Sized>(widget: &W) -> i32 {
    if widget.is_disabled() {
        -1
    } else {
        widget.tab_index()
    }
}

/// Theme palettes a widget can be drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePalette {
    /// The primary palette.
    Primary,
    /// The accent palette.
    #[default]
    Accent,
    /// The warning palette.
    Warn,
}

impl ThemePalette {
    /// Parse a palette name, returning `None` for unknown names.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim() {
            "primary" => Some(ThemePalette::Primary),
            "accent" => Some(ThemePalette::Accent),
            "warn" => Some(ThemePalette::Warn),
            _ => None,
        }
    }
}

/// A widget drawn in one of the theme palettes.
pub trait Themed {
    /// The current palette.
    fn color(&self) -> ThemePalette;

    /// Change the palette.
    fn set_color(&mut self, color: ThemePalette);
}
