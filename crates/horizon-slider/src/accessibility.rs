//! Accessibility projection.
//!
//! The slider does not own an accessibility tree. It exposes the data an
//! assistive-technology bridge needs through [`Accessible`], and with the
//! `accessibility` feature builds a ready-made AccessKit node.

use horizon_slider_core::Orientation;
#[cfg(feature = "accessibility")]
use horizon_slider_core::logging::targets;

#[cfg(feature = "accessibility")]
use crate::capability::Focusable;
#[cfg(feature = "accessibility")]
use crate::slider::KeyAction;
use crate::Slider;

/// Semantic information a widget exposes to assistive technology.
pub trait Accessible {
    /// Human-readable name, if the host set one.
    fn accessible_name(&self) -> Option<String> {
        None
    }

    /// Value as text.
    fn accessible_value(&self) -> Option<String> {
        None
    }

    /// Value as a number.
    fn accessible_numeric_value(&self) -> Option<f64> {
        None
    }

    /// Minimum numeric value.
    fn accessible_min_value(&self) -> Option<f64> {
        None
    }

    /// Maximum numeric value.
    fn accessible_max_value(&self) -> Option<f64> {
        None
    }

    /// Numeric value step.
    fn accessible_value_step(&self) -> Option<f64> {
        None
    }

    /// Layout direction of a ranged widget.
    fn accessible_orientation(&self) -> Option<Orientation> {
        None
    }

    /// Whether the widget ignores input.
    fn is_accessible_disabled(&self) -> bool {
        false
    }

    /// Build an AccessKit node with the slider role.
    #[cfg(feature = "accessibility")]
    fn build_accessible_node(&self) -> accesskit::Node {
        use accesskit::{Action, Node, Role};

        let mut node = Node::new(Role::Slider);

        if let Some(name) = self.accessible_name() {
            node.set_label(name);
        }
        if let Some(value) = self.accessible_value() {
            node.set_value(value);
        }
        if let Some(value) = self.accessible_numeric_value() {
            node.set_numeric_value(value);
        }
        if let Some(min) = self.accessible_min_value() {
            node.set_min_numeric_value(min);
        }
        if let Some(max) = self.accessible_max_value() {
            node.set_max_numeric_value(max);
        }
        if let Some(step) = self.accessible_value_step() {
            node.set_numeric_value_step(step);
        }
        match self.accessible_orientation() {
            Some(Orientation::Horizontal) => node.set_orientation(accesskit::Orientation::Horizontal),
            Some(Orientation::Vertical) => node.set_orientation(accesskit::Orientation::Vertical),
            None => {}
        }

        if self.is_accessible_disabled() {
            node.set_disabled();
        } else {
            node.add_action(Action::Focus);
            node.add_action(Action::Increment);
            node.add_action(Action::Decrement);
            node.add_action(Action::SetValue);
        }

        node
    }
}

impl Accessible for Slider {
    fn accessible_value(&self) -> Option<String> {
        Some(self.display_value())
    }

    fn accessible_numeric_value(&self) -> Option<f64> {
        Some(self.value())
    }

    fn accessible_min_value(&self) -> Option<f64> {
        Some(self.min())
    }

    fn accessible_max_value(&self) -> Option<f64> {
        Some(self.max())
    }

    fn accessible_value_step(&self) -> Option<f64> {
        Some(self.step())
    }

    fn accessible_orientation(&self) -> Option<Orientation> {
        Some(self.orientation())
    }

    fn is_accessible_disabled(&self) -> bool {
        self.is_disabled()
    }
}

#[cfg(feature = "accessibility")]
impl Slider {
    /// AccessKit node describing the slider's current state.
    pub fn accessibility_node(&self) -> accesskit::Node {
        self.build_accessible_node()
    }

    /// Perform an action requested by assistive technology.
    ///
    /// Increment and Decrement move one step like the arrow keys; SetValue
    /// assigns a clamped value. Both emit `input` then `change` when the
    /// value moves. Returns `true` if the slider handled the request.
    pub fn handle_accessibility_action(&mut self, request: &accesskit::ActionRequest) -> bool {
        use accesskit::{Action, ActionData};

        if self.is_disabled() {
            return false;
        }
        tracing::debug!(target: targets::SLIDER, action = ?request.action, "accessibility action");

        match request.action {
            Action::Focus => {
                Focusable::focus(self);
                true
            }
            Action::Increment => {
                self.step_by(KeyAction::Increment(1.0));
                true
            }
            Action::Decrement => {
                self.step_by(KeyAction::Increment(-1.0));
                true
            }
            Action::SetValue => {
                let value = match &request.data {
                    Some(ActionData::NumericValue(value)) => Some(*value),
                    Some(ActionData::Value(text)) => text.trim().parse::<f64>().ok(),
                    _ => None,
                };
                match value {
                    Some(value) if value.is_finite() => {
                        self.commit_clamped(value);
                        true
                    }
                    _ => false,
                }
            }
            _ => false,
        }
    }
}
