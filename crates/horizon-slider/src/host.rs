//! The slider's collaborators in the host environment.
//!
//! The slider never touches a document, window or layout engine directly.
//! Instead it asks its [`SliderHost`] to measure the track, to start and stop
//! delivering document-level pointer events during a drag, and to move focus.

use parking_lot::Mutex;

use horizon_slider_core::{PointerKind, TrackRect};

/// Which document-level listeners a drag needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerSet {
    /// `mousemove` and `mouseup`.
    Mouse,
    /// `touchmove`, `touchend` and `touchcancel`.
    Touch,
}

impl ListenerSet {
    /// The set needed for drags started by `kind`.
    pub fn for_pointer(kind: PointerKind) -> Self {
        if kind.is_touch() {
            ListenerSet::Touch
        } else {
            ListenerSet::Mouse
        }
    }

    /// DOM event names covered by this set.
    pub fn event_names(self) -> &'static [&'static str] {
        match self {
            ListenerSet::Mouse => &["mousemove", "mouseup"],
            ListenerSet::Touch => &["touchmove", "touchend", "touchcancel"],
        }
    }
}

/// Services the host provides to a slider.
///
/// Hosts route the events delivered by the attached listeners back into
/// [`Slider::pointer_move`](crate::Slider::pointer_move) and
/// [`Slider::pointer_up`](crate::Slider::pointer_up) (or
/// [`pointer_cancel`](crate::Slider::pointer_cancel)).
pub trait SliderHost: Send + Sync {
    /// Measure the track's bounding box in page coordinates.
    ///
    /// Returns `None` while the track has not been laid out.
    fn track_rect(&self) -> Option<TrackRect>;

    /// Start delivering document-level pointer events to the slider.
    fn attach_listeners(&self, _set: ListenerSet) {}

    /// Stop delivering document-level pointer events to the slider.
    fn detach_listeners(&self, _set: ListenerSet) {}

    /// Move keyboard focus to the slider's host element.
    fn focus(&self) {}

    /// Remove keyboard focus from the slider's host element.
    fn blur(&self) {}
}

/// A host with no layout: geometry is never available.
///
/// Used by [`Slider::default`](crate::Slider), so the value model and
/// keyboard stepping work without any environment while pointer input is
/// ignored.
#[derive(Debug, Default, Clone, Copy)]
pub struct DetachedHost;

impl SliderHost for DetachedHost {
    fn track_rect(&self) -> Option<TrackRect> {
        None
    }
}

/// A host whose track rectangle is set by hand.
///
/// Useful for headless embedding where layout is computed elsewhere and
/// pushed in after every reflow.
#[derive(Debug, Default)]
pub struct FixedTrackHost {
    rect: Mutex<Option<TrackRect>>,
}

impl FixedTrackHost {
    /// Create a host reporting `rect`.
    pub fn new(rect: TrackRect) -> Self {
        Self {
            rect: Mutex::new(Some(rect)),
        }
    }

    /// Replace the reported rectangle.
    pub fn set_rect(&self, rect: Option<TrackRect>) {
        *self.rect.lock() = rect;
    }
}

impl SliderHost for FixedTrackHost {
    fn track_rect(&self) -> Option<TrackRect> {
        *self.rect.lock()
    }
}
