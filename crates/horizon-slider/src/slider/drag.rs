//! Drag session management.
//!
//! A drag owns the document-level pointer listeners for its whole lifetime.
//! The listeners are attached when the session begins and detached when its
//! [`ListenerBinding`] is dropped, so every path out of a drag (release,
//! cancel, window blur, dropping the slider) detaches exactly once.

use std::fmt;
use std::sync::Arc;

use horizon_slider_core::logging::targets;
use horizon_slider_core::{Point, PointerKind};

use crate::host::{ListenerSet, SliderHost};

/// Document-level listeners held for one drag.
pub struct ListenerBinding {
    host: Arc<dyn SliderHost>,
    set: ListenerSet,
}

impl ListenerBinding {
    /// Attach `set` on `host`; it is detached again on drop.
    pub fn attach(host: Arc<dyn SliderHost>, set: ListenerSet) -> Self {
        tracing::trace!(target: targets::DRAG, ?set, "attaching document listeners");
        host.attach_listeners(set);
        Self { host, set }
    }

    /// The listeners held by this binding.
    pub fn set(&self) -> ListenerSet {
        self.set
    }
}

impl Drop for ListenerBinding {
    fn drop(&mut self) {
        tracing::trace!(target: targets::DRAG, set = ?self.set, "detaching document listeners");
        self.host.detach_listeners(self.set);
    }
}

impl fmt::Debug for ListenerBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerBinding").field("set", &self.set).finish()
    }
}

/// One press-to-release interaction.
#[derive(Debug)]
pub struct DragSession {
    value_at_start: f64,
    pointer_at_start: Point,
    last_position: Point,
    _listeners: ListenerBinding,
}

/// What remains of a session once it has ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragRelease {
    /// Value before the press.
    pub value_at_start: f64,
    /// Where the press happened.
    pub pointer_at_start: Point,
    /// Where the pointer was released.
    pub pointer_at_end: Point,
}

impl DragRelease {
    /// Whether the pointer moved between press and release.
    pub fn pointer_moved(&self) -> bool {
        self.pointer_at_start != self.pointer_at_end
    }
}

/// Holds at most one active [`DragSession`].
#[derive(Debug, Default)]
pub struct DragSessionManager {
    session: Option<DragSession>,
}

impl DragSessionManager {
    /// Create an idle manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a drag is in progress.
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Start a session and attach its listeners.
    ///
    /// Returns `false` without touching the host if a session is already
    /// active.
    pub fn begin(
        &mut self,
        host: Arc<dyn SliderHost>,
        kind: PointerKind,
        position: Point,
        value_at_start: f64,
    ) -> bool {
        if self.session.is_some() {
            return false;
        }

        let listeners = ListenerBinding::attach(host, ListenerSet::for_pointer(kind));
        self.session = Some(DragSession {
            value_at_start,
            pointer_at_start: position,
            last_position: position,
            _listeners: listeners,
        });
        tracing::debug!(target: targets::DRAG, ?kind, x = position.x, y = position.y, "drag started");
        true
    }

    /// Remember the latest pointer position. Returns `false` when idle.
    pub fn record_move(&mut self, position: Point) -> bool {
        match self.session.as_mut() {
            Some(session) => {
                session.last_position = position;
                true
            }
            None => false,
        }
    }

    /// End the active session, detaching its listeners.
    ///
    /// `position` is the release point; `None` reuses the last recorded
    /// position. Returns `None` when idle.
    pub fn end(&mut self, position: Option<Point>) -> Option<DragRelease> {
        let session = self.session.take()?;
        let release = DragRelease {
            value_at_start: session.value_at_start,
            pointer_at_start: session.pointer_at_start,
            pointer_at_end: position.unwrap_or(session.last_position),
        };
        drop(session);
        tracing::debug!(
            target: targets::DRAG,
            moved = release.pointer_moved(),
            "drag ended"
        );
        Some(release)
    }
}
