//! Value notifications.
//!
//! All value notifications travel through one observer list. Each emission
//! carries the channel it belongs to, and the subscription helpers filter
//! by channel, so observers that listen to several channels see them in
//! emission order.

use std::sync::Arc;

use horizon_slider_core::{ConnectionId, Signal};

/// Kind of value notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueChannel {
    /// Every mutation of the value, whatever caused it.
    Value,
    /// A user gesture changed the value.
    Input,
    /// A user gesture committed a value.
    Change,
}

/// A single value notification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueEvent {
    /// Which channel the event was emitted on.
    pub channel: ValueChannel,
    /// The slider value at emission time.
    pub value: f64,
}

/// The slider's observer list.
#[derive(Debug, Default)]
pub struct SliderEmitter {
    events: Signal<ValueEvent>,
    /// Emitted when the slider loses focus.
    pub touched: Signal<()>,
}

impl SliderEmitter {
    /// Create an emitter with no observers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Observe a single channel.
    pub fn subscribe<F>(&self, channel: ValueChannel, observer: F) -> ConnectionId
    where
        F: Fn(f64) + Send + Sync + 'static,
    {
        self.events.connect(move |event: &ValueEvent| {
            if event.channel == channel {
                observer(event.value);
            }
        })
    }

    /// Observe every channel.
    pub fn on_any<F>(&self, observer: F) -> ConnectionId
    where
        F: Fn(&ValueEvent) + Send + Sync + 'static,
    {
        self.events.connect(observer)
    }

    /// Observe every value mutation.
    pub fn on_value<F>(&self, observer: F) -> ConnectionId
    where
        F: Fn(f64) + Send + Sync + 'static,
    {
        self.subscribe(ValueChannel::Value, observer)
    }

    /// Observe user-driven value changes.
    pub fn on_input<F>(&self, observer: F) -> ConnectionId
    where
        F: Fn(f64) + Send + Sync + 'static,
    {
        self.subscribe(ValueChannel::Input, observer)
    }

    /// Observe committed values.
    pub fn on_change<F>(&self, observer: F) -> ConnectionId
    where
        F: Fn(f64) + Send + Sync + 'static,
    {
        self.subscribe(ValueChannel::Change, observer)
    }

    /// Remove an observer. Returns `false` for unknown ids.
    pub fn unsubscribe(&self, id: ConnectionId) -> bool {
        self.events.disconnect(id)
    }

    /// Number of value observers.
    pub fn observer_count(&self) -> usize {
        self.events.connection_count()
    }

    pub(crate) fn emit(&self, channel: ValueChannel, value: f64) {
        self.events.emit(ValueEvent { channel, value });
    }

    /// Emit `input` then `change` for one committed transition.
    pub(crate) fn commit(&self, value: f64) {
        self.emit(ValueChannel::Input, value);
        self.emit(ValueChannel::Change, value);
    }
}

/// Collects every [`ValueEvent`] into a shared buffer.
///
/// Handy for hosts that batch notifications and for tests.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Arc<parking_lot::Mutex<Vec<ValueEvent>>>,
}

impl EventLog {
    /// Start recording everything `emitter` emits.
    pub fn attach(emitter: &SliderEmitter) -> Self {
        let log = Self::default();
        let sink = log.events.clone();
        emitter.on_any(move |event| sink.lock().push(*event));
        log
    }

    /// Remove and return everything recorded so far.
    pub fn drain(&self) -> Vec<ValueEvent> {
        std::mem::take(&mut *self.events.lock())
    }

    /// Recorded events on one channel.
    pub fn values(&self, channel: ValueChannel) -> Vec<f64> {
        self.events
            .lock()
            .iter()
            .filter(|event| event.channel == channel)
            .map(|event| event.value)
            .collect()
    }
}
