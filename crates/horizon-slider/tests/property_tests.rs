//! Property tests for slider invariants.
//!
//! Uses proptest to verify:
//! 1. Range: the value stays within `[min, max]` after any gesture sequence
//! 2. Percent: percent is always derived from the current value and range
//! 3. Snap law: interior positions land on `min + k * step` (or on `max`)
//! 4. Edge law: the track ends map exactly to `min` and `max`
//! 5. Idempotence: the same position twice yields the same value
//! 6. Ordering: every `change` is preceded by an `input` with the same value

use std::sync::Arc;

use proptest::prelude::*;

use horizon_slider::{
    EventLog, FixedTrackHost, Key, KeyPressEvent, KeyReleaseEvent, KeyboardModifiers, Point,
    PointerEvent, Slider, TrackRect, ValueChannel,
};

const TRACK_WIDTH: f64 = 240.0;

// ── Strategies (proptest) ────────────────────────────────────────────

/// `(min, max, step)` with integer bounds and a handful of common steps.
fn arb_range() -> impl Strategy<Value = (f64, f64, f64)> {
    (
        -500i32..500,
        0i32..1000,
        prop::sample::select(vec![0.1, 0.25, 0.5, 1.0, 2.0, 3.0, 5.0, 7.0, 10.0]),
    )
        .prop_map(|(min, span, step)| (f64::from(min), f64::from(min + span), step))
}

fn arb_key() -> impl Strategy<Value = Key> {
    prop::sample::select(vec![
        Key::ArrowUp,
        Key::ArrowDown,
        Key::ArrowLeft,
        Key::ArrowRight,
        Key::PageUp,
        Key::PageDown,
        Key::Home,
        Key::End,
        Key::Other,
    ])
}

#[derive(Debug, Clone)]
enum Op {
    Down(f64),
    Move(f64),
    Up(f64),
    Blur,
    KeyDown(Key),
    KeyUp(Key),
}

fn arb_op() -> impl Strategy<Value = Op> {
    let x = -20.0..TRACK_WIDTH + 20.0;
    prop_oneof![
        x.clone().prop_map(Op::Down),
        x.clone().prop_map(Op::Move),
        x.prop_map(Op::Up),
        Just(Op::Blur),
        arb_key().prop_map(Op::KeyDown),
        arb_key().prop_map(Op::KeyUp),
    ]
}

fn slider_for((min, max, step): (f64, f64, f64), vertical: bool, invert: bool) -> Slider {
    let host = Arc::new(FixedTrackHost::new(TrackRect::new(0.0, 0.0, TRACK_WIDTH, TRACK_WIDTH)));
    let mut slider = Slider::new(host)
        .with_step(step)
        .with_range(min, max)
        .with_vertical(vertical)
        .with_invert(invert);
    slider.pointer_enter();
    slider
}

fn point(offset: f64) -> Point {
    Point::new(offset, offset)
}

fn apply(slider: &mut Slider, op: &Op) {
    match *op {
        Op::Down(x) => {
            slider.pointer_down(&PointerEvent::mouse(point(x)));
        }
        Op::Move(x) => {
            slider.pointer_move(&PointerEvent::mouse(point(x)));
        }
        Op::Up(x) => {
            slider.pointer_up(&PointerEvent::mouse(point(x)));
        }
        Op::Blur => {
            slider.window_blur();
        }
        Op::KeyDown(key) => {
            slider.key_down(&KeyPressEvent::new(key, KeyboardModifiers::NONE));
        }
        Op::KeyUp(key) => {
            slider.key_up(&KeyReleaseEvent::new(key));
        }
    }
}

fn expected_percent(slider: &Slider) -> f64 {
    let span = slider.max() - slider.min();
    if span > 0.0 {
        ((slider.value() - slider.min()) / span).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

fn on_step_grid(value: f64, min: f64, step: f64) -> bool {
    let steps = (value - min) / step;
    (steps - steps.round()).abs() < 1e-6
}

// ── 1 & 2. Range and Percent ─────────────────────────────────────────

proptest! {
    #[test]
    fn value_stays_in_range(
        range in arb_range(),
        vertical in any::<bool>(),
        invert in any::<bool>(),
        ops in prop::collection::vec(arb_op(), 1..40),
    ) {
        let mut slider = slider_for(range, vertical, invert);
        for op in &ops {
            apply(&mut slider, op);
            prop_assert!(slider.min() <= slider.value());
            prop_assert!(slider.value() <= slider.max());
            prop_assert_eq!(slider.percent(), expected_percent(&slider));
        }
    }
}

// ── 3. Snap Law ──────────────────────────────────────────────────────

proptest! {
    #[test]
    fn interior_positions_snap_to_step_grid(
        range in arb_range(),
        offset in 1.0..TRACK_WIDTH - 1.0,
    ) {
        let (min, max, step) = range;
        let mut slider = slider_for(range, false, false);
        slider.update_value_from_position(point(offset));

        let value = slider.value();
        prop_assert!(min <= value && value <= max);
        prop_assert!(on_step_grid(value, min, step) || value == max);
    }
}

// ── 4. Edge Law ──────────────────────────────────────────────────────

proptest! {
    #[test]
    fn track_ends_hit_bounds_exactly(
        range in arb_range(),
        vertical in any::<bool>(),
        invert in any::<bool>(),
    ) {
        let (min, max, _) = range;
        let mut slider = slider_for(range, vertical, invert);
        let start_is_min = !slider.should_invert_mouse_coordinates();

        slider.update_value_from_position(point(0.0));
        prop_assert_eq!(slider.value(), if start_is_min { min } else { max });

        slider.update_value_from_position(point(TRACK_WIDTH));
        prop_assert_eq!(slider.value(), if start_is_min { max } else { min });
    }
}

// ── 5. Idempotence ───────────────────────────────────────────────────

proptest! {
    #[test]
    fn same_position_same_value(
        range in arb_range(),
        vertical in any::<bool>(),
        offset in -20.0..TRACK_WIDTH + 20.0,
    ) {
        let mut slider = slider_for(range, vertical, false);
        slider.update_value_from_position(point(offset));
        let first = slider.value();
        prop_assert!(!slider.update_value_from_position(point(offset)));
        prop_assert_eq!(slider.value(), first);
    }
}

// ── 6. Emission Ordering ─────────────────────────────────────────────

proptest! {
    #[test]
    fn change_is_preceded_by_matching_input(
        range in arb_range(),
        ops in prop::collection::vec(arb_op(), 1..40),
    ) {
        let mut slider = slider_for(range, false, false);
        let log = EventLog::attach(&slider.events);
        for op in &ops {
            apply(&mut slider, op);
        }

        let events = log.drain();
        for (index, event) in events.iter().enumerate() {
            if event.channel == ValueChannel::Change {
                let preceded = events[..index]
                    .iter()
                    .any(|e| e.channel == ValueChannel::Input && e.value == event.value);
                prop_assert!(preceded, "change {} without prior input", event.value);
            }
        }
    }
}
