//! Property tests for slider invariants.
//!
//! Uses proptest to verify:
//! 1. Ordering: the low handle never passes the high handle
//! 2. Clamp: percentages stay within [0, 1]
//! 3. Round trip: admissible values map to positions and back
//! 4. No overshoot: a blocked drag leaves the handle where it was

use kurbo::Point;
use proptest::prelude::*;
use twinslide_core::{HandleRole, RangeSlider, SliderBinding, ValueFormat};

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_role() -> impl Strategy<Value = HandleRole> {
    prop_oneof![Just(HandleRole::Low), Just(HandleRole::High)]
}

#[derive(Debug, Clone)]
enum Op {
    Drag(HandleRole, f64, f64),
    End(HandleRole),
    Value(HandleRole, f64),
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (arb_role(), -50.0..250.0_f64, -20.0..20.0_f64).prop_map(|(r, x, y)| Op::Drag(r, x, y)),
        arb_role().prop_map(Op::End),
        (arb_role(), -20.0..120.0_f64).prop_map(|(r, v)| Op::Value(r, v)),
    ]
}

fn apply(slider: &mut RangeSlider, op: &Op) {
    match *op {
        Op::Drag(role, x, y) => {
            slider.drag_changed(role, Point::new(x, y));
        }
        Op::End(role) => {
            slider.drag_ended(role);
        }
        Op::Value(role, v) => {
            slider.set_position_from_value(role, v);
        }
    }
}

// ── 1 & 2. Ordering and clamp ────────────────────────────────────────

proptest! {
    /// After any sequence of operations the handles stay ordered, on the
    /// track, on the center line, and within [0, 1].
    #[test]
    fn ordering_holds_after_every_op(ops in prop::collection::vec(arb_op(), 0..64)) {
        let mut slider = RangeSlider::with_values(200.0, 0.0, 100.0, Some(20.0), Some(80.0)).unwrap();
        for op in &ops {
            apply(&mut slider, op);
            let low = slider.position(HandleRole::Low);
            let high = slider.position(HandleRole::High);
            prop_assert!(low.x <= high.x);
            prop_assert!(low.x >= 0.0 && high.x <= 200.0);
            prop_assert_eq!(low.y, 1.0);
            prop_assert_eq!(high.y, 1.0);
            for role in HandleRole::ALL {
                let p = slider.percentage(role).get();
                prop_assert!((0.0..=1.0).contains(&p));
            }
        }
    }
}

// ── 3. Round trip ────────────────────────────────────────────────────

proptest! {
    /// A value between the sibling and the domain edge maps back to itself.
    #[test]
    fn value_round_trip(
        width in 10.0..2000.0_f64,
        start in -1000.0..1000.0_f64,
        span in 1.0..5000.0_f64,
        t in 0.0..0.99_f64,
    ) {
        let end = start + span;
        let mut slider = RangeSlider::new(width, start, end).unwrap();
        let v = start + t * span;
        slider.set_position_from_value(HandleRole::Low, v);
        let back = slider.value(HandleRole::Low);
        prop_assert!((back - v).abs() <= 1e-9 * span.max(1.0));
    }
}

// ── 4. No overshoot ──────────────────────────────────────────────────

proptest! {
    /// Dragging past the sibling is rejected; dragging onto it lands exactly.
    #[test]
    fn blocked_drag_does_not_overshoot(past in 0.001..40.0_f64) {
        let mut slider = RangeSlider::with_values(200.0, 0.0, 100.0, Some(20.0), Some(80.0)).unwrap();
        let high_x = slider.position(HandleRole::High).x;

        slider.drag_changed(HandleRole::Low, Point::new(high_x + past, 1.0));
        prop_assert_eq!(slider.position(HandleRole::Low).x, 40.0);

        slider.drag_changed(HandleRole::Low, Point::new(high_x, 1.0));
        prop_assert_eq!(slider.position(HandleRole::Low).x, high_x);
    }
}

// ── 5. Callback texts ────────────────────────────────────────────────

proptest! {
    /// Every callback carries both current texts.
    #[test]
    fn callback_matches_binding_texts(xs in prop::collection::vec(0.0..200.0_f64, 1..32)) {
        use std::cell::RefCell;
        use std::rc::Rc;

        let last = Rc::new(RefCell::new(None::<(String, String)>));
        let sink = last.clone();
        let slider = RangeSlider::new(200.0, 0.0, 100.0).unwrap();
        let mut binding = SliderBinding::new(slider, ValueFormat::default(), true)
            .on_change(move |low, high| *sink.borrow_mut() = Some((low.to_string(), high.to_string())));

        for x in xs {
            binding.drag_changed(HandleRole::High, Point::new(x, 1.0));
            if let Some((low, high)) = last.borrow().clone() {
                prop_assert_eq!(low.as_str(), binding.text(HandleRole::Low));
                prop_assert_eq!(high.as_str(), binding.text(HandleRole::High));
            }
        }
    }
}
