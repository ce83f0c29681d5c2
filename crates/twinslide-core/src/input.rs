//! Pointer routing: turns raw pointer events into handle drag gestures.

use kurbo::Point;
use serde::{Deserialize, Serialize};

use crate::event::HandleEvent;
use crate::handle::{HANDLE_DIAMETER, HandleRole};
use crate::slider::RangeSlider;

/// Pointer event in track-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PointerEvent {
    Down { position: Point },
    Move { position: Point },
    Up { position: Point },
}

/// Captures a handle on pointer down and forwards the gesture to it.
///
/// At most one handle is dragged at a time. Moves and releases with no
/// captured handle are ignored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerRouter {
    /// Handle captured by the current gesture.
    active: Option<HandleRole>,
    /// Hit radius around each handle center.
    tolerance: f64,
}

impl Default for PointerRouter {
    fn default() -> Self {
        Self {
            active: None,
            tolerance: HANDLE_DIAMETER / 2.0,
        }
    }
}

impl PointerRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom hit radius.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Handle captured by the current gesture, if any.
    pub fn active(&self) -> Option<HandleRole> {
        self.active
    }

    /// Process one pointer event. Returns the handle event if a handle was
    /// driven by it.
    pub fn handle_pointer_event(
        &mut self,
        slider: &mut RangeSlider,
        event: PointerEvent,
    ) -> Option<HandleEvent> {
        match event {
            PointerEvent::Down { position } => {
                self.active = self.pick(slider, position);
                log::trace!("Pointer down at {:?} captured {:?}", position, self.active);
                None
            }
            PointerEvent::Move { position } => {
                let role = self.active?;
                Some(slider.drag_changed(role, position))
            }
            PointerEvent::Up { .. } => {
                let role = self.active.take()?;
                Some(slider.drag_ended(role))
            }
        }
    }

    /// Pick the handle under `point`.
    ///
    /// Stacked handles are disambiguated by which side of them the pointer is
    /// on, since only one of the two can move in that direction.
    pub fn pick(&self, slider: &RangeSlider, point: Point) -> Option<HandleRole> {
        let hits = slider.hits(point, self.tolerance);
        let nearest = *hits.first()?;
        if hits.len() < 2 {
            return Some(nearest);
        }

        let low_x = slider.position(HandleRole::Low).x;
        let high_x = slider.position(HandleRole::High).x;
        if low_x != high_x {
            return Some(nearest);
        }

        if point.x < low_x {
            Some(HandleRole::Low)
        } else if point.x > high_x || high_x < slider.track().width() {
            Some(HandleRole::High)
        } else {
            Some(HandleRole::Low)
        }
    }
}
