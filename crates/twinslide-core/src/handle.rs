//! Slider handles and the drag constraint.

use kurbo::Point;
use serde::{Deserialize, Serialize};

use crate::event::{HandleChange, HandleEvent};
use crate::track::Track;
use crate::value::UnitValue;

/// Touch target diameter of a handle in pixels.
pub const HANDLE_DIAMETER: f64 = 40.0;

/// Which end of the range a handle controls.
///
/// Also serves as the handle's index into the slider's handle pair, so a
/// handle refers to its sibling by role rather than by reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandleRole {
    Low,
    High,
}

impl HandleRole {
    /// Both roles, low first.
    pub const ALL: [HandleRole; 2] = [HandleRole::Low, HandleRole::High];

    /// Index into the slider's handle pair.
    pub fn index(self) -> usize {
        match self {
            HandleRole::Low => 0,
            HandleRole::High => 1,
        }
    }

    /// The other role.
    pub fn sibling(self) -> Self {
        match self {
            HandleRole::Low => HandleRole::High,
            HandleRole::High => HandleRole::Low,
        }
    }

    /// Whether a handle of this role may sit at `x` given its sibling's x.
    pub fn allows(self, x: f64, sibling_x: f64) -> bool {
        match self {
            HandleRole::Low => x <= sibling_x,
            HandleRole::High => x >= sibling_x,
        }
    }
}

/// One draggable point on the track.
///
/// Handles never own their sibling. The slider owns both and passes the
/// sibling in for every constrained move.
#[derive(Debug, Clone, PartialEq)]
pub struct Handle {
    role: HandleRole,
    sibling: HandleRole,
    /// Current constrained position.
    position: Point,
    /// Position at construction, restored by reset.
    start_location: Point,
    /// Last raw point delivered, before constraints.
    drag_location: Point,
    dragging: bool,
    diameter: f64,
}

impl Handle {
    /// Create a handle at `start` along the track. The sibling is fixed here.
    pub(crate) fn new(role: HandleRole, track: &Track, start: UnitValue) -> Self {
        let location = track.point_at(start);
        Self {
            role,
            sibling: role.sibling(),
            position: location,
            start_location: location,
            drag_location: Point::ZERO,
            dragging: false,
            diameter: HANDLE_DIAMETER,
        }
    }

    pub fn role(&self) -> HandleRole {
        self.role
    }

    /// Role of the sibling this handle is constrained against.
    pub fn sibling(&self) -> HandleRole {
        self.sibling
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn start_location(&self) -> Point {
        self.start_location
    }

    pub fn drag_location(&self) -> Point {
        self.drag_location
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn diameter(&self) -> f64 {
        self.diameter
    }

    /// Fraction of the track at the current position.
    pub fn percentage(&self, track: &Track) -> UnitValue {
        track.percentage_at(self.position.x)
    }

    /// Domain value at the current position.
    pub fn value(&self, track: &Track) -> f64 {
        track.value_at(self.percentage(track))
    }

    /// Check if a point is within `tolerance` of the handle center.
    pub fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        let dx = point.x - self.position.x;
        let dy = point.y - self.position.y;
        dx * dx + dy * dy <= tolerance * tolerance
    }

    /// Continuous pointer movement during a drag.
    pub(crate) fn on_drag_changed(
        &mut self,
        point: Point,
        track: &Track,
        sibling: &Handle,
    ) -> HandleEvent {
        self.dragging = true;
        self.drag_location = point;
        self.restrict_location(point, track, sibling)
    }

    /// End of the drag gesture. The position stays where it is.
    pub(crate) fn on_drag_ended(&mut self, track: &Track) -> HandleEvent {
        self.dragging = false;
        self.event(HandleChange::DragEnded, track)
    }

    /// Move to `point` if it is on the track and keeps the ordering with the
    /// sibling; otherwise leave the handle where it is.
    pub(crate) fn restrict_location(
        &mut self,
        point: Point,
        track: &Track,
        sibling: &Handle,
    ) -> HandleEvent {
        debug_assert_eq!(sibling.role, self.sibling);

        if !track.contains_x(point.x) || !self.role.allows(point.x, sibling.position.x) {
            log::trace!(
                "{:?} handle blocked at x={} (sibling x={})",
                self.role,
                point.x,
                sibling.position.x
            );
            return self.event(HandleChange::Blocked { requested: point }, track);
        }

        let from = self.position;
        self.position = Point::new(point.x, track.center_y());
        self.event(
            HandleChange::Moved {
                from,
                to: self.position,
            },
            track,
        )
    }

    /// Move to the pixel offset of a domain value, under the same constraint
    /// as a drag.
    pub(crate) fn set_position_from_value(
        &mut self,
        value: f64,
        track: &Track,
        sibling: &Handle,
    ) -> HandleEvent {
        self.drag_location.x = track.x_for_value(value);
        let target = self.drag_location;
        self.restrict_location(target, track, sibling)
    }

    /// Return to the start location and cancel any drag.
    pub(crate) fn reset(&mut self) {
        self.position = self.start_location;
        self.dragging = false;
    }

    fn event(&self, change: HandleChange, track: &Track) -> HandleEvent {
        HandleEvent {
            role: self.role,
            change,
            dragging: self.dragging,
            value: self.value(track),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(track: &Track, low: f64, high: f64) -> (Handle, Handle) {
        (
            Handle::new(HandleRole::Low, track, UnitValue::new(low)),
            Handle::new(HandleRole::High, track, UnitValue::new(high)),
        )
    }

    #[test]
    fn test_role_helpers() {
        assert_eq!(HandleRole::Low.sibling(), HandleRole::High);
        assert_eq!(HandleRole::High.sibling(), HandleRole::Low);
        assert_eq!(HandleRole::Low.index(), 0);
        assert_eq!(HandleRole::High.index(), 1);
        assert!(HandleRole::Low.allows(5.0, 5.0));
        assert!(!HandleRole::Low.allows(6.0, 5.0));
        assert!(HandleRole::High.allows(5.0, 5.0));
        assert!(!HandleRole::High.allows(4.0, 5.0));
    }

    #[test]
    fn test_initial_position_on_center_line() {
        let track = Track::new(200.0, 0.0, 100.0).unwrap();
        let (low, high) = pair(&track, 0.2, 0.8);
        assert_eq!(low.position(), Point::new(40.0, 1.0));
        assert_eq!(high.position(), Point::new(160.0, 1.0));
        assert_eq!(low.sibling(), HandleRole::High);
        assert!(!low.is_dragging());
    }

    #[test]
    fn test_drag_snaps_vertical_jitter() {
        let track = Track::new(200.0, 0.0, 100.0).unwrap();
        let (mut low, high) = pair(&track, 0.2, 0.8);
        let event = low.on_drag_changed(Point::new(60.0, 37.0), &track, &high);
        assert_eq!(low.position(), Point::new(60.0, 1.0));
        assert_eq!(low.drag_location(), Point::new(60.0, 37.0));
        assert!(low.is_dragging());
        assert!(event.moved());
        assert!((event.value - 30.0).abs() < 1e-10);
    }

    #[test]
    fn test_blocked_past_sibling() {
        let track = Track::new(200.0, 0.0, 100.0).unwrap();
        let (mut low, high) = pair(&track, 0.2, 0.8);
        let event = low.on_drag_changed(Point::new(180.0, 1.0), &track, &high);
        assert_eq!(low.position().x, 40.0);
        assert!(matches!(event.change, HandleChange::Blocked { .. }));
        assert!(event.dragging);
    }

    #[test]
    fn test_blocked_off_track() {
        let track = Track::new(200.0, 0.0, 100.0).unwrap();
        let (low, mut high) = pair(&track, 0.2, 0.8);
        high.on_drag_changed(Point::new(200.5, 1.0), &track, &low);
        assert_eq!(high.position().x, 160.0);
        high.on_drag_changed(Point::new(200.0, 1.0), &track, &low);
        assert_eq!(high.position().x, 200.0);
    }

    #[test]
    fn test_stops_exactly_at_sibling() {
        let track = Track::new(200.0, 0.0, 100.0).unwrap();
        let (mut low, high) = pair(&track, 0.2, 0.8);
        low.on_drag_changed(Point::new(160.0, 1.0), &track, &high);
        assert_eq!(low.position().x, high.position().x);
        low.on_drag_changed(Point::new(160.01, 1.0), &track, &high);
        assert_eq!(low.position().x, 160.0);
    }

    #[test]
    fn test_drag_ended_keeps_position() {
        let track = Track::new(200.0, 0.0, 100.0).unwrap();
        let (mut low, high) = pair(&track, 0.0, 1.0);
        low.on_drag_changed(Point::new(50.0, 1.0), &track, &high);
        let event = low.on_drag_ended(&track);
        assert!(!low.is_dragging());
        assert_eq!(event.change, HandleChange::DragEnded);
        assert_eq!(low.position().x, 50.0);
    }

    #[test]
    fn test_set_position_from_value_uses_constraint() {
        let track = Track::new(200.0, 0.0, 100.0).unwrap();
        let (low, mut high) = pair(&track, 0.2, 0.8);
        high.set_position_from_value(10.0, &track, &low);
        assert_eq!(high.position().x, 160.0);
        high.set_position_from_value(55.0, &track, &low);
        assert!((high.value(&track) - 55.0).abs() < 1e-10);
        assert!(!high.is_dragging());
    }

    #[test]
    fn test_hit_test() {
        let track = Track::new(200.0, 0.0, 100.0).unwrap();
        let (low, _) = pair(&track, 0.5, 1.0);
        assert!(low.hit_test(Point::new(110.0, 1.0), HANDLE_DIAMETER / 2.0));
        assert!(!low.hit_test(Point::new(130.0, 1.0), HANDLE_DIAMETER / 2.0));
    }

    #[test]
    fn test_reset() {
        let track = Track::new(200.0, 0.0, 100.0).unwrap();
        let (mut low, high) = pair(&track, 0.2, 0.8);
        low.on_drag_changed(Point::new(100.0, 1.0), &track, &high);
        low.reset();
        assert_eq!(low.position(), low.start_location());
        assert!(!low.is_dragging());
    }
}
