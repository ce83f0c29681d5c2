//! The two-handle range slider.

use kurbo::{Line, Point};

use crate::event::{HandleEvent, ListenerId, Listeners, SliderEvent};
use crate::format::format_fixed;
use crate::handle::{Handle, HandleRole};
use crate::track::{Track, TrackError};
use crate::value::UnitValue;

/// Decimal places used for the delta strings unless configured otherwise.
pub const DEFAULT_PRECISION: usize = 0;

/// A track with a low and a high handle that can never cross.
///
/// The slider owns both handles and routes every mutation through the
/// sibling constraint. Each mutation is re-emitted to listeners
/// synchronously, before the mutating call returns.
#[derive(Debug)]
pub struct RangeSlider {
    track: Track,
    /// Indexed by [`HandleRole::index`].
    handles: [Handle; 2],
    precision: usize,
    listeners: Listeners,
}

impl RangeSlider {
    /// Create a slider with handles at both ends of the domain.
    pub fn new(width: f64, start: f64, end: f64) -> Result<Self, TrackError> {
        Ok(Self::from_track(Track::new(width, start, end)?, None, None))
    }

    /// Create a slider with optional initial values.
    pub fn with_values(
        width: f64,
        start: f64,
        end: f64,
        low: Option<f64>,
        high: Option<f64>,
    ) -> Result<Self, TrackError> {
        Ok(Self::from_track(Track::new(width, start, end)?, low, high))
    }

    /// Create a slider on an existing track.
    ///
    /// Initial values are used only when both are given. They are clamped to
    /// the domain and the high handle is raised to the low one if needed.
    pub fn from_track(track: Track, low: Option<f64>, high: Option<f64>) -> Self {
        let (low_start, high_start) = match (low, high) {
            (Some(low), Some(high)) => {
                let low = track.percentage_for_value(low);
                let high = track.percentage_for_value(high);
                (low, if high < low { low } else { high })
            }
            _ => (UnitValue::MIN, UnitValue::MAX),
        };

        log::debug!(
            "Creating range slider: width={}, domain={}..{}, start={:.3}..{:.3}",
            track.width(),
            track.start(),
            track.end(),
            low_start.get(),
            high_start.get()
        );

        Self {
            track,
            handles: [
                Handle::new(HandleRole::Low, &track, low_start),
                Handle::new(HandleRole::High, &track, high_start),
            ],
            precision: DEFAULT_PRECISION,
            listeners: Listeners::new(),
        }
    }

    /// Set the number of decimal places used by the delta strings.
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    pub fn track(&self) -> &Track {
        &self.track
    }

    pub fn precision(&self) -> usize {
        self.precision
    }

    pub fn handle(&self, role: HandleRole) -> &Handle {
        &self.handles[role.index()]
    }

    pub fn low(&self) -> &Handle {
        self.handle(HandleRole::Low)
    }

    pub fn high(&self) -> &Handle {
        self.handle(HandleRole::High)
    }

    pub fn position(&self, role: HandleRole) -> Point {
        self.handle(role).position()
    }

    pub fn percentage(&self, role: HandleRole) -> UnitValue {
        self.handle(role).percentage(&self.track)
    }

    pub fn value(&self, role: HandleRole) -> f64 {
        self.handle(role).value(&self.track)
    }

    /// `high.value - low.value`.
    pub fn value_delta(&self) -> f64 {
        self.value(HandleRole::High) - self.value(HandleRole::Low)
    }

    /// `high.percentage - low.percentage`, as a fraction.
    pub fn percentage_delta(&self) -> f64 {
        self.percentage(HandleRole::High).get() - self.percentage(HandleRole::Low).get()
    }

    /// Value delta rounded to the configured precision.
    pub fn value_delta_text(&self) -> String {
        format_fixed(self.value_delta(), self.precision)
    }

    /// Percentage delta rounded to the configured precision.
    pub fn percentage_delta_text(&self) -> String {
        format_fixed(self.percentage_delta(), self.precision)
    }

    /// Line between the two handles, for drawing the selected span.
    pub fn connector(&self) -> Line {
        Line::new(self.position(HandleRole::Low), self.position(HandleRole::High))
    }

    /// Handles within `tolerance` of `point`, nearest first.
    pub fn hits(&self, point: Point, tolerance: f64) -> Vec<HandleRole> {
        let mut hits: Vec<(HandleRole, f64)> = HandleRole::ALL
            .iter()
            .map(|&role| (role, self.handle(role)))
            .filter(|(_, handle)| handle.hit_test(point, tolerance))
            .map(|(role, handle)| (role, handle.position().distance(point)))
            .collect();
        hits.sort_by(|a, b| a.1.total_cmp(&b.1));
        hits.into_iter().map(|(role, _)| role).collect()
    }

    /// Register a listener for every handle mutation.
    pub fn subscribe(&mut self, listener: impl FnMut(&SliderEvent) + 'static) -> ListenerId {
        self.listeners.add(listener)
    }

    /// Remove a listener.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    /// Pointer movement on a handle during a drag.
    pub fn drag_changed(&mut self, role: HandleRole, point: Point) -> HandleEvent {
        let track = self.track;
        let (handle, sibling) = self.split(role);
        let event = handle.on_drag_changed(point, &track, sibling);
        self.emit(event)
    }

    /// End of a drag on a handle.
    pub fn drag_ended(&mut self, role: HandleRole) -> HandleEvent {
        let track = self.track;
        let event = self.handles[role.index()].on_drag_ended(&track);
        self.emit(event)
    }

    /// Move a handle to a point if the constraint allows it, without
    /// touching the drag state.
    pub fn restrict_location(&mut self, role: HandleRole, point: Point) -> HandleEvent {
        let track = self.track;
        let (handle, sibling) = self.split(role);
        let event = handle.restrict_location(point, &track, sibling);
        self.emit(event)
    }

    /// Move a handle to a domain value if the constraint allows it.
    pub fn set_position_from_value(&mut self, role: HandleRole, value: f64) -> HandleEvent {
        let track = self.track;
        let (handle, sibling) = self.split(role);
        let event = handle.set_position_from_value(value, &track, sibling);
        self.emit(event)
    }

    /// Put both handles back at their start locations.
    pub fn reset(&mut self) {
        for handle in self.handles.iter_mut() {
            handle.reset();
        }
        self.listeners.emit(&SliderEvent::Reset);
    }

    fn split(&mut self, role: HandleRole) -> (&mut Handle, &Handle) {
        let [low, high] = &mut self.handles;
        match role {
            HandleRole::Low => (low, &*high),
            HandleRole::High => (high, &*low),
        }
    }

    fn emit(&mut self, event: HandleEvent) -> HandleEvent {
        self.listeners.emit(&SliderEvent::Handle(event));
        event
    }
}
