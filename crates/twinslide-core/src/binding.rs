//! Two-way binding between the slider handles and their text inputs.

use std::fmt;

use kurbo::Point;

use crate::config::{ConfigError, SliderConfig};
use crate::event::{HandleEvent, ListenerId, SliderEvent};
use crate::format::{ValueFormat, ValueMode};
use crate::handle::HandleRole;
use crate::input::{PointerEvent, PointerRouter};
use crate::slider::RangeSlider;

type ChangeCallback = Box<dyn FnMut(&str, &str)>;

/// Keeps one text per handle in sync with the handle values.
///
/// Text edits move the matching handle through the same constraint as a
/// drag. Whenever a handle value changes, its text is reformatted and the
/// change callback receives both texts, low first.
pub struct SliderBinding {
    slider: RangeSlider,
    format: ValueFormat,
    /// Indexed by [`HandleRole::index`].
    texts: [String; 2],
    editable: bool,
    router: PointerRouter,
    on_change: Option<ChangeCallback>,
}

impl SliderBinding {
    /// Bind a slider with the given formatter.
    pub fn new(slider: RangeSlider, format: ValueFormat, editable: bool) -> Self {
        let texts = HandleRole::ALL.map(|role| format.format(slider.value(role)));
        Self {
            slider,
            format,
            texts,
            editable,
            router: PointerRouter::new(),
            on_change: None,
        }
    }

    /// Build the slider and binding from a configuration.
    pub fn from_config(config: &SliderConfig) -> Result<Self, ConfigError> {
        let track = config.track()?;
        let (low, high) = config.initial_values((track.start(), track.end()));
        let slider = RangeSlider::from_track(track, low, high).with_precision(config.precision);
        let tolerance = config.check_tolerance()?;
        log::debug!("Binding slider in {:?} mode", config.mode);
        Ok(Self::new(slider, config.format(), config.editable).with_hit_tolerance(tolerance))
    }

    /// Set the pointer hit radius around each handle center.
    pub fn with_hit_tolerance(mut self, tolerance: f64) -> Self {
        self.router = self.router.with_tolerance(tolerance);
        self
    }

    /// Set the callback invoked with `(low_text, high_text)` on every change.
    pub fn on_change(mut self, callback: impl FnMut(&str, &str) + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    pub fn slider(&self) -> &RangeSlider {
        &self.slider
    }

    pub fn format(&self) -> &ValueFormat {
        &self.format
    }

    pub fn mode(&self) -> ValueMode {
        self.format.mode()
    }

    pub fn is_editable(&self) -> bool {
        self.editable
    }

    pub fn text(&self, role: HandleRole) -> &str {
        &self.texts[role.index()]
    }

    /// Both texts, low first.
    pub fn texts(&self) -> (&str, &str) {
        (self.text(HandleRole::Low), self.text(HandleRole::High))
    }

    /// Register a listener on the underlying slider.
    pub fn subscribe(&mut self, listener: impl FnMut(&SliderEvent) + 'static) -> ListenerId {
        self.slider.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.slider.unsubscribe(id)
    }

    /// Pointer movement on a handle during a drag.
    pub fn drag_changed(&mut self, role: HandleRole, point: Point) -> HandleEvent {
        let event = self.slider.drag_changed(role, point);
        self.settle(event)
    }

    /// End of a drag on a handle.
    pub fn drag_ended(&mut self, role: HandleRole) -> HandleEvent {
        let event = self.slider.drag_ended(role);
        self.settle(event)
    }

    /// Route a raw pointer event through hit testing to a handle.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) -> Option<HandleEvent> {
        let event = self.router.handle_pointer_event(&mut self.slider, event)?;
        Some(self.settle(event))
    }

    /// Handle currently captured by a pointer gesture.
    pub fn active_handle(&self) -> Option<HandleRole> {
        self.router.active()
    }

    /// Apply an edit to a handle's text input.
    ///
    /// Ignored when the inputs are not editable. Unreadable text is parsed
    /// leniently, see [`ValueFormat::parse`].
    pub fn text_changed(&mut self, role: HandleRole, text: &str) -> Option<HandleEvent> {
        if !self.editable {
            log::debug!("Ignoring edit of read-only {:?} input", role);
            return None;
        }
        self.texts[role.index()] = text.to_string();
        let value = self.format.parse(text);
        let event = self.slider.set_position_from_value(role, value);
        Some(self.settle(event))
    }

    /// Put both handles back at their start locations.
    pub fn reset(&mut self) {
        self.slider.reset();
        let mut changed = false;
        for role in HandleRole::ALL {
            let text = self.format.format(self.slider.value(role));
            if text != self.texts[role.index()] {
                self.texts[role.index()] = text;
                changed = true;
            }
        }
        if changed {
            self.notify();
        }
    }

    fn settle(&mut self, event: HandleEvent) -> HandleEvent {
        if event.moved() {
            self.texts[event.role.index()] = self.format.format(event.value);
            self.notify();
        }
        event
    }

    fn notify(&mut self) {
        if let Some(callback) = self.on_change.as_mut() {
            let [low, high] = &self.texts;
            callback(low, high);
        }
    }
}

impl fmt::Debug for SliderBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliderBinding")
            .field("slider", &self.slider)
            .field("format", &self.format)
            .field("texts", &self.texts)
            .field("editable", &self.editable)
            .field("router", &self.router)
            .finish_non_exhaustive()
    }
}
