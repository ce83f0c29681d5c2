//! Change events emitted by handles and re-emitted by the slider.

use std::fmt;

use kurbo::Point;

use crate::handle::HandleRole;

/// What a single handle operation did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HandleChange {
    /// The requested point was accepted.
    Moved { from: Point, to: Point },
    /// The requested point was off the track or past the sibling.
    Blocked { requested: Point },
    /// The drag gesture finished.
    DragEnded,
}

/// Event produced by every handle mutation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleEvent {
    pub role: HandleRole,
    pub change: HandleChange,
    /// Drag state after the operation.
    pub dragging: bool,
    /// Domain value after the operation.
    pub value: f64,
}

impl HandleEvent {
    /// Whether the handle position actually changed.
    pub fn moved(&self) -> bool {
        matches!(self.change, HandleChange::Moved { from, to } if from != to)
    }
}

/// Events delivered to slider listeners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SliderEvent {
    /// A handle was mutated.
    Handle(HandleEvent),
    /// Both handles went back to their start locations.
    Reset,
}

impl SliderEvent {
    /// The role of the handle this event concerns, if any.
    pub fn role(&self) -> Option<HandleRole> {
        match self {
            SliderEvent::Handle(e) => Some(e.role),
            SliderEvent::Reset => None,
        }
    }
}

/// Identifier returned when registering a listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&SliderEvent)>;

/// Synchronous listener list. Every emitted event reaches every listener,
/// in registration order.
#[derive(Default)]
pub struct Listeners {
    next_id: u64,
    entries: Vec<(ListenerId, Listener)>,
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener.
    pub fn add(&mut self, listener: impl FnMut(&SliderEvent) + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Deliver an event to all listeners.
    pub fn emit(&mut self, event: &SliderEvent) {
        if self.is_empty() {
            return;
        }
        log::trace!("Emitting {:?} to {} listener(s)", event, self.len());
        for (_, listener) in self.entries.iter_mut() {
            listener(event);
        }
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.len())
            .finish()
    }
}
