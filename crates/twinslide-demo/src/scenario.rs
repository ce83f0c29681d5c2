//! Scripted slider sessions loaded from JSON.

use std::cell::RefCell;
use std::fs;
use std::path::Path;
use std::rc::Rc;

use kurbo::Point;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use twinslide_core::{ConfigError, HandleRole, PointerEvent, SliderBinding, SliderConfig};

/// Demo errors.
#[derive(Debug, Error)]
pub enum DemoError {
    #[error("Usage: twinslide-demo <scenario.json>")]
    Usage,
    #[error("IO error: {0}")]
    Io(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// One scripted input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Step {
    /// Raw pointer input, hit-tested against the handles.
    Pointer { event: PointerEvent },
    /// Drag a specific handle to a point.
    Drag {
        role: HandleRole,
        x: f64,
        #[serde(default)]
        y: f64,
    },
    /// Finish dragging a handle.
    DragEnd { role: HandleRole },
    /// Type into a handle's text input.
    Text { role: HandleRole, text: String },
    /// Return both handles to their start locations.
    Reset,
}

/// A slider configuration plus the inputs to replay against it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scenario {
    pub config: SliderConfig,
    pub steps: Vec<Step>,
}

/// What a replay produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    /// Every `(low, high)` pair passed to the change callback.
    pub changes: Vec<(String, String)>,
    /// Number of slider events emitted.
    pub events: usize,
    /// Final texts, low first.
    pub texts: (String, String),
    /// Final value delta, formatted.
    pub value_delta: String,
}

impl Scenario {
    /// Load a scenario from a JSON file.
    pub fn load(path: &Path) -> Result<Self, DemoError> {
        let json = fs::read_to_string(path)
            .map_err(|e| DemoError::Io(format!("Failed to read {}: {}", path.display(), e)))?;
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> Result<Self, DemoError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Replay all steps against a fresh slider.
    pub fn run(&self) -> Result<Outcome, DemoError> {
        let changes = Rc::new(RefCell::new(Vec::new()));
        let events = Rc::new(RefCell::new(0usize));

        let sink = changes.clone();
        let mut binding = SliderBinding::from_config(&self.config)?.on_change(move |low, high| {
            log::info!("Changed: {:?} .. {:?}", low, high);
            sink.borrow_mut().push((low.to_string(), high.to_string()));
        });
        let counter = events.clone();
        binding.subscribe(move |_| *counter.borrow_mut() += 1);

        for (index, step) in self.steps.iter().enumerate() {
            log::debug!("Step {}: {:?}", index, step);
            apply(&mut binding, step);
        }

        let (low, high) = binding.texts();
        let texts = (low.to_string(), high.to_string());
        let value_delta = binding.slider().value_delta_text();
        let changes = changes.borrow().clone();
        let events = *events.borrow();
        Ok(Outcome {
            changes,
            events,
            texts,
            value_delta,
        })
    }
}

fn apply(binding: &mut SliderBinding, step: &Step) {
    match step {
        Step::Pointer { event } => {
            binding.handle_pointer_event(*event);
        }
        Step::Drag { role, x, y } => {
            binding.drag_changed(*role, Point::new(*x, *y));
        }
        Step::DragEnd { role } => {
            binding.drag_ended(*role);
        }
        Step::Text { role, text } => {
            binding.text_changed(*role, text);
        }
        Step::Reset => binding.reset(),
    }
}
