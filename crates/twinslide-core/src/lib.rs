//! Twinslide Core Library
//!
//! Platform-agnostic state engine for a dual-handle range slider: track
//! geometry, handle constraints, change events and text binding.

pub mod binding;
pub mod config;
pub mod event;
pub mod format;
pub mod handle;
pub mod input;
pub mod slider;
pub mod track;
pub mod value;

pub use binding::SliderBinding;
pub use config::{ConfigError, SliderConfig};
pub use event::{HandleChange, HandleEvent, ListenerId, SliderEvent};
pub use format::{DurationUnits, ValueFormat, ValueMode};
pub use handle::{HANDLE_DIAMETER, Handle, HandleRole};
pub use input::{PointerEvent, PointerRouter};
pub use slider::RangeSlider;
pub use track::{Track, TrackError};
pub use value::UnitValue;
