//! Slider construction options.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::format::{DurationUnits, ValueFormat, ValueMode, current_minutes, parse_time_or};
use crate::handle::HANDLE_DIAMETER;
use crate::slider::DEFAULT_PRECISION;
use crate::track::{DEFAULT_THICKNESS, Track, TrackError};

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid track: {0}")]
    Track(#[from] TrackError),
    #[error("Invalid hit tolerance: {0}")]
    InvalidTolerance(f64),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Everything needed to build a slider and its text binding.
///
/// In time mode the domain comes from `min_time`/`max_time` (`HH:MM`) and the
/// handles start at both ends; `start`, `end`, `low` and `high` are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderConfig {
    /// Track width in pixels.
    pub width: f64,
    /// Track line thickness in pixels.
    pub thickness: f64,
    /// Domain start value.
    pub start: f64,
    /// Domain end value.
    pub end: f64,
    /// Initial low value (used only together with `high`).
    pub low: Option<f64>,
    /// Initial high value (used only together with `low`).
    pub high: Option<f64>,
    pub mode: ValueMode,
    /// Domain start in time mode.
    pub min_time: Option<String>,
    /// Domain end in time mode.
    pub max_time: Option<String>,
    /// Whether the text inputs accept edits.
    pub editable: bool,
    /// Decimal places for number mode and the delta strings.
    pub precision: usize,
    /// Suffixes for duration mode.
    pub units: DurationUnits,
    /// Pointer hit radius around each handle center, in pixels.
    pub hit_tolerance: f64,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            width: 320.0,
            thickness: DEFAULT_THICKNESS,
            start: 0.0,
            end: 100.0,
            low: None,
            high: None,
            mode: ValueMode::Number,
            min_time: None,
            max_time: None,
            editable: true,
            precision: DEFAULT_PRECISION,
            units: DurationUnits::default(),
            hit_tolerance: HANDLE_DIAMETER / 2.0,
        }
    }
}

impl SliderConfig {
    /// Parse a configuration from JSON. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Domain bounds. Unreadable times in time mode fall back to `now`.
    pub fn domain_at(&self, now: f64) -> (f64, f64) {
        match self.mode {
            ValueMode::Time => (
                parse_time_or(self.min_time.as_deref().unwrap_or_default(), now),
                parse_time_or(self.max_time.as_deref().unwrap_or_default(), now),
            ),
            ValueMode::Number | ValueMode::Duration => (self.start, self.end),
        }
    }

    /// Initial handle values for a given domain.
    pub fn initial_values(&self, domain: (f64, f64)) -> (Option<f64>, Option<f64>) {
        match self.mode {
            ValueMode::Time => (Some(domain.0), Some(domain.1)),
            ValueMode::Number | ValueMode::Duration => (self.low, self.high),
        }
    }

    /// Build the track, resolving time-mode bounds against `now`.
    pub fn track_at(&self, now: f64) -> Result<Track, ConfigError> {
        let (start, end) = self.domain_at(now);
        Ok(Track::with_thickness(self.width, self.thickness, start, end)?)
    }

    /// Build the track against the current local time.
    pub fn track(&self) -> Result<Track, ConfigError> {
        self.track_at(current_minutes())
    }

    /// Check the geometry without building anything else.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.check_tolerance()?;
        self.track().map(|_| ())
    }

    /// Hit tolerance, rejected unless finite and positive.
    pub fn check_tolerance(&self) -> Result<f64, ConfigError> {
        if self.hit_tolerance.is_finite() && self.hit_tolerance > 0.0 {
            Ok(self.hit_tolerance)
        } else {
            Err(ConfigError::InvalidTolerance(self.hit_tolerance))
        }
    }

    /// The text formatter for this configuration.
    pub fn format(&self) -> ValueFormat {
        ValueFormat::new(self.mode, self.precision, self.units.clone())
    }
}
