//! Track geometry and the pixel/percentage/value mapping.

use kurbo::{Line, Point};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::value::UnitValue;

/// Default track line thickness in pixels.
pub const DEFAULT_THICKNESS: f64 = 2.0;

/// Track construction errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrackError {
    #[error("Track width must be positive, got {0}")]
    InvalidWidth(f64),
    #[error("Track thickness must be non-negative, got {0}")]
    InvalidThickness(f64),
    #[error("Domain end {end} is below domain start {start}")]
    InvertedDomain { start: f64, end: f64 },
    #[error("Non-finite {0}")]
    NonFinite(&'static str),
}

/// The horizontal track both handles move along.
///
/// Immutable once built. Coordinates are local to the track: `x = 0` is the
/// left edge, `x = width` the right edge, and handles sit at `y = thickness / 2`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Track {
    width: f64,
    thickness: f64,
    start: f64,
    end: f64,
}

impl Track {
    /// Create a track with the default thickness.
    pub fn new(width: f64, start: f64, end: f64) -> Result<Self, TrackError> {
        Self::with_thickness(width, DEFAULT_THICKNESS, start, end)
    }

    /// Create a track with an explicit line thickness.
    pub fn with_thickness(
        width: f64,
        thickness: f64,
        start: f64,
        end: f64,
    ) -> Result<Self, TrackError> {
        if !width.is_finite() {
            return Err(TrackError::NonFinite("width"));
        }
        if !thickness.is_finite() {
            return Err(TrackError::NonFinite("thickness"));
        }
        if !start.is_finite() {
            return Err(TrackError::NonFinite("domain start"));
        }
        if !end.is_finite() {
            return Err(TrackError::NonFinite("domain end"));
        }
        if width <= 0.0 {
            return Err(TrackError::InvalidWidth(width));
        }
        if thickness < 0.0 {
            return Err(TrackError::InvalidThickness(thickness));
        }
        if end < start {
            return Err(TrackError::InvertedDomain { start, end });
        }
        Ok(Self {
            width,
            thickness,
            start,
            end,
        })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    /// Domain range (`end - start`).
    pub fn range(&self) -> f64 {
        self.end - self.start
    }

    /// Vertical coordinate handles are pinned to.
    pub fn center_y(&self) -> f64 {
        self.thickness / 2.0
    }

    /// Whether `x` lies on the track, edges included.
    pub fn contains_x(&self, x: f64) -> bool {
        x >= 0.0 && x <= self.width
    }

    /// Fraction of the track width at `x`.
    pub fn percentage_at(&self, x: f64) -> UnitValue {
        UnitValue::new(x / self.width)
    }

    /// Domain value for a percentage.
    pub fn value_at(&self, percentage: UnitValue) -> f64 {
        self.start + percentage.get() * self.range()
    }

    /// Pixel offset for a domain value. Not clamped: values outside the domain
    /// map off the track and are rejected by the handle constraint.
    ///
    /// A zero-width domain maps every value to the left edge.
    pub fn x_for_value(&self, value: f64) -> f64 {
        let range = self.range();
        if range == 0.0 {
            return 0.0;
        }
        (value - self.start) / range * self.width
    }

    /// Fraction of the domain covered by `value`, clamped.
    pub fn percentage_for_value(&self, value: f64) -> UnitValue {
        let range = self.range();
        if range == 0.0 {
            return UnitValue::MIN;
        }
        UnitValue::new((value - self.start) / range)
    }

    /// Point on the track center line for a percentage.
    pub fn point_at(&self, percentage: UnitValue) -> Point {
        Point::new(percentage.get() * self.width, self.center_y())
    }

    /// The full track center line.
    pub fn line(&self) -> Line {
        Line::new(
            Point::new(0.0, self.center_y()),
            Point::new(self.width, self.center_y()),
        )
    }
}
