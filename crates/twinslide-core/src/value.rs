//! Unit-interval scalar used for handle percentages.

use serde::{Deserialize, Serialize};

/// A scalar that always reads back within `[0.0, 1.0]`.
///
/// Writes outside the range are clamped silently. Values come from pointer
/// geometry, so overshooting the track edge is routine and never an error.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct UnitValue(f64);

impl UnitValue {
    /// The lower bound.
    pub const MIN: Self = Self(0.0);
    /// The upper bound.
    pub const MAX: Self = Self(1.0);

    /// Create a new value, clamping into range.
    pub fn new(value: f64) -> Self {
        let mut v = Self::MIN;
        v.set(value);
        v
    }

    /// Get the wrapped value.
    pub fn get(self) -> f64 {
        self.0
    }

    /// Set the wrapped value, clamping into range. NaN becomes 0.
    pub fn set(&mut self, value: f64) {
        self.0 = if value.is_nan() {
            0.0
        } else {
            value.clamp(0.0, 1.0)
        };
    }
}

impl From<f64> for UnitValue {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<UnitValue> for f64 {
    fn from(value: UnitValue) -> Self {
        value.0
    }
}
