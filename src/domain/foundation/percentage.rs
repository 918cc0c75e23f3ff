//! Percentage value object (0-100 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

/// A fractional value between 0 and 100 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percentage(f64);

impl Percentage {
    /// Zero percent.
    pub const ZERO: Self = Self(0.0);

    /// Fifty percent.
    pub const HALF: Self = Self(50.0);

    /// One hundred percent.
    pub const HUNDRED: Self = Self(100.0);

    /// Creates a new Percentage, clamping to the valid range. NaN maps to zero.
    pub fn clamped(value: f64) -> Self {
        if value.is_nan() {
            return Self::ZERO;
        }
        Self(value.clamp(0.0, 100.0))
    }

    /// Position of `offset` within `[0, extent]` as a percentage.
    ///
    /// Offsets outside the extent are clamped; a non-positive extent yields zero.
    pub fn of_extent(offset: f64, extent: f64) -> Self {
        if extent <= 0.0 {
            return Self::ZERO;
        }
        Self::clamped(offset.clamp(0.0, extent) / extent * 100.0)
    }

    /// Returns the raw value.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns the complement (100 - value).
    pub fn complement(&self) -> Self {
        Self(100.0 - self.0)
    }
}

impl Default for Percentage {
    fn default() -> Self {
        Self::HALF
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
