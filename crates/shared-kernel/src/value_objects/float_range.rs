// crates/shared-kernel/src/value_objects/float_range.rs
use std::fmt;

use serde::{Deserialize, Serialize};

use super::vector::Vector2;

/// Range between two floats, normalized so that `min <= max`.
///
/// NaN inputs are kept as-is; a NaN bound makes every containment query false.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "FloatRangeRepr", into = "FloatRangeRepr")]
pub struct FloatRange {
    min: f32,
    max: f32,
}

#[derive(Serialize, Deserialize)]
struct FloatRangeRepr {
    min: f32,
    max: f32,
}

impl FloatRange {
    #[inline]
    pub fn new(a: f32, b: f32) -> Self {
        if b < a { Self { min: b, max: a } } else { Self { min: a, max: b } }
    }

    #[inline]
    pub const fn min(self) -> f32 {
        self.min
    }

    #[inline]
    pub const fn max(self) -> f32 {
        self.max
    }

    /// The diff between `max` and `min`.
    #[inline]
    pub fn length(self) -> f32 {
        self.max - self.min
    }

    /// Returns true if the value is between min [inclusive] and max [exclusive].
    #[inline]
    pub fn contains_exclusive(self, value: f32) -> bool {
        value >= self.min && value < self.max
    }

    /// Returns true if the value is between min [inclusive] and max [inclusive].
    #[inline]
    pub fn contains_inclusive(self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }
}

impl From<FloatRangeRepr> for FloatRange {
    fn from(repr: FloatRangeRepr) -> Self {
        Self::new(repr.min, repr.max)
    }
}

impl From<FloatRange> for FloatRangeRepr {
    fn from(range: FloatRange) -> Self {
        Self { min: range.min, max: range.max }
    }
}

impl From<Vector2> for FloatRange {
    fn from(value: Vector2) -> Self {
        Self::new(value.x, value.y)
    }
}

impl From<FloatRange> for Vector2 {
    fn from(value: FloatRange) -> Self {
        Self::new(value.min, value.max)
    }
}

impl PartialEq<Vector2> for FloatRange {
    fn eq(&self, other: &Vector2) -> bool {
        *self == Self::from(*other)
    }
}

impl fmt::Display for FloatRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}
