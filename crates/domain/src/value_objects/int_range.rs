// crates/domain/src/value_objects/int_range.rs
use std::{
    fmt,
    hash::{Hash, Hasher},
    ops::RangeInclusive,
};

use rangekit_ports::UniformIntSource;
use rangekit_shared_kernel::{FloatRange, Vector2, Vector2Int};

mod equality;
mod parse;
mod probe;

pub use probe::RangeProbe;

/// Stores a range between 2 ints.
///
/// Construction normalizes the two bounds, so `min() <= max()` holds for every
/// value of this type. Serialization lives in [`crate::schema`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IntRange {
    min: i32,
    max: i32,
}

impl IntRange {
    /// Builds a range from two bounds given in any order.
    #[inline]
    pub const fn new(a: i32, b: i32) -> Self {
        if a < b { Self { min: a, max: b } } else { Self { min: b, max: a } }
    }

    /// Range between `value` and zero.
    #[inline]
    pub const fn from_single(value: i32) -> Self {
        Self::new(value, 0)
    }

    #[inline]
    pub const fn min(self) -> i32 {
        self.min
    }

    #[inline]
    pub const fn max(self) -> i32 {
        self.max
    }

    /// The diff between `max` and `min`.
    #[inline]
    pub const fn length(self) -> u32 {
        self.max.abs_diff(self.min)
    }

    /// The sum of `min` and `max`.
    #[inline]
    pub const fn sum(self) -> i64 {
        self.min as i64 + self.max as i64
    }

    /// Returns a random integer between `min` [inclusive] and `max` [exclusive].
    ///
    /// An empty range (`min == max`) always yields `min`.
    pub fn random_exclusive<S: UniformIntSource + ?Sized>(self, source: &mut S) -> i32 {
        self.draw(source, i64::from(self.max))
    }

    /// Returns a random integer between `min` [inclusive] and `max` [inclusive].
    pub fn random_inclusive<S: UniformIntSource + ?Sized>(self, source: &mut S) -> i32 {
        self.draw(source, i64::from(self.max) + 1)
    }

    fn draw<S: UniformIntSource + ?Sized>(self, source: &mut S, high_exclusive: i64) -> i32 {
        let value = source.next_in(i64::from(self.min), high_exclusive);
        log::trace!("drew {} from {} (high_exclusive = {})", value, self, high_exclusive);
        // Out-of-contract sources are clamped into the range.
        let value = value.clamp(i64::from(self.min), i64::from(self.max));
        i32::try_from(value).unwrap_or(self.min)
    }

    /// Returns true if the value is between min [inclusive] and max [exclusive].
    #[inline]
    pub fn contains_exclusive<T: RangeProbe>(self, value: T) -> bool {
        value.is_at_least(self.min) && value.is_below(self.max)
    }

    /// Returns true if the value is between min [inclusive] and max [inclusive].
    #[inline]
    pub fn contains_inclusive<T: RangeProbe>(self, value: T) -> bool {
        value.is_at_least(self.min) && value.is_at_most(self.max)
    }

    /// Hash code compatible with previously persisted hash tables:
    /// `(min + max) * 37` in wrapping 32-bit arithmetic.
    #[inline]
    pub const fn hash_code(self) -> i32 {
        self.min.wrapping_add(self.max).wrapping_mul(37)
    }

    /// Iterates every integer of the range, both bounds included.
    pub fn iter_inclusive(self) -> RangeInclusive<i32> {
        self.min..=self.max
    }
}

impl Hash for IntRange {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code());
    }
}

impl From<Vector2Int> for IntRange {
    fn from(value: Vector2Int) -> Self {
        Self::new(value.x, value.y)
    }
}

impl From<(i32, i32)> for IntRange {
    fn from((a, b): (i32, i32)) -> Self {
        Self::new(a, b)
    }
}

impl From<IntRange> for Vector2Int {
    fn from(value: IntRange) -> Self {
        Self::new(value.min, value.max)
    }
}

/// Exact for bounds within +/- 2^24.
impl From<IntRange> for Vector2 {
    #[allow(clippy::cast_precision_loss)]
    fn from(value: IntRange) -> Self {
        Self::new(value.min as f32, value.max as f32)
    }
}

impl From<IntRange> for FloatRange {
    #[allow(clippy::cast_precision_loss)]
    fn from(value: IntRange) -> Self {
        Self::new(value.min as f32, value.max as f32)
    }
}

impl From<IntRange> for (i32, i32) {
    fn from(value: IntRange) -> Self {
        (value.min, value.max)
    }
}

impl From<IntRange> for RangeInclusive<i32> {
    fn from(value: IntRange) -> Self {
        value.iter_inclusive()
    }
}

impl fmt::Display for IntRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}
