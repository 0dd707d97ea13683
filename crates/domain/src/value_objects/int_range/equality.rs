// crates/domain/src/value_objects/int_range/equality.rs
//! Structural equality between `IntRange` and the host types it converts to.

use std::any::Any;

use rangekit_shared_kernel::{FloatRange, Vector2, Vector2Int};

use super::IntRange;

impl IntRange {
    /// Equality against a value of statically unknown type.
    ///
    /// `IntRange` and `Vector2Int` compare as integer ranges; `FloatRange` and
    /// `Vector2` compare bound by bound in `f64`. Any other type is unequal.
    pub fn equals_any(&self, other: &dyn Any) -> bool {
        if let Some(range) = other.downcast_ref::<IntRange>() {
            self == range
        } else if let Some(vector) = other.downcast_ref::<Vector2Int>() {
            self == vector
        } else if let Some(range) = other.downcast_ref::<FloatRange>() {
            self == range
        } else if let Some(vector) = other.downcast_ref::<Vector2>() {
            self == vector
        } else {
            false
        }
    }
}

impl IntRange {
    /// Exact in `f64`, so bounds beyond 2^24 never alias a float neighbour.
    fn bounds_equal(self, other: FloatRange) -> bool {
        f64::from(self.min) == f64::from(other.min()) && f64::from(self.max) == f64::from(other.max())
    }
}

impl PartialEq<Vector2Int> for IntRange {
    fn eq(&self, other: &Vector2Int) -> bool {
        *self == IntRange::from(*other)
    }
}

impl PartialEq<IntRange> for Vector2Int {
    fn eq(&self, other: &IntRange) -> bool {
        other == self
    }
}

impl PartialEq<FloatRange> for IntRange {
    fn eq(&self, other: &FloatRange) -> bool {
        self.bounds_equal(*other)
    }
}

impl PartialEq<IntRange> for FloatRange {
    fn eq(&self, other: &IntRange) -> bool {
        other == self
    }
}

impl PartialEq<Vector2> for IntRange {
    fn eq(&self, other: &Vector2) -> bool {
        self.bounds_equal(FloatRange::from(*other))
    }
}

impl PartialEq<IntRange> for Vector2 {
    fn eq(&self, other: &IntRange) -> bool {
        other == self
    }
}
