//! Value objects of the range domain.

pub mod int_range;

pub use int_range::{IntRange, RangeProbe};
