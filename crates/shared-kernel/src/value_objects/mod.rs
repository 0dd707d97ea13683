// crates/shared-kernel/src/value_objects/mod.rs
pub mod float_range;
pub mod vector;

pub use float_range::FloatRange;
pub use vector::{Vector2, Vector2Int};
