// crates/shared-kernel/src/value_objects/vector.rs
use std::fmt;

use serde::{Deserialize, Serialize};

/// Two-component integer vector as exposed by the host math library.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vector2Int {
    pub x: i32,
    pub y: i32,
}

impl Vector2Int {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Vector2Int {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<Vector2Int> for (i32, i32) {
    fn from(value: Vector2Int) -> Self {
        (value.x, value.y)
    }
}

/// Two-component float vector as exposed by the host math library.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl Vector2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<(f32, f32)> for Vector2 {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

/// Exact for components within +/- 2^24.
impl From<Vector2Int> for Vector2 {
    #[allow(clippy::cast_precision_loss)]
    fn from(value: Vector2Int) -> Self {
        Self::new(value.x as f32, value.y as f32)
    }
}

mod display {
    use super::{fmt, Vector2, Vector2Int};

    impl fmt::Display for Vector2Int {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "({}, {})", self.x, self.y)
        }
    }

    impl fmt::Display for Vector2 {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "({}, {})", self.x, self.y)
        }
    }
}
