//! # Shared kernel
//!
//! Types every other crate in the workspace speaks:
//!
//! - [`error`]: the layered error taxonomy and the [`ErrorContext`] extension
//! - [`value_objects`]: the host math types an `IntRange` converts to and from

// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{
    DomainError, DomainResult, ErrorContext, InfraResult, InfrastructureError, RangeKitError, Result,
};

pub mod error;
pub mod value_objects;

pub use value_objects::{FloatRange, Vector2, Vector2Int};
