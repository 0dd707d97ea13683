//! # Domain
//!
//! [`IntRange`] and everything that gives it meaning beyond two integers:
//! containment, sampling, cross-type equality, parsing, and its serialized
//! schema including legacy field migration.

#![allow(clippy::multiple_crate_versions)]

pub mod document;
pub mod schema;
pub mod value_objects;

pub use document::RangeDocument;
pub use schema::{CURRENT_SCHEMA_VERSION, FIELD_RENAMES};
pub use value_objects::{IntRange, RangeProbe};
