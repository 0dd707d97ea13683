//! # Infrastructure
//!
//! Concrete adapters behind the ports and the persistence of range documents.

// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod persistence;
pub mod random;

pub use persistence::{DocumentFormat, RangeDocumentStore};
pub use random::Xxh3Source;
