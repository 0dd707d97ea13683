//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`random`]: the uniform random integer source the host environment supplies
//!
//! These ports keep the domain independent of a specific generator.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod random;

pub use random::UniformIntSource;
