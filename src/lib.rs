// src/lib.rs
//! `rangekit` command-line front end over the range domain.

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod cli;
pub mod config;
pub mod output;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
