// src/output.rs
use std::io::Write;
use std::path::Path;

use rangekit_domain::IntRange;
use serde::Serialize;

use crate::cli::{OutputFormat, ProbeValue};
use crate::config::Bounds;

#[derive(Debug, Serialize)]
pub struct Inspection {
    pub range: String,
    pub min: i32,
    pub max: i32,
    pub length: u32,
    pub sum: i64,
    pub hash_code: i32,
}

impl From<IntRange> for Inspection {
    fn from(range: IntRange) -> Self {
        Self {
            range: range.to_string(),
            min: range.min(),
            max: range.max(),
            length: range.length(),
            sum: range.sum(),
            hash_code: range.hash_code(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Containment {
    pub range: String,
    pub value: serde_json::Value,
    pub bounds: &'static str,
    pub contains: bool,
}

impl Containment {
    pub fn new(range: IntRange, value: ProbeValue, bounds: Bounds, contains: bool) -> Self {
        let value = match value {
            ProbeValue::Int(v) => serde_json::Value::from(v),
            ProbeValue::Float(v) => serde_json::Value::from(v),
        };
        Self { range: range.to_string(), value, bounds: bounds_name(bounds), contains }
    }
}

#[derive(Debug, Serialize)]
pub struct Samples {
    pub range: String,
    pub bounds: &'static str,
    pub seed: u64,
    pub samples: Vec<i32>,
}

#[derive(Debug, Serialize)]
pub struct Migration<'a> {
    pub input: &'a Path,
    pub output: &'a Path,
    pub from_schema: u32,
    pub to_schema: u32,
    pub ranges: usize,
}

fn bounds_name(bounds: Bounds) -> &'static str {
    match bounds {
        Bounds::Inclusive => "inclusive",
        Bounds::Exclusive => "exclusive",
    }
}

pub fn samples(range: IntRange, bounds: Bounds, seed: u64, samples: Vec<i32>) -> Samples {
    Samples { range: range.to_string(), bounds: bounds_name(bounds), seed, samples }
}

/// Renders a report as aligned key/value rows or as pretty JSON.
pub trait Report: Serialize {
    fn write_table(&self, out: &mut dyn Write) -> std::io::Result<()>;

    fn emit(&self, format: OutputFormat, out: &mut dyn Write) -> anyhow::Result<()> {
        match format {
            OutputFormat::Table => self.write_table(out)?,
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, self)?;
                writeln!(out)?;
            }
        }
        Ok(())
    }
}

impl Report for Inspection {
    fn write_table(&self, out: &mut dyn Write) -> std::io::Result<()> {
        writeln!(out, "{:<10}{}", "range", self.range)?;
        writeln!(out, "{:<10}{}", "min", self.min)?;
        writeln!(out, "{:<10}{}", "max", self.max)?;
        writeln!(out, "{:<10}{}", "length", self.length)?;
        writeln!(out, "{:<10}{}", "sum", self.sum)?;
        writeln!(out, "{:<10}{}", "hash", self.hash_code)
    }
}

impl Report for Containment {
    fn write_table(&self, out: &mut dyn Write) -> std::io::Result<()> {
        writeln!(out, "{}", self.contains)
    }
}

impl Report for Samples {
    fn write_table(&self, out: &mut dyn Write) -> std::io::Result<()> {
        for value in &self.samples {
            writeln!(out, "{value}")?;
        }
        Ok(())
    }
}

impl Report for Migration<'_> {
    fn write_table(&self, out: &mut dyn Write) -> std::io::Result<()> {
        writeln!(
            out,
            "migrated {} range(s) from schema {} to {}: {} -> {}",
            self.ranges,
            self.from_schema,
            self.to_schema,
            self.input.display(),
            self.output.display()
        )
    }
}
