// src/app.rs
use std::io::Write;

use anyhow::{Context, Result};
use rangekit_infra::{RangeDocumentStore, Xxh3Source};

use crate::cli::ProbeValue;
use crate::config::{Bounds, Config, Task};
use crate::output::{self, Containment, Inspection, Migration, Report};

/// Executes the configured task, writing its report to `out`.
pub fn run(config: &Config, out: &mut dyn Write) -> Result<()> {
    match &config.task {
        Task::Inspect(range) => Inspection::from(*range).emit(config.format, out),
        Task::Contains { range, value, bounds } => {
            let contains = match (*value, *bounds) {
                (ProbeValue::Int(v), Bounds::Inclusive) => range.contains_inclusive(v),
                (ProbeValue::Int(v), Bounds::Exclusive) => range.contains_exclusive(v),
                (ProbeValue::Float(v), Bounds::Inclusive) => range.contains_inclusive(v),
                (ProbeValue::Float(v), Bounds::Exclusive) => range.contains_exclusive(v),
            };
            Containment::new(*range, *value, *bounds, contains).emit(config.format, out)
        }
        Task::Sample { range, count, seed, bounds } => {
            let mut source = seed.map_or_else(Xxh3Source::from_entropy, Xxh3Source::seeded);
            log::debug!("sampling {count} value(s) from {range} with seed {:#x}", source.seed());
            let samples = (0..*count)
                .map(|_| match bounds {
                    Bounds::Inclusive => range.random_inclusive(&mut source),
                    Bounds::Exclusive => range.random_exclusive(&mut source),
                })
                .collect();
            output::samples(*range, *bounds, source.seed(), samples).emit(config.format, out)
        }
        Task::Migrate { input, output } => {
            let doc = RangeDocumentStore::load(input)
                .with_context(|| format!("failed to load {}", input.display()))?;
            RangeDocumentStore::save(output, &doc)
                .with_context(|| format!("failed to write {}", output.display()))?;
            Migration {
                input,
                output,
                from_schema: doc.schema_version(),
                to_schema: rangekit_domain::CURRENT_SCHEMA_VERSION,
                ranges: doc.len(),
            }
            .emit(config.format, out)
        }
    }
}
