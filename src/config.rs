// src/config.rs
use std::path::PathBuf;

use derive_builder::Builder;
use rangekit_domain::IntRange;

use crate::cli::{Args, Command, OutputFormat, ProbeValue};

/// Whether the upper bound of a range takes part in an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bounds {
    Inclusive,
    Exclusive,
}

impl Bounds {
    fn from_flag(exclusive: bool) -> Self {
        if exclusive { Self::Exclusive } else { Self::Inclusive }
    }
}

/// Work requested on the command line.
#[derive(Debug, Clone, PartialEq)]
pub enum Task {
    Inspect(IntRange),
    Contains { range: IntRange, value: ProbeValue, bounds: Bounds },
    Sample { range: IntRange, count: usize, seed: Option<u64>, bounds: Bounds },
    Migrate { input: PathBuf, output: PathBuf },
}

/// Fully resolved runtime configuration.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    #[builder(default)]
    pub format: OutputFormat,
    #[builder(default = "log::LevelFilter::Warn")]
    pub log_level: log::LevelFilter,
    /// True when the level came from `--log-level` rather than `RUST_LOG`.
    #[builder(default)]
    pub log_level_explicit: bool,
    pub task: Task,
}

impl TryFrom<Args> for Config {
    type Error = ConfigBuilderError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let task = match args.command {
            Command::Inspect { range } => Task::Inspect(range),
            Command::Contains { range, value, exclusive } => Task::Contains {
                range,
                value,
                bounds: Bounds::from_flag(exclusive),
            },
            Command::Sample { range, count, seed, exclusive } => Task::Sample {
                range,
                count,
                seed,
                bounds: Bounds::from_flag(exclusive),
            },
            Command::Migrate { input, output } => Task::Migrate {
                output: output.unwrap_or_else(|| input.clone()),
                input,
            },
        };

        let mut builder = ConfigBuilder::default();
        builder.format(args.format).task(task);
        if let Some(level) = args.log_level {
            builder.log_level(level).log_level_explicit(true);
        }
        builder.build()
    }
}
