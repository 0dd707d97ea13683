// src/cli.rs
use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, Subcommand, ValueEnum};
use rangekit_domain::IntRange;

/// Output format options for the tool.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Log verbosity accepted by `--log-level`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => Self::Off,
            LogLevel::Error => Self::Error,
            LogLevel::Warn => Self::Warn,
            LogLevel::Info => Self::Info,
            LogLevel::Debug => Self::Debug,
            LogLevel::Trace => Self::Trace,
        }
    }
}

/// Number given to `contains`; integers stay exact, anything else is a float.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProbeValue {
    Int(i64),
    Float(f64),
}

impl FromStr for ProbeValue {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(v) = s.parse::<i64>() {
            return Ok(Self::Int(v));
        }
        s.parse::<f64>()
            .map(Self::Float)
            .map_err(|_| format!("'{s}' is not a number"))
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "rangekit",
    version,
    about = "Inspect, test, sample and migrate normalized integer ranges"
)]
pub struct Args {
    /// Output format
    #[arg(long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Log verbosity (overrides RUST_LOG)
    #[arg(long, value_enum, global = true)]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show bounds, length, sum and hash of a range such as "[2, 5]"
    Inspect {
        #[arg(allow_hyphen_values = true)]
        range: IntRange,
    },

    /// Test whether a value lies inside a range
    Contains {
        #[arg(allow_hyphen_values = true)]
        range: IntRange,

        #[arg(allow_hyphen_values = true)]
        value: ProbeValue,

        /// Exclude the upper bound
        #[arg(long)]
        exclusive: bool,
    },

    /// Draw uniformly distributed integers from a range
    Sample {
        #[arg(allow_hyphen_values = true)]
        range: IntRange,

        /// Number of samples to draw
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,

        /// Seed for a reproducible sequence
        #[arg(long, env = "RANGEKIT_SEED")]
        seed: Option<u64>,

        /// Exclude the upper bound
        #[arg(long)]
        exclusive: bool,
    },

    /// Rewrite a range document (.json/.yaml/.yml) in the current schema
    Migrate {
        input: PathBuf,

        /// Destination; defaults to rewriting INPUT in place
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn args_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn probe_values() {
        assert_eq!("42".parse::<ProbeValue>(), Ok(ProbeValue::Int(42)));
        assert_eq!(" -3 ".parse::<ProbeValue>(), Ok(ProbeValue::Int(-3)));
        assert_eq!("2.5".parse::<ProbeValue>(), Ok(ProbeValue::Float(2.5)));
        assert!("x".parse::<ProbeValue>().is_err());
    }

    #[test]
    fn parses_negative_range_literal() {
        let args = Args::try_parse_from(["rangekit", "inspect", "-3,4"]).unwrap();
        match args.command {
            Command::Inspect { range } => assert_eq!(range, IntRange::new(-3, 4)),
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
