// src/main.rs
use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;
use rangekit::{app, cli::Args, config::Config};

fn init_logging(config: &Config) {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("warn"));
    if config.log_level_explicit {
        builder.filter_level(config.log_level);
    }
    builder.format_timestamp(None).init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    let config = match Config::try_from(args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration Error: {e}");
            return ExitCode::FAILURE;
        }
    };
    init_logging(&config);
    log::debug!("rangekit v{} starting with {:?}", rangekit::VERSION, config.task);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match app::run(&config, &mut out).and_then(|()| out.flush().map_err(Into::into)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
