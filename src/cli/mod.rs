//! The Spektral Command-Line Interface.
//!
//! This module is the main entry point for all CLI commands. It sets up
//! logging and configuration, then hands off to the runner.

use crate::cli::args::{Command, SpektralArgs};
use crate::config::RunnerConfig;
use crate::errors::Result;
use crate::runner::{report_error, RunStatus, Runner};
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub mod args;
pub mod demos;

/// The main entry point for the CLI.
pub fn run() -> ExitCode {
    let args = SpektralArgs::parse();
    init_tracing(args.verbose);

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(err) => {
            report_error(err);
            return ExitCode::FAILURE;
        }
    };

    // Dispatch to the appropriate subcommand handler.
    let status = match args.command {
        Command::Demo { scenario } => demos::run(scenario, &mut Runner::new(&config)),
        Command::List => {
            for scenario in args::Scenario::ALL {
                println!("{}", demos::describe(scenario));
            }
            RunStatus::Passed
        }
        Command::ShowConfig => {
            println!("{:#?}", config);
            RunStatus::Passed
        }
    };
    status.into()
}

/// Priority: `RUST_LOG` > `-v` count > warnings only. Logs go to stderr so
/// they never interleave with the report on stdout.
fn init_tracing(verbose: u8) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        match verbose {
            0 => EnvFilter::new("warn"),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn load_config(args: &SpektralArgs) -> Result<RunnerConfig> {
    let config = match &args.config {
        Some(path) => RunnerConfig::load(path)?,
        None => RunnerConfig::default(),
    };
    let mut config = config.with_env_overrides();
    if args.no_color {
        config = config.without_colors();
    }
    if args.no_tty {
        config.mirror_tty = false;
    }
    tracing::debug!(?config, "effective runner config");
    Ok(config)
}
