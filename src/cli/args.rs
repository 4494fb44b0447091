//! Defines the command-line arguments and subcommands for the Spektral CLI.
//!
//! This module uses the `clap` crate with its "derive" feature to create a
//! declarative and type-safe argument parsing structure.

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "spektral",
    version,
    about = "A fixture-driven test runner for pure functions."
)]
pub struct SpektralArgs {
    /// YAML file with runner settings.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored output.
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Do not mirror the report to the controlling terminal.
    #[arg(long, global = true)]
    pub no_tty: bool,

    /// Increase log verbosity (-v debug, -vv trace). `RUST_LOG` takes priority.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// An enumeration of all available CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run one of the built-in demonstration suites.
    Demo {
        #[arg(value_enum)]
        scenario: Scenario,
    },
    /// List the built-in demonstration suites.
    List,
    /// Print the effective runner configuration.
    ShowConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Scenario {
    /// One passing and one optional failing case.
    Add,
    /// A single passing division case.
    Div,
    /// A required case that fails, followed by a group that never runs.
    DivFatal,
    /// Bulk construction from three inputs and two outputs.
    Mismatched,
    /// Enough cases to trigger pass-message suppression.
    Large,
    /// Several groups with different signatures.
    Suite,
}

impl Scenario {
    pub const ALL: [Scenario; 6] = [
        Scenario::Add,
        Scenario::Div,
        Scenario::DivFatal,
        Scenario::Mismatched,
        Scenario::Large,
        Scenario::Suite,
    ];
}
