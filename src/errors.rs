//! Spektral error handling.
//!
//! Only conditions that must stop a run are errors. A recoverable mismatch on
//! an optional case is reported to the console and counted in the group
//! report, it never becomes a `SpektralError`.

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Every way a Spektral run can be halted.
#[derive(Debug, Error, Diagnostic)]
pub enum SpektralError {
    /// A case that was not marked optional produced the wrong value.
    #[error(
        "{}case #{index} critically failed, expected {expected} but found {found}",
        group_prefix(.group)
    )]
    #[diagnostic(
        code(spektral::critical_failure),
        help("mark the case optional if this mismatch should not stop the run")
    )]
    CriticalFailure {
        /// Filled in by the group that ran the case.
        group: Option<String>,
        index: usize,
        expected: String,
        found: String,
    },

    /// Bulk construction was given parallel fixture vectors of different lengths.
    #[error("mismatched input and output lengths: {inputs} inputs, {outputs} outputs")]
    #[diagnostic(code(spektral::mismatched_fixtures))]
    MismatchedFixtures { inputs: usize, outputs: usize },

    #[error("failed to write test report")]
    #[diagnostic(code(spektral::io))]
    Io(#[from] std::io::Error),

    #[error("failed to read config file `{}`", .path.display())]
    #[diagnostic(code(spektral::config))]
    Config {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config")]
    #[diagnostic(code(spektral::config_parse))]
    ConfigParse(#[from] serde_yaml::Error),
}

fn group_prefix(group: &Option<String>) -> String {
    match group {
        Some(name) => format!("test group `{}`: ", name),
        None => String::new(),
    }
}

impl SpektralError {
    /// Attaches the group name to a critical failure raised by a bare case.
    pub fn in_group(self, name: &str) -> Self {
        match self {
            SpektralError::CriticalFailure {
                group: None,
                index,
                expected,
                found,
            } => SpektralError::CriticalFailure {
                group: Some(name.to_string()),
                index,
                expected,
                found,
            },
            other => other,
        }
    }

    /// True for errors raised by a failing case rather than by the harness itself.
    pub fn is_test_failure(&self) -> bool {
        matches!(self, SpektralError::CriticalFailure { .. })
    }
}

pub type Result<T, E = SpektralError> = std::result::Result<T, E>;
