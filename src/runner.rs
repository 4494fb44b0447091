//! Top-level driver.
//!
//! Library code never exits the process. A critical failure travels back as
//! an `Err` and the [`Runner`] turns it into a failing [`RunStatus`], which
//! `main` hands to the OS as an [`ExitCode`].

use crate::config::RunnerConfig;
use crate::errors::{Result, SpektralError};
use crate::group::Runnable;
use crate::output::Reporter;
use crate::suite::Suite;
use std::process::ExitCode;

/// Whether the run should be treated as a success by the host process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Passed,
    Failed,
}

impl From<RunStatus> for ExitCode {
    fn from(status: RunStatus) -> Self {
        match status {
            RunStatus::Passed => ExitCode::SUCCESS,
            RunStatus::Failed => ExitCode::FAILURE,
        }
    }
}

pub struct Runner {
    reporter: Reporter,
}

impl Runner {
    pub fn new(config: &RunnerConfig) -> Self {
        Self::with_reporter(Reporter::from_config(config))
    }

    pub fn with_reporter(reporter: Reporter) -> Self {
        Self { reporter }
    }

    pub fn run_suite(&mut self, suite: &Suite<'_>) -> RunStatus {
        let result = suite.run(&mut self.reporter);
        self.finish(result)
    }

    pub fn run_group(&mut self, group: &dyn Runnable) -> RunStatus {
        let result = group.run(&mut self.reporter);
        self.finish(result)
    }

    /// Maps the outcome of a run or of building its fixtures to a status.
    ///
    /// Critical failures have already been printed by the failing case. Any
    /// other error is printed here before the run is declared failed.
    pub fn finish<T>(&mut self, result: Result<T>) -> RunStatus {
        let err = match result {
            Ok(_) => return RunStatus::Passed,
            Err(err) => err,
        };
        if !err.is_test_failure() {
            if let Err(io_err) = self.reporter.fail(&err.to_string()) {
                tracing::error!(%io_err, "failed to report error");
            }
        }
        if let Err(io_err) = self.reporter.flush() {
            tracing::error!(%io_err, "failed to flush report");
        }
        tracing::debug!(error = %err, "run halted");
        RunStatus::Failed
    }
}

/// Renders `err` through miette on stderr.
pub fn report_error(err: SpektralError) {
    eprintln!("{:?}", miette::Report::new(err));
}
