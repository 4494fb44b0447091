//! Spektral: a small fixture-driven test runner for pure functions.
//!
//! A [`Case`] pairs an expected output with a tuple of inputs, a [`Group`]
//! runs its cases against one function, and a [`Suite`] runs groups of any
//! signature in order. Required cases stop the run on a mismatch; optional
//! ones are only counted.
//!
//! ```
//! use spektral::{Case, Group, Optional, Reporter, Suite};
//!
//! fn add(a: i32, b: i32) -> i32 {
//!     a + b
//! }
//!
//! let mut group = Group::new("Add", add);
//! group.add_cases(vec![Case::new(5, (2, 3)), Case::new(4, (2, 3)) | Optional]);
//!
//! let mut suite = Suite::new("Arithmetic");
//! suite.add_group(&group);
//!
//! let (mut reporter, out) = Reporter::capture();
//! let report = suite.run(&mut reporter).unwrap();
//! assert_eq!(report.passed(), 1);
//! assert!(out.contents().contains("1 out of 2 passed."));
//! ```

pub use crate::apply::Apply;
pub use crate::case::{check, Case, CaseOutcome, Optional};
pub use crate::config::RunnerConfig;
pub use crate::errors::{Result, SpektralError};
pub use crate::group::{Group, GroupReport, Runnable};
pub use crate::output::{Capture, Reporter};
pub use crate::runner::{RunStatus, Runner};
pub use crate::suite::{Suite, SuiteReport};

pub mod apply;
pub mod case;
pub mod cli;
pub mod colors;
pub mod config;
pub mod errors;
pub mod group;
pub mod output;
pub mod runner;
pub mod suite;
