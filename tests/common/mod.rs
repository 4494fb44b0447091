//! Shared fixtures for the Spektral integration tests.

#![allow(dead_code)]

use spektral::{Capture, Reporter};

pub fn add(a: i32, b: i32) -> i32 {
    a + b
}

pub fn div(a: i32, b: i32) -> i32 {
    a / b
}

/// A colorless reporter and the buffer it writes into.
pub fn captured() -> (Reporter, Capture) {
    Reporter::capture()
}

/// Lines of `out` that start with `Test Case #`.
pub fn case_lines(out: &Capture) -> Vec<String> {
    out.lines()
        .into_iter()
        .filter(|line| line.starts_with("Test Case #"))
        .collect()
}
