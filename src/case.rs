use crate::apply::Apply;
use crate::errors::{Result, SpektralError};
use crate::output::Reporter;
use std::fmt::Debug;
use std::ops::BitOr;

/// Operator form of [`Case::optional`]: `Case::new(4, (2, 3)) | Optional`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Optional;

/// Result of running a case that did not stop the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseOutcome {
    Passed,
    /// An optional case produced the wrong value.
    Failed,
}

/// One fixture: the expected output of a function for one tuple of inputs.
///
/// A case is required by default: a mismatch ends the whole run. Optional
/// cases only record the failure.
#[derive(Debug, Clone, PartialEq)]
pub struct Case<O, I> {
    expected: O,
    inputs: I,
    optional: bool,
}

impl<O, I> Case<O, I> {
    pub fn new(expected: O, inputs: I) -> Self {
        Self {
            expected,
            inputs,
            optional: false,
        }
    }

    /// Flips the optional flag. Calling it twice restores the original state.
    pub fn optional(mut self) -> Self {
        self.toggle_optional();
        self
    }

    pub fn toggle_optional(&mut self) {
        self.optional ^= true;
    }

    pub fn is_optional(&self) -> bool {
        self.optional
    }

    pub fn expected(&self) -> &O {
        &self.expected
    }

    pub fn inputs(&self) -> &I {
        &self.inputs
    }
}

impl<O, I> BitOr<Optional> for Case<O, I> {
    type Output = Self;

    fn bitor(self, _: Optional) -> Self {
        self.optional()
    }
}

impl<O, I> Case<O, I>
where
    O: PartialEq + Debug,
{
    /// Compares without reporting anything.
    pub fn check<F>(&self, function: &F) -> bool
    where
        F: Apply<I, Output = O> + ?Sized,
    {
        function.apply(&self.inputs) == self.expected
    }

    /// Runs the case and reports the outcome on `reporter`.
    ///
    /// `suppress` hides the pass message only. A required case that fails
    /// returns [`SpektralError::CriticalFailure`] after printing its message.
    pub fn run<F>(
        &self,
        function: &F,
        index: usize,
        reporter: &mut Reporter,
        suppress: bool,
    ) -> Result<CaseOutcome>
    where
        F: Apply<I, Output = O> + ?Sized,
    {
        let found = function.apply(&self.inputs);
        if found == self.expected {
            if !suppress {
                reporter.pass(&format!("Test Case # {} passed.", index))?;
            }
            return Ok(CaseOutcome::Passed);
        }

        if self.optional {
            reporter.fail(&format!(
                "Test Case # {} failed. Expected: {:?} but Found: {:?}",
                index, self.expected, found
            ))?;
            return Ok(CaseOutcome::Failed);
        }

        reporter.fail(&format!(
            "Test Case # {} critically failed. Expected: {:?} but Found: {:?}",
            index, self.expected, found
        ))?;
        Err(SpektralError::CriticalFailure {
            group: None,
            index,
            expected: format!("{:?}", self.expected),
            found: format!("{:?}", found),
        })
    }
}

/// Checks a single fixture against `function` without building a case.
pub fn check<F, I, O>(function: &F, expected: &O, inputs: &I) -> bool
where
    F: Apply<I, Output = O>,
    O: PartialEq,
{
    function.apply(inputs) == *expected
}
