//! Test groups: every case for one function-under-test.
//!
//! A [`Group`] holds the function behind an `Rc`, so it never borrows the
//! caller's state and can be run any number of times. Groups with different
//! signatures are run side by side through the [`Runnable`] trait.

use crate::apply::Apply;
use crate::case::{Case, CaseOutcome};
use crate::errors::{Result, SpektralError};
use crate::output::Reporter;
use std::fmt::{self, Debug};
use std::rc::Rc;

/// Anything a suite can run. Implemented by every [`Group`] regardless of its
/// function signature.
pub trait Runnable {
    fn name(&self) -> &str;

    fn run(&self, reporter: &mut Reporter) -> Result<GroupReport>;
}

/// Summary of one completed group run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupReport {
    pub name: String,
    pub total: usize,
    /// Indices of optional cases that failed, in run order.
    pub failing: Vec<usize>,
}

impl GroupReport {
    pub fn passed(&self) -> usize {
        self.total - self.failing.len()
    }

    pub fn has_failures(&self) -> bool {
        !self.failing.is_empty()
    }
}

pub struct Group<O, I> {
    name: String,
    function: Rc<dyn Apply<I, Output = O>>,
    cases: Vec<Case<O, I>>,
    /// Overrides the reporter's threshold when set.
    suppress_threshold: Option<usize>,
}

impl<O, I> Group<O, I> {
    pub fn new<F>(name: impl Into<String>, function: F) -> Self
    where
        F: Apply<I, Output = O> + 'static,
    {
        Self::with_shared(name, Rc::new(function))
    }

    /// Builds a group around a function handle the caller keeps sharing.
    pub fn with_shared(name: impl Into<String>, function: Rc<dyn Apply<I, Output = O>>) -> Self {
        Self {
            name: name.into(),
            function,
            cases: Vec::new(),
            suppress_threshold: None,
        }
    }

    /// Builds a group from parallel vectors of inputs and expected outputs.
    ///
    /// Fails before any case is created if the vectors differ in length.
    pub fn from_fixtures<F>(
        name: impl Into<String>,
        function: F,
        inputs: Vec<I>,
        outputs: Vec<O>,
    ) -> Result<Self>
    where
        F: Apply<I, Output = O> + 'static,
    {
        if inputs.len() != outputs.len() {
            return Err(SpektralError::MismatchedFixtures {
                inputs: inputs.len(),
                outputs: outputs.len(),
            });
        }
        let mut group = Self::new(name, function);
        group.add_cases(
            outputs
                .into_iter()
                .zip(inputs)
                .map(|(expected, inputs)| Case::new(expected, inputs)),
        );
        Ok(group)
    }

    /// Number of cases at which pass messages stop being printed.
    pub fn with_suppress_threshold(mut self, threshold: usize) -> Self {
        self.suppress_threshold = Some(threshold);
        self
    }

    pub fn add_case(&mut self, case: Case<O, I>) {
        self.cases.push(case);
    }

    pub fn add_cases(&mut self, cases: impl IntoIterator<Item = Case<O, I>>) {
        self.cases.extend(cases);
    }

    pub fn cases(&self) -> &[Case<O, I>] {
        &self.cases
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }
}

impl<O, I> Debug for Group<O, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Group")
            .field("name", &self.name)
            .field("cases", &self.cases.len())
            .field("suppress_threshold", &self.suppress_threshold)
            .finish_non_exhaustive()
    }
}

impl<O, I> Runnable for Group<O, I>
where
    O: PartialEq + Debug,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn run(&self, reporter: &mut Reporter) -> Result<GroupReport> {
        let total = self.cases.len();
        let threshold = self
            .suppress_threshold
            .unwrap_or_else(|| reporter.suppress_threshold());
        let suppress = total >= threshold;
        let _span = tracing::debug_span!("group", name = %self.name, cases = total).entered();

        reporter.banner(&format!("Running tests for test group: {}.", self.name))?;
        if suppress {
            reporter.notice(&format!(
                "Large number of test cases found: {}, output will be suppressed.",
                total
            ))?;
        }

        let mut failing = Vec::new();
        for (index, case) in self.cases.iter().enumerate() {
            let outcome = case
                .run(&*self.function, index, reporter, suppress)
                .map_err(|err| {
                    tracing::warn!(group = %self.name, index, "required case failed");
                    err.in_group(&self.name)
                })?;
            tracing::trace!(index, ?outcome, "case finished");
            if outcome == CaseOutcome::Failed {
                failing.push(index);
            }
        }

        let report = GroupReport {
            name: self.name.clone(),
            total,
            failing,
        };
        if report.has_failures() {
            let indices: String = report
                .failing
                .iter()
                .map(|index| format!("{}, ", index))
                .collect();
            reporter.fail(&format!("The following cases failed: {}", indices))?;
            reporter.plain(&format!(
                "{} out of {} passed.",
                report.passed(),
                report.total
            ))?;
        } else {
            reporter.pass(&format!("All {} cases passed.", total))?;
        }
        reporter.flush()?;
        tracing::debug!(passed = report.passed(), total, "group finished");
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::case::Optional;

    fn add(a: i32, b: i32) -> i32 {
        a + b
    }

    #[test]
    fn optional_failure_is_listed_in_summary() {
        let mut group = Group::new("Add", add);
        group.add_cases(vec![Case::new(5, (2, 3)), Case::new(4, (2, 3)) | Optional]);

        let (mut reporter, out) = Reporter::capture();
        let report = group.run(&mut reporter).unwrap();

        assert_eq!(report.failing, vec![1]);
        assert_eq!(report.passed(), 1);
        assert_eq!(
            out.lines(),
            vec![
                "Running tests for test group: Add.",
                "Test Case # 0 passed.",
                "Test Case # 1 failed. Expected: 4 but Found: 5",
                "The following cases failed: 1, ",
                "1 out of 2 passed.",
            ]
        );
    }

    #[test]
    fn critical_failure_stops_the_group() {
        let mut group = Group::new("Div", |a: i32, b: i32| a / b);
        group.add_case(Case::new(99, (20, 2)));
        group.add_case(Case::new(5, (10, 2)));

        let (mut reporter, out) = Reporter::capture();
        let err = group.run(&mut reporter).unwrap_err();

        assert!(matches!(
            err,
            SpektralError::CriticalFailure { group: Some(ref g), index: 0, .. } if g == "Div"
        ));
        let out = out.contents();
        assert!(!out.contains("Test Case # 1"));
        assert!(!out.contains("passed."));
    }

    #[test]
    fn group_can_be_rerun() {
        let mut group = Group::new("Len", |s: String| s.len());
        group.add_case(Case::new(3, ("abc".to_string(),)));

        let (mut reporter, out) = Reporter::capture();
        group.run(&mut reporter).unwrap();
        group.run(&mut reporter).unwrap();
        assert_eq!(
            out.lines()
                .iter()
                .filter(|l| *l == "All 1 cases passed.")
                .count(),
            2
        );
    }

    #[test]
    fn threshold_controls_suppression() {
        let mut group = Group::new("Neg", |x: i64| -x).with_suppress_threshold(3);
        group.add_cases((0..3).map(|x| Case::new(-x, (x,))));

        let (mut reporter, out) = Reporter::capture();
        group.run(&mut reporter).unwrap();
        assert_eq!(
            out.lines(),
            vec![
                "Running tests for test group: Neg.",
                "Large number of test cases found: 3, output will be suppressed.",
                "All 3 cases passed.",
            ]
        );
    }

    #[test]
    fn from_fixtures_pairs_inputs_with_outputs() {
        let group = Group::from_fixtures("Add", add, vec![(1, 1), (2, 2)], vec![2, 4]).unwrap();
        assert_eq!(group.len(), 2);
        assert_eq!(group.cases()[1].expected(), &4);
        assert_eq!(group.cases()[1].inputs(), &(2, 2));
    }

    #[test]
    fn from_fixtures_rejects_length_mismatch() {
        let err = Group::from_fixtures("Add", add, vec![(1, 1), (2, 2), (3, 3)], vec![2, 4])
            .unwrap_err();
        assert!(matches!(
            err,
            SpektralError::MismatchedFixtures {
                inputs: 3,
                outputs: 2
            }
        ));
    }
}
