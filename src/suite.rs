use crate::errors::Result;
use crate::group::{GroupReport, Runnable};
use crate::output::Reporter;

/// A named, ordered list of groups.
///
/// The suite only borrows its groups; they must outlive it. Groups run in
/// registration order and the first critical failure ends the run.
pub struct Suite<'a> {
    name: String,
    groups: Vec<&'a dyn Runnable>,
}

/// Summary of a suite run that reached its end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuiteReport {
    pub name: String,
    pub groups: Vec<GroupReport>,
}

impl SuiteReport {
    pub fn total(&self) -> usize {
        self.groups.iter().map(|g| g.total).sum()
    }

    pub fn passed(&self) -> usize {
        self.groups.iter().map(GroupReport::passed).sum()
    }

    pub fn has_failures(&self) -> bool {
        self.groups.iter().any(GroupReport::has_failures)
    }
}

impl<'a> Suite<'a> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            groups: Vec::new(),
        }
    }

    pub fn add_group(&mut self, group: &'a dyn Runnable) {
        self.groups.push(group);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn group_names(&self) -> Vec<&str> {
        self.groups.iter().map(|g| g.name()).collect()
    }

    pub fn run(&self, reporter: &mut Reporter) -> Result<SuiteReport> {
        let _span = tracing::debug_span!("suite", name = %self.name).entered();
        reporter.banner(&format!("Running tests in test suite: {}", self.name))?;

        let mut groups = Vec::with_capacity(self.groups.len());
        for group in &self.groups {
            groups.push(group.run(reporter)?);
        }
        tracing::debug!(groups = groups.len(), "suite finished");
        Ok(SuiteReport {
            name: self.name.clone(),
            groups,
        })
    }
}
