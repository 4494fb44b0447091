//! Built-in demonstration suites for the `demo` subcommand.

use crate::cli::args::Scenario;
use crate::case::{Case, Optional};
use crate::group::Group;
use crate::runner::{RunStatus, Runner};
use crate::suite::Suite;

/// Number of cases in the `large` demo, above the default suppression threshold.
const LARGE_CASES: i64 = 60;

fn add(a: i32, b: i32) -> i32 {
    a + b
}

fn div(a: i32, b: i32) -> i32 {
    a / b
}

fn square(x: i64) -> i64 {
    x * x
}

fn shout(text: String) -> String {
    text.to_uppercase()
}

pub fn describe(scenario: Scenario) -> &'static str {
    match scenario {
        Scenario::Add => "add: one passing and one optional failing case",
        Scenario::Div => "div: a single passing division case",
        Scenario::DivFatal => "div-fatal: a required failure stops the suite",
        Scenario::Mismatched => "mismatched: bulk fixtures with 3 inputs and 2 outputs",
        Scenario::Large => "large: 60 cases with pass messages suppressed",
        Scenario::Suite => "suite: groups with different signatures in one suite",
    }
}

pub fn run(scenario: Scenario, runner: &mut Runner) -> RunStatus {
    tracing::info!(?scenario, "running demo");
    match scenario {
        Scenario::Add => {
            let group = add_group();
            runner.run_group(&group)
        }
        Scenario::Div => {
            let mut group = Group::new("Div", div);
            group.add_case(Case::new(10, (20, 2)));
            runner.run_group(&group)
        }
        Scenario::DivFatal => {
            let mut fatal = Group::new("Div", div);
            fatal.add_case(Case::new(99, (20, 2)));
            let never = add_group();

            let mut suite = Suite::new("Fail fast");
            suite.add_group(&fatal);
            suite.add_group(&never);
            runner.run_suite(&suite)
        }
        Scenario::Mismatched => {
            let built = Group::from_fixtures("Add", add, vec![(1, 1), (2, 2), (3, 3)], vec![2, 4]);
            match built {
                Ok(group) => runner.run_group(&group),
                Err(err) => runner.finish::<()>(Err(err)),
            }
        }
        Scenario::Large => {
            let mut group = Group::new("Square", square);
            group.add_cases((0..LARGE_CASES).map(|x| Case::new(x * x, (x,))));
            group.add_case(Case::new(0, (1,)) | Optional);
            runner.run_group(&group)
        }
        Scenario::Suite => {
            let arithmetic = add_group();
            let mut division = Group::new("Div", div);
            division.add_cases(vec![Case::new(10, (20, 2)), Case::new(-3, (9, -3))]);
            let mut shouting = Group::new("Shout", shout);
            shouting.add_cases(vec![
                Case::new("HELLO".to_string(), ("hello".to_string(),)),
                Case::new(String::new(), (String::new(),)),
            ]);

            let mut suite = Suite::new("Demo");
            suite.add_group(&arithmetic);
            suite.add_group(&division);
            suite.add_group(&shouting);
            runner.run_suite(&suite)
        }
    }
}

fn add_group() -> Group<i32, (i32, i32)> {
    let mut group = Group::new("Add", add);
    group.add_cases(vec![Case::new(5, (2, 3)), Case::new(4, (2, 3)) | Optional]);
    group
}
