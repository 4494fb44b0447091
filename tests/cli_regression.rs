// Regression tests: exit status and report output of the `spektral` binary.
// Requires: assert_cmd, predicates crates in [dev-dependencies]

use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};

fn spektral() -> Command {
    let mut cmd = Command::cargo_bin("spektral").unwrap();
    cmd.env_remove("RUST_LOG").args(["--no-color", "--no-tty"]);
    cmd
}

#[test]
fn optional_failure_exits_successfully() {
    spektral()
        .args(["demo", "add"])
        .assert()
        .success()
        .stdout(contains("Test Case # 1 failed. Expected: 4 but Found: 5").and(contains("1 out of 2 passed.")));
}

#[test]
fn passing_division_reports_all_passed() {
    spektral()
        .args(["demo", "div"])
        .assert()
        .success()
        .stdout(contains("All 1 cases passed."));
}

#[test]
fn critical_failure_exits_with_failure() {
    spektral()
        .args(["demo", "div-fatal"])
        .assert()
        .failure()
        .stdout(
            contains("Test Case # 0 critically failed. Expected: 99 but Found: 10")
                .and(contains("test group: Add").not()),
        );
}

#[test]
fn mismatched_fixtures_exit_with_failure() {
    spektral()
        .args(["demo", "mismatched"])
        .assert()
        .failure()
        .stdout(contains("mismatched input and output lengths").and(contains("Test Case").not()));
}

#[test]
fn missing_config_is_rendered_as_diagnostic() {
    spektral()
        .args(["--config", "tests/no_such_config.yaml", "demo", "div"])
        .assert()
        .failure()
        .stderr(contains("spektral::config"));
}

#[test]
fn list_names_every_demo() {
    spektral()
        .arg("list")
        .assert()
        .success()
        .stdout(contains("div-fatal").and(contains("mismatched")).and(contains("suite")));
}
