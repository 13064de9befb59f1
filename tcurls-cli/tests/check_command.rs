//! Integration tests for `tcurls check`.

mod common;

use common::{shared_fixture, TestEnv};
use predicates::prelude::*;

const FAILING_FIXTURE: &str = r"
rootURLs:
  generic:
    - https://tc.example.com
tests:
  - function: ui
    argSets:
      - [tasks/123]
    expected:
      generic: https://tc.example.com/tools/tasks/123
";

#[test]
fn test_shared_fixture_passes() {
    let env = TestEnv::new();

    env.command()
        .arg("check")
        .arg(shared_fixture())
        .assert()
        .success()
        .stdout(predicate::str::contains("132 URL(s) checked, 0 mismatch(es)"));
}

#[test]
fn test_shared_fixture_json() {
    let env = TestEnv::new();

    let output = env
        .command()
        .arg("check")
        .arg(shared_fixture())
        .args(["--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["checked"], 132);
    assert!(report["mismatches"].as_array().unwrap().is_empty());
}

#[test]
fn test_mismatch_exits_with_semantic_failure() {
    let env = TestEnv::new();
    let path = env.write_fixture("failing.yml", FAILING_FIXTURE);

    env.command()
        .arg("check")
        .arg(&path)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("FAIL ui(tasks/123)"))
        .stdout(predicate::str::contains("actual:   https://tc.example.com/tasks/123"))
        .stderr(predicate::str::contains("1 conformance mismatch(es)"));
}

#[test]
fn test_mismatch_json_report() {
    let env = TestEnv::new();
    let path = env.write_fixture("failing.yml", FAILING_FIXTURE);

    let output = env
        .command()
        .arg("check")
        .arg(&path)
        .args(["--format", "json"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["mismatches"][0]["deployment"], "generic");
    assert_eq!(report["mismatches"][0]["args"][0], "tasks/123");
}

#[test]
fn test_unknown_function_in_fixture() {
    let env = TestEnv::new();
    let path = env.write_fixture(
        "unknown.yml",
        "rootURLs:\n  generic: [x]\ntests:\n  - function: nope\n    expected:\n      generic: y\n",
    );

    env.command()
        .arg("check")
        .arg(&path)
        .assert()
        .code(4)
        .stderr(predicate::str::contains("unsupported operation 'nope'"));
}

#[test]
fn test_malformed_fixture() {
    let env = TestEnv::new();
    let path = env.write_fixture("broken.yml", "rootURLs: [unclosed\n");

    env.command().arg("check").arg(&path).assert().code(7);
}

#[test]
fn test_misspelled_tests_key_is_rejected() {
    let env = TestEnv::new();
    let path = env.write_fixture(
        "typo.yml",
        "rootURLs:\n  generic:\n    - https://tc.example.com\ntest:\n  - function: docs\n    argSets:\n      - [manual]\n    expected:\n      generic: https://wrong.example.com\n",
    );

    env.command()
        .arg("check")
        .arg(&path)
        .assert()
        .code(7)
        .stdout(predicate::str::contains("URL(s) checked").not())
        .stderr(predicate::str::contains("unknown field `test`"));
}

#[test]
fn test_missing_fixture_file() {
    let env = TestEnv::new();

    env.command()
        .args(["check", "does-not-exist.yml"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_verbose_reports_loaded_cases() {
    let env = TestEnv::new();

    env.command()
        .args(["--verbose", "check"])
        .arg(shared_fixture())
        .assert()
        .success()
        .stderr(predicate::str::contains("loaded 14 test case(s) across 2 deployment(s)"));
}
