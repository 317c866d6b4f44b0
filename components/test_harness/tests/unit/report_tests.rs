//! Unit tests for report generation

use std::process::ExitCode;
use test_harness::{AssertionKind, AssertionResult, CaseResult, TestReport};

fn assertion(passed: bool, expression: &str, expansion: &str, line: u32) -> AssertionResult {
    AssertionResult::new(
        AssertionKind::Check,
        passed,
        expression,
        Some(expansion.to_string()),
        "tests/main.rs",
        line,
    )
}

fn case(name: &str, assertions: Vec<AssertionResult>) -> CaseResult {
    CaseResult {
        name: name.to_string(),
        tags: vec!["factorial".to_string()],
        location: "tests/main.rs:7".to_string(),
        assertions,
        fault: None,
        aborted: false,
    }
}

fn passing_case(name: &str) -> CaseResult {
    case(
        name,
        vec![
            assertion(true, "factorial(0) == 1", "1 == 1", 8),
            assertion(true, "factorial(1) == 1", "1 == 1", 9),
        ],
    )
}

#[test]
fn test_new_report() {
    let report = TestReport::new();
    assert_eq!(report.assertions_passed, 0);
    assert_eq!(report.assertions_failed, 0);
    assert_eq!(report.cases_passed, 0);
    assert_eq!(report.cases_failed, 0);
    assert!(report.cases.is_empty());
}

#[test]
fn test_add_passing_case() {
    let mut report = TestReport::new();
    report.add_case(passing_case("passes"));
    assert_eq!(report.cases_passed, 1);
    assert_eq!(report.cases_failed, 0);
    assert_eq!(report.assertions_passed, 2);
    assert_eq!(report.assertions_failed, 0);
    assert_eq!(report.total_cases(), 1);
    assert_eq!(report.total_assertions(), 2);
}

#[test]
fn test_one_failed_assertion_fails_case() {
    let mut report = TestReport::new();
    report.add_case(case(
        "fails",
        vec![
            assertion(true, "factorial(0) == 1", "1 == 1", 8),
            assertion(false, "factorial(3) == 7", "6 == 7", 9),
            assertion(true, "factorial(10) == 3628800", "3628800 == 3628800", 10),
        ],
    ));
    assert_eq!(report.cases_failed, 1);
    assert_eq!(report.cases_passed, 0);
    assert_eq!(report.assertions_passed, 2);
    assert_eq!(report.assertions_failed, 1);
}

#[test]
fn test_fault_fails_case_without_assertions() {
    let mut report = TestReport::new();
    let mut faulted = case("faults", Vec::new());
    faulted.fault = Some("boom".to_string());
    report.add_case(faulted);
    assert_eq!(report.cases_failed, 1);
    assert_eq!(report.total_assertions(), 0);
    assert!(!report.is_success());
}

#[test]
fn test_is_success_empty() {
    let report = TestReport::new();
    assert!(report.is_success());
}

#[test]
fn test_is_success_with_failure() {
    let mut report = TestReport::new();
    report.add_case(passing_case("passes"));
    report.add_case(case("fails", vec![assertion(false, "x == 1", "0 == 1", 3)]));
    assert!(!report.is_success());
    assert_eq!(report.failed_cases().count(), 1);
    assert_eq!(report.failed_cases().next().unwrap().name, "fails");
}

#[test]
fn test_exit_status_empty_report() {
    let report = TestReport::new();
    assert_eq!(report.exit_status(), 0);
    assert_eq!(format!("{:?}", report.exit_code()), format!("{:?}", ExitCode::SUCCESS));
}

#[test]
fn test_exit_status_all_passing() {
    let mut report = TestReport::new();
    report.add_case(passing_case("passes"));
    assert_eq!(report.exit_status(), 0);
    assert_eq!(format!("{:?}", report.exit_code()), format!("{:?}", ExitCode::SUCCESS));
}

#[test]
fn test_exit_status_with_failed_case() {
    let mut report = TestReport::new();
    report.add_case(passing_case("passes"));
    report.add_case(case("fails", vec![assertion(false, "x == 1", "0 == 1", 3)]));
    assert_eq!(report.exit_status(), 1);
    assert_eq!(format!("{:?}", report.exit_code()), format!("{:?}", ExitCode::FAILURE));
}

#[test]
fn test_exit_status_with_fault() {
    let mut report = TestReport::new();
    let mut faulted = case("faults", Vec::new());
    faulted.fault = Some("boom".to_string());
    report.add_case(faulted);
    assert_eq!(report.exit_status(), 1);
}

#[test]
fn test_summary_all_passed() {
    let mut report = TestReport::new();
    report.add_case(passing_case("passes"));
    assert_eq!(
        report.summary(),
        "All tests passed (2 assertions in 1 test case)\n\
         test cases: 1 | 1 passed | 0 failed\n\
         assertions: 2 | 2 passed | 0 failed"
    );
}

#[test]
fn test_summary_singular_assertion() {
    let mut report = TestReport::new();
    report.add_case(case("one", vec![assertion(true, "x == 1", "1 == 1", 3)]));
    report.add_case(case("two", vec![]));
    assert!(report
        .summary()
        .starts_with("All tests passed (1 assertion in 2 test cases)\n"));
}

#[test]
fn test_summary_no_tests() {
    assert_eq!(TestReport::new().summary(), "No tests ran");
}

#[test]
fn test_summary_with_failures() {
    let mut report = TestReport::new();
    report.add_case(passing_case("passes"));
    report.add_case(case("fails", vec![assertion(false, "x == 1", "0 == 1", 3)]));

    let summary = report.summary();
    assert!(summary.contains("test cases: 2 | 1 passed | 1 failed"));
    assert!(summary.contains("assertions: 3 | 2 passed | 1 failed"));
}

#[test]
fn test_detailed_summary_includes_failures() {
    let mut report = TestReport::new();
    report.add_case(case(
        "Factorials are computed",
        vec![assertion(false, "factorial(3) == 7", "6 == 7", 11)],
    ));

    let detailed = report.detailed_summary();
    assert!(detailed.contains("Factorials are computed"));
    assert!(detailed.contains("tests/main.rs:11: FAILED:"));
    assert!(detailed.contains("CHECK( factorial(3) == 7 )"));
    assert!(detailed.contains("with expansion:\n  6 == 7"));
    assert!(detailed.ends_with("assertions: 1 | 0 passed | 1 failed"));
}

#[test]
fn test_detailed_summary_includes_fault() {
    let mut report = TestReport::new();
    let mut faulted = case("Panics", Vec::new());
    faulted.fault = Some("index out of bounds".to_string());
    report.add_case(faulted);

    let detailed = report.detailed_summary();
    assert!(detailed.contains("due to unexpected panic:"));
    assert!(detailed.contains("index out of bounds"));
}

#[test]
fn test_detailed_summary_skips_passing_cases() {
    let mut report = TestReport::new();
    report.add_case(passing_case("quietly passes"));

    let detailed = report.detailed_summary();
    assert!(!detailed.contains("quietly passes"));
    assert!(detailed.contains("All tests passed (2 assertions in 1 test case)"));
    assert!(detailed.ends_with("assertions: 2 | 2 passed | 0 failed"));
}

#[test]
fn test_merge_reports() {
    let mut report1 = TestReport::new();
    report1.add_case(passing_case("a"));

    let mut report2 = TestReport::new();
    report2.add_case(case("b", vec![assertion(false, "x == 1", "0 == 1", 3)]));
    report2.add_case(passing_case("c"));

    report1.merge(&report2);

    assert_eq!(report1.total_cases(), 3);
    assert_eq!(report1.cases_passed, 2);
    assert_eq!(report1.cases_failed, 1);
    assert_eq!(report1.assertions_passed, 4);
    assert_eq!(report1.assertions_failed, 1);
    let names: Vec<_> = report1.cases.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["a", "b", "c"]);
}

#[test]
fn test_json_export_import() {
    let mut report = TestReport::new();
    report.add_case(passing_case("passes"));
    report.add_case(case("fails", vec![assertion(false, "x == 1", "0 == 1", 3)]));

    let json = report.to_json().unwrap();
    assert!(json.contains("\"cases_failed\": 1"));
    assert!(json.contains("\"kind\": \"check\""));

    let restored = TestReport::from_json(&json).unwrap();
    assert_eq!(restored, report);
}

#[test]
fn test_from_json_rejects_garbage() {
    assert!(TestReport::from_json("not json").is_err());
}
