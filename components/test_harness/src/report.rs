//! Per-case results and the aggregated run report

use crate::assertion::AssertionResult;
use crate::error::HarnessResult;
use serde::{Deserialize, Serialize};
use std::process::ExitCode;

/// Outcome of running one test case
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseResult {
    /// Test case name
    pub name: String,
    /// Individual tags of the case
    pub tags: Vec<String>,
    /// `file:line` of the case registration
    pub location: String,
    /// Assertions evaluated by the body, in order
    pub assertions: Vec<AssertionResult>,
    /// Panic message if the body faulted
    pub fault: Option<String>,
    /// Whether a failed `require` stopped the body early
    pub aborted: bool,
}

impl CaseResult {
    /// True when no assertion failed and the body did not fault
    pub fn is_pass(&self) -> bool {
        self.fault.is_none() && self.assertions.iter().all(|a| a.passed)
    }

    /// Number of passing assertions
    pub fn assertions_passed(&self) -> usize {
        self.assertions.iter().filter(|a| a.passed).count()
    }

    /// Number of failing assertions
    pub fn assertions_failed(&self) -> usize {
        self.assertions.iter().filter(|a| !a.passed).count()
    }

    /// Failed assertions, in evaluation order
    pub fn failures(&self) -> impl Iterator<Item = &AssertionResult> {
        self.assertions.iter().filter(|a| !a.passed)
    }
}

/// Test run report with statistics and failure details
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestReport {
    /// Number of assertions that held
    pub assertions_passed: usize,
    /// Number of assertions that did not hold
    pub assertions_failed: usize,
    /// Number of test cases that passed
    pub cases_passed: usize,
    /// Number of test cases that failed (assertion failure or fault)
    pub cases_failed: usize,
    /// Per-case results in execution order
    pub cases: Vec<CaseResult>,
}

impl TestReport {
    /// Create a new empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a case result to the report
    pub fn add_case(&mut self, case: CaseResult) {
        self.assertions_passed += case.assertions_passed();
        self.assertions_failed += case.assertions_failed();
        if case.is_pass() {
            self.cases_passed += 1;
        } else {
            self.cases_failed += 1;
        }
        self.cases.push(case);
    }

    /// Total number of test cases run
    pub fn total_cases(&self) -> usize {
        self.cases_passed + self.cases_failed
    }

    /// Total number of assertions evaluated
    pub fn total_assertions(&self) -> usize {
        self.assertions_passed + self.assertions_failed
    }

    /// Check if every case passed. An empty run counts as success.
    pub fn is_success(&self) -> bool {
        self.cases_failed == 0
    }

    /// Numeric exit status: 0 when every case passed, 1 otherwise
    pub fn exit_status(&self) -> u8 {
        if self.is_success() {
            0
        } else {
            1
        }
    }

    /// Process exit code for this report
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_status())
    }

    /// Results of the failed cases
    pub fn failed_cases(&self) -> impl Iterator<Item = &CaseResult> {
        self.cases.iter().filter(|c| !c.is_pass())
    }

    /// Generate a human-readable summary
    ///
    /// Both the passing and failing forms carry the case and assertion
    /// counts; a passing run is headed by an "All tests passed" line.
    pub fn summary(&self) -> String {
        if self.total_cases() == 0 {
            return "No tests ran".to_string();
        }
        let counts = format!(
            "test cases: {} | {} passed | {} failed\n\
             assertions: {} | {} passed | {} failed",
            self.total_cases(),
            self.cases_passed,
            self.cases_failed,
            self.total_assertions(),
            self.assertions_passed,
            self.assertions_failed,
        );
        if !self.is_success() {
            return counts;
        }
        format!(
            "All tests passed ({} {} in {} test {})\n{}",
            self.total_assertions(),
            plural(self.total_assertions(), "assertion", "assertions"),
            self.total_cases(),
            plural(self.total_cases(), "case", "cases"),
            counts,
        )
    }

    /// Generate a detailed report with each failure followed by the summary
    pub fn detailed_summary(&self) -> String {
        let mut output = String::new();
        let rule = "-".repeat(79);

        for case in self.failed_cases() {
            output.push_str(&format!("{}\n{}\n{}\n", rule, case.name, rule));
            output.push_str(&format!("{}\n", case.location));
            for failure in case.failures() {
                output.push_str(&format!(
                    "\n{}: FAILED:\n  {}\n",
                    failure.location(),
                    failure.display_expression()
                ));
                if let Some(expansion) = &failure.expansion {
                    output.push_str(&format!("with expansion:\n  {}\n", expansion));
                }
            }
            if let Some(fault) = &case.fault {
                output.push_str(&format!(
                    "\n{}: FAILED:\n  due to unexpected panic:\n  {}\n",
                    case.location, fault
                ));
            }
            output.push('\n');
        }

        output.push_str(&"=".repeat(79));
        output.push('\n');
        output.push_str(&self.summary());
        output
    }

    /// Merge another report into this one
    pub fn merge(&mut self, other: &TestReport) {
        for case in &other.cases {
            self.add_case(case.clone());
        }
    }

    /// Export report as JSON
    pub fn to_json(&self) -> HarnessResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Import report from JSON
    pub fn from_json(json: &str) -> HarnessResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

fn plural<'a>(n: usize, one: &'a str, many: &'a str) -> &'a str {
    if n == 1 {
        one
    } else {
        many
    }
}
