//! Executes test cases, containing panics, and builds the report

use crate::assertion::TestContext;
use crate::registry::{self, TestCase};
use crate::report::{CaseResult, TestReport};
use std::any::Any;
use std::cell::RefCell;
use parking_lot::Mutex;
use std::panic::{self, AssertUnwindSafe};

/// Serializes quiet runs so each restores the hook it replaced
static HOOK_LOCK: Mutex<()> = parking_lot::const_mutex(());

thread_local! {
    static LAST_PANIC_LOCATION: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// Runtime options for a [`TestRunner`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunConfig {
    /// Replace the panic hook while cases run, so caught panics are only
    /// reported through the [`TestReport`] instead of also on stderr
    pub quiet_panics: bool,
}

/// Executes test cases and aggregates their results
///
/// The runner holds no state between runs: running the same cases twice
/// yields identical reports.
#[derive(Debug, Clone, Default)]
pub struct TestRunner {
    config: RunConfig,
}

impl TestRunner {
    /// Create a runner with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a runner with custom options
    pub fn with_config(config: RunConfig) -> Self {
        Self { config }
    }

    /// Run a single test case
    ///
    /// A panic escaping the body is caught and recorded as the case's fault;
    /// assertions recorded before the panic are kept.
    pub fn run_case(&self, case: &TestCase) -> CaseResult {
        tracing::debug!(name = case.name, location = %case.location(), "running test case");

        let mut ctx = TestContext::new();
        LAST_PANIC_LOCATION.with(|cell| cell.borrow_mut().take());
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| (case.body)(&mut ctx)));

        let fault = match outcome {
            Ok(()) => None,
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                tracing::warn!(name = case.name, fault = %message, "test case panicked");
                Some(message)
            }
        };

        let aborted = ctx.is_aborted();
        CaseResult {
            name: case.name.to_string(),
            tags: case.tag_list().into_iter().map(str::to_string).collect(),
            location: case.location(),
            assertions: ctx.into_results(),
            fault,
            aborted,
        }
    }

    /// Run the given cases in order and build a report
    ///
    /// With `quiet_panics`, concurrent runs on other threads wait for this
    /// one, since the panic hook is process-wide.
    pub fn run_cases(&self, cases: &[&TestCase]) -> TestReport {
        let _hook_guard = self.config.quiet_panics.then(|| HOOK_LOCK.lock());
        let previous_hook = if self.config.quiet_panics {
            let previous = panic::take_hook();
            panic::set_hook(Box::new(|info| {
                let location = info
                    .location()
                    .map(|l| format!("{}:{}", l.file(), l.line()));
                LAST_PANIC_LOCATION.with(|cell| *cell.borrow_mut() = location);
            }));
            Some(previous)
        } else {
            None
        };

        let mut report = TestReport::new();
        for case in cases {
            let result = self.run_case(case);
            tracing::debug!(
                name = case.name,
                passed = result.is_pass(),
                assertions = result.assertions.len(),
                "test case finished"
            );
            report.add_case(result);
        }

        if let Some(previous) = previous_hook {
            panic::set_hook(previous);
        }

        tracing::info!(
            cases_passed = report.cases_passed,
            cases_failed = report.cases_failed,
            assertions_passed = report.assertions_passed,
            assertions_failed = report.assertions_failed,
            "test run complete"
        );
        report
    }

    /// Run every registered test case
    pub fn run_registered(&self) -> TestReport {
        let cases = registry::registered_cases();
        tracing::debug!(count = cases.len(), "discovered registered test cases");
        self.run_cases(&cases)
    }
}

/// Extract a readable message from a panic payload
fn panic_message(payload: &(dyn Any + Send)) -> String {
    let message = if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "test body panicked".to_string()
    };

    match LAST_PANIC_LOCATION.with(|cell| cell.borrow_mut().take()) {
        Some(location) => format!("{} (at {})", message, location),
        None => message,
    }
}
