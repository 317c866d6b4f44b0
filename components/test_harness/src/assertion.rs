//! Assertions and the per-case recording context

use serde::{Deserialize, Serialize};

/// How a failed assertion affects the rest of the test body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssertionKind {
    /// Failure is recorded and the body continues
    Check,
    /// Failure is recorded and the body returns
    Require,
}

/// Outcome of a single assertion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssertionResult {
    /// Whether the assertion held
    pub passed: bool,
    /// Check or require
    pub kind: AssertionKind,
    /// Literal source text of the asserted expression
    pub expression: String,
    /// Evaluated operands, e.g. `6 == 7`, when available
    pub expansion: Option<String>,
    /// Source file of the assertion
    pub file: String,
    /// Source line of the assertion
    pub line: u32,
}

impl AssertionResult {
    /// Create an assertion result
    pub fn new(
        kind: AssertionKind,
        passed: bool,
        expression: &str,
        expansion: Option<String>,
        file: &str,
        line: u32,
    ) -> Self {
        Self {
            passed,
            kind,
            expression: expression.to_string(),
            expansion,
            file: file.to_string(),
            line,
        }
    }

    /// `file:line` of the assertion
    pub fn location(&self) -> String {
        format!("{}:{}", self.file, self.line)
    }

    /// Macro-style rendering used in failure output, e.g. `CHECK( x == 1 )`
    pub fn display_expression(&self) -> String {
        let macro_name = match self.kind {
            AssertionKind::Check => "CHECK",
            AssertionKind::Require => "REQUIRE",
        };
        format!("{}( {} )", macro_name, self.expression)
    }
}

/// Collects assertion results while a test body runs
#[derive(Debug, Default)]
pub struct TestContext {
    results: Vec<AssertionResult>,
    aborted: bool,
}

impl TestContext {
    /// Create an empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an assertion and return whether it passed
    pub fn record(&mut self, result: AssertionResult) -> bool {
        let passed = result.passed;
        if !passed {
            tracing::debug!(
                location = %result.location(),
                expression = %result.expression,
                expansion = result.expansion.as_deref().unwrap_or(""),
                "assertion failed"
            );
        }
        self.results.push(result);
        passed
    }

    /// Mark the body as stopped by a failed `require`
    pub fn abort(&mut self) {
        self.aborted = true;
    }

    /// Whether a failed `require` stopped the body
    pub fn is_aborted(&self) -> bool {
        self.aborted
    }

    /// Assertions recorded so far, in evaluation order
    pub fn results(&self) -> &[AssertionResult] {
        &self.results
    }

    /// Consume the context, yielding its assertions
    pub fn into_results(self) -> Vec<AssertionResult> {
        self.results
    }

    /// True if no recorded assertion failed
    pub fn passed(&self) -> bool {
        self.results.iter().all(|r| r.passed)
    }

    /// Number of failed assertions
    pub fn failed_count(&self) -> usize {
        self.results.iter().filter(|r| !r.passed).count()
    }
}

/// Non-fatal boolean assertion.
///
/// Evaluates to `true` if the condition held.
#[macro_export]
macro_rules! check {
    ($ctx:expr, $cond:expr $(,)?) => {
        $ctx.record($crate::AssertionResult::new(
            $crate::AssertionKind::Check,
            $cond,
            stringify!($cond),
            None,
            file!(),
            line!(),
        ))
    };
}

/// Non-fatal equality assertion. Both operands must implement `PartialEq`
/// and `Debug`.
#[macro_export]
macro_rules! check_eq {
    ($ctx:expr, $left:expr, $right:expr $(,)?) => {
        match (&$left, &$right) {
            (left, right) => $ctx.record($crate::AssertionResult::new(
                $crate::AssertionKind::Check,
                *left == *right,
                concat!(stringify!($left), " == ", stringify!($right)),
                Some(format!("{:?} == {:?}", left, right)),
                file!(),
                line!(),
            )),
        }
    };
}

/// Fatal boolean assertion: on failure the enclosing test body returns.
#[macro_export]
macro_rules! require {
    ($ctx:expr, $cond:expr $(,)?) => {
        if !$ctx.record($crate::AssertionResult::new(
            $crate::AssertionKind::Require,
            $cond,
            stringify!($cond),
            None,
            file!(),
            line!(),
        )) {
            $ctx.abort();
            return;
        }
    };
}

/// Fatal equality assertion: on failure the enclosing test body returns.
#[macro_export]
macro_rules! require_eq {
    ($ctx:expr, $left:expr, $right:expr $(,)?) => {
        let passed = match (&$left, &$right) {
            (left, right) => $ctx.record($crate::AssertionResult::new(
                $crate::AssertionKind::Require,
                *left == *right,
                concat!(stringify!($left), " == ", stringify!($right)),
                Some(format!("{:?} == {:?}", left, right)),
                file!(),
                line!(),
            )),
        };
        if !passed {
            $ctx.abort();
            return;
        }
    };
}
