//! Test Harness
//!
//! A small assertion-based test runner. Test cases are registered statically
//! with [`test_case!`], assertions are recorded through a [`TestContext`], and
//! the [`TestRunner`] aggregates everything into a [`TestReport`] whose
//! outcome becomes the process exit code.
//!
//! ```no_run
//! use test_harness::{check_eq, test_case};
//!
//! test_case!("Addition works", "[math]", fn addition_works(ctx) {
//!     check_eq!(ctx, 1 + 1, 2);
//! });
//!
//! fn main() -> std::process::ExitCode {
//!     test_harness::run_main()
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod assertion;
pub mod cli;
pub mod error;
pub mod logging;
pub mod registry;
pub mod report;
pub mod runner;

pub use assertion::{AssertionKind, AssertionResult, TestContext};
pub use cli::{run_main, Cli, OutputFormat};
pub use error::{HarnessError, HarnessResult};
pub use registry::{registered_cases, TestCase};
pub use report::{CaseResult, TestReport};
pub use runner::{RunConfig, TestRunner};

#[doc(hidden)]
pub use inventory;
