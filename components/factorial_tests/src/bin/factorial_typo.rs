//! Factorial suite with one wrong expectation
//!
//! Shows how a failing run is reported: the mistyped `factorial(3)` check
//! fails, the other four still run, and the process exits with status 1.

use factorial::factorial;
use std::process::ExitCode;
use test_harness::{check_eq, test_case};

test_case!("Factorials are computed", "[factorial]", fn factorials_are_computed(ctx) {
    check_eq!(ctx, factorial(0), 1);
    check_eq!(ctx, factorial(1), 1);
    check_eq!(ctx, factorial(2), 2);
    check_eq!(ctx, factorial(3), 7);
    check_eq!(ctx, factorial(10), 3628800);
});

fn main() -> ExitCode {
    test_harness::run_main()
}
