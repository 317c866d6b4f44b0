//! Factorial test suite
//!
//! Runs every registered case through the harness. Exit code 0 means every
//! assertion held.

use factorial::factorial;
use std::process::ExitCode;
use test_harness::{check_eq, test_case};

test_case!("Factorials are computed", "[factorial]", fn factorials_are_computed(ctx) {
    check_eq!(ctx, factorial(0), 1);
    check_eq!(ctx, factorial(1), 1);
    check_eq!(ctx, factorial(2), 2);
    check_eq!(ctx, factorial(3), 6);
    check_eq!(ctx, factorial(10), 3628800);
});

fn main() -> ExitCode {
    test_harness::run_main()
}
