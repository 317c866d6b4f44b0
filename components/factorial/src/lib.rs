//! Factorial
//!
//! Integer factorial over `u64`. Negative inputs are not representable;
//! results past `20!` overflow and are reported through [`FactorialError`].

use thiserror::Error;

/// Largest `n` whose factorial fits in a `u64`.
pub const MAX_INPUT: u64 = 20;

/// Errors produced while computing a factorial
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FactorialError {
    /// The result does not fit in a `u64`
    #[error("{n}! overflows u64 (largest supported input is {MAX_INPUT})")]
    Overflow {
        /// The requested input
        n: u64,
    },
}

/// Compute `n!`, returning an error instead of wrapping on overflow.
///
/// # Examples
///
/// ```
/// use factorial::{checked_factorial, FactorialError};
///
/// assert_eq!(checked_factorial(5), Ok(120));
/// assert_eq!(checked_factorial(21), Err(FactorialError::Overflow { n: 21 }));
/// ```
pub fn checked_factorial(n: u64) -> Result<u64, FactorialError> {
    (2..=n).try_fold(1u64, |acc, k| {
        acc.checked_mul(k).ok_or(FactorialError::Overflow { n })
    })
}

/// Compute `n!`.
///
/// # Panics
///
/// Panics if `n` is greater than [`MAX_INPUT`]. Use [`checked_factorial`]
/// to handle that case.
pub fn factorial(n: u64) -> u64 {
    match checked_factorial(n) {
        Ok(value) => value,
        Err(e) => panic!("{}", e),
    }
}
