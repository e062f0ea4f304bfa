//! Odd radicals.
//!
//! `rad_odd(n)` is the product of the distinct *odd* prime factors of n; the
//! factor 2 is stripped and never contributes. Consequences used throughout
//! the scan:
//!
//! - `rad_odd(2^m) = 1` for all m >= 0 (empty product)
//! - `rad_odd(p) = p` for odd primes p ("ground state locking")
//!
//! Trial division up to sqrt(n) is exact and fast for the bounded inputs of
//! this tool (N <= 2^24).

use crate::error::AppError;

/// Product of the distinct odd prime factors of `n`.
///
/// Returns 1 for n = 1 and for powers of two; errors for n = 0.
pub fn odd_radical(n: u64) -> Result<u64, AppError> {
    if n == 0 {
        return Err(AppError::invalid_input(
            "odd_radical is defined for n >= 1, got 0.",
        ));
    }

    let mut rest = n;
    while rest % 2 == 0 {
        rest /= 2;
    }

    let mut radical = 1u64;
    let mut d = 3u64;
    while d * d <= rest {
        if rest % d == 0 {
            radical *= d;
            while rest % d == 0 {
                rest /= d;
            }
        }
        d += 2;
    }
    // Whatever survives the loop is itself prime.
    if rest > 1 {
        radical *= rest;
    }

    Ok(radical)
}
