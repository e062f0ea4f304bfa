//! Decomposition enumeration for one even N.
//!
//! The enumerator yields the unordered pairs {p, q} with `p + q = N` as
//! `Decomposition` values, ascending in p, with `p <= q`.
//!
//! Boundary convention: p starts at 3. For even N the terms p = 1 and p = 2
//! are degenerate (1 is not prime, and q = N - 2 is even), so they carry no
//! class information and are excluded outright. With this convention N = 1024
//! yields exactly 510 decompositions, the count reported alongside the
//! reference data.

use crate::domain::Decomposition;
use crate::error::AppError;

/// Lazy, restartable sequence of decompositions of `n`.
///
/// Cloning restarts the sequence; iteration has no side effects.
#[derive(Debug, Clone)]
pub struct Decompositions {
    n: u64,
    next_p: u64,
}

impl Iterator for Decompositions {
    type Item = Decomposition;

    fn next(&mut self) -> Option<Decomposition> {
        if self.next_p > self.n / 2 {
            return None;
        }
        let p = self.next_p;
        self.next_p += 1;
        Some(Decomposition {
            n: self.n,
            p,
            q: self.n - p,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.n / 2 + 1).saturating_sub(self.next_p) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Decompositions {}

/// Enumerate the decompositions of an even `n >= 6`.
pub fn enumerate_decompositions(n: u64) -> Result<Decompositions, AppError> {
    if n % 2 != 0 {
        return Err(AppError::invalid_input(format!(
            "Decompositions are enumerated for even N only, got {n}."
        )));
    }
    if n < 6 {
        return Err(AppError::invalid_input(format!(
            "N must be >= 6 so that at least the pair (3, N-3) exists, got {n}."
        )));
    }
    Ok(Decompositions { n, next_p: 3 })
}
