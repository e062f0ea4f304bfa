//! Primality via a Sieve of Eratosthenes.
//!
//! The scan asks "is n prime?" for every summand of every decomposition, so
//! we sieve once up to the largest N of the run and answer lookups in O(1).
//! 1 is not prime; 2 is prime.

use crate::error::AppError;

/// Precomputed primality table for `0..=limit`.
#[derive(Debug, Clone)]
pub struct PrimeSieve {
    limit: u64,
    is_prime: Vec<bool>,
}

impl PrimeSieve {
    pub fn new(limit: u64) -> Result<Self, AppError> {
        if limit < 2 {
            return Err(AppError::invalid_input(format!(
                "Sieve limit must be >= 2, got {limit}."
            )));
        }

        let len = (limit + 1) as usize;
        let mut is_prime = vec![true; len];
        is_prime[0] = false;
        is_prime[1] = false;

        let mut i = 2usize;
        while i * i < len {
            if is_prime[i] {
                let mut j = i * i;
                while j < len {
                    is_prime[j] = false;
                    j += i;
                }
            }
            i += 1;
        }

        Ok(Self { limit, is_prime })
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    /// Primality lookup. `n` must be within the sieved range.
    pub fn is_prime(&self, n: u64) -> bool {
        assert!(
            n <= self.limit,
            "primality query {n} beyond sieve limit {}",
            self.limit
        );
        self.is_prime[n as usize]
    }
}
