//! Decomposition scanning.
//!
//! Responsibilities:
//!
//! - enumerate the decompositions `p + q = N` for one N (`enumerate`)
//! - classify each pair and attach conductor data (`evaluate`)
//! - produce the full classified list consumed by aggregation and export

pub mod enumerate;
pub mod evaluate;

pub use enumerate::*;
pub use evaluate::*;

use crate::domain::ClassifiedDecomposition;
use crate::error::AppError;
use crate::math::PrimeSieve;

/// Enumerate and classify every decomposition of `n`.
///
/// The output preserves enumeration order (ascending p), which keeps table
/// output stable across runs.
pub fn scan_decompositions(
    n: u64,
    sieve: &PrimeSieve,
) -> Result<Vec<ClassifiedDecomposition>, AppError> {
    let decompositions = enumerate_decompositions(n)?;
    let mut out = Vec::with_capacity(decompositions.len());
    for d in decompositions {
        out.push(evaluate(&d, sieve)?);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PairClass;

    #[test]
    fn scan_preserves_enumeration_order() {
        let sieve = PrimeSieve::new(256).unwrap();
        let rows = scan_decompositions(256, &sieve).unwrap();
        assert_eq!(rows.len(), 126);
        for pair in rows.windows(2) {
            assert!(pair[0].decomposition.p < pair[1].decomposition.p);
        }
    }

    #[test]
    fn scan_is_idempotent() {
        let sieve = PrimeSieve::new(512).unwrap();
        let a = scan_decompositions(512, &sieve).unwrap();
        let b = scan_decompositions(512, &sieve).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn first_row_of_1024_is_the_ground_state_pair() {
        let sieve = PrimeSieve::new(1024).unwrap();
        let rows = scan_decompositions(1024, &sieve).unwrap();
        let first = &rows[0];
        assert_eq!(first.decomposition.p, 3);
        assert_eq!(first.decomposition.q, 1021);
        assert_eq!(first.class, PairClass::Goldbach);
    }
}
