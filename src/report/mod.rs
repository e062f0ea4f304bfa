//! Reporting utilities: ground-state ordering and formatted terminal output.

pub mod format;

pub use format::*;

use crate::domain::{ClassifiedDecomposition, PairClass};

/// The ground state: the Goldbach decomposition with the smallest ρ.
pub fn ground_state(rows: &[ClassifiedDecomposition]) -> Option<&ClassifiedDecomposition> {
    rows.iter()
        .filter(|r| r.class == PairClass::Goldbach)
        .min_by(|a, b| a.rho.partial_cmp(&b.rho).unwrap_or(std::cmp::Ordering::Equal))
}

/// Members of one class with ρ > 0, sorted by ascending ρ.
///
/// The zero-ρ midpoint pair is omitted here just as it is omitted from the
/// class statistics.
pub fn class_rows_by_rho(
    rows: &[ClassifiedDecomposition],
    class: PairClass,
) -> Vec<&ClassifiedDecomposition> {
    let mut out: Vec<&ClassifiedDecomposition> = rows
        .iter()
        .filter(|r| r.class == class && r.rho > 0.0)
        .collect();
    out.sort_by(|a, b| a.rho.partial_cmp(&b.rho).unwrap_or(std::cmp::Ordering::Equal));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::PrimeSieve;
    use crate::scan::scan_decompositions;

    #[test]
    fn ground_state_of_1024_is_3_1021() {
        let sieve = PrimeSieve::new(1024).unwrap();
        let rows = scan_decompositions(1024, &sieve).unwrap();
        let gs = ground_state(&rows).unwrap();
        assert_eq!((gs.decomposition.p, gs.decomposition.q), (3, 1021));
    }

    #[test]
    fn class_rows_are_sorted_and_positive() {
        let sieve = PrimeSieve::new(1024).unwrap();
        let rows = scan_decompositions(1024, &sieve).unwrap();
        let composite = class_rows_by_rho(&rows, PairClass::Composite);
        // The midpoint (512, 512) is the one composite row with rho = 0.
        assert_eq!(composite.len(), 360);
        for pair in composite.windows(2) {
            assert!(pair[0].rho <= pair[1].rho);
        }
        assert!(composite.first().unwrap().rho > 0.0);
    }
}
