//! Per-N aggregation of classified decompositions.
//!
//! Responsibilities:
//!
//! - partition one N's classified rows by class
//! - compute per-class count, ρ_min/mean/max, bandwidth in a single pass
//! - expose the composite/Goldbach bandwidth ratio (with an explicit
//!   "undefined" state instead of a division by zero)

pub mod evolution;

pub use evolution::*;

use crate::domain::{ClassStatistics, ClassSummary, ClassifiedDecomposition, PairClass};

/// Single-pass accumulator for one class.
#[derive(Debug, Clone, Copy, Default)]
struct ClassAccumulator {
    count: usize,
    positive: usize,
    sum: f64,
    min: f64,
    max: f64,
}

impl ClassAccumulator {
    fn push(&mut self, rho: f64) {
        self.count += 1;
        // ρ = 0 marks the degenerate power-of-two pair; it belongs in the
        // census but not in the conductor statistics.
        if rho > 0.0 {
            if self.positive == 0 {
                self.min = rho;
                self.max = rho;
            } else {
                self.min = self.min.min(rho);
                self.max = self.max.max(rho);
            }
            self.positive += 1;
            self.sum += rho;
        }
    }

    fn finish(self) -> Option<ClassStatistics> {
        if self.positive == 0 {
            return None;
        }
        Some(ClassStatistics {
            count: self.count,
            rho_min: self.min,
            rho_mean: self.sum / self.positive as f64,
            rho_max: self.max,
            bandwidth: self.max - self.min,
        })
    }
}

/// Aggregate one N's classified decompositions into per-class statistics.
///
/// Pure function of the input set: the result does not depend on the order
/// of `rows`.
pub fn aggregate(n: u64, rows: &[ClassifiedDecomposition]) -> ClassSummary {
    let mut goldbach = ClassAccumulator::default();
    let mut mixed = ClassAccumulator::default();
    let mut composite = ClassAccumulator::default();

    for row in rows {
        let acc = match row.class {
            PairClass::Goldbach => &mut goldbach,
            PairClass::Mixed => &mut mixed,
            PairClass::Composite => &mut composite,
        };
        acc.push(row.rho);
    }

    ClassSummary {
        n,
        goldbach: goldbach.finish(),
        mixed: mixed.finish(),
        composite: composite.finish(),
    }
}
