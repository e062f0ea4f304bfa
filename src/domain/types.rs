//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during a scan
//! - exported to CSV/JSON
//! - reloaded later for plotting or comparisons
//!
//! Ownership is purely value-based: every entity is computed from its inputs
//! and never mutated afterwards.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Classification of a decomposition by the primality of its two summands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PairClass {
    /// Both summands prime.
    Goldbach,
    /// Exactly one summand prime.
    Mixed,
    /// Neither summand prime.
    Composite,
}

impl PairClass {
    /// Label used in tables and the CSV `type` column.
    pub fn display_name(self) -> &'static str {
        match self {
            PairClass::Goldbach => "Goldbach",
            PairClass::Mixed => "Mixed",
            PairClass::Composite => "Composite",
        }
    }

    /// All classes, in reporting order.
    pub fn all() -> [PairClass; 3] {
        [PairClass::Goldbach, PairClass::Mixed, PairClass::Composite]
    }
}

/// An additive decomposition `p + q = n` with `p <= q`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decomposition {
    pub n: u64,
    pub p: u64,
    pub q: u64,
}

/// A decomposition tagged with its class and conductor data.
///
/// Invariants (enforced at construction in `scan::evaluate`):
/// - `conductor_proxy = (rad_odd_p * rad_odd_q)^2`
/// - `rho = ln(conductor_proxy) / ln(n)`, and exactly `0.0` when the proxy is 1
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedDecomposition {
    pub decomposition: Decomposition,
    pub class: PairClass,
    pub rad_odd_p: u64,
    pub rad_odd_q: u64,
    pub conductor_proxy: u128,
    pub rho: f64,
}

/// Aggregate ρ statistics for one (N, class) cell.
///
/// `count` covers every member of the class; the ρ statistics cover the
/// members with ρ > 0. The only decomposition that can have ρ = 0 is the
/// midpoint pair (N/2, N/2) when N is a power of two, which belongs in the
/// class census but carries no conductor information.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassStatistics {
    pub count: usize,
    pub rho_min: f64,
    pub rho_mean: f64,
    pub rho_max: f64,
    /// `rho_max - rho_min`; 0 for a singleton class.
    pub bandwidth: f64,
}

/// Per-N aggregation result: one optional `ClassStatistics` per class.
///
/// A class with no members (or no positive-ρ members) is reported as absent
/// rather than as a zero-filled record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassSummary {
    pub n: u64,
    pub goldbach: Option<ClassStatistics>,
    pub mixed: Option<ClassStatistics>,
    pub composite: Option<ClassStatistics>,
}

impl ClassSummary {
    pub fn class(&self, class: PairClass) -> Option<&ClassStatistics> {
        match class {
            PairClass::Goldbach => self.goldbach.as_ref(),
            PairClass::Mixed => self.mixed.as_ref(),
            PairClass::Composite => self.composite.as_ref(),
        }
    }

    /// `BW_composite / BW_goldbach`, or `None` when undefined.
    ///
    /// Undefined means: either class absent, or the Goldbach bandwidth is 0
    /// (a singleton Goldbach class). Callers print/export a sentinel instead
    /// of dividing.
    pub fn bandwidth_ratio(&self) -> Option<f64> {
        let gb = self.goldbach.as_ref()?;
        let comp = self.composite.as_ref()?;
        if gb.bandwidth > 0.0 {
            Some(comp.bandwidth / gb.bandwidth)
        } else {
            None
        }
    }
}

/// One row of the 2^k evolution table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanRecord {
    pub n: u64,
    pub k: u32,
    pub num_goldbach: usize,
    /// ρ statistics over the Goldbach class.
    pub rho_min: f64,
    pub rho_mean: f64,
    pub rho_max: f64,
    pub bw_goldbach: f64,
    pub bw_composite: f64,
    /// `bw_composite / bw_goldbach`; `None` when the ratio is undefined.
    pub ratio: Option<f64>,
}

/// A saved evolution scan (JSON).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanFile {
    pub tool: String,
    pub k_min: u32,
    pub k_max: u32,
    pub records: Vec<ScanRecord>,
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus defaults).
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// N for the per-decomposition table/export (must be even, >= 6).
    pub table_n: u64,
    pub k_min: u32,
    pub k_max: u32,

    /// Rows shown per class in the ground-state table.
    pub top_n: usize,

    pub plot: bool,
    pub plot_width: usize,
    pub plot_height: usize,

    pub export_decompositions: Option<PathBuf>,
    pub export_evolution: Option<PathBuf>,
    pub export_scan_json: Option<PathBuf>,
}

/// Largest supported k. Keeps the sieve small and `rad_odd(p) * rad_odd(q)`
/// comfortably inside u64 before the u128 squaring.
pub const K_MAX_LIMIT: u32 = 24;

impl ScanConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.table_n < 6 || self.table_n % 2 != 0 {
            return Err(AppError::invalid_input(format!(
                "N must be even and >= 6, got {}.",
                self.table_n
            )));
        }
        if self.k_min < 3 {
            return Err(AppError::invalid_input(format!(
                "k_min must be >= 3 (N = 2^k needs at least one decomposition), got {}.",
                self.k_min
            )));
        }
        if self.k_min > self.k_max {
            return Err(AppError::invalid_input(format!(
                "k range is empty: k_min={} > k_max={}.",
                self.k_min, self.k_max
            )));
        }
        if self.k_max > K_MAX_LIMIT {
            return Err(AppError::invalid_input(format!(
                "k_max must be <= {K_MAX_LIMIT}, got {}.",
                self.k_max
            )));
        }
        Ok(())
    }

    /// Sieve limit covering both the table N and the largest scanned N.
    pub fn sieve_limit(&self) -> u64 {
        self.table_n.max(1u64 << self.k_max)
    }
}
