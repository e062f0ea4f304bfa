//! Multi-scale scanner: the 2^k evolution table.
//!
//! Each k is scanned independently (no cross-k state), so the scan runs one
//! rayon task per k and sorts the records afterwards. The emitted sequence
//! is always ascending in k regardless of execution order.

use rayon::prelude::*;

use crate::domain::{ClassSummary, ScanRecord};
use crate::error::AppError;
use crate::math::PrimeSieve;
use crate::scan::scan_decompositions;
use crate::stats::aggregate;

/// Scan N = 2^k for each k in `[k_min, k_max]`, ascending.
///
/// Aborts the whole scan if the Goldbach class is empty for some tested N:
/// Goldbach's conjecture predicts at least one pair at every even N, so an
/// empty class signals a bug (or a far more interesting discovery) and must
/// not be papered over with partial statistics.
pub fn scan_powers_of_two(
    k_min: u32,
    k_max: u32,
    sieve: &PrimeSieve,
) -> Result<Vec<ScanRecord>, AppError> {
    if k_min < 3 || k_min > k_max {
        return Err(AppError::invalid_input(format!(
            "Invalid k range [{k_min}, {k_max}] (need 3 <= k_min <= k_max)."
        )));
    }
    if (1u64 << k_max) > sieve.limit() {
        return Err(AppError::invalid_input(format!(
            "Sieve limit {} does not cover N = 2^{k_max}.",
            sieve.limit()
        )));
    }

    let mut records = (k_min..=k_max)
        .into_par_iter()
        .map(|k| scan_single_scale(k, sieve))
        .collect::<Result<Vec<ScanRecord>, AppError>>()?;
    records.sort_by_key(|r| r.k);
    Ok(records)
}

/// Scan one N = 2^k and reduce it to a `ScanRecord`.
fn scan_single_scale(k: u32, sieve: &PrimeSieve) -> Result<ScanRecord, AppError> {
    let n = 1u64 << k;
    let rows = scan_decompositions(n, sieve)?;
    let summary = aggregate(n, &rows);
    record_from_summary(k, &summary)
}

fn record_from_summary(k: u32, summary: &ClassSummary) -> Result<ScanRecord, AppError> {
    let Some(gb) = summary.goldbach.as_ref() else {
        return Err(AppError::anomaly(format!(
            "No Goldbach decomposition found for N = {} (k = {k}); aborting scan.",
            summary.n
        )));
    };
    let bw_composite = summary
        .composite
        .as_ref()
        .map(|c| c.bandwidth)
        .unwrap_or(0.0);

    Ok(ScanRecord {
        n: summary.n,
        k,
        num_goldbach: gb.count,
        rho_min: gb.rho_min,
        rho_mean: gb.rho_mean,
        rho_max: gb.rho_max,
        bw_goldbach: gb.bandwidth,
        bw_composite,
        ratio: summary.bandwidth_ratio(),
    })
}
