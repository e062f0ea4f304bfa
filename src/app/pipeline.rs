//! Shared scan-pipeline logic used by the CLI subcommands.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! sieve -> enumerate -> classify/evaluate -> aggregate (-> evolution records)
//!
//! The subcommands then focus on presentation (printing vs exporting).

use crate::domain::{ClassSummary, ClassifiedDecomposition, ScanConfig, ScanRecord};
use crate::error::AppError;
use crate::math::PrimeSieve;
use crate::scan::scan_decompositions;
use crate::stats::{aggregate, scan_powers_of_two};

/// All computed outputs of a single-N table run.
#[derive(Debug, Clone)]
pub struct TableRun {
    pub rows: Vec<ClassifiedDecomposition>,
    pub summary: ClassSummary,
}

/// All computed outputs of an evolution run.
#[derive(Debug, Clone)]
pub struct EvolutionRun {
    pub records: Vec<ScanRecord>,
}

/// Scan and aggregate the configured table N.
pub fn run_table(config: &ScanConfig) -> Result<TableRun, AppError> {
    config.validate()?;
    let sieve = PrimeSieve::new(config.table_n)?;
    run_table_with_sieve(config, &sieve)
}

/// Table run with a pre-built sieve (used when a run needs both outputs).
pub fn run_table_with_sieve(config: &ScanConfig, sieve: &PrimeSieve) -> Result<TableRun, AppError> {
    let rows = scan_decompositions(config.table_n, sieve)?;
    let summary = aggregate(config.table_n, &rows);
    Ok(TableRun { rows, summary })
}

/// Scan the configured k range.
pub fn run_evolution(config: &ScanConfig) -> Result<EvolutionRun, AppError> {
    config.validate()?;
    let sieve = PrimeSieve::new(1u64 << config.k_max)?;
    run_evolution_with_sieve(config, &sieve)
}

/// Evolution run with a pre-built sieve.
pub fn run_evolution_with_sieve(
    config: &ScanConfig,
    sieve: &PrimeSieve,
) -> Result<EvolutionRun, AppError> {
    let records = scan_powers_of_two(config.k_min, config.k_max, sieve)?;
    Ok(EvolutionRun { records })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ScanConfig {
        ScanConfig {
            table_n: 1024,
            k_min: 7,
            k_max: 10,
            top_n: 5,
            plot: false,
            plot_width: 100,
            plot_height: 25,
            export_decompositions: None,
            export_evolution: None,
            export_scan_json: None,
        }
    }

    #[test]
    fn table_run_produces_510_rows() {
        let run = run_table(&config()).unwrap();
        assert_eq!(run.rows.len(), 510);
        assert_eq!(run.summary.n, 1024);
        assert!(run.summary.goldbach.is_some());
    }

    #[test]
    fn evolution_run_covers_the_k_range() {
        let run = run_evolution(&config()).unwrap();
        let ks: Vec<u32> = run.records.iter().map(|r| r.k).collect();
        assert_eq!(ks, vec![7, 8, 9, 10]);
    }

    #[test]
    fn invalid_config_is_rejected_before_scanning() {
        let mut c = config();
        c.table_n = 1023;
        assert!(run_table(&c).is_err());
        c = config();
        c.k_min = 1;
        assert!(run_evolution(&c).is_err());
    }

    #[test]
    fn shared_sieve_serves_both_runs() {
        let c = config();
        let sieve = PrimeSieve::new(c.sieve_limit()).unwrap();
        let table = run_table_with_sieve(&c, &sieve).unwrap();
        let evolution = run_evolution_with_sieve(&c, &sieve).unwrap();
        // k = 10 record must agree with the direct N = 1024 aggregation.
        let record = evolution.records.last().unwrap();
        let gb = table.summary.goldbach.as_ref().unwrap();
        assert_eq!(record.num_goldbach, gb.count);
        assert_eq!(record.bw_goldbach, gb.bandwidth);
    }
}
