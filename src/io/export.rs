//! Export scan results to CSV.
//!
//! The exports are meant to be easy to consume in spreadsheets, pandas, or
//! downstream plotting scripts; columns match the paper's published data
//! files (`decompositions_N1024.csv`, `bandwidth_evolution_2k.csv`).

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::domain::{ClassifiedDecomposition, ScanRecord};
use crate::error::AppError;

/// Write one row per classified decomposition.
pub fn write_decompositions_csv(
    path: &Path,
    rows: &[ClassifiedDecomposition],
) -> Result<(), AppError> {
    let mut file = File::create(path).map_err(|e| {
        AppError::io(format!(
            "Failed to create decompositions CSV '{}': {e}",
            path.display()
        ))
    })?;

    writeln!(file, "N,p,q,type,rad_odd_p,rad_odd_q,conductor_proxy,rho")
        .map_err(|e| AppError::io(format!("Failed to write CSV header: {e}")))?;

    for row in rows {
        let d = &row.decomposition;
        writeln!(
            file,
            "{},{},{},{},{},{},{},{:.6}",
            d.n,
            d.p,
            d.q,
            row.class.display_name(),
            row.rad_odd_p,
            row.rad_odd_q,
            row.conductor_proxy,
            row.rho
        )
        .map_err(|e| AppError::io(format!("Failed to write CSV row: {e}")))?;
    }

    Ok(())
}

/// Write the 2^k evolution table.
///
/// An undefined bandwidth ratio is exported as `NaN` (parsed as missing by
/// most CSV readers) rather than a fabricated number.
pub fn write_evolution_csv(path: &Path, records: &[ScanRecord]) -> Result<(), AppError> {
    let mut file = File::create(path).map_err(|e| {
        AppError::io(format!(
            "Failed to create evolution CSV '{}': {e}",
            path.display()
        ))
    })?;

    writeln!(
        file,
        "N,k,num_goldbach,rho_min,rho_mean,rho_max,BW_goldbach,BW_composite,ratio"
    )
    .map_err(|e| AppError::io(format!("Failed to write CSV header: {e}")))?;

    for r in records {
        writeln!(
            file,
            "{},{},{},{:.6},{:.6},{:.6},{:.6},{:.6},{:.2}",
            r.n,
            r.k,
            r.num_goldbach,
            r.rho_min,
            r.rho_mean,
            r.rho_max,
            r.bw_goldbach,
            r.bw_composite,
            r.ratio.unwrap_or(f64::NAN)
        )
        .map_err(|e| AppError::io(format!("Failed to write CSV row: {e}")))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::PrimeSieve;
    use crate::scan::scan_decompositions;
    use crate::stats::scan_powers_of_two;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("rigid-scan-test-{}-{name}", std::process::id()))
    }

    #[test]
    fn decompositions_csv_round_trips_line_count() {
        let sieve = PrimeSieve::new(1024).unwrap();
        let rows = scan_decompositions(1024, &sieve).unwrap();

        let path = temp_path("decompositions.csv");
        write_decompositions_csv(&path, &rows).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();

        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "N,p,q,type,rad_odd_p,rad_odd_q,conductor_proxy,rho"
        );
        assert_eq!(lines.count(), 510);
        assert!(text.contains("1024,3,1021,Goldbach,3,1021,9381969,2.3161"));
    }

    #[test]
    fn evolution_csv_has_expected_shape() {
        let sieve = PrimeSieve::new(1 << 9).unwrap();
        let records = scan_powers_of_two(7, 9, &sieve).unwrap();

        let path = temp_path("evolution.csv");
        write_evolution_csv(&path, &records).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();

        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "N,k,num_goldbach,rho_min,rho_mean,rho_max,BW_goldbach,BW_composite,ratio"
        );
        assert_eq!(lines.count(), 3);
        assert!(text.contains("\n128,7,"));
        assert!(text.contains("\n512,9,"));
    }
}
