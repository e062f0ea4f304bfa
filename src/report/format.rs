//! Formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the scan/aggregation code stays clean and testable
//! - output changes are localized (important for future snapshot tests)

use crate::domain::{ClassSummary, ClassifiedDecomposition, PairClass, ScanRecord};
use crate::report::{class_rows_by_rho, ground_state};

/// Format the ground-state table for one N: the lowest-ρ decompositions of
/// the Goldbach and Composite classes.
pub fn format_ground_state_table(rows: &[ClassifiedDecomposition], n: u64, top_n: usize) -> String {
    let mut out = String::new();

    out.push_str(&format!("TABLE: Ground State Decompositions at N = {}\n", fmt_n(n)));
    out.push_str(&format!(
        "{:<12} {:<16} {:>12} {:>12} {:>8}\n",
        "Type", "(p, q)", "rad_odd(p)", "rad_odd(q)", "rho"
    ));
    out.push_str(&format!(
        "{:-<12} {:-<16} {:-<12} {:-<12} {:-<8}\n",
        "", "", "", "", ""
    ));

    for class in [PairClass::Goldbach, PairClass::Composite] {
        for row in class_rows_by_rho(rows, class).into_iter().take(top_n) {
            out.push_str(&format_row(row));
        }
    }

    out
}

fn format_row(row: &ClassifiedDecomposition) -> String {
    let pair = format!("({}, {})", row.decomposition.p, row.decomposition.q);
    format!(
        "{:<12} {:<16} {:>12} {:>12} {:>8.4}\n",
        row.class.display_name(),
        pair,
        row.rad_odd_p,
        row.rad_odd_q,
        row.rho
    )
}

/// Format the per-class summary lines, ground state, and bandwidths.
pub fn format_class_summary(rows: &[ClassifiedDecomposition], summary: &ClassSummary) -> String {
    let mut out = String::new();

    for class in PairClass::all() {
        match summary.class(class) {
            Some(stats) => out.push_str(&format!(
                "{:<10} (n={:>4}): rho in [{:.4}, {:.4}], mean = {:.4}\n",
                class.display_name(),
                stats.count,
                stats.rho_min,
                stats.rho_max,
                stats.rho_mean
            )),
            None => out.push_str(&format!(
                "{:<10} (n=   0): absent\n",
                class.display_name()
            )),
        }
    }

    if let Some(gs) = ground_state(rows) {
        out.push_str(&format!(
            "\nGround state: p={}, q={}, rho = {:.4}\n",
            gs.decomposition.p, gs.decomposition.q, gs.rho
        ));
    }
    if let Some(gb) = &summary.goldbach {
        out.push_str(&format!("Bandwidth (Goldbach): {:.4}\n", gb.bandwidth));
    }
    if let Some(comp) = &summary.composite {
        out.push_str(&format!("Bandwidth (Composite): {:.4}\n", comp.bandwidth));
    }
    out.push_str(&format!(
        "Ratio (comp/gb bandwidth): {}\n",
        fmt_ratio(summary.bandwidth_ratio())
    ));

    out
}

/// Format the k = k_min..k_max evolution table.
pub fn format_evolution_table(records: &[ScanRecord]) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{:<8} {:<4} {:<6} {:<8} {:<8} {:<8} {:<8} {:<8} {:<6}\n",
        "N", "k", "#GB", "rho_min", "rho_mean", "rho_max", "BW_GB", "BW_Comp", "Ratio"
    ));
    out.push_str(&format!("{:-<70}\n", ""));

    for r in records {
        out.push_str(&format!(
            "{:<8} {:<4} {:<6} {:<8.4} {:<8.4} {:<8.4} {:<8.4} {:<8.4} {:<6}\n",
            r.n,
            r.k,
            r.num_goldbach,
            r.rho_min,
            r.rho_mean,
            r.rho_max,
            r.bw_goldbach,
            r.bw_composite,
            fmt_ratio(r.ratio)
        ));
    }

    out
}

fn fmt_ratio(ratio: Option<f64>) -> String {
    match ratio {
        Some(r) => format!("{r:.2}x"),
        None => "undefined".to_string(),
    }
}

fn fmt_n(n: u64) -> String {
    if n.is_power_of_two() {
        format!("{n} = 2^{}", n.trailing_zeros())
    } else {
        n.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::PrimeSieve;
    use crate::scan::scan_decompositions;
    use crate::stats::aggregate;

    fn n_1024() -> (Vec<ClassifiedDecomposition>, ClassSummary) {
        let sieve = PrimeSieve::new(1024).unwrap();
        let rows = scan_decompositions(1024, &sieve).unwrap();
        let summary = aggregate(1024, &rows);
        (rows, summary)
    }

    #[test]
    fn ground_state_table_leads_with_3_1021() {
        let (rows, _) = n_1024();
        let table = format_ground_state_table(&rows, 1024, 5);
        assert!(table.contains("N = 1024 = 2^10"));
        // 3 header lines, then 5 Goldbach + 5 Composite rows.
        assert_eq!(table.lines().count(), 13);
        let first_row = table.lines().nth(3).unwrap();
        assert!(first_row.starts_with("Goldbach"));
        assert!(first_row.contains("(3, 1021)"));
    }

    #[test]
    fn class_summary_mentions_counts_and_ground_state() {
        let (rows, summary) = n_1024();
        let text = format_class_summary(&rows, &summary);
        assert!(text.contains("Goldbach   (n=  22)"));
        assert!(text.contains("Composite  (n= 361)"));
        assert!(text.contains("Ground state: p=3, q=1021"));
        assert!(text.contains("Ratio (comp/gb bandwidth):"));
        assert!(!text.contains("undefined"));
    }

    #[test]
    fn evolution_table_has_one_line_per_record() {
        let sieve = PrimeSieve::new(1 << 9).unwrap();
        let records = crate::stats::scan_powers_of_two(7, 9, &sieve).unwrap();
        let table = format_evolution_table(&records);
        assert_eq!(table.lines().count(), 2 + records.len());
        assert!(table.contains("128"));
        assert!(table.contains("512"));
    }

    #[test]
    fn undefined_ratio_is_spelled_out() {
        assert_eq!(fmt_ratio(None), "undefined");
        assert_eq!(fmt_ratio(Some(2.954)), "2.95x");
    }
}
