//! ASCII plotting for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Scatter elements (ρ vs p for one N):
//! - Composite: `.`
//! - Mixed: `+`
//! - Goldbach: `o`
//! - ground state: `G`
//!
//! Evolution elements (bandwidth vs k from a scan file):
//! - Goldbach bandwidth: `=` line
//! - Composite bandwidth: `-` line

use crate::domain::{ClassifiedDecomposition, PairClass, ScanRecord};
use crate::report::ground_state;

/// Render the ρ-vs-p scatter for one N's classified decompositions.
///
/// Zero-ρ rows (the midpoint power-of-two pair) are skipped; they would pin
/// the y-axis to 0 without adding information.
pub fn render_rho_scatter(rows: &[ClassifiedDecomposition], width: usize, height: usize) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let plotted: Vec<&ClassifiedDecomposition> = rows.iter().filter(|r| r.rho > 0.0).collect();
    let Some(((p_min, p_max), (rho_min, rho_max))) = scatter_ranges(&plotted) else {
        return "Plot: no decompositions with rho > 0.\n".to_string();
    };
    let (rho_min, rho_max) = pad_range(rho_min, rho_max, 0.05);

    let mut grid = vec![vec![' '; width]; height];

    // Draw sparse classes last so they stay visible where points overlap.
    for class in [PairClass::Composite, PairClass::Mixed, PairClass::Goldbach] {
        let ch = class_marker(class);
        for row in plotted.iter().filter(|r| r.class == class) {
            let x = map_x(row.decomposition.p as f64, p_min, p_max, width);
            let y = map_y(row.rho, rho_min, rho_max, height);
            grid[y][x] = ch;
        }
    }

    if let Some(gs) = ground_state(rows) {
        let x = map_x(gs.decomposition.p as f64, p_min, p_max, width);
        let y = map_y(gs.rho, rho_min, rho_max, height);
        grid[y][x] = 'G';
    }

    let mut out = String::new();
    out.push_str(&format!(
        "Plot: p=[{p_min:.0}, {p_max:.0}] | rho=[{rho_min:.3}, {rho_max:.3}] | G=ground state, o=Goldbach, +=Mixed, .=Composite\n"
    ));
    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }
    out
}

/// Render the bandwidth-evolution plot from scan records: both class
/// bandwidths as polylines over k.
pub fn render_bandwidth_plot(records: &[ScanRecord], width: usize, height: usize) -> String {
    let width = width.max(10);
    let height = height.max(5);

    if records.len() < 2 {
        return "Plot: need at least two scan records.\n".to_string();
    }

    let k_min = records.iter().map(|r| r.k).min().unwrap_or(0) as f64;
    let k_max = records.iter().map(|r| r.k).max().unwrap_or(0) as f64;
    let bw_max = records
        .iter()
        .map(|r| r.bw_composite.max(r.bw_goldbach))
        .fold(f64::NEG_INFINITY, f64::max);
    let (y_min, y_max) = pad_range(0.0, bw_max, 0.05);

    let mut grid = vec![vec![' '; width]; height];

    let goldbach: Vec<(f64, f64)> = records.iter().map(|r| (r.k as f64, r.bw_goldbach)).collect();
    let composite: Vec<(f64, f64)> = records
        .iter()
        .map(|r| (r.k as f64, r.bw_composite))
        .collect();
    draw_polyline(&mut grid, &composite, k_min, k_max, y_min, y_max, '-');
    draw_polyline(&mut grid, &goldbach, k_min, k_max, y_min, y_max, '=');

    let mut out = String::new();
    out.push_str(&format!(
        "Plot: k=[{k_min:.0}, {k_max:.0}] | bandwidth=[{y_min:.3}, {y_max:.3}] | ==Goldbach, -=Composite\n"
    ));
    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }
    out
}

fn class_marker(class: PairClass) -> char {
    match class {
        PairClass::Goldbach => 'o',
        PairClass::Mixed => '+',
        PairClass::Composite => '.',
    }
}

type Ranges = ((f64, f64), (f64, f64));

fn scatter_ranges(rows: &[&ClassifiedDecomposition]) -> Option<Ranges> {
    let mut p_min = f64::INFINITY;
    let mut p_max = f64::NEG_INFINITY;
    let mut rho_min = f64::INFINITY;
    let mut rho_max = f64::NEG_INFINITY;

    for r in rows {
        let p = r.decomposition.p as f64;
        p_min = p_min.min(p);
        p_max = p_max.max(p);
        rho_min = rho_min.min(r.rho);
        rho_max = rho_max.max(r.rho);
    }

    if p_min.is_finite() && p_max > p_min && rho_min.is_finite() && rho_max > rho_min {
        Some(((p_min, p_max), (rho_min, rho_max)))
    } else {
        None
    }
}

fn pad_range(min: f64, max: f64, frac: f64) -> (f64, f64) {
    let span = (max - min).abs();
    let pad = (span * frac).max(1e-12);
    (min - pad, max + pad)
}

fn map_x(v: f64, v_min: f64, v_max: f64, width: usize) -> usize {
    let width = width.max(2);
    let u = ((v - v_min) / (v_max - v_min)).clamp(0.0, 1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

fn map_y(v: f64, v_min: f64, v_max: f64, height: usize) -> usize {
    let height = height.max(2);
    let u = ((v - v_min) / (v_max - v_min)).clamp(0.0, 1.0);
    // v = max -> row 0 (top of the grid)
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
}

fn draw_polyline(
    grid: &mut [Vec<char>],
    points: &[(f64, f64)],
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
    ch: char,
) {
    if points.len() < 2 {
        return;
    }
    let height = grid.len();
    let width = grid[0].len();

    let mut prev = None;
    for &(x, y) in points {
        let gx = map_x(x, x_min, x_max, width);
        let gy = map_y(y, y_min, y_max, height);
        if let Some((x0, y0)) = prev {
            draw_line(grid, x0, y0, gx, gy, ch);
        } else {
            grid[gy][gx] = ch;
        }
        prev = Some((gx, gy));
    }
}

/// Integer line drawing (Bresenham-ish).
fn draw_line(grid: &mut [Vec<char>], x0: usize, y0: usize, x1: usize, y1: usize, ch: char) {
    let mut x0 = x0 as isize;
    let mut y0 = y0 as isize;
    let x1 = x1 as isize;
    let y1 = y1 as isize;

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if y0 >= 0
            && (y0 as usize) < grid.len()
            && x0 >= 0
            && (x0 as usize) < grid[0].len()
            && grid[y0 as usize][x0 as usize] == ' '
        {
            grid[y0 as usize][x0 as usize] = ch;
        }

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::PrimeSieve;
    use crate::scan::scan_decompositions;
    use crate::stats::scan_powers_of_two;

    #[test]
    fn scatter_has_fixed_dimensions_and_markers() {
        let sieve = PrimeSieve::new(1024).unwrap();
        let rows = scan_decompositions(1024, &sieve).unwrap();
        let plot = render_rho_scatter(&rows, 80, 20);

        let lines: Vec<&str> = plot.lines().collect();
        assert_eq!(lines.len(), 21);
        assert!(lines[0].starts_with("Plot: p=[3, 511]"));
        for line in &lines[1..] {
            assert_eq!(line.chars().count(), 80);
        }

        let body = lines[1..].join("\n");
        assert!(body.contains('G'));
        assert!(body.contains('o'));
        assert!(body.contains('+'));
        assert!(body.contains('.'));
    }

    #[test]
    fn no_goldbach_marker_below_the_ground_state() {
        let sieve = PrimeSieve::new(1024).unwrap();
        let rows = scan_decompositions(1024, &sieve).unwrap();
        let plot = render_rho_scatter(&rows, 80, 20);

        let lines: Vec<&str> = plot.lines().collect();
        let g_row = lines[1..]
            .iter()
            .position(|l| l.contains('G'))
            .expect("ground state marker present");
        // The ground state has the smallest Goldbach rho, so every other
        // Goldbach marker maps to the same row or above.
        for (i, line) in lines[1..].iter().enumerate() {
            if i > g_row {
                assert!(!line.contains('o'), "Goldbach marker below ground state");
            }
        }
    }

    #[test]
    fn bandwidth_plot_draws_both_series() {
        let sieve = PrimeSieve::new(1 << 10).unwrap();
        let records = scan_powers_of_two(7, 10, &sieve).unwrap();
        let plot = render_bandwidth_plot(&records, 60, 15);

        let lines: Vec<&str> = plot.lines().collect();
        assert_eq!(lines.len(), 16);
        assert!(lines[0].starts_with("Plot: k=[7, 10]"));
        let body = lines[1..].join("\n");
        assert!(body.contains('='));
        assert!(body.contains('-'));
    }

    #[test]
    fn degenerate_inputs_do_not_panic() {
        assert!(render_rho_scatter(&[], 80, 20).starts_with("Plot:"));
        assert!(render_bandwidth_plot(&[], 80, 20).starts_with("Plot:"));
    }
}
