//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - builds the primality sieve and runs the scan pipeline
//! - prints tables/plots
//! - writes optional exports

use clap::Parser;

use crate::cli::{Command, ExportArgs, PlotArgs, ScanArgs, TableArgs};
use crate::domain::ScanConfig;
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `rigid` binary.
pub fn run() -> Result<(), AppError> {
    // We want `rigid` and `rigid -n 2048` to behave like `rigid table ...`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of
    // the argv list before parsing.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Table(args) => handle_table(args),
        Command::Scan(args) => handle_scan(args),
        Command::Export(args) => handle_export(args),
        Command::Plot(args) => handle_plot(args),
    }
}

fn handle_table(args: TableArgs) -> Result<(), AppError> {
    let config = table_config_from_args(&args);
    let run = pipeline::run_table(&config)?;

    println!(
        "{}",
        crate::report::format_ground_state_table(&run.rows, config.table_n, config.top_n)
    );
    println!("{}", crate::report::format_class_summary(&run.rows, &run.summary));

    if config.plot {
        let plot =
            crate::plot::render_rho_scatter(&run.rows, config.plot_width, config.plot_height);
        println!("{plot}");
    }

    if let Some(path) = &config.export_decompositions {
        crate::io::write_decompositions_csv(path, &run.rows)?;
        println!("Exported {} rows to {}", run.rows.len(), path.display());
    }

    Ok(())
}

fn handle_scan(args: ScanArgs) -> Result<(), AppError> {
    let config = scan_config_from_args(&args);
    let run = pipeline::run_evolution(&config)?;

    println!("{}", crate::report::format_evolution_table(&run.records));

    if let Some(path) = &config.export_evolution {
        crate::io::write_evolution_csv(path, &run.records)?;
        println!("Exported {} records to {}", run.records.len(), path.display());
    }
    if let Some(path) = &config.export_scan_json {
        crate::io::write_scan_json(path, config.k_min, config.k_max, &run.records)?;
        println!("Saved scan to {}", path.display());
    }

    Ok(())
}

fn handle_export(args: ExportArgs) -> Result<(), AppError> {
    let config = export_config_from_args(&args);

    std::fs::create_dir_all(&args.out_dir).map_err(|e| {
        AppError::io(format!(
            "Failed to create output directory '{}': {e}",
            args.out_dir.display()
        ))
    })?;

    // One sieve sized for both outputs.
    config.validate()?;
    let sieve = crate::math::PrimeSieve::new(config.sieve_limit())?;
    let table = pipeline::run_table_with_sieve(&config, &sieve)?;
    let evolution = pipeline::run_evolution_with_sieve(&config, &sieve)?;

    let decompositions_path = args
        .out_dir
        .join(format!("decompositions_N{}.csv", config.table_n));
    crate::io::write_decompositions_csv(&decompositions_path, &table.rows)?;
    println!(
        "Exported {} rows to {}",
        table.rows.len(),
        decompositions_path.display()
    );

    let evolution_path = args.out_dir.join("bandwidth_evolution_2k.csv");
    crate::io::write_evolution_csv(&evolution_path, &evolution.records)?;
    println!(
        "Exported {} records to {}",
        evolution.records.len(),
        evolution_path.display()
    );

    Ok(())
}

fn handle_plot(args: PlotArgs) -> Result<(), AppError> {
    let scan = crate::io::read_scan_json(&args.scan)?;
    let plot = crate::plot::render_bandwidth_plot(&scan.records, args.width, args.height);
    println!("{plot}");
    Ok(())
}

fn base_config() -> ScanConfig {
    ScanConfig {
        table_n: 1024,
        k_min: 7,
        k_max: 14,
        top_n: 5,
        plot: false,
        plot_width: 100,
        plot_height: 25,
        export_decompositions: None,
        export_evolution: None,
        export_scan_json: None,
    }
}

pub fn table_config_from_args(args: &TableArgs) -> ScanConfig {
    ScanConfig {
        table_n: args.n,
        top_n: args.top,
        plot: args.plot && !args.no_plot,
        plot_width: args.width,
        plot_height: args.height,
        export_decompositions: args.export.clone(),
        ..base_config()
    }
}

pub fn scan_config_from_args(args: &ScanArgs) -> ScanConfig {
    ScanConfig {
        k_min: args.k_min,
        k_max: args.k_max,
        export_evolution: args.export.clone(),
        export_scan_json: args.export_json.clone(),
        ..base_config()
    }
}

pub fn export_config_from_args(args: &ExportArgs) -> ScanConfig {
    ScanConfig {
        table_n: args.n,
        k_min: args.k_min,
        k_max: args.k_max,
        ..base_config()
    }
}

/// Rewrite argv so `rigid` defaults to `rigid table`.
///
/// Rules:
/// - `rigid`                      -> `rigid table`
/// - `rigid -n 2048 ...`          -> `rigid table -n 2048 ...`
/// - `rigid --help/--version/-h`  -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("table".to_string());
        return argv;
    };

    let is_top_level_help_or_version =
        matches!(arg1.as_str(), "-h" | "--help" | "-V" | "--version" | "help");
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "table" | "scan" | "export" | "plot");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "table flags".
    if arg1.starts_with('-') {
        argv.insert(1, "table".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}
