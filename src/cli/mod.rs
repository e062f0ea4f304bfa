//! Command-line parsing for the conductor-rigidity scanner.
//!
//! The goal of this module is to keep **argument parsing** and **command
//! dispatch** separate from the arithmetic/aggregation code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "rigid",
    version,
    about = "Zero-ramification conductor scan for Goldbach decompositions at N = 2^k"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Scan one N: ground-state table, class summary, optional scatter plot.
    Table(TableArgs),
    /// Scan N = 2^k across a k range and print the evolution table.
    Scan(ScanArgs),
    /// Write the decompositions CSV and the evolution CSV in one run.
    Export(ExportArgs),
    /// Plot the bandwidth evolution from a previously saved scan JSON.
    Plot(PlotArgs),
}

/// Options for the single-N table.
#[derive(Debug, Parser, Clone)]
pub struct TableArgs {
    /// Even N to decompose.
    #[arg(short = 'n', long, default_value_t = 1024)]
    pub n: u64,

    /// Rows shown per class.
    #[arg(long, default_value_t = 5)]
    pub top: usize,

    /// Render the rho-vs-p scatter in the terminal (enabled by default).
    #[arg(long, default_value_t = true)]
    pub plot: bool,

    /// Disable the terminal plot.
    #[arg(long)]
    pub no_plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 25)]
    pub height: usize,

    /// Export the classified decompositions to CSV.
    #[arg(long)]
    pub export: Option<PathBuf>,
}

/// Options for the multi-scale evolution scan.
#[derive(Debug, Parser, Clone)]
pub struct ScanArgs {
    /// Smallest k (N = 2^k).
    #[arg(long, default_value_t = 7)]
    pub k_min: u32,

    /// Largest k (N = 2^k).
    #[arg(long, default_value_t = 14)]
    pub k_max: u32,

    /// Export the evolution table to CSV.
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Export the scan (records + metadata) to JSON.
    #[arg(long = "export-json")]
    pub export_json: Option<PathBuf>,
}

/// Options for the combined data export.
#[derive(Debug, Parser, Clone)]
pub struct ExportArgs {
    /// Even N for the decompositions CSV.
    #[arg(short = 'n', long, default_value_t = 1024)]
    pub n: u64,

    /// Smallest k for the evolution CSV.
    #[arg(long, default_value_t = 7)]
    pub k_min: u32,

    /// Largest k for the evolution CSV.
    #[arg(long, default_value_t = 14)]
    pub k_max: u32,

    /// Output directory for the two CSV files.
    #[arg(long, default_value = "data")]
    pub out_dir: PathBuf,
}

/// Options for plotting a saved scan.
#[derive(Debug, Parser)]
pub struct PlotArgs {
    /// Scan JSON file produced by `rigid scan --export-json`.
    #[arg(long, value_name = "JSON")]
    pub scan: PathBuf,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 25)]
    pub height: usize,
}
