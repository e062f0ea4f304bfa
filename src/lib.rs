//! `rigid-scan` library crate.
//!
//! The binary (`rigid`) is a thin wrapper around this library so that:
//!
//! - the scan/aggregation logic is testable without spawning processes
//! - modules are reusable (e.g., notebooks, future figure pipelines)
//! - code stays easy to navigate as the project grows

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod io;
pub mod math;
pub mod plot;
pub mod report;
pub mod scan;
pub mod stats;
