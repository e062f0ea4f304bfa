//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the decomposition values produced by the enumerator (`Decomposition`)
//! - classified, ρ-tagged decompositions (`ClassifiedDecomposition`)
//! - per-class aggregates (`ClassStatistics`, `ClassSummary`)
//! - per-k evolution records (`ScanRecord`, `ScanFile`)
//! - run configuration (`ScanConfig`)

pub mod types;

pub use types::*;
