//! Input/output helpers.
//!
//! - CSV exports of decompositions and the evolution table (`export`)
//! - scan JSON read/write (`summary`)

pub mod export;
pub mod summary;

pub use export::*;
pub use summary::*;
