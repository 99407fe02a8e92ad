//! Export of the repository and commit tables

pub mod runner;
pub mod table;

pub use runner::{ExportPlan, ExportScope, ExportSummary, Exporter};
pub use table::write_rows;
