//! Data export
//!
//! CSV export of sampled curves and comparison grids for external
//! analysis tools.

pub mod csv;

pub use csv::{export_comparison_csv, export_function_csv, CsvConfig, CsvMetadata};
