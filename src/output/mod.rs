//! Output module for integration results
//!
//! This module provides tools to present results in several forms:
//! - **Table**: the function × integrator comparison grid on any sink
//! - **Export**: CSV data export for external analysis
//! - **Visualization**: PNG/SVG plots using plotters
//!
//! # Architecture
//!
//! ```text
//! output/
//! ├── mod.rs              ← This file
//! ├── table.rs            ← Comparison table printer
//! ├── export/             ← Data export
//! │   ├── mod.rs
//! │   └── csv.rs
//! └── visualization/      ← Plots and graphics
//!     ├── mod.rs
//!     └── static_plots.rs
//! ```
//!
//! # Quick Start
//!
//! ## Comparison Table
//!
//! ```rust,ignore
//! use polyquad::output::print_comparison;
//!
//! print_comparison(&functions, &integrators, &bounds, &mut std::io::stdout())?;
//! ```
//!
//! ## CSV Export
//!
//! ```rust,ignore
//! use polyquad::output::export::export_comparison_csv;
//!
//! export_comparison_csv(&functions, &integrators, &bounds, "table.csv", None)?;
//! ```
//!
//! ## Visualization
//!
//! ```rust,ignore
//! use polyquad::output::visualization::plot_function;
//!
//! plot_function(&poly, &bounds, "curve.png", None)?;
//! ```
//!
//! # Design Philosophy
//!
//! The output module separates concerns:
//! - **Table**: the reference textual form, written to a caller-supplied
//!   sink (stdout in the demo driver, a buffer in tests)
//! - **Export**: for programmatic analysis (CSV)
//! - **Visualization**: for human interpretation (plots)

pub mod table;

pub mod export;
pub mod visualization;

// Re-export commonly used items for convenience
pub use table::print_comparison;

pub use export::{export_comparison_csv, export_function_csv, CsvConfig, CsvMetadata};

pub use visualization::{plot_function, plot_functions, PlotConfig};
