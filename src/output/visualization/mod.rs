//! Visualization of integrands
//!
//! Static PNG/SVG curve plots built on `plotters`.

pub mod static_plots;

pub use static_plots::{plot_function, plot_functions, sample_function, PlotConfig};
