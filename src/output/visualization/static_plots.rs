//! Static plot generation for function curves
//!
//! This module uses the `plotters` library to generate static images
//! (PNG, SVG) of integrand curves over the integration interval.
//!
//! # Features
//!
//! - **Direct trait-object support**: pass any [`Function`] and bounds
//! - **Single and multi-curve**: one integrand or several overlaid
//! - **Customizable**: `PlotConfig` for colors, labels, sizes
//!
//! # Example
//!
//! ```rust,ignore
//! use polyquad::output::visualization::{plot_function, PlotConfig};
//!
//! let mut config = PlotConfig::default();
//! config.title = "2 + 4x^3 + 5x^7".to_string();
//!
//! plot_function(&poly, &bounds, "curve.png", Some(&config))?;
//! ```

use plotters::prelude::*;
use std::error::Error;

use crate::function::Function;
use crate::integrator::IntegrationBounds;

/// Number of samples per curve when plotting a function
const CURVE_SAMPLES: usize = 400;

// =================================================================================================
// Configuration
// =================================================================================================

/// Configuration for customizing plots
///
/// # Example
///
/// ```rust,ignore
/// use plotters::prelude::*;
///
/// let mut config = PlotConfig::default();
/// config.title = "Integrands".to_string();
/// config.line_color = BLUE;
/// config.width = 1920;
/// config.height = 1080;
/// ```
#[derive(Clone)]
pub struct PlotConfig {
    /// Image width in pixels (default: 1024)
    pub width: u32,

    /// Image height in pixels (default: 768)
    pub height: u32,

    /// Plot title (default: "Function")
    pub title: String,

    /// X-axis label (default: "x")
    pub xlabel: String,

    /// Y-axis label (default: "f(x)")
    pub ylabel: String,

    /// Line color for single-curve plots (default: RED)
    pub line_color: RGBColor,

    /// Optional colors for multi-curve plots (one per curve)
    ///
    /// If None, uses the default palette with wraparound.
    pub series_colors: Option<Vec<RGBColor>>,

    /// Background color (default: WHITE)
    pub background: RGBColor,

    /// Line thickness in pixels (default: 2)
    pub line_width: u32,

    /// Whether to show grid lines (default: true)
    pub show_grid: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            title: "Function".to_string(),
            xlabel: "x".to_string(),
            ylabel: "f(x)".to_string(),
            line_color: RED,
            series_colors: None,
            background: WHITE,
            line_width: 2,
            show_grid: true,
        }
    }
}

impl PlotConfig {
    /// Create a config with explicit multi-curve colors
    pub fn multi_series_colors(colors: Vec<RGBColor>) -> Self {
        Self {
            series_colors: Some(colors),
            ..Default::default()
        }
    }

    /// Color for curve `index`, wrapping around the palette
    fn get_series_color(&self, index: usize) -> RGBColor {
        const PALETTE: [RGBColor; 6] = [RED, BLUE, GREEN, MAGENTA, CYAN, BLACK];

        match &self.series_colors {
            Some(colors) if !colors.is_empty() => colors[index % colors.len()],
            _ => PALETTE[index % PALETTE.len()],
        }
    }
}

// =================================================================================================
// Sampling
// =================================================================================================

/// Sample a function uniformly over the integration interval
///
/// Returns `samples` points from `bounds.lower()` to `bounds.upper()`
/// inclusive.
///
/// # Panics
///
/// Panics if `samples < 2` (a curve needs both endpoints).
pub fn sample_function(
    function: &dyn Function,
    bounds: &IntegrationBounds,
    samples: usize,
) -> (Vec<f64>, Vec<f64>) {
    assert!(samples >= 2, "Need at least 2 samples, got {}", samples);

    let step = bounds.width() / ((samples - 1) as f64);

    let xs: Vec<f64> = (0..samples)
        .map(|i| bounds.lower() + (i as f64) * step)
        .collect();
    let ys: Vec<f64> = xs.iter().map(|&x| function.evaluate(x)).collect();

    (xs, ys)
}

// =================================================================================================
// Drawing Helpers
// =================================================================================================

/// Draw one or more curves on any drawing area
fn draw_curves_on_area<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    xs: &[f64],
    series: &[Vec<f64>],
    labels: &[&str],
    config: &PlotConfig,
) -> Result<(), Box<dyn Error>>
where
    <DB as DrawingBackend>::ErrorType: 'static,
{
    let n_curves = series.len();

    // Find global ranges
    let x_min = xs.iter().cloned().fold(f64::INFINITY, f64::min);
    let x_max = xs.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;

    for values in series {
        for &y in values {
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }
    }

    // 10% padding; integrands may be negative, so no clamp to zero
    let y_range = y_max - y_min;
    let y_low = y_min - 0.1 * y_range - f64::EPSILON;
    let y_high = y_max + 0.1 * y_range + f64::EPSILON;

    root.fill(&config.background)?;

    // Create chart
    let mut chart = ChartBuilder::on(root)
        .caption(&config.title, ("sans-serif", 40.0).into_font())
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(x_min..x_max, y_low..y_high)?;

    // Configure mesh
    let mut mesh = chart.configure_mesh();
    mesh.x_desc(&config.xlabel).y_desc(&config.ylabel);

    if config.show_grid {
        mesh.draw()?;
    } else {
        mesh.disable_mesh().draw()?;
    }

    // Draw each curve
    for i in 0..n_curves {
        let color = if n_curves == 1 {
            config.line_color
        } else {
            config.get_series_color(i)
        };

        let drawn = chart.draw_series(LineSeries::new(
            xs.iter().zip(series[i].iter()).map(|(x, y)| (*x, *y)),
            color.stroke_width(config.line_width),
        ))?;

        if n_curves > 1 {
            let line_width = config.line_width;
            drawn.label(labels[i]).legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(line_width))
            });
        }
    }

    // Draw legend only when there is something to distinguish
    if n_curves > 1 {
        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;
    }

    root.present()?;
    Ok(())
}

/// Dispatch on the output extension (.svg or bitmap)
fn draw_to_file(
    output_path: &str,
    xs: &[f64],
    series: &[Vec<f64>],
    labels: &[&str],
    config: &PlotConfig,
) -> Result<(), Box<dyn Error>> {
    let is_svg = std::path::Path::new(output_path)
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("svg"));

    if is_svg {
        let root =
            SVGBackend::new(output_path, (config.width, config.height)).into_drawing_area();
        draw_curves_on_area(&root, xs, series, labels, config)
    } else {
        let root =
            BitMapBackend::new(output_path, (config.width, config.height)).into_drawing_area();
        draw_curves_on_area(&root, xs, series, labels, config)
    }
}

// =================================================================================================
// Plotting Functions
// =================================================================================================

/// Plot a single function over the integration interval
///
/// # Arguments
///
/// * `function` - Integrand to sample and draw
/// * `bounds` - Interval to cover
/// * `output_path` - Output file path (.png or .svg)
/// * `configuration` - Optional PlotConfig
///
/// # Example
///
/// ```rust,ignore
/// plot_function(&poly, &bounds, "curve.png", None)?;
/// ```
pub fn plot_function(
    function: &dyn Function,
    bounds: &IntegrationBounds,
    output_path: &str,
    configuration: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    bounds.validate()?;

    let owned_config = configuration.cloned().unwrap_or_default();
    let config = &owned_config;

    let (xs, ys) = sample_function(function, bounds, CURVE_SAMPLES);
    let labels = [function.name()];

    draw_to_file(output_path, &xs, &[ys], &labels, config)
}

/// Plot several functions over the same interval with a legend
///
/// # Panics
///
/// Panics if `functions` is empty.
///
/// # Example
///
/// ```rust,ignore
/// plot_functions(&functions, &bounds, "curves.png", None)?;
/// ```
pub fn plot_functions(
    functions: &[Box<dyn Function>],
    bounds: &IntegrationBounds,
    output_path: &str,
    configuration: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    assert!(!functions.is_empty(), "Functions to plot must not be empty");

    bounds.validate()?;

    let owned_config = configuration.cloned().unwrap_or_default();
    let config = &owned_config;

    // All curves share the same abscissas
    let (xs, first_ys) = sample_function(functions[0].as_ref(), bounds, CURVE_SAMPLES);

    let mut series: Vec<Vec<f64>> = Vec::with_capacity(functions.len());
    series.push(first_ys);

    for function in &functions[1..] {
        series.push(xs.iter().map(|&x| function.evaluate(x)).collect());
    }

    let labels: Vec<&str> = functions.iter().map(|f| f.name()).collect();

    draw_to_file(output_path, &xs, &series, &labels, config)
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PolynomialFunction;
    use approx::assert_relative_eq;
    use tempfile::NamedTempFile;

    // ====== Config tests ======

    #[test]
    fn test_plot_config_default() {
        let config = PlotConfig::default();
        assert_eq!(config.width, 1024);
        assert_eq!(config.height, 768);
        assert!(config.show_grid);
    }

    #[test]
    fn test_get_series_color_default_palette() {
        let config = PlotConfig::default();
        assert_eq!(config.get_series_color(0), RED);
        assert_eq!(config.get_series_color(1), BLUE);
        assert_eq!(config.get_series_color(6), RED); // Wraparound
    }

    #[test]
    fn test_get_series_color_custom() {
        let config = PlotConfig::multi_series_colors(vec![BLACK, CYAN]);
        assert_eq!(config.get_series_color(0), BLACK);
        assert_eq!(config.get_series_color(1), CYAN);
        assert_eq!(config.get_series_color(2), BLACK); // Wraparound
    }

    // ====== Sampling tests ======

    #[test]
    fn test_sample_function_endpoints() {
        let poly = PolynomialFunction::new(vec![0.0, 1.0]); // x
        let bounds = IntegrationBounds::new(0.5, 1.5);

        let (xs, ys) = sample_function(&poly, &bounds, 11);

        assert_eq!(xs.len(), 11);
        assert_eq!(ys.len(), 11);
        assert_relative_eq!(xs[0], 0.5, epsilon = 1e-12);
        assert_relative_eq!(*xs.last().unwrap(), 1.5, epsilon = 1e-12);
        assert_relative_eq!(ys[5], 1.0, epsilon = 1e-12);
    }

    #[test]
    #[should_panic(expected = "Need at least 2 samples")]
    fn test_sample_function_too_few_samples() {
        let poly = PolynomialFunction::new(vec![1.0]);
        let bounds = IntegrationBounds::new(0.0, 1.0);
        sample_function(&poly, &bounds, 1);
    }

    // ====== Plot tests ======

    #[test]
    fn test_plot_png_function() {
        let temp = NamedTempFile::new().unwrap();
        let path = temp.path().with_extension("png");

        let poly = PolynomialFunction::new(vec![2.0, 0.0, 0.0, 4.0, 0.0, 0.0, 0.0, 5.0]);
        let bounds = IntegrationBounds::new(0.5, 1.5);

        plot_function(&poly, &bounds, path.to_str().unwrap(), None).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_plot_svg_function() {
        let temp = NamedTempFile::new().unwrap();
        let path = temp.path().with_extension("svg");

        let poly = PolynomialFunction::new(vec![0.0, 1.0, -1.0]);
        let bounds = IntegrationBounds::new(-1.0, 2.0);

        plot_function(&poly, &bounds, path.to_str().unwrap(), None).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_plot_png_multi_function() {
        let temp = NamedTempFile::new().unwrap();
        let path = temp.path().with_extension("png");

        let functions: Vec<Box<dyn Function>> = vec![
            Box::new(PolynomialFunction::new(vec![0.0, 1.0])),
            Box::new(PolynomialFunction::new(vec![0.0, 0.0, 1.0])),
        ];
        let bounds = IntegrationBounds::new(0.0, 2.0);

        plot_functions(&functions, &bounds, path.to_str().unwrap(), None).unwrap();
        assert!(path.exists());
    }

    #[test]
    #[should_panic(expected = "Functions to plot must not be empty")]
    fn test_plot_multi_empty_failed() {
        let temp = NamedTempFile::new().unwrap();
        let path = temp.path().with_extension("png");

        let functions: Vec<Box<dyn Function>> = vec![];
        let bounds = IntegrationBounds::new(0.0, 1.0);

        plot_functions(&functions, &bounds, path.to_str().unwrap(), None).unwrap();
    }
}
