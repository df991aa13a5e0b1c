//! CSV export for integration results
//!
//! This module writes sampled function values and the function ×
//! integrator comparison grid to CSV (Comma-Separated Values) files,
//! compatible with Excel, Python pandas, MATLAB and most analysis tools.
//!
//! # Features
//!
//! - **Simple interface**: export with `&[f64]` slices or trait objects
//! - **Metadata support**: optional header comments with run parameters
//! - **Customizable**: delimiter, precision, format options
//! - **Validation**: checks for NaN, empty data, mismatched lengths
//!
//! # Quick Examples
//!
//! ## Sampled Function Values
//!
//! ```rust,ignore
//! use polyquad::output::export::export_function_csv;
//!
//! let xs = vec![0.0, 0.5, 1.0];
//! let ys = vec![2.0, 2.5, 3.0];
//!
//! export_function_csv(&xs, &ys, "curve.csv", None)?;
//! ```
//!
//! **Output** (`curve.csv`):
//! ```csv
//! x,f(x)
//! 0.000000,2.000000
//! 0.500000,2.500000
//! 1.000000,3.000000
//! ```
//!
//! ## Comparison Grid
//!
//! ```rust,ignore
//! use polyquad::output::export::export_comparison_csv;
//!
//! export_comparison_csv(&functions, &integrators, &bounds, "table.csv", None)?;
//! ```
//!
//! **Output** (`table.csv`):
//! ```csv
//! Function,Analytical,Riemann Sum
//! 2 + 0*x^1 + 0*x^2 + 4*x^3 + 0*x^4 + 0*x^5 + 0*x^6 + 5*x^7,23.015625,23.015590
//! ```

use crate::function::Function;
use crate::integrator::{IntegrationBounds, Integrator};
use std::error::Error;
use std::fs::File;
use std::io::Write;

// =============================================================================
// Configuration Structures
// =============================================================================

/// Configuration for CSV export
///
/// # Example
///
/// ```rust,ignore
/// let config = CsvConfig {
///     delimiter: ';',        // European CSV
///     precision: 12,         // High precision
///     include_metadata: true,
///     ..Default::default()
/// };
/// ```
#[derive(Clone)]
pub struct CsvConfig {
    /// Column delimiter (default: ',')
    pub delimiter: char,

    /// Decimal separator (default: '.')
    pub decimal_separator: char,

    /// Number of decimal places for floating-point values (default: 6)
    pub precision: usize,

    /// Include metadata header comments (default: false)
    pub include_metadata: bool,

    /// Metadata to include in the header
    pub metadata: Option<CsvMetadata>,

    /// Header for the abscissa column (default: "x")
    pub x_header: String,

    /// Header for the ordinate column (default: "f(x)")
    pub y_header: String,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            decimal_separator: '.',
            precision: 6,
            include_metadata: false,
            metadata: None,
            x_header: "x".to_string(),
            y_header: "f(x)".to_string(),
        }
    }
}

impl CsvConfig {
    /// Create config with European CSV format (semicolon, comma for decimal)
    pub fn european() -> Self {
        Self {
            delimiter: ';',
            decimal_separator: ',',
            ..Default::default()
        }
    }

    /// Create config with high precision (12 decimal places)
    pub fn high_precision() -> Self {
        Self {
            precision: 12,
            ..Default::default()
        }
    }

    /// Builder pattern: set delimiter
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Builder pattern: set precision
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Builder pattern: enable metadata
    pub fn with_metadata(mut self, metadata: CsvMetadata) -> Self {
        self.include_metadata = true;
        self.metadata = Some(metadata);
        self
    }
}

/// Metadata for CSV header comments
///
/// All fields are optional. Only non-None fields are included in the
/// header.
#[derive(Clone, Default)]
pub struct CsvMetadata {
    /// Function name (e.g., "Polynomial")
    pub function_name: Option<String>,

    /// Integrator name (e.g., "Analytical", "Riemann Sum")
    pub integrator_name: Option<String>,

    /// Lower integration bound a
    pub lower_bound: Option<f64>,

    /// Upper integration bound b
    pub upper_bound: Option<f64>,

    /// Riemann step size h
    pub step_size: Option<f64>,

    /// Additional custom parameters
    pub custom: Vec<(String, String)>,
}

impl CsvMetadata {
    /// Create metadata for an integration run
    pub fn from_run(function: &str, integrator: &str, bounds: &IntegrationBounds) -> Self {
        Self {
            function_name: Some(function.to_string()),
            integrator_name: Some(integrator.to_string()),
            lower_bound: Some(bounds.lower()),
            upper_bound: Some(bounds.upper()),
            ..Default::default()
        }
    }

    /// Add custom parameter
    pub fn add_custom(&mut self, key: String, value: String) {
        self.custom.push((key, value));
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Write metadata header comments to file
fn write_metadata_header(file: &mut File, metadata: &CsvMetadata) -> Result<(), Box<dyn Error>> {
    writeln!(file, "# Integration Data")?;

    // Timestamp (current time)
    let now = chrono::Utc::now();
    writeln!(file, "# Generated: {}", now.to_rfc3339())?;

    if let Some(function) = &metadata.function_name {
        writeln!(file, "# Function: {}", function)?;
    }
    if let Some(integrator) = &metadata.integrator_name {
        writeln!(file, "# Integrator: {}", integrator)?;
    }

    // Run parameters
    if let Some(lower) = metadata.lower_bound {
        writeln!(file, "# Lower Bound: {}", lower)?;
    }
    if let Some(upper) = metadata.upper_bound {
        writeln!(file, "# Upper Bound: {}", upper)?;
    }
    if let Some(step) = metadata.step_size {
        writeln!(file, "# Step Size: {}", step)?;
    }

    // Custom parameters
    for (key, value) in &metadata.custom {
        writeln!(file, "# {}: {}", key, value)?;
    }

    // Separator
    writeln!(file, "#")?;

    Ok(())
}

/// Format number with configured precision and decimal separator
fn format_number(value: f64, config: &CsvConfig) -> String {
    let formatted = format!("{:.prec$}", value, prec = config.precision);

    // Replace decimal separator if needed
    if config.decimal_separator != '.' {
        formatted.replace('.', &config.decimal_separator.to_string())
    } else {
        formatted
    }
}

/// Textual form of a function, without the trailing newline
fn function_label(function: &dyn Function) -> String {
    let mut buffer: Vec<u8> = Vec::new();

    // Writing into a Vec cannot fail; fall back to the name if it does.
    if function.print(&mut buffer).is_err() {
        return function.name().to_string();
    }

    let text = String::from_utf8_lossy(&buffer);
    text.trim_end_matches('\n').to_string()
}

// =============================================================================
// Export Functions
// =============================================================================

/// Export sampled function values to CSV
///
/// Writes abscissa and ordinate columns to a CSV file with an optional
/// metadata header.
///
/// # Arguments
///
/// * `xs` - Sample abscissas
/// * `ys` - Function values at the abscissas
/// * `output_path` - Output file path
/// * `configuration` - Optional CSV configuration (default if None)
///
/// # Errors
///
/// - Empty data
/// - Mismatched lengths
/// - NaN or Inf values
/// - File creation errors
///
/// # Example
///
/// ```rust,ignore
/// export_function_csv(&xs, &ys, "curve.csv", None)?;
/// ```
pub fn export_function_csv(
    xs: &[f64],
    ys: &[f64],
    output_path: &str,
    configuration: Option<&CsvConfig>,
) -> Result<(), Box<dyn Error>> {
    // ============================= Validation =============================

    if xs.is_empty() || ys.is_empty() {
        return Err("Empty data: sample and value series must not be empty".into());
    }

    if xs.len() != ys.len() {
        return Err(format!(
            "Data length mismatch: {} samples versus {} values",
            xs.len(),
            ys.len()
        )
        .into());
    }

    if xs.iter().any(|x| !x.is_finite()) {
        return Err("Invalid data: NaN or Inf detected in sample series".into());
    }

    if ys.iter().any(|y| !y.is_finite()) {
        return Err("Invalid data: NaN or Inf detected in value series".into());
    }

    // ============================= Configuration ==========================

    let binding = CsvConfig::default();
    let configuration = configuration.unwrap_or(&binding);

    // ============================= Open File ==============================

    let mut file = File::create(output_path)?;

    // ============================= Write Metadata =========================

    if configuration.include_metadata {
        if let Some(metadata) = &configuration.metadata {
            write_metadata_header(&mut file, metadata)?;
        }
    }

    // ============================= Write Header ===========================

    writeln!(
        file,
        "{}{}{}",
        configuration.x_header, configuration.delimiter, configuration.y_header
    )?;

    // ============================= Write Data =============================

    for (x, y) in xs.iter().zip(ys.iter()) {
        writeln!(
            file,
            "{}{}{}",
            format_number(*x, configuration),
            configuration.delimiter,
            format_number(*y, configuration)
        )?;
    }

    Ok(())
}

/// Export the function × integrator comparison grid to CSV
///
/// The header row is `Function` followed by one column per integrator
/// name; each data row is a function's textual form followed by its
/// integral under each method.
///
/// # Arguments
///
/// * `functions` - Integrands, one row each
/// * `integrators` - Methods, one column each
/// * `bounds` - Interval shared by every cell
/// * `output_path` - Output file path
/// * `configuration` - Optional CSV configuration
///
/// # Example
///
/// ```rust,ignore
/// export_comparison_csv(&functions, &integrators, &bounds, "table.csv", None)?;
/// ```
pub fn export_comparison_csv(
    functions: &[Box<dyn Function>],
    integrators: &[Box<dyn Integrator>],
    bounds: &IntegrationBounds,
    output_path: &str,
    configuration: Option<&CsvConfig>,
) -> Result<(), Box<dyn Error>> {
    // ============================= Validation =============================

    if functions.is_empty() || integrators.is_empty() {
        return Err("Empty data: function and integrator lists must not be empty".into());
    }

    bounds.validate()?;

    // ============================= Configuration ==========================

    let binding = CsvConfig::default();
    let configuration = configuration.unwrap_or(&binding);

    // ============================= Open File ==============================

    let mut file = File::create(output_path)?;

    // ============================= Write Metadata =========================

    if configuration.include_metadata {
        if let Some(metadata) = &configuration.metadata {
            write_metadata_header(&mut file, metadata)?;
        }
    }

    // ============================= Write Header ===========================

    write!(file, "Function")?;
    for integrator in integrators {
        write!(file, "{}{}", configuration.delimiter, integrator.name())?;
    }
    writeln!(file)?;

    // ============================= Write Data =============================

    for function in functions {
        write!(file, "{}", function_label(function.as_ref()))?;

        for integrator in integrators {
            let result = integrator.integrate(function.as_ref(), bounds)?;
            write!(
                file,
                "{}{}",
                configuration.delimiter,
                format_number(result, configuration)
            )?;
        }

        writeln!(file)?;
    }

    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integrator::{AnalyticalIntegrator, RiemannIntegrator};
    use crate::models::PolynomialFunction;
    use std::fs;
    use tempfile::NamedTempFile;

    // ====== Helper ======

    fn temp_csv_path(temp: &NamedTempFile) -> String {
        temp.path()
            .with_extension("csv")
            .to_str()
            .unwrap()
            .to_string()
    }

    // ====== Function export tests ======

    #[test]
    fn test_export_function_csv_basic() {
        let temp = NamedTempFile::new().unwrap();
        let path = temp_csv_path(&temp);

        let xs = vec![0.0, 0.5, 1.0];
        let ys = vec![2.0, 2.5, 3.0];

        export_function_csv(&xs, &ys, &path, None).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();

        assert_eq!(lines[0], "x,f(x)");
        assert_eq!(lines[1], "0.000000,2.000000");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_export_function_csv_european_format() {
        let temp = NamedTempFile::new().unwrap();
        let path = temp_csv_path(&temp);

        let xs = vec![0.5];
        let ys = vec![1.5];

        export_function_csv(&xs, &ys, &path, Some(&CsvConfig::european())).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("0,500000;1,500000"));
    }

    #[test]
    fn test_export_function_csv_precision() {
        let temp = NamedTempFile::new().unwrap();
        let path = temp_csv_path(&temp);

        let config = CsvConfig::default().precision(2);
        export_function_csv(&[1.0], &[0.123456], &path, Some(&config)).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("1.00,0.12"));
    }

    #[test]
    fn test_export_function_csv_metadata_header() {
        let temp = NamedTempFile::new().unwrap();
        let path = temp_csv_path(&temp);

        let bounds = IntegrationBounds::new(0.5, 1.5);
        let mut metadata = CsvMetadata::from_run("Polynomial", "Riemann Sum", &bounds);
        metadata.step_size = Some(0.001);
        metadata.add_custom("note".to_string(), "reference scenario".to_string());

        let config = CsvConfig::default().with_metadata(metadata);
        export_function_csv(&[0.5, 1.5], &[1.0, 2.0], &path, Some(&config)).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("# Integration Data"));
        assert!(content.contains("# Function: Polynomial"));
        assert!(content.contains("# Integrator: Riemann Sum"));
        assert!(content.contains("# Lower Bound: 0.5"));
        assert!(content.contains("# Step Size: 0.001"));
        assert!(content.contains("# note: reference scenario"));
    }

    #[test]
    fn test_export_function_csv_empty_failed() {
        let temp = NamedTempFile::new().unwrap();
        let path = temp_csv_path(&temp);

        let result = export_function_csv(&[], &[], &path, None);
        assert!(result.is_err());
    }

    #[test]
    fn test_export_function_csv_length_mismatch_failed() {
        let temp = NamedTempFile::new().unwrap();
        let path = temp_csv_path(&temp);

        let result = export_function_csv(&[0.0, 1.0], &[1.0], &path, None);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("length mismatch"));
    }

    #[test]
    fn test_export_function_csv_nan_failed() {
        let temp = NamedTempFile::new().unwrap();
        let path = temp_csv_path(&temp);

        let result = export_function_csv(&[0.0], &[f64::NAN], &path, None);
        assert!(result.is_err());
    }

    // ====== Comparison export tests ======

    #[test]
    fn test_export_comparison_csv() {
        let temp = NamedTempFile::new().unwrap();
        let path = temp_csv_path(&temp);

        let functions: Vec<Box<dyn Function>> =
            vec![Box::new(PolynomialFunction::new(vec![5.0]))];
        let integrators: Vec<Box<dyn Integrator>> = vec![
            Box::new(AnalyticalIntegrator::new()),
            Box::new(RiemannIntegrator::new()),
        ];
        let bounds = IntegrationBounds::new(0.0, 2.0);

        export_comparison_csv(&functions, &integrators, &bounds, &path, None).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();

        assert_eq!(lines[0], "Function,Analytical,Riemann Sum");
        assert_eq!(lines[1], "5,10.000000,10.000000");
    }

    #[test]
    fn test_export_comparison_csv_empty_failed() {
        let temp = NamedTempFile::new().unwrap();
        let path = temp_csv_path(&temp);

        let functions: Vec<Box<dyn Function>> = vec![];
        let integrators: Vec<Box<dyn Integrator>> = vec![];
        let bounds = IntegrationBounds::new(0.0, 1.0);

        let result = export_comparison_csv(&functions, &integrators, &bounds, &path, None);
        assert!(result.is_err());
    }

    // ====== Formatting helpers ======

    #[test]
    fn test_format_number_default() {
        let config = CsvConfig::default();
        assert_eq!(format_number(1.5, &config), "1.500000");
    }

    #[test]
    fn test_format_number_decimal_separator() {
        let config = CsvConfig::european();
        assert_eq!(format_number(1.5, &config), "1,500000");
    }

    #[test]
    fn test_function_label_strips_newline() {
        let poly = PolynomialFunction::new(vec![5.0]);
        assert_eq!(function_label(&poly), "5");
    }
}
