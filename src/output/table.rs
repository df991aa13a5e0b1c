//! Comparison table printer
//!
//! Writes the function × integrator comparison grid to any `io::Write`
//! sink. For each function, the row is:
//!
//! ```text
//! <function-text>\n<result1>;<result2>;…;\n
//! ```
//!
//! The function text keeps its own trailing newline, so the numeric
//! results land on the line after the integrand they belong to. Every
//! result is semicolon-terminated, including the last one.

use crate::function::Function;
use crate::integrator::{IntegrationBounds, Integrator};
use std::error::Error;
use std::io::Write;

// =================================================================================================
// Table Printer
// =================================================================================================

/// Print the function × integrator comparison table
///
/// For each function (in sequence order): print its textual form, then
/// for each integrator (in sequence order) print the integral over
/// `bounds` followed by `;`, then end the row with a newline. Numeric
/// text uses the default `f64` formatting.
///
/// # Arguments
///
/// * `functions` - Owned integrands, one table row each
/// * `integrators` - Owned methods, one result column each
/// * `bounds` - Interval shared by every cell
/// * `sink` - Output destination (stdout, a buffer, a file, …)
///
/// # Errors
///
/// Propagates bound-validation and integration failures, and any write
/// error from the sink.
///
/// # Example
///
/// ```rust
/// use polyquad::function::Function;
/// use polyquad::integrator::{AnalyticalIntegrator, IntegrationBounds, Integrator};
/// use polyquad::models::PolynomialFunction;
/// use polyquad::output::print_comparison;
///
/// let functions: Vec<Box<dyn Function>> =
///     vec![Box::new(PolynomialFunction::new(vec![5.0]))];
/// let integrators: Vec<Box<dyn Integrator>> =
///     vec![Box::new(AnalyticalIntegrator::new())];
/// let bounds = IntegrationBounds::new(0.0, 2.0);
///
/// let mut sink: Vec<u8> = Vec::new();
/// print_comparison(&functions, &integrators, &bounds, &mut sink).unwrap();
///
/// assert_eq!(String::from_utf8(sink).unwrap(), "5\n10;\n");
/// ```
pub fn print_comparison(
    functions: &[Box<dyn Function>],
    integrators: &[Box<dyn Integrator>],
    bounds: &IntegrationBounds,
    sink: &mut dyn Write,
) -> Result<(), Box<dyn Error>> {
    bounds.validate()?;

    for function in functions {
        function.print(sink)?;

        for integrator in integrators {
            let result = integrator.integrate(function.as_ref(), bounds)?;
            write!(sink, "{};", result)?;
        }

        writeln!(sink)?;
    }

    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
