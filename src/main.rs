//! Demo driver: polynomial integration comparison
//!
//! Integrates `2 + 4x^3 + 5x^7` over `[0.5, 1.5]` with the exact
//! analytical method and the default trapezoidal Riemann sum
//! (h = 0.001), and prints the comparison table to stdout:
//!
//! ```text
//! 2 + 0*x^1 + 0*x^2 + 4*x^3 + 0*x^4 + 0*x^5 + 0*x^6 + 5*x^7
//! <analytical>;<riemann>;
//! ```
//!
//! No flags, no configuration; exit code 0 on success.

use std::error::Error;
use std::io;

use polyquad::function::Function;
use polyquad::integrator::{
    AnalyticalIntegrator, IntegrationBounds, Integrator, RiemannIntegrator,
};
use polyquad::models::PolynomialFunction;
use polyquad::output::print_comparison;

fn main() -> Result<(), Box<dyn Error>> {
    // 2 + 4x^3 + 5x^7
    let functions: Vec<Box<dyn Function>> = vec![Box::new(PolynomialFunction::new(vec![
        2.0, 0.0, 0.0, 4.0, 0.0, 0.0, 0.0, 5.0,
    ]))];

    let integrators: Vec<Box<dyn Integrator>> = vec![
        Box::new(AnalyticalIntegrator::new()),
        Box::new(RiemannIntegrator::new()),
    ];

    let bounds = IntegrationBounds::new(0.5, 1.5);

    let stdout = io::stdout();
    print_comparison(&functions, &integrators, &bounds, &mut stdout.lock())?;

    Ok(())
}
