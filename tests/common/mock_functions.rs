//! Mock functions for testing
//!
//! These functions have known closed-form integrals, making them ideal
//! for validating integrator accuracy — including non-polynomial shapes
//! that exercise the open trait surface.

use polyquad::function::Function;
use polyquad::models::PolynomialFunction;
use std::io::{self, Write};

// =================================================================================================
// Constant: f(x) = c
// =================================================================================================

/// Constant function f(x) = c
///
/// Closed-form integral over [a, b]: c·(b − a)
pub struct ConstantFunction {
    pub value: f64,
}

impl ConstantFunction {
    pub fn new(value: f64) -> Self {
        Self { value }
    }

    /// Closed-form integral over [a, b]
    pub fn analytical_integral(&self, a: f64, b: f64) -> f64 {
        self.value * (b - a)
    }
}

impl Function for ConstantFunction {
    fn evaluate(&self, _x: f64) -> f64 {
        self.value
    }

    fn antiderivative(&self) -> Box<dyn Function> {
        // ∫ c dx = c·x
        Box::new(LinearFunction::new(0.0, self.value))
    }

    fn print(&self, sink: &mut dyn Write) -> io::Result<()> {
        writeln!(sink, "{}", self.value)
    }

    fn name(&self) -> &str {
        "Constant"
    }
}

// =================================================================================================
// Linear: f(x) = c + m·x
// =================================================================================================

/// Linear function f(x) = intercept + slope·x
///
/// Closed-form integral over [a, b]: intercept·(b − a) + slope·(b² − a²)/2
pub struct LinearFunction {
    pub intercept: f64,
    pub slope: f64,
}

impl LinearFunction {
    pub fn new(intercept: f64, slope: f64) -> Self {
        Self { intercept, slope }
    }

    /// Closed-form integral over [a, b]
    pub fn analytical_integral(&self, a: f64, b: f64) -> f64 {
        self.intercept * (b - a) + self.slope * (b * b - a * a) / 2.0
    }
}

impl Function for LinearFunction {
    fn evaluate(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }

    fn antiderivative(&self) -> Box<dyn Function> {
        // ∫ c + m·x dx = c·x + m/2·x²
        Box::new(PolynomialFunction::new(vec![
            0.0,
            self.intercept,
            self.slope / 2.0,
        ]))
    }

    fn print(&self, sink: &mut dyn Write) -> io::Result<()> {
        writeln!(sink, "{} + {}*x", self.intercept, self.slope)
    }

    fn name(&self) -> &str {
        "Linear"
    }
}

// =================================================================================================
// Exponential: f(x) = A·exp(k·x)
// =================================================================================================

/// Exponential function f(x) = amplitude·exp(rate·x)
///
/// Its antiderivative is again exponential, with the amplitude divided
/// by the rate — a non-polynomial implementor of the trait.
pub struct ExponentialFunction {
    pub amplitude: f64,
    pub rate: f64,
}

impl ExponentialFunction {
    pub fn new(amplitude: f64, rate: f64) -> Self {
        assert!(rate != 0.0, "Rate must be nonzero");
        Self { amplitude, rate }
    }

    /// Closed-form integral over [a, b]
    pub fn analytical_integral(&self, a: f64, b: f64) -> f64 {
        self.amplitude / self.rate * ((self.rate * b).exp() - (self.rate * a).exp())
    }
}

impl Function for ExponentialFunction {
    fn evaluate(&self, x: f64) -> f64 {
        self.amplitude * (self.rate * x).exp()
    }

    fn antiderivative(&self) -> Box<dyn Function> {
        // ∫ A·exp(k·x) dx = A/k·exp(k·x)
        Box::new(ExponentialFunction::new(
            self.amplitude / self.rate,
            self.rate,
        ))
    }

    fn print(&self, sink: &mut dyn Write) -> io::Result<()> {
        writeln!(sink, "{}*exp({}*x)", self.amplitude, self.rate)
    }

    fn name(&self) -> &str {
        "Exponential"
    }
}
