//! Analytical (closed-form) integrator
//!
//! # Mathematical Background
//!
//! The fundamental theorem of calculus reduces a definite integral to two
//! evaluations of the antiderivative F:
//!
//! ```text
//! ∫ₐᵇ f(x) dx = F(b) − F(a)
//! ```
//!
//! # Characteristics
//!
//! - **Accuracy**: exact for any function whose antiderivative is exact
//!   (polynomials); the only error is floating-point rounding in two
//!   evaluations and one subtraction
//! - **Complexity**: 2 function evaluations total, independent of the
//!   interval width
//! - **Memory**: one transient antiderivative, dropped before returning
//!
//! # When to Use
//!
//! - Whenever the function can produce its antiderivative
//! - As the reference value when validating approximate methods
//!
//! # When NOT to Use
//!
//! - Functions with no closed-form antiderivative → use a quadrature
//!   method such as [`RiemannIntegrator`](super::RiemannIntegrator)
//!
//! # Example
//!
//! ```rust
//! use polyquad::models::PolynomialFunction;
//! use polyquad::integrator::{AnalyticalIntegrator, IntegrationBounds, Integrator};
//!
//! let constant = PolynomialFunction::new(vec![5.0]);
//! let bounds = IntegrationBounds::new(0.5, 1.5);
//!
//! let result = AnalyticalIntegrator::new().integrate(&constant, &bounds).unwrap();
//! assert_eq!(result, 5.0);
//! ```

use crate::function::Function;
use crate::integrator::bounds::IntegrationBounds;
use crate::integrator::traits::Integrator;

// =================================================================================================
// Analytical Integrator
// =================================================================================================

/// Exact integrator via the fundamental theorem of calculus
///
/// # Algorithm
///
/// 1. Obtain `F = f.antiderivative()` (ownership taken, dropped on return)
/// 2. Return `F(b) − F(a)`
///
/// # Reversed Bounds
///
/// The formula is sign-aware: for `b < a` the result flips sign, and for
/// `b == a` it is zero. This deliberately differs from
/// [`RiemannIntegrator`](super::RiemannIntegrator), which returns 0 from an
/// empty accumulation for any reversed interval.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyticalIntegrator;

impl AnalyticalIntegrator {
    /// Create a new analytical integrator
    ///
    /// # Example
    ///
    /// ```rust
    /// use polyquad::integrator::{AnalyticalIntegrator, Integrator};
    ///
    /// let integrator = AnalyticalIntegrator::new();
    /// assert_eq!(integrator.name(), "Analytical");
    /// ```
    pub fn new() -> Self {
        Self
    }
}

impl Integrator for AnalyticalIntegrator {
    fn integrate(
        &self,
        function: &dyn Function,
        bounds: &IntegrationBounds,
    ) -> Result<f64, String> {
        bounds.validate()?;

        let antiderivative = function.antiderivative();

        Ok(antiderivative.evaluate(bounds.upper()) - antiderivative.evaluate(bounds.lower()))
    }

    fn name(&self) -> &str {
        "Analytical"
    }
}

// =================================================================================================
// Tests
// =================================================================================================
