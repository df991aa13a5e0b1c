//! Riemann-sum integrator (trapezoidal rule)
//!
//! # Mathematical Background
//!
//! The interval `[a, b]` is cut into subintervals of fixed width h and the
//! area under the curve is accumulated one trapezoid at a time:
//!
//! ```text
//! n = ⌊(b − a) / h⌋
//! ∫ₐᵇ f(x) dx ≈ Σᵢ (x₂ − x₁)·(f(x₁) + f(x₂)) / 2,   [x₁, x₂] = [a + i·h, a + i·h + h]
//! ```
//!
//! Despite the traditional "Riemann sum" name, the per-interval formula is
//! the trapezoidal rule (endpoint average), not a left or right rectangle
//! sum.
//!
//! # Characteristics
//!
//! - **Order**: second-order accurate (error ~ O(h²) for smooth integrands)
//! - **Complexity**: 2 function evaluations per subinterval
//! - **Memory**: O(1) — a single running sum
//!
//! # Truncation of the Last Subinterval
//!
//! `n` truncates toward zero, so when `(b − a)` is not an exact multiple of
//! h the trailing partial subinterval is dropped entirely rather than
//! summed with a shorter width. The sum then systematically underestimates
//! the integral by up to `h·max|f|` on the dropped tail. Callers who need
//! the tail covered must pick h dividing the interval width.
//!
//! # Example
//!
//! ```rust
//! use polyquad::models::PolynomialFunction;
//! use polyquad::integrator::{IntegrationBounds, Integrator, RiemannIntegrator};
//!
//! // ∫₀¹ x^2 dx = 1/3
//! let square = PolynomialFunction::new(vec![0.0, 0.0, 1.0]);
//! let bounds = IntegrationBounds::new(0.0, 1.0);
//!
//! let result = RiemannIntegrator::new().integrate(&square, &bounds).unwrap();
//! assert!((result - 1.0 / 3.0).abs() < 1e-6);
//! ```

use crate::function::Function;
use crate::integrator::bounds::IntegrationBounds;
use crate::integrator::traits::Integrator;

/// Default subinterval width
const DEFAULT_STEP: f64 = 0.001;

// =================================================================================================
// Riemann Integrator
// =================================================================================================

/// Fixed-step trapezoidal integrator
///
/// # Parameters
///
/// - **step** (h) : subinterval width, strictly positive and finite,
///   fixed at construction (default 0.001)
///
/// # Algorithm
///
/// 1. `n = ((b − a) / h)` truncated toward zero
/// 2. For each i in `0..n`: evaluate f at both ends of
///    `[a + i·h, a + i·h + h]` and accumulate the trapezoid area
/// 3. Return the sum
///
/// # Reversed Bounds
///
/// For `b < a` the count `n` truncates to a non-positive value and the
/// accumulation is empty, so the result is 0 — *not* the sign-flipped
/// integral. This deliberately differs from
/// [`AnalyticalIntegrator`](super::AnalyticalIntegrator), which is
/// sign-aware.
#[derive(Debug, Clone, Copy)]
pub struct RiemannIntegrator {
    /// Subinterval width h
    step: f64,
}

impl RiemannIntegrator {
    /// Create an integrator with the default step (h = 0.001)
    ///
    /// # Example
    ///
    /// ```rust
    /// use polyquad::integrator::{Integrator, RiemannIntegrator};
    ///
    /// let integrator = RiemannIntegrator::new();
    /// assert_eq!(integrator.step(), 0.001);
    /// assert_eq!(integrator.name(), "Riemann Sum");
    /// ```
    pub fn new() -> Self {
        Self { step: DEFAULT_STEP }
    }

    /// Create an integrator with an explicit step
    ///
    /// # Panics
    ///
    /// Panics if `step` is not strictly positive and finite. A
    /// non-positive step would make the subinterval count zero, negative
    /// or unbounded, so it is rejected here rather than looping forever
    /// or returning garbage downstream.
    ///
    /// # Example
    ///
    /// ```rust
    /// use polyquad::integrator::RiemannIntegrator;
    ///
    /// let fine = RiemannIntegrator::with_step(1e-4);
    /// assert_eq!(fine.step(), 1e-4);
    /// ```
    pub fn with_step(step: f64) -> Self {
        assert!(
            step.is_finite() && step > 0.0,
            "Step size must be strictly positive and finite, got {}",
            step
        );

        Self { step }
    }

    /// Subinterval width h
    #[inline]
    pub fn step(&self) -> f64 {
        self.step
    }
}

impl Default for RiemannIntegrator {
    fn default() -> Self {
        Self::new()
    }
}

impl Integrator for RiemannIntegrator {
    fn integrate(
        &self,
        function: &dyn Function,
        bounds: &IntegrationBounds,
    ) -> Result<f64, String> {
        bounds.validate()?;

        // Truncation toward zero: a trailing partial subinterval is
        // dropped, and a reversed interval yields n <= 0 (empty loop).
        let n = (bounds.width() / self.step) as i64;

        let mut sum = 0.0;

        for i in 0..n {
            let x1 = bounds.lower() + (i as f64) * self.step;
            let x2 = x1 + self.step;

            let y1 = function.evaluate(x1);
            let y2 = function.evaluate(x2);

            sum += (x2 - x1) * ((y1 + y2) / 2.0);
        }

        Ok(sum)
    }

    fn name(&self) -> &str {
        "Riemann Sum"
    }
}

// =================================================================================================
// Tests
// =================================================================================================
