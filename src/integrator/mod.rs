//! Numerical integrators
//!
//! This module provides traits and implementations for definite-integral
//! methods. An integrator applies a numerical strategy to a
//! [`Function`](crate::function::Function) over an interval.
//!
//! # Core Concepts
//!
//! ## The Architecture (WHAT vs HOW)
//!
//! The integration architecture separates concerns into three layers:
//!
//! 1. **Function** (`Function` trait) - WHAT to integrate
//!    - The integrand's mathematics (evaluation, antiderivative)
//!    - Independent of any numerical method
//!
//! 2. **Bounds** (`IntegrationBounds`) - WHERE to integrate
//!    - The interval `[a, b]`
//!    - Validation of the endpoints
//!
//! 3. **Integrator** (`Integrator` trait) - HOW to integrate
//!    - The numerical method and its parameters (step size, …)
//!    - Independent of the integrand
//!
//! This separation allows:
//! - Same function with different methods
//! - Different functions through the same method
//! - Side-by-side method comparison on identical input (see
//!   [`crate::output::print_comparison`])
//!
//! # Module Organization
//!
//! - **`traits`**: the `Integrator` trait
//! - **`bounds`**: `IntegrationBounds` (interval + validation)
//! - **Method implementations**:
//!   - `AnalyticalIntegrator`: exact, fundamental theorem of calculus
//!   - `RiemannIntegrator`: fixed-step trapezoidal rule
//!
//! # Quick Start Example
//!
//! ```rust
//! use polyquad::models::PolynomialFunction;
//! use polyquad::integrator::{
//!     AnalyticalIntegrator, IntegrationBounds, Integrator, RiemannIntegrator,
//! };
//!
//! // 1. The integrand (WHAT)
//! let poly = PolynomialFunction::new(vec![0.0, 1.0]); // x
//!
//! // 2. The interval (WHERE)
//! let bounds = IntegrationBounds::new(0.0, 2.0);
//!
//! // 3. The methods (HOW)
//! let exact = AnalyticalIntegrator::new().integrate(&poly, &bounds).unwrap();
//! let approximate = RiemannIntegrator::new().integrate(&poly, &bounds).unwrap();
//!
//! assert_eq!(exact, 2.0);
//! assert!((approximate - exact).abs() < 1e-9);
//! ```
//!
//! # Reversed Bounds
//!
//! `b > a` is the meaningful precondition. Both methods accept reversed
//! bounds but disagree on the result by design: the analytical method is
//! sign-aware (`F(b) − F(a)` flips sign), while the Riemann sum truncates
//! its subinterval count to zero and returns 0. The inconsistency is
//! documented on both types rather than papered over with a unified
//! convention.
//!
//! # Error Handling
//!
//! All `integrate` calls return `Result<f64, String>`:
//!
//! ```rust
//! use polyquad::models::PolynomialFunction;
//! use polyquad::integrator::{AnalyticalIntegrator, IntegrationBounds, Integrator};
//!
//! let poly = PolynomialFunction::new(vec![1.0]);
//! let bad_bounds = IntegrationBounds::new(f64::NAN, 1.0);
//!
//! match AnalyticalIntegrator::new().integrate(&poly, &bad_bounds) {
//!     Ok(result) => println!("Integral: {}", result),
//!     Err(e) => eprintln!("Integration failed: {}", e),
//! }
//! ```
//!
//! Common errors:
//! - Non-finite bounds (NaN, ±∞)
//!
//! Invalid constructor parameters (non-positive Riemann step) panic at
//! construction instead, before any integration can run.

// =================================================================================================
// Module Declarations
// =================================================================================================

mod bounds;
mod methods;
mod traits;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use bounds::IntegrationBounds;
pub use traits::Integrator;

pub use methods::{AnalyticalIntegrator, RiemannIntegrator};
