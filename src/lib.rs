//! polyquad: Polynomial Integration Toolkit
//!
//! A small framework for representing real-valued functions and computing
//! their definite integrals with interchangeable numerical strategies.
//!
//! # Architecture
//!
//! polyquad is built on two core principles:
//!
//! 1. **Separation of Functions and Integrators**
//!    - Function models define the integrand (what to integrate)
//!    - Integrators provide the method (how to integrate)
//!
//! 2. **Extensibility and Type Safety**
//!    - Trait-based design for easy extension
//!    - Single-ownership collections of trait objects, no shared state
//!
//! # Quick Start
//!
//! ```rust
//! use polyquad::models::PolynomialFunction;
//! use polyquad::integrator::{
//!     AnalyticalIntegrator, IntegrationBounds, Integrator, RiemannIntegrator,
//! };
//!
//! // 2 + 4x^3 + 5x^7
//! let poly = PolynomialFunction::new(vec![2.0, 0.0, 0.0, 4.0, 0.0, 0.0, 0.0, 5.0]);
//! let bounds = IntegrationBounds::new(0.5, 1.5);
//!
//! // Exact result through the antiderivative
//! let exact = AnalyticalIntegrator::new().integrate(&poly, &bounds).unwrap();
//!
//! // Trapezoidal approximation with the default step (h = 0.001)
//! let approximate = RiemannIntegrator::new().integrate(&poly, &bounds).unwrap();
//!
//! assert!((exact - approximate).abs() / exact < 1e-4);
//! ```
//!
//! # Modules
//!
//! - [`function`]: Function trait (the integrand contract)
//! - [`models`]: Function implementations (polynomials)
//! - [`integrator`]: Integration methods and bounds
//! - [`output`]: Comparison table, CSV export and plots

// Core modules
pub mod function;

pub mod models;
pub mod integrator;
pub mod output;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //!
    //! use polyquad::prelude::*;
    //! ```
    pub use crate::function::Function;
    pub use crate::integrator::{
        AnalyticalIntegrator, IntegrationBounds, Integrator, RiemannIntegrator,
    };
    pub use crate::models::PolynomialFunction;
    pub use crate::output::print_comparison;
}
