//! Integrator trait
//!
//! # Design Philosophy
//!
//! This module follows the same pattern as the function side:
//! - `Integrator` is the stable interface every numerical method implements
//! - Methods carry their own parameters (step size, …), fixed at
//!   construction and immutable thereafter
//! - Errors are reported as `Result<_, String>` with a diagnostic message

use crate::function::Function;
use crate::integrator::bounds::IntegrationBounds;
use std::io::{self, Write};

// =================================================================================================
// Integrator Trait
// =================================================================================================

/// Trait for definite-integral methods
///
/// # Responsibility
/// Computes ∫ f(x) dx over `[a, b]` for any [`Function`]. The integrator
/// owns the numerical method; the function owns the mathematics of the
/// integrand.
///
/// # Precondition
///
/// `b > a` for meaningful results. Reversed bounds are accepted but each
/// method defines its own behavior (sign flip versus empty sum) — see the
/// implementing types.
pub trait Integrator: Send + Sync {
    /// Integrate `function` over `bounds`
    ///
    /// Validates the bounds at entry and returns `Err` with a diagnostic
    /// message for non-finite endpoints.
    fn integrate(
        &self,
        function: &dyn Function,
        bounds: &IntegrationBounds,
    ) -> Result<f64, String>;

    /// Name of the method (used for display, export and table headers)
    fn name(&self) -> &str;

    /// Write the method's name to `sink`
    ///
    /// No trailing newline; the table printer composes rows itself.
    fn print(&self, sink: &mut dyn Write) -> io::Result<()> {
        write!(sink, "{}", self.name())
    }
}

// =================================================================================================
// Tests
// =================================================================================================
