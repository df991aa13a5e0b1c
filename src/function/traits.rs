//! Function trait
//!
//! This module defines the core API for integrand functions:
//! - `Function`: trait for all real-valued functions of one variable

use std::io::{self, Write};

// =================================================================================================
// Function Trait
// =================================================================================================

/// Trait for real-valued functions of one variable
///
/// # Responsibility
/// Provides the mathematics of an integrand: point evaluation, the
/// antiderivative, and a textual form. Does NOT integrate itself over an
/// interval (that's the Integrator's job).
///
/// The function provides the "integrand" (mathematics), the Integrator
/// provides the "numerics" (method to integrate it).
///
/// # Purity
/// Every method is a pure function of immutable internal data. Implementors
/// carry no shared or mutable state, so a function can be handed to any
/// number of integrators in sequence.
pub trait Function: Send + Sync {
    /// Evaluate the function at `x`
    ///
    /// Standard floating-point arithmetic applies; implementors document
    /// their own accumulation order where it matters.
    fn evaluate(&self, x: f64) -> f64;

    /// Produce the antiderivative as a new owned function
    ///
    /// The integration constant is fixed at 0: definite-integral use
    /// (`F(b) - F(a)`) cancels it anyway. Ownership of the returned
    /// function transfers to the caller.
    fn antiderivative(&self) -> Box<dyn Function>;

    /// Write the human-readable form of the function to `sink`
    ///
    /// The output is newline-terminated.
    fn print(&self, sink: &mut dyn Write) -> io::Result<()>;

    /// Name of the function (used for display, export and plot labels)
    fn name(&self) -> &str;

    /// Description of the function (optional)
    fn description(&self) -> Option<&str> {
        None
    }
}

// =================================================================================================
// Tests
// =================================================================================================
