//! Integration bounds
//!
//! # Design Philosophy
//!
//! The interval `[a, b]` is the problem domain, not a property of any
//! particular integrator. Storing it in its own type lets the same bounds
//! be handed to every method in a comparison run, and gives validation a
//! single home.

use std::fmt;

// =================================================================================================
// Integration Bounds
// =================================================================================================

/// Closed interval `[lower, upper]` for a definite integral
///
/// # Design
///
/// Bounds are plain data: two `f64` endpoints, immutable after
/// construction. `validate()` only rejects non-finite endpoints —
/// a reversed interval (`upper <= lower`) is *not* an error, because the
/// two shipped integrators deliberately disagree on what it means (see
/// [`AnalyticalIntegrator`](crate::integrator::AnalyticalIntegrator) and
/// [`RiemannIntegrator`](crate::integrator::RiemannIntegrator)).
///
/// # Examples
///
/// ```rust
/// use polyquad::integrator::IntegrationBounds;
///
/// let bounds = IntegrationBounds::new(0.5, 1.5);
///
/// assert_eq!(bounds.lower(), 0.5);
/// assert_eq!(bounds.upper(), 1.5);
/// assert_eq!(bounds.width(), 1.0);
/// assert!(bounds.is_forward());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntegrationBounds {
    /// Lower endpoint a
    lower: f64,

    /// Upper endpoint b
    upper: f64,
}

impl IntegrationBounds {
    /// Create bounds `[lower, upper]`
    pub fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    // ===================================== Query methods =====================================

    /// Lower endpoint a
    #[inline]
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// Upper endpoint b
    #[inline]
    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Signed interval width `b - a`
    ///
    /// Negative for a reversed interval.
    #[inline]
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Whether the interval runs forward (`b > a`)
    #[inline]
    pub fn is_forward(&self) -> bool {
        self.upper > self.lower
    }

    /// Validate the endpoints
    ///
    /// Only finiteness is checked; reversed or empty intervals pass.
    pub fn validate(&self) -> Result<(), String> {
        if !self.lower.is_finite() {
            return Err(format!("Lower bound must be finite, got {}", self.lower));
        }

        if !self.upper.is_finite() {
            return Err(format!("Upper bound must be finite, got {}", self.upper));
        }

        Ok(())
    }
}

impl fmt::Display for IntegrationBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lower, self.upper)
    }
}

// =================================================================================================
// Tests
// =================================================================================================
