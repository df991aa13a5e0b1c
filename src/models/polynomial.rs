//! Dense polynomial function model
//!
//! # Mathematical Background
//!
//! A polynomial of degree n is stored as its coefficient sequence
//! `c0..cn`, where the index is the power of x:
//!
//! ```text
//! p(x) = Σ cᵢ·xⁱ     for i in 0..=n
//! ```
//!
//! The antiderivative follows from the power rule, with the integration
//! constant fixed at 0:
//!
//! ```text
//! P(x) = Σ cᵢ/(i+1)·xⁱ⁺¹
//! ```
//!
//! so the antiderivative's coefficient sequence is
//! `[0, c0/1, c1/2, ..., cn/(n+1)]` — one element longer than the source.
//!
//! # Representation
//!
//! Coefficients live in a [`nalgebra::DVector<f64>`]. The sequence may be
//! empty: that is the zero function, and its antiderivative is the single
//! coefficient `[0]`. No coefficient may be NaN or infinite; the
//! constructor enforces this.
//!
//! # Example
//!
//! ```rust
//! use polyquad::models::PolynomialFunction;
//! use polyquad::function::Function;
//!
//! // 2 + x^2
//! let p = PolynomialFunction::new(vec![2.0, 0.0, 1.0]);
//!
//! assert_eq!(p.evaluate(2.0), 6.0);
//! assert_eq!(p.degree(), Some(2));
//! ```

use crate::function::Function;
use nalgebra::DVector;
use std::fmt;
use std::io::{self, Write};

// =================================================================================================
// Polynomial Function
// =================================================================================================

/// Polynomial with dense coefficient storage
///
/// # Model Parameters
///
/// - **coefficients** : ordered sequence `c0..cn`, index = power of x
///
/// # Invariants
///
/// - The sequence may be empty (zero function)
/// - Every coefficient is finite (checked at construction)
/// - Coefficients are immutable after construction
///
/// # Textual Form
///
/// [`print`](Function::print) and [`Display`](fmt::Display) emit the sum
/// `c0 + c1*x^1 + c2*x^2 + ...`. Every stored term is written, regardless
/// of sign or zero value — `[2, 0, 1]` renders as `2 + 0*x^1 + 1*x^2`,
/// and a negative coefficient renders as `... + -3*x^2`. `print` appends
/// a trailing newline, `Display` does not.
#[derive(Clone, Debug, PartialEq)]
pub struct PolynomialFunction {
    /// Coefficients `c0..cn`, index = power of x
    coefficients: DVector<f64>,
}

impl PolynomialFunction {
    /// Create a polynomial from a coefficient list
    ///
    /// # Panics
    ///
    /// Panics if any coefficient is NaN or infinite.
    ///
    /// # Example
    ///
    /// ```rust
    /// use polyquad::models::PolynomialFunction;
    ///
    /// // 2 + 4x^3 + 5x^7
    /// let p = PolynomialFunction::new(vec![2.0, 0.0, 0.0, 4.0, 0.0, 0.0, 0.0, 5.0]);
    /// assert_eq!(p.degree(), Some(7));
    /// ```
    pub fn new(coefficients: Vec<f64>) -> Self {
        Self::from_vector(DVector::from_vec(coefficients))
    }

    /// Create a polynomial from an owned coefficient vector
    ///
    /// # Panics
    ///
    /// Panics if any coefficient is NaN or infinite.
    pub fn from_vector(coefficients: DVector<f64>) -> Self {
        assert!(
            coefficients.iter().all(|c| c.is_finite()),
            "Polynomial coefficients must be finite, got {:?}",
            coefficients.as_slice()
        );

        Self { coefficients }
    }

    /// The zero function: empty coefficient sequence
    pub fn zero() -> Self {
        Self {
            coefficients: DVector::zeros(0),
        }
    }

    // ==================== Accessors ====================

    /// Coefficient sequence
    #[inline]
    pub fn coefficients(&self) -> &DVector<f64> {
        &self.coefficients
    }

    /// Coefficient of `x^power`, or 0 for powers beyond the stored degree
    #[inline]
    pub fn coefficient(&self, power: usize) -> f64 {
        self.coefficients.get(power).copied().unwrap_or(0.0)
    }

    /// Number of stored coefficients
    #[inline]
    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    /// Whether the coefficient sequence is empty (the zero function)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// Degree of the stored representation, `None` for the empty sequence
    ///
    /// Trailing zero coefficients are not stripped, so `[2, 0]` has
    /// degree 1 even though it is mathematically constant.
    pub fn degree(&self) -> Option<usize> {
        if self.coefficients.is_empty() {
            None
        } else {
            Some(self.coefficients.len() - 1)
        }
    }

    // ==================== Calculus ====================

    /// Antiderivative as a concrete polynomial
    ///
    /// Coefficients are `[0, c0/1, c1/2, ..., cn/(n+1)]`, one element
    /// longer than the source; the constant term is fixed at 0. The empty
    /// polynomial yields `[0]`.
    pub fn antiderivative_polynomial(&self) -> PolynomialFunction {
        let mut shifted = DVector::zeros(self.coefficients.len() + 1);

        for (power, coefficient) in self.coefficients.iter().enumerate() {
            shifted[power + 1] = coefficient / ((power + 1) as f64);
        }

        PolynomialFunction {
            coefficients: shifted,
        }
    }
}

// =================================================================================================
// Function Trait Implementation
// =================================================================================================

impl Function for PolynomialFunction {
    /// Evaluate Σ cᵢ·xⁱ
    ///
    /// Accumulation is left-to-right over increasing index, with each
    /// power computed by repeated exponentiation (`f64::powi`). No powers
    /// are memoized; the polynomial sizes this model targets do not
    /// justify a Horner rewrite at the cost of changing the accumulation
    /// order.
    fn evaluate(&self, x: f64) -> f64 {
        let mut result = 0.0;

        for (power, coefficient) in self.coefficients.iter().enumerate() {
            result += coefficient * x.powi(power as i32);
        }

        result
    }

    fn antiderivative(&self) -> Box<dyn Function> {
        Box::new(self.antiderivative_polynomial())
    }

    /// Write `c0 + c1*x^1 + c2*x^2 + ...` followed by a newline
    ///
    /// The empty polynomial writes a bare newline.
    fn print(&self, sink: &mut dyn Write) -> io::Result<()> {
        write!(sink, "{}", self)?;
        writeln!(sink)
    }

    fn name(&self) -> &str {
        "Polynomial"
    }

    fn description(&self) -> Option<&str> {
        Some("Dense polynomial with coefficient index equal to the power of x")
    }
}

impl fmt::Display for PolynomialFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (power, coefficient) in self.coefficients.iter().enumerate() {
            if power == 0 {
                write!(f, "{}", coefficient)?;
            } else {
                write!(f, " + {}*x^{}", coefficient, power)?;
            }
        }

        Ok(())
    }
}

// =================================================================================================
// Tests
// =================================================================================================
