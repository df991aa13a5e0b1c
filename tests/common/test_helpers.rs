//! Helper functions for integration tests

use polyquad::function::Function;

/// Relative error |actual − expected| / |expected|
pub fn relative_error(actual: f64, expected: f64) -> f64 {
    ((actual - expected) / expected).abs()
}

/// Assert that two values are within an absolute tolerance
pub fn assert_close(actual: f64, expected: f64, tolerance: f64, message: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff < tolerance,
        "{}: {} differs from {} by {} (tolerance {})",
        message,
        actual,
        expected,
        diff,
        tolerance
    );
}

/// Central finite-difference derivative of a function at x
pub fn finite_difference_derivative(function: &dyn Function, x: f64, step: f64) -> f64 {
    (function.evaluate(x + step) - function.evaluate(x - step)) / (2.0 * step)
}
