//! Common utilities for integration tests

pub mod mock_functions;
pub mod test_helpers;

// Re-export commonly used items
pub use mock_functions::{ConstantFunction, ExponentialFunction, LinearFunction};
pub use test_helpers::{assert_close, finite_difference_derivative, relative_error};
