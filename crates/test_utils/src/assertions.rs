//! Custom Test Assertions
//!
//! Specialized assertion helpers for domain types that give more meaningful
//! error messages than standard assertions.

use rust_decimal::Decimal;

use domain_response::ValidationResult;

/// Asserts that an amount has at most two decimal places
///
/// # Panics
///
/// Panics if the amount carries sub-penny precision
pub fn assert_whole_pence(amount: Decimal) {
    assert!(
        amount.scale() <= 2,
        "Expected an amount rounded to pence, got {amount} (scale {})",
        amount.scale()
    );
}

/// Asserts that a validation result failed on the given field
///
/// # Panics
///
/// Panics if the result is valid or no error names the field
pub fn assert_field_error(result: &ValidationResult, field: &str) {
    assert!(
        result.errors().iter().any(|e| e.field == field),
        "Expected a validation error on '{field}', got {:?}",
        result.errors()
    );
}

/// Asserts that a validation result passed
///
/// # Panics
///
/// Panics if any field error is present
pub fn assert_valid(result: &ValidationResult) {
    assert!(
        result.is_valid(),
        "Expected a valid form, got errors {:?}",
        result.errors()
    );
}
