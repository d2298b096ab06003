//! Product field constraints and validation helpers.
//!
//! The constraints are declared on the write DTO in `catalog-db` via
//! `#[derive(Validate)]`; the limits and the checks the derive cannot express
//! (blank names, decimal bounds) live here so they can be tested without a
//! database.

use std::borrow::Cow;

use rust_decimal::Decimal;
use validator::{ValidationError, ValidationErrors};

use crate::error::{CoreError, FieldViolation};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Entity name used in `NotFound` errors and log fields.
pub const ENTITY_NAME: &str = "Product";

/// Maximum product name length in characters.
pub const NAME_MAX_LEN: u64 = 100;

/// Maximum product description length in characters.
pub const DESCRIPTION_MAX_LEN: u64 = 500;

/// Number of fractional digits stored for prices (`NUMERIC(10,2)`).
pub const PRICE_SCALE: u32 = 2;

/// Largest accepted price, 99,999,999.99.
pub fn max_price() -> Decimal {
    Decimal::new(9_999_999_999, PRICE_SCALE)
}

// ---------------------------------------------------------------------------
// Custom field validators
// ---------------------------------------------------------------------------

/// Reject names that are empty or whitespace only.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(violation("blank", "Product name is required"));
    }
    Ok(())
}

/// Price must be in `(0, 99_999_999.99]` with at most two fractional digits.
pub fn validate_price(price: &Decimal) -> Result<(), ValidationError> {
    if *price <= Decimal::ZERO {
        return Err(violation(
            "price_min",
            "Product price must be greater than 0",
        ));
    }
    if *price > max_price() {
        return Err(violation(
            "price_max",
            "Product price must be less than 100,000,000",
        ));
    }
    if price.normalize().scale() > PRICE_SCALE {
        return Err(violation(
            "price_scale",
            "Product price must have at most 2 decimal places",
        ));
    }
    Ok(())
}

fn violation(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

// ---------------------------------------------------------------------------
// Violation mapping
// ---------------------------------------------------------------------------

/// Flatten `validator` output into a list of violations sorted by field name.
pub fn violations_from(errors: &ValidationErrors) -> Vec<FieldViolation> {
    let mut violations: Vec<FieldViolation> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            let field = field.to_string();
            errs.iter().map(move |err| {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{field} is invalid"));
                FieldViolation::new(field.clone(), err.code.to_string(), message)
            })
        })
        .collect();
    violations.sort_by(|a, b| a.field.cmp(&b.field).then_with(|| a.code.cmp(&b.code)));
    violations
}

/// Convert a failed `validate()` call into a [`CoreError::Validation`].
pub fn into_core_error(errors: ValidationErrors) -> CoreError {
    CoreError::Validation(violations_from(&errors))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
