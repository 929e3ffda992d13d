//! Shared input validation helpers.
//!
//! Request DTOs keep their fields optional so that a missing field is reported
//! as a validation error naming the field rather than a deserialization
//! failure.

use rust_decimal::Decimal;

use crate::error::CoreError;
use crate::money::MONEY_SCALE;
use crate::period::PayPeriod;

/// Smallest amount that no longer fits a `NUMERIC(14,2)` column.
pub const AMOUNT_LIMIT: i64 = 1_000_000_000_000;

/// Unwrap a required field or fail naming it.
pub fn require<T>(value: Option<T>, field: &str) -> Result<T, CoreError> {
    value.ok_or_else(|| CoreError::Validation(format!("{field} is required")))
}

/// Parse a required `YYYY-MM` month field.
pub fn require_period(value: Option<&str>, field: &str) -> Result<PayPeriod, CoreError> {
    let raw = require(value, field)?;
    raw.parse()
}

/// Validate that a percentage falls within `[0, 100]` with at most two
/// decimal places.
pub fn validate_percentage(value: Decimal, name: &str) -> Result<(), CoreError> {
    if value < Decimal::ZERO || value > Decimal::ONE_HUNDRED {
        return Err(CoreError::Validation(format!(
            "{name} must be between 0 and 100, got {value}"
        )));
    }
    validate_scale(value, name)
}

/// Validate a monetary amount: strictly positive, whole cents, below
/// [`AMOUNT_LIMIT`].
pub fn validate_positive_amount(value: Decimal, name: &str) -> Result<(), CoreError> {
    if value <= Decimal::ZERO {
        return Err(CoreError::Validation(format!(
            "{name} must be greater than 0, got {value}"
        )));
    }
    if value >= Decimal::from(AMOUNT_LIMIT) {
        return Err(CoreError::Validation(format!(
            "{name} must be less than {AMOUNT_LIMIT}, got {value}"
        )));
    }
    validate_scale(value, name)
}

/// Reject values that would be rounded when stored with two decimal places.
fn validate_scale(value: Decimal, name: &str) -> Result<(), CoreError> {
    if value.normalize().scale() > MONEY_SCALE {
        return Err(CoreError::Validation(format!(
            "{name} must have at most {MONEY_SCALE} decimal places, got {value}"
        )));
    }
    Ok(())
}
