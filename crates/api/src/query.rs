//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// `?month=YYYY-MM`.
///
/// Kept as a raw string so a missing or malformed month is reported as a
/// validation error naming the field.
#[derive(Debug, Deserialize)]
pub struct MonthParams {
    pub month: Option<String>,
}
