//! Monthly payroll engine.
//!
//! Orchestrates the repositories in `schoolpay-db` and the pure calculator in
//! `schoolpay-core`:
//!
//! - [`rates`]: resolve and update teacher compensation settings
//! - [`advances`]: issue and list cash advances
//! - [`settlement`]: compute and upsert a `(teacher, month)` settlement
//! - [`payments`]: record disbursements and keep the paid flag current
//! - [`batch`]: compute every active teacher's settlement for a month
//! - [`reports`]: read-only projections over the above

pub mod advances;
pub mod batch;
pub mod config;
pub mod payments;
pub mod rates;
pub mod reports;
pub mod settlement;

use schoolpay_core::error::CoreError;

/// Error type for engine operations.
#[derive(Debug, thiserror::Error)]
pub enum PayrollError {
    /// Validation, not-found and precondition failures.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A storage failure from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience alias for engine return values.
pub type PayrollResult<T> = Result<T, PayrollError>;
