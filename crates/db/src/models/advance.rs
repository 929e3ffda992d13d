//! Cash advance models and DTOs.

use rust_decimal::Decimal;
use schoolpay_core::period::PayPeriod;
use schoolpay_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A teacher_advances row from the database. Append-only.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Advance {
    pub id: DbId,
    pub teacher_id: DbId,
    pub amount: Decimal,
    pub month: String,
    pub description: Option<String>,
    pub issued_by: Option<DbId>,
    pub created_at: Timestamp,
}

/// Request body for issuing an advance.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateAdvance {
    pub teacher_id: Option<DbId>,
    pub amount: Option<Decimal>,
    pub month: Option<String>,
    pub description: Option<String>,
    pub issued_by: Option<DbId>,
}

/// A validated advance ready to be inserted.
#[derive(Debug, Clone)]
pub struct NewAdvance {
    pub teacher_id: DbId,
    pub amount: Decimal,
    pub month: PayPeriod,
    pub description: Option<String>,
    pub issued_by: Option<DbId>,
}
