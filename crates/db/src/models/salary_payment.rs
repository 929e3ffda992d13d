//! Salary disbursement models and DTOs.

use rust_decimal::Decimal;
use schoolpay_core::period::PayPeriod;
use schoolpay_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::settlement::MonthlySettlement;

/// A salary_payments row from the database. Append-only.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SalaryPayment {
    pub id: DbId,
    pub teacher_id: DbId,
    pub settlement_id: DbId,
    pub amount: Decimal,
    pub description: Option<String>,
    pub created_by: Option<DbId>,
    pub created_at: Timestamp,
}

/// Request body for recording a disbursement.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecordSalaryPayment {
    pub teacher_id: Option<DbId>,
    pub month: Option<String>,
    pub amount: Option<Decimal>,
    pub description: Option<String>,
    pub created_by: Option<DbId>,
}

/// A validated disbursement ready to be recorded.
#[derive(Debug, Clone)]
pub struct NewSalaryPayment {
    pub teacher_id: DbId,
    pub month: PayPeriod,
    pub amount: Decimal,
    pub description: Option<String>,
    pub created_by: Option<DbId>,
}

/// Outcome of recording a disbursement inside one transaction.
#[derive(Debug, Clone)]
pub struct RecordedPayment {
    pub payment: SalaryPayment,
    /// The settlement after its paid flag was refreshed.
    pub settlement: MonthlySettlement,
    pub total_paid: Decimal,
}
